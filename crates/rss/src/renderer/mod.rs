// crates/rss/src/renderer/mod.rs
//! RSS 2.0 rendering with the iTunes podcast namespace

mod channel;
mod item;
mod rules;

pub use item::AUDIO_MIME_TYPE;

use crate::error::FeedResult;
use crate::options::RenderOptions;
use channel::{build_channel, ChannelSource};
use podfeed_core::{Feed, Presence};
use podfeed_xml::{Element, XmlWriter};

/// XML declaration written ahead of the document
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
pub const CC_NS: &str = "http://web.resource.org/cc/";
pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const MEDIA_NS: &str = "http://search.yahoo.com/mrss/";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Optional namespaces, declared only when the document uses them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Namespaces {
    /// Some item carries `content:encoded`
    pub content: bool,
    /// The channel carries a self or hub `atom:link`
    pub atom: bool,
}

impl Namespaces {
    fn scan(feed: &Feed) -> Self {
        let options = feed.options();
        Self {
            content: feed.items().iter().any(|item| item.content.is_present()),
            atom: options.self_link().is_some() || options.hub.is_present(),
        }
    }
}

fn root_element(namespaces: Namespaces) -> Element {
    let mut rss = Element::new("rss").with_attr("version", "2.0");
    if namespaces.content {
        rss.set_attr("xmlns:content", CONTENT_NS);
    }
    if namespaces.atom {
        rss.set_attr("xmlns:atom", ATOM_NS);
    }
    rss.with_attr("xmlns:cc", CC_NS)
        .with_attr("xmlns:itunes", ITUNES_NS)
        .with_attr("xmlns:media", MEDIA_NS)
        .with_attr("xmlns:rdf", RDF_NS)
}

/// Renders a [`Feed`] as an RSS 2.0 document
#[derive(Debug, Clone, Default)]
pub struct RssRenderer {
    options: RenderOptions,
}

impl RssRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Builds the full element tree without serializing it
    pub fn build_tree(&self, feed: &Feed) -> FeedResult<Element> {
        let source = ChannelSource {
            options: feed.options(),
            categories: feed.categories(),
            generator: &self.options.generator,
            now: self.options.clock.now(),
        };

        let mut channel = build_channel(&source, feed.itunes_options())?;
        for entry in feed.items() {
            channel.push(item::build_item(entry)?);
        }

        let namespaces = Namespaces::scan(feed);
        log::debug!(
            "Built channel '{}' with {} item(s), content ns: {}, atom ns: {}",
            feed.options().title,
            feed.item_count(),
            namespaces.content,
            namespaces.atom
        );

        Ok(root_element(namespaces).with_child(channel))
    }

    /// Renders the document: XML declaration followed by the `<rss>` tree
    ///
    /// Fails without output if any item's iTunes block is missing
    /// `enclosureLength`, `mp3URL` or `subtitle`.
    pub fn render(&self, feed: &Feed) -> FeedResult<String> {
        let tree = self.build_tree(feed)?;
        let body = XmlWriter::new()
            .with_indent(self.options.indent)
            .to_string(&tree)?;

        let mut document = String::with_capacity(XML_DECLARATION.len() + body.len());
        document.push_str(XML_DECLARATION);
        document.push_str(&body);
        Ok(document)
    }
}
