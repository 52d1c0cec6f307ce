// crates/rss/src/renderer/channel.rs
//! Channel-level elements

use super::rules::{always, apply, itunes, itunes_cdata, itunes_text, FieldRule};
use crate::error::FeedResult;
use crate::format::format_rfc822;
use chrono::{DateTime, Utc};
use podfeed_core::{FeedOptions, ITunesCategory, ITunesChannelFields, Presence};
use podfeed_xml::Element;

/// Everything the channel section reads, resolved once per render
pub(crate) struct ChannelSource<'a> {
    pub options: &'a FeedOptions,
    pub categories: &'a [String],
    pub generator: &'a str,
    pub now: DateTime<Utc>,
}

impl ChannelSource<'_> {
    fn link(&self) -> &str {
        self.options.link.as_deref().unwrap_or_default()
    }

    fn build_date(&self) -> String {
        format_rfc822(&self.options.updated.unwrap_or(self.now))
    }
}

/// Element with CDATA content, or empty when there is nothing to wrap
fn cdata_or_empty(name: &str, value: &str) -> Element {
    if value.is_present() {
        Element::cdata_element(name, value)
    } else {
        Element::new(name)
    }
}

fn text_or_empty(name: &str, value: &str) -> Element {
    if value.is_present() {
        Element::text_element(name, value)
    } else {
        Element::new(name)
    }
}

fn push(parent: &mut Element, element: Element) -> FeedResult<()> {
    parent.push(element);
    Ok(())
}

/// Channel rules borrow from the render-time source, so the table is built per render
fn channel_rules<'a>() -> Vec<FieldRule<ChannelSource<'a>>> {
    vec![
        FieldRule {
            field: "title",
            present: always,
            build: |c, p| push(p, Element::cdata_element("title", c.options.title.as_str())),
        },
        FieldRule {
            field: "link",
            present: always,
            build: |c, p| push(p, cdata_or_empty("link", c.link())),
        },
        FieldRule {
            field: "language",
            present: always,
            build: |_, p| push(p, Element::text_element("language", "en")),
        },
        FieldRule {
            field: "description",
            present: always,
            build: |c, p| {
                let description = c.options.description.as_deref().unwrap_or_default();
                push(p, cdata_or_empty("description", description))
            },
        },
        FieldRule {
            field: "managingEditor",
            present: always,
            // Email in both positions, not "email (name)" as items use.
            build: |c, p| {
                let email = &c.options.author.email;
                push(p, Element::text_element("managingEditor", format!("{} ({})", email, email)))
            },
        },
        FieldRule {
            field: "pubDate",
            present: always,
            build: |c, p| push(p, Element::text_element("pubDate", c.build_date())),
        },
        FieldRule {
            field: "lastBuildDate",
            present: always,
            build: |c, p| push(p, Element::text_element("lastBuildDate", c.build_date())),
        },
        FieldRule {
            field: "docs",
            present: always,
            build: |c, p| push(p, text_or_empty("docs", c.link())),
        },
        FieldRule {
            field: "generator",
            present: always,
            build: |c, p| {
                let generator = c
                    .options
                    .generator
                    .as_deref()
                    .filter(|g| g.is_present())
                    .unwrap_or(c.generator);
                push(p, Element::text_element("generator", generator))
            },
        },
        FieldRule {
            field: "image",
            present: |c| c.options.image.is_present(),
            build: |c, p| {
                let url = c.options.image.as_deref().unwrap_or_default();
                let image = Element::new("image")
                    .with_child(text_or_empty("title", &c.options.title))
                    .with_child(Element::text_element("url", url))
                    .with_child(text_or_empty("link", c.link()));
                push(p, image)
            },
        },
        FieldRule {
            field: "copyright",
            present: |c| c.options.copyright.is_present(),
            build: |c, p| push(p, Element::text_element("copyright", c.options.copyright.as_str())),
        },
        FieldRule {
            field: "category",
            present: |c| c.categories.is_present(),
            build: |c, p| {
                for category in c.categories {
                    p.push(Element::text_element("category", category.as_str()));
                }
                Ok(())
            },
        },
        FieldRule {
            field: "atom:link[self]",
            present: |c| c.options.self_link().is_some(),
            build: |c, p| {
                let href = c.options.self_link().unwrap_or_default();
                let link = Element::new("atom:link")
                    .with_attr("href", href)
                    .with_attr("rel", "self")
                    .with_attr("type", "application/rss+xml");
                push(p, link)
            },
        },
        FieldRule {
            field: "atom:link[hub]",
            present: |c| c.options.hub.is_present(),
            build: |c, p| {
                let href = c.options.hub.as_deref().unwrap_or_default();
                push(p, Element::new("atom:link").with_attr("href", href).with_attr("rel", "hub"))
            },
        },
    ]
}

fn category_element(category: &ITunesCategory) -> Element {
    let mut element = itunes("category").with_attr("text", category.cat.as_str());
    if let Some(child) = category.child.as_deref().filter(|c| c.is_present()) {
        element.push(itunes("category").with_attr("text", child));
    }
    element
}

const ITUNES_CHANNEL_RULES: &[FieldRule<ITunesChannelFields>] = &[
    FieldRule {
        field: "summary",
        present: |f| f.summary.is_present(),
        build: |f, p| push(p, itunes_text("summary", f.summary.as_str())),
    },
    FieldRule {
        field: "author",
        present: |f| f.author.is_present(),
        build: |f, p| push(p, itunes_text("author", f.author.as_str())),
    },
    FieldRule {
        field: "keywords",
        present: |f| f.keywords.join(",").is_present(),
        build: |f, p| push(p, itunes_text("keywords", f.keywords.join(","))),
    },
    FieldRule {
        field: "category",
        present: |f| f.categories.is_present(),
        build: |f, p| {
            for category in f.categories.iter().filter(|c| c.cat.is_present()) {
                p.push(category_element(category));
            }
            Ok(())
        },
    },
    FieldRule {
        field: "image",
        present: |f| f.image.is_present(),
        build: |f, p| push(p, itunes("image").with_attr("href", f.image.as_str())),
    },
    FieldRule {
        field: "explicit",
        present: always,
        build: |f, p| {
            let explicit = if f.explicit { "yes" } else { "clean" };
            push(p, itunes_text("explicit", explicit))
        },
    },
    FieldRule {
        field: "owner",
        present: always,
        // `name` is always written, as CDATA even when empty.
        build: |f, p| {
            let mut owner = itunes("owner");
            owner.push(itunes_cdata("name", f.owner.name.as_str()));
            if f.owner.email.is_present() {
                owner.push(itunes_text("email", f.owner.email.as_str()));
            }
            push(p, owner)
        },
    },
    FieldRule {
        field: "type",
        present: always,
        build: |f, p| push(p, itunes_text("type", f.show_type.as_str())),
    },
];

/// Builds `<channel>` with every channel-level element, before any item
pub(crate) fn build_channel(
    source: &ChannelSource<'_>,
    itunes_fields: &ITunesChannelFields,
) -> FeedResult<Element> {
    let mut channel = Element::new("channel");
    apply(&channel_rules(), source, &mut channel)?;
    apply(ITUNES_CHANNEL_RULES, itunes_fields, &mut channel)?;
    Ok(channel)
}
