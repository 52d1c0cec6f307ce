// crates/rss/src/lib.rs
//! RSS 2.0 renderer for podcast feeds
//!
//! Turns a [`Feed`] into an RSS 2.0 document with the iTunes podcast
//! namespace:
//! - channel metadata, image, categories and atom self/hub links
//! - iTunes show fields (summary, categories, owner, type, ...)
//! - one `<item>` per episode, in insertion order, with an `audio/mpeg`
//!   enclosure and the iTunes episode fields
//!
//! Rendering is the only step that validates: an item whose iTunes block
//! lacks `mp3URL`, `enclosureLength` or `subtitle` fails the whole render.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use podfeed_core::{Author, Feed, FeedOptions, ITunesChannelFields, ITunesItem, Item};
//! use podfeed_rss::render;
//!
//! let author = Author::new("Ada", "ada@example.com");
//! let mut feed = Feed::new(
//!     FeedOptions::new("pod", "Test Pod", "2024 Ada", author),
//!     ITunesChannelFields::default(),
//! );
//!
//! let mut item = Item::new("Pilot", "http://x/e.mp3", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! item.itunes = Some(ITunesItem::new("http://x/e.mp3", 1000, 125.0, "ep1"));
//! feed.add_item(item);
//!
//! let xml = render(&feed).expect("Failed to render feed");
//! assert!(xml.contains("<itunes:duration>2:05</itunes:duration>"));
//! ```

mod clock;
mod error;
mod format;
mod options;
mod renderer;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FeedError, FeedResult};
pub use format::{format_duration, format_rfc822};
pub use options::{RenderOptions, DEFAULT_GENERATOR, DEFAULT_INDENT};
pub use renderer::{
    RssRenderer, ATOM_NS, AUDIO_MIME_TYPE, CC_NS, CONTENT_NS, ITUNES_NS, MEDIA_NS, RDF_NS,
    XML_DECLARATION,
};

use podfeed_core::Feed;

/// Renders `feed` with the default [`RenderOptions`]
///
/// Without `options.updated`, `pubDate` and `lastBuildDate` read the system
/// clock, so two renders of the same feed may differ.
pub fn render(feed: &Feed) -> FeedResult<String> {
    RssRenderer::default().render(feed)
}

/// RSS output for [`Feed`]
pub trait ToRss {
    /// Returns the feed as an RSS 2.0 document
    fn rss2(&self) -> FeedResult<String>;
}

impl ToRss for Feed {
    fn rss2(&self) -> FeedResult<String> {
        render(self)
    }
}
