//! Feed model for podcast RSS generation
//!
//! Holds the channel metadata, the iTunes channel fields and the ordered
//! episode items of a podcast feed. The model is a plain data container:
//! it is filled through append operations during a build phase and then
//! handed to a renderer. Nothing here validates or serializes.

pub mod episode;
pub mod feed;
pub mod presence;
pub mod types;

pub use episode::{build_feed, parse_date, safe_join, Episode, EpisodeFrontMatter};
pub use feed::Feed;
pub use presence::Presence;
pub use types::{
    Author, EpisodeType, Extension, FeedOptions, ITunesCategory, ITunesChannelFields, ITunesItem,
    ITunesOwner, Item, ShowType,
};
