//! Record types consumed by the feed model

mod author;
mod channel;
mod item;

pub use author::Author;
pub use channel::{FeedOptions, ITunesCategory, ITunesChannelFields, ITunesOwner, ShowType};
pub use item::{EpisodeType, Extension, ITunesItem, Item};
