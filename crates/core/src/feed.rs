//! The feed aggregate

use crate::types::{Author, Extension, FeedOptions, ITunesChannelFields, Item};

/// A podcast feed under construction
///
/// Sequences only grow: items, categories, contributors and extensions are
/// appended in order and that order is kept when the feed is rendered. No
/// operation removes or edits an entry in place.
#[derive(Debug, Clone)]
pub struct Feed {
    options: FeedOptions,
    itunes_options: ITunesChannelFields,
    items: Vec<Item>,
    categories: Vec<String>,
    contributors: Vec<Author>,
    extensions: Vec<Extension>,
}

impl Feed {
    /// Creates an empty feed
    pub fn new(options: FeedOptions, itunes_options: ITunesChannelFields) -> Self {
        Self {
            options,
            itunes_options,
            items: Vec::new(),
            categories: Vec::new(),
            contributors: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Appends an item; no validation happens until render time
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Appends a free-text channel category
    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }

    pub fn add_contributor(&mut self, contributor: Author) {
        self.contributors.push(contributor);
    }

    pub fn add_extension(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    pub fn options(&self) -> &FeedOptions {
        &self.options
    }

    pub fn itunes_options(&self) -> &ITunesChannelFields {
        &self.itunes_options
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contributors(&self) -> &[Author] {
        &self.contributors
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Returns the number of items in the feed
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the feed has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn feed() -> Feed {
        Feed::new(
            FeedOptions::new("id", "Test Pod", "2024 Test", Author::new("Ada", "ada@example.com")),
            ITunesChannelFields::default(),
        )
    }

    #[test]
    fn test_feed_creation() {
        let feed = feed();
        assert_eq!(feed.options().title, "Test Pod");
        assert!(feed.is_empty());
        assert!(feed.categories().is_empty());
        assert!(feed.contributors().is_empty());
        assert!(feed.extensions().is_empty());
    }

    #[test]
    fn test_add_item_preserves_order() {
        let mut feed = feed();
        let newer = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        feed.add_item(Item::new("Second", "https://example.com/2", newer));
        feed.add_item(Item::new("First", "https://example.com/1", older));

        assert_eq!(feed.item_count(), 2);
        assert_eq!(feed.items()[0].title, "Second");
        assert_eq!(feed.items()[1].title, "First");
    }

    #[test]
    fn test_append_operations() {
        let mut feed = feed();
        feed.add_category("Technology");
        feed.add_category("Audio".to_string());
        feed.add_contributor(Author::new("Grace", "grace@example.com"));
        feed.add_extension(Extension::new("chapters", "{}"));

        assert_eq!(feed.categories(), ["Technology", "Audio"]);
        assert_eq!(feed.contributors()[0].name, "Grace");
        assert_eq!(feed.extensions()[0].name, "chapters");
    }

    #[test]
    fn test_add_item_does_not_validate() {
        let mut feed = feed();
        let mut item = Item::new("", "", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        item.itunes = Some(Default::default());
        feed.add_item(item);
        assert_eq!(feed.item_count(), 1);
    }
}
