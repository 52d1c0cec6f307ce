//! Channel-level metadata: the RSS channel options and the iTunes show fields

use super::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Channel options for the feed as a whole
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedOptions {
    pub id: String,
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    /// Free text, e.g. "Apple Computer 2005"; readers add the symbol themselves
    pub copyright: String,
    pub author: Author,
    /// Drives `pubDate` and `lastBuildDate`; when unset the render time is used
    pub updated: Option<DateTime<Utc>>,
    pub generator: Option<String>,
    pub image: Option<String>,
    pub favicon: Option<String>,
    /// Self URL of the feed
    pub feed: Option<String>,
    /// Alternate feed URLs keyed by format (`atom`, `json`, ...)
    #[serde(default)]
    pub feed_links: BTreeMap<String, String>,
    /// PubSubHubbub hub URL
    pub hub: Option<String>,
    /// URL transform for callers that rewrite links before building items
    #[serde(skip)]
    pub decorate_url: Option<fn(&str) -> String>,
}

impl FeedOptions {
    /// Creates channel options with the required fields set
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        copyright: impl Into<String>,
        author: Author,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            copyright: copyright.into(),
            author,
            ..Self::default()
        }
    }

    /// Returns the self link: `feed` first, else the `atom` entry of `feed_links`
    pub fn self_link(&self) -> Option<&str> {
        self.feed
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.feed_links
                    .get("atom")
                    .map(String::as_str)
                    .filter(|url| !url.is_empty())
            })
    }
}

/// Whether episodes are meant to be consumed in any order or in sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowType {
    /// Newest episode first
    #[default]
    Episodic,
    /// Oldest to newest
    Serial,
}

impl ShowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowType::Episodic => "episodic",
            ShowType::Serial => "serial",
        }
    }
}

impl fmt::Display for ShowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category in the two-level iTunes taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ITunesCategory {
    pub cat: String,
    pub child: Option<String>,
}

impl ITunesCategory {
    /// Creates a top-level category
    pub fn new(cat: impl Into<String>) -> Self {
        Self {
            cat: cat.into(),
            child: None,
        }
    }

    /// Creates a category with a subcategory
    pub fn with_child(cat: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            cat: cat.into(),
            child: Some(child.into()),
        }
    }
}

/// Contact for the podcast owner; not displayed publicly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ITunesOwner {
    pub name: String,
    pub email: String,
}

/// iTunes show-level fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ITunesChannelFields {
    /// Long description shown next to the cover art
    pub summary: String,
    /// Person or company most widely attributed to publishing the podcast
    pub author: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub categories: Vec<ITunesCategory>,
    /// Cover art URL
    pub image: String,
    pub explicit: bool,
    pub owner: ITunesOwner,
    pub subtitle: Option<String>,
    #[serde(rename = "type", default)]
    pub show_type: ShowType,
    pub block: Option<bool>,
}
