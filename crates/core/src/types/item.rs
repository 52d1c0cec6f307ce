//! Episode items and their iTunes fields

use super::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of episode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeType {
    /// A regular episode
    #[default]
    Full,
    /// Promotes an upcoming show, season or episode
    Trailer,
    /// Extra content related to a show, season or episode
    Bonus,
}

impl EpisodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EpisodeType::Full => "full",
            EpisodeType::Trailer => "trailer",
            EpisodeType::Bonus => "bonus",
        }
    }
}

impl fmt::Display for EpisodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Episode title only: no episode number, season or show title
    pub title: String,
    pub id: Option<String>,
    pub link: String,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    /// Full HTML show notes
    pub content: Option<String>,
    /// Stable identifier; `link` stands in when unset
    pub guid: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub author: Vec<Author>,
    pub copyright: Option<String>,
    pub itunes: Option<ITunesItem>,
    /// Opaque extra fields for extensions; never rendered
    pub extra: Option<BTreeMap<String, serde_json::Value>>,
}

impl Item {
    /// Creates an item with the required fields set
    pub fn new(title: impl Into<String>, link: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            id: None,
            link: link.into(),
            date,
            description: None,
            content: None,
            guid: None,
            image: None,
            author: Vec::new(),
            copyright: None,
            itunes: None,
            extra: None,
        }
    }

    /// Returns the explicit guid, else the link, else nothing
    pub fn effective_guid(&self) -> Option<&str> {
        self.guid
            .as_deref()
            .filter(|guid| !guid.is_empty())
            .or_else(|| Some(self.link.as_str()).filter(|link| !link.is_empty()))
    }

    /// Attaches an extra field for extensions
    pub fn insert_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
    }
}

/// iTunes episode fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ITunesItem {
    // Required fields are checked when rendering; absent keys load as empty.
    #[serde(rename = "mp3URL", default)]
    pub mp3_url: String,
    /// Size of the audio file in bytes
    #[serde(default)]
    pub enclosure_length: u64,
    /// Length in seconds; fractional values come straight from a duration probe
    pub duration: f64,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub episode_type: EpisodeType,
    pub episode: Option<u32>,
    pub season: Option<u32>,
    pub explicit: Option<bool>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Hides this episode from the iTunes directory
    pub block: Option<bool>,
    pub image: Option<String>,
    pub content_encoded: Option<String>,
}

impl ITunesItem {
    /// Creates an iTunes block with the required fields set
    pub fn new(
        mp3_url: impl Into<String>,
        enclosure_length: u64,
        duration: f64,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            mp3_url: mp3_url.into(),
            enclosure_length,
            duration,
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }
}

/// Opaque named payload carried alongside the feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    pub objects: String,
}

impl Extension {
    pub fn new(name: impl Into<String>, objects: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: objects.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_guid_defaults_to_link() {
        let item = Item::new("Ep 1", "https://example.com/ep1", date());
        assert_eq!(item.effective_guid(), Some("https://example.com/ep1"));
    }

    #[test]
    fn test_explicit_guid_wins() {
        let mut item = Item::new("Ep 1", "https://example.com/ep1", date());
        item.guid = Some("urn:ep1".to_string());
        assert_eq!(item.effective_guid(), Some("urn:ep1"));
    }

    #[test]
    fn test_no_guid_without_link() {
        let mut item = Item::new("Ep 1", "", date());
        item.guid = Some(String::new());
        assert_eq!(item.effective_guid(), None);
    }

    #[test]
    fn test_episode_type_defaults_to_full() {
        assert_eq!(EpisodeType::default(), EpisodeType::Full);
        assert_eq!(ITunesItem::default().episode_type, EpisodeType::Full);
        assert_eq!(EpisodeType::Bonus.to_string(), "bonus");
    }

    #[test]
    fn test_itunes_item_wire_names() {
        let itunes: ITunesItem = serde_json::from_str(
            r#"{"mp3URL":"http://x/e.mp3","enclosureLength":1000,"duration":125.4,"subtitle":"ep1","episodeType":"trailer"}"#,
        )
        .expect("parse");

        assert_eq!(itunes.mp3_url, "http://x/e.mp3");
        assert_eq!(itunes.enclosure_length, 1000);
        assert_eq!(itunes.episode_type, EpisodeType::Trailer);
        assert!(itunes.keywords.is_empty());
    }

    #[test]
    fn test_itunes_item_missing_required_keys_load_empty() {
        let itunes: ITunesItem =
            serde_json::from_str(r#"{"duration":5}"#).expect("parse");

        assert!(itunes.mp3_url.is_empty());
        assert_eq!(itunes.enclosure_length, 0);
        assert!(itunes.subtitle.is_empty());
    }

    #[test]
    fn test_insert_extra() {
        let mut item = Item::new("Ep 1", "https://example.com/ep1", date());
        item.insert_extra("chapters", serde_json::json!(["intro", "outro"]));

        let extra = item.extra.as_ref().expect("extra set");
        assert_eq!(extra["chapters"][1], "outro");
    }
}
