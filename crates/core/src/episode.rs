//! Mapping from normalized episode records to feed items
//!
//! Reading episode files, rendering their Markdown and probing the audio
//! happen elsewhere. What arrives here is the finished result of that work,
//! one [`Episode`] per file, and this module only shapes it into [`Item`]s.

use crate::feed::Feed;
use crate::types::{Author, EpisodeType, FeedOptions, ITunesChannelFields, ITunesItem, Item};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Front matter of an episode file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeFrontMatter {
    pub title: String,
    /// Audio path relative to the site root
    #[serde(rename = "mp3URL")]
    pub mp3_url: String,
    /// RFC 3339, `YYYY-MM-DD HH:MM[:SS]` (UTC) or a bare `YYYY-MM-DD` (midnight UTC)
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    /// Short description, used as the iTunes subtitle
    pub description: String,
    pub episode_type: Option<EpisodeType>,
    pub episode: Option<u32>,
    pub season: Option<u32>,
    pub slug: Option<String>,
}

/// A fully-populated episode record
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub front_matter: EpisodeFrontMatter,
    /// Show notes already rendered to HTML
    pub body_html: String,
    /// Path of the episode file relative to the site root
    pub source_path: String,
    /// Probed audio length in seconds
    pub duration_secs: f64,
    /// Audio file size in bytes
    pub file_size: u64,
}

impl Episode {
    /// Builds the feed item for this episode
    pub fn into_item(self, site_url: &str, author: &Author) -> Item {
        let Episode {
            front_matter: fm,
            body_html,
            source_path,
            duration_secs,
            file_size,
        } = self;

        let audio_url = safe_join(site_url, &fm.mp3_url);

        let mut item = Item::new(fm.title, audio_url.clone(), fm.date);
        item.id = Some(safe_join(site_url, &source_path));
        item.content = Some(body_html.clone());
        item.description = Some(body_html.clone());
        item.author = vec![author.clone()];
        item.itunes = Some(ITunesItem {
            mp3_url: audio_url,
            enclosure_length: file_size,
            duration: duration_secs,
            subtitle: fm.description,
            episode_type: fm.episode_type.unwrap_or_default(),
            episode: fm.episode,
            season: fm.season,
            content_encoded: Some(body_html),
            ..ITunesItem::default()
        });
        item
    }
}

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a front matter date, reading zone-less values as UTC
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|date| date.and_utc())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| <D::Error as de::Error>::custom(format!("unrecognized date {:?}", raw)))
}

/// Joins a base URL and a path with exactly one `/` between them
pub fn safe_join(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", base, path)
}

/// Builds a feed from episode records
///
/// `author` becomes the feed's only contributor and the author of every
/// item. Items keep the order of `episodes`.
pub fn build_feed(
    episodes: impl IntoIterator<Item = Episode>,
    site_url: &str,
    author: &Author,
    options: FeedOptions,
    itunes_options: ITunesChannelFields,
) -> Feed {
    let mut feed = Feed::new(options, itunes_options);
    feed.add_contributor(author.clone());

    for episode in episodes {
        feed.add_item(episode.into_item(site_url, author));
    }

    feed
}
