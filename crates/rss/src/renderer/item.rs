// crates/rss/src/renderer/item.rs
//! Item-level elements and the iTunes episode fields

use super::rules::{always, apply, itunes_cdata, itunes_text, FieldRule};
use crate::error::FeedResult;
use crate::format::{format_duration, format_rfc822};
use crate::validate::require;
use podfeed_core::{Author, ITunesItem, Item, Presence};
use podfeed_xml::Element;

/// MIME type announced for every episode enclosure
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

fn push(parent: &mut Element, element: Element) -> FeedResult<()> {
    parent.push(element);
    Ok(())
}

fn credited(author: &Author) -> bool {
    author.name.is_present() && author.email.is_present()
}

const ITEM_RULES: &[FieldRule<Item>] = &[
    FieldRule {
        field: "title",
        present: |i| i.title.is_present(),
        build: |i, p| push(p, Element::cdata_element("title", i.title.as_str())),
    },
    FieldRule {
        field: "link",
        present: |i| i.link.is_present(),
        build: |i, p| push(p, Element::cdata_element("link", i.link.as_str())),
    },
    FieldRule {
        field: "guid",
        present: |i| i.effective_guid().is_some(),
        build: |i, p| {
            let guid = i.effective_guid().unwrap_or_default();
            push(p, Element::text_element("guid", guid))
        },
    },
    FieldRule {
        field: "pubDate",
        present: always,
        build: |i, p| push(p, Element::text_element("pubDate", format_rfc822(&i.date))),
    },
    FieldRule {
        field: "description",
        present: |i| i.description.is_present(),
        build: |i, p| {
            let description = i.description.as_deref().unwrap_or_default();
            push(p, Element::cdata_element("description", description))
        },
    },
    FieldRule {
        field: "content:encoded",
        present: |i| i.content.is_present(),
        build: |i, p| {
            let content = i.content.as_deref().unwrap_or_default();
            push(p, Element::cdata_element("content:encoded", content))
        },
    },
    FieldRule {
        field: "author",
        present: |i| i.author.iter().any(credited),
        build: |i, p| {
            for author in i.author.iter().filter(|a| credited(a)) {
                let text = format!("{} ({})", author.email, author.name);
                p.push(Element::text_element("author", text));
            }
            Ok(())
        },
    },
    FieldRule {
        field: "enclosure[image]",
        // An iTunes block supplies the audio enclosure instead.
        present: |i| i.image.is_present() && i.itunes.is_none(),
        build: |i, p| {
            let url = i.image.as_deref().unwrap_or_default();
            push(p, Element::new("enclosure").with_attr("url", url))
        },
    },
    FieldRule {
        field: "itunes",
        present: |i| i.itunes.is_some(),
        build: |i, p| match &i.itunes {
            Some(itunes) => apply(ITUNES_ITEM_RULES, itunes, p),
            None => Ok(()),
        },
    },
];

const ITUNES_ITEM_RULES: &[FieldRule<ITunesItem>] = &[
    FieldRule {
        field: "enclosure",
        present: always,
        build: |t, p| {
            let length = require(t, "enclosureLength", &t.enclosure_length)?;
            let url = require(t, "mp3URL", &t.mp3_url)?;
            let enclosure = Element::new("enclosure")
                .with_attr("length", length.to_string())
                .with_attr("type", AUDIO_MIME_TYPE)
                .with_attr("url", url.as_str());
            push(p, enclosure)
        },
    },
    FieldRule {
        field: "duration",
        present: always,
        build: |t, p| push(p, itunes_text("duration", format_duration(t.duration))),
    },
    FieldRule {
        field: "explicit",
        present: always,
        build: |t, p| {
            let explicit = if t.explicit.unwrap_or(false) { "yes" } else { "no" };
            push(p, itunes_text("explicit", explicit))
        },
    },
    FieldRule {
        field: "keywords",
        present: |t| t.keywords.is_present(),
        build: |t, p| push(p, itunes_text("keywords", t.keywords.join(","))),
    },
    FieldRule {
        field: "subtitle",
        present: always,
        build: |t, p| {
            let subtitle = require(t, "subtitle", &t.subtitle)?;
            push(p, itunes_cdata("subtitle", subtitle.as_str()))
        },
    },
    FieldRule {
        field: "episodeType",
        present: always,
        build: |t, p| push(p, itunes_text("episodeType", t.episode_type.as_str())),
    },
    FieldRule {
        field: "episode",
        present: |t| t.episode.is_present(),
        build: |t, p| push(p, itunes_text("episode", t.episode.unwrap_or_default().to_string())),
    },
    FieldRule {
        field: "season",
        present: |t| t.season.is_present(),
        build: |t, p| push(p, itunes_text("season", t.season.unwrap_or_default().to_string())),
    },
];

/// Builds one `<item>`; fails if the iTunes block lacks a required field
pub(crate) fn build_item(item: &Item) -> FeedResult<Element> {
    let mut element = Element::new("item");
    apply(ITEM_RULES, item, &mut element)?;
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use chrono::{TimeZone, Utc};
    use podfeed_core::EpisodeType;
    use podfeed_xml::Node;

    fn item() -> Item {
        Item::new(
            "Pilot",
            "https://pod.dev/pilot",
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
    }

    fn episode() -> ITunesItem {
        ITunesItem::new("http://x/e.mp3", 1000, 125.0, "ep1")
    }

    fn names(element: &Element) -> Vec<&str> {
        element.child_elements().map(Element::name).collect()
    }

    #[test]
    fn test_plain_item() {
        let element = build_item(&item()).expect("item");

        assert_eq!(names(&element), ["title", "link", "guid", "pubDate"]);
        assert_eq!(
            element.find("title").map(Element::children),
            Some(&[Node::CData("Pilot".to_string())][..])
        );
        assert_eq!(
            element.find("guid").map(Element::text).as_deref(),
            Some("https://pod.dev/pilot")
        );
        assert_eq!(
            element.find("pubDate").map(Element::text).as_deref(),
            Some("Mon, 01 Jan 2024 12:00:00 GMT")
        );
    }

    #[test]
    fn test_explicit_guid() {
        let mut entry = item();
        entry.guid = Some("urn:pilot".to_string());
        let element = build_item(&entry).expect("item");
        assert_eq!(element.find("guid").map(Element::text).as_deref(), Some("urn:pilot"));
    }

    #[test]
    fn test_full_item_order() {
        let mut entry = item();
        entry.description = Some("<p>desc</p>".to_string());
        entry.content = Some("<p>notes</p>".to_string());
        entry.author = vec![
            Author::new("Ada", "ada@example.com"),
            Author::new("", "anon@example.com"),
            Author::new("Grace", "grace@example.com"),
        ];
        let mut itunes = episode();
        itunes.keywords = vec!["a".to_string(), "b".to_string()];
        itunes.episode = Some(4);
        itunes.season = Some(2);
        itunes.explicit = Some(true);
        itunes.episode_type = EpisodeType::Bonus;
        entry.itunes = Some(itunes);

        let element = build_item(&entry).expect("item");
        assert_eq!(
            names(&element),
            [
                "title",
                "link",
                "guid",
                "pubDate",
                "description",
                "content:encoded",
                "author",
                "author",
                "enclosure",
                "itunes:duration",
                "itunes:explicit",
                "itunes:keywords",
                "itunes:subtitle",
                "itunes:episodeType",
                "itunes:episode",
                "itunes:season",
            ]
        );

        let authors: Vec<String> = element
            .child_elements()
            .filter(|e| e.name() == "author")
            .map(Element::text)
            .collect();
        assert_eq!(authors, ["ada@example.com (Ada)", "grace@example.com (Grace)"]);

        let enclosure = element.find("enclosure").expect("enclosure");
        assert_eq!(
            enclosure.attributes(),
            [
                ("length".to_string(), "1000".to_string()),
                ("type".to_string(), "audio/mpeg".to_string()),
                ("url".to_string(), "http://x/e.mp3".to_string()),
            ]
        );
        assert_eq!(element.find("itunes:duration").map(Element::text).as_deref(), Some("2:05"));
        assert_eq!(element.find("itunes:explicit").map(Element::text).as_deref(), Some("yes"));
        assert_eq!(element.find("itunes:keywords").map(Element::text).as_deref(), Some("a,b"));
        assert_eq!(element.find("itunes:episodeType").map(Element::text).as_deref(), Some("bonus"));
        assert_eq!(element.find("itunes:episode").map(Element::text).as_deref(), Some("4"));
        assert_eq!(element.find("itunes:season").map(Element::text).as_deref(), Some("2"));
    }

    #[test]
    fn test_itunes_defaults() {
        let mut entry = item();
        entry.itunes = Some(episode());
        let element = build_item(&entry).expect("item");

        assert_eq!(element.find("itunes:explicit").map(Element::text).as_deref(), Some("no"));
        assert_eq!(element.find("itunes:episodeType").map(Element::text).as_deref(), Some("full"));
        assert!(element.find("itunes:keywords").is_none());
        assert!(element.find("itunes:episode").is_none());
        assert!(element.find("itunes:season").is_none());
        assert!(element.find("content:encoded").is_none());
    }

    #[test]
    fn test_zero_episode_and_season_are_omitted() {
        let mut entry = item();
        let mut itunes = episode();
        itunes.episode = Some(0);
        itunes.season = Some(0);
        entry.itunes = Some(itunes);

        let element = build_item(&entry).expect("item");
        assert!(element.find("itunes:episode").is_none());
        assert!(element.find("itunes:season").is_none());
    }

    #[test]
    fn test_image_enclosure_without_itunes() {
        let mut entry = item();
        entry.image = Some("https://pod.dev/cover.png".to_string());
        let element = build_item(&entry).expect("item");

        let enclosure = element.find("enclosure").expect("enclosure");
        assert_eq!(enclosure.attr("url"), Some("https://pod.dev/cover.png"));
        assert!(enclosure.attr("type").is_none());
    }

    #[test]
    fn test_image_ignored_when_itunes_present() {
        let mut entry = item();
        entry.image = Some("https://pod.dev/cover.png".to_string());
        entry.itunes = Some(episode());
        let element = build_item(&entry).expect("item");

        let enclosures: Vec<&Element> = element
            .child_elements()
            .filter(|e| e.name() == "enclosure")
            .collect();
        assert_eq!(enclosures.len(), 1);
        assert_eq!(enclosures[0].attr("url"), Some("http://x/e.mp3"));
    }

    #[test]
    fn test_missing_required_fields() {
        let cases: [(&str, fn(&mut ITunesItem)); 3] = [
            ("mp3URL", |t| t.mp3_url.clear()),
            ("enclosureLength", |t| t.enclosure_length = 0),
            ("subtitle", |t| t.subtitle.clear()),
        ];

        for (field, break_it) in cases {
            let mut itunes = episode();
            break_it(&mut itunes);
            let mut entry = item();
            entry.itunes = Some(itunes);

            match build_item(&entry) {
                Err(FeedError::MissingRequiredField { field: missing, .. }) => {
                    assert_eq!(missing, field)
                }
                other => panic!("expected {} to be required, got {:?}", field, other),
            }
        }
    }
}
