//! Config sections: channel options, iTunes show fields, render settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use podfeed_core::{FeedOptions, ITunesChannelFields};
use podfeed_rss::{RenderOptions, DEFAULT_GENERATOR, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};

impl ConfigSection for FeedOptions {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::not_empty(&self.id, "channel.id"),
            Validator::not_empty(&self.title, "channel.title"),
            Validator::not_empty(&self.copyright, "channel.copyright"),
            Validator::not_empty(&self.author.email, "channel.author.email"),
            Validator::optional_http_url(self.link.as_deref(), "channel.link"),
            Validator::optional_http_url(self.image.as_deref(), "channel.image"),
            Validator::optional_http_url(self.feed.as_deref(), "channel.feed"),
            Validator::optional_http_url(self.hub.as_deref(), "channel.hub"),
        ];

        for (format, url) in &self.feed_links {
            results.push(Validator::http_url(
                url,
                &format!("channel.feedLinks.{}", format),
            ));
        }

        Validator::collect_errors(results)
    }

    fn section_name(&self) -> &'static str {
        "channel"
    }
}

impl ConfigSection for ITunesChannelFields {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::not_empty(&self.summary, "itunes.summary"),
            Validator::not_empty(&self.author, "itunes.author"),
            Validator::http_url(&self.image, "itunes.image"),
            Validator::not_empty(&self.owner.email, "itunes.owner.email"),
        ];

        for (index, category) in self.categories.iter().enumerate() {
            results.push(Validator::not_empty(
                &category.cat,
                &format!("itunes.categories[{}].cat", index),
            ));
        }

        Validator::collect_errors(results)
    }

    fn section_name(&self) -> &'static str {
        "itunes"
    }
}

/// Render-time defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Generator used when `channel.generator` is unset
    pub generator: String,

    /// Spaces per nesting level; 0 renders on one line
    pub indent: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderSettings {
    /// Converts into renderer options using the system clock
    pub fn to_render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_generator(self.generator.as_str())
            .with_indent(self.indent)
    }
}

impl ConfigSection for RenderSettings {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::not_empty(&self.generator, "render.generator"),
            Validator::in_range(self.indent, 0, 8, "render.indent"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "render"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podfeed_core::{Author, ITunesCategory, ITunesOwner};

    fn channel() -> FeedOptions {
        let mut options = FeedOptions::new(
            "pod",
            "Test Pod",
            "2024 Ada",
            Author::new("Ada", "ada@example.com"),
        );
        options.link = Some("https://pod.dev".to_string());
        options
    }

    fn itunes() -> ITunesChannelFields {
        ITunesChannelFields {
            summary: "Summary".to_string(),
            author: "Ada".to_string(),
            image: "https://pod.dev/cover.png".to_string(),
            owner: ITunesOwner {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            ..ITunesChannelFields::default()
        }
    }

    #[test]
    fn test_valid_channel() {
        assert!(channel().validate().is_ok());
        assert_eq!(channel().section_name(), "channel");
    }

    #[test]
    fn test_channel_reports_every_error() {
        let mut options = channel();
        options.title.clear();
        options.copyright = "  ".to_string();
        options.hub = Some("ftp://hub".to_string());
        options
            .feed_links
            .insert("atom".to_string(), "nope".to_string());

        let errors = options.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "channel.title",
                "channel.copyright",
                "channel.hub",
                "channel.feedLinks.atom"
            ]
        );
    }

    #[test]
    fn test_itunes_validation() {
        assert!(itunes().validate().is_ok());

        let mut fields = itunes();
        fields.image = String::new();
        fields.categories = vec![ITunesCategory::new(""), ITunesCategory::new("Arts")];
        let errors = fields.validate().unwrap_err();
        let names: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(names, ["itunes.image", "itunes.categories[0].cat"]);
    }

    #[test]
    fn test_render_settings() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());

        let options = settings.to_render_options();
        assert_eq!(options.generator, DEFAULT_GENERATOR);
        assert_eq!(options.indent, DEFAULT_INDENT);

        let wide = RenderSettings {
            indent: 12,
            ..RenderSettings::default()
        };
        assert!(wide.validate().is_err());
    }
}
