//! Feed configuration
//!
//! Channel options, iTunes show fields and render defaults live in one TOML
//! file. Each section validates itself through [`ConfigSection`], and
//! [`ConfigLoader`] reads and writes the file.
//!
//! # Example
//!
//! ```rust
//! use podfeed_config::FeedConfig;
//!
//! let config = FeedConfig::from_toml_str(r#"
//! [channel]
//! id = "https://pod.dev"
//! title = "Test Pod"
//! copyright = "2024 Ada"
//! link = "https://pod.dev"
//!
//! [channel.author]
//! name = "Ada"
//! email = "ada@example.com"
//!
//! [itunes]
//! summary = "A podcast about tests"
//! author = "Ada"
//! image = "https://pod.dev/cover.png"
//! explicit = false
//!
//! [itunes.owner]
//! name = "Ada"
//! email = "ada@example.com"
//! "#).expect("valid config");
//!
//! let feed = config.into_feed();
//! assert_eq!(feed.options().title, "Test Pod");
//! ```

mod error;
mod persistence;
mod sections;
mod validation;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use persistence::ConfigLoader;
pub use sections::RenderSettings;
pub use validation::{ConfigSection, Validator};

use podfeed_core::{Feed, FeedOptions, ITunesChannelFields};
use podfeed_rss::RenderOptions;
use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Config file format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Free-text channel categories, emitted as `<category>`
    #[serde(default)]
    pub categories: Vec<String>,

    /// RSS channel options
    pub channel: FeedOptions,

    /// iTunes show fields
    pub itunes: ITunesChannelFields,

    /// Render defaults
    #[serde(default)]
    pub render: RenderSettings,
}

impl FeedConfig {
    /// Creates a config with default render settings
    pub fn new(channel: FeedOptions, itunes: ITunesChannelFields) -> Self {
        Self {
            version: CONFIG_VERSION,
            categories: Vec::new(),
            channel,
            itunes,
            render: RenderSettings::default(),
        }
    }

    /// Parses and validates a config from TOML text
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: FeedConfig = toml::from_str(contents)?;
        config
            .validate()
            .map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Serializes the config as pretty TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.version > CONFIG_VERSION {
            errors.push(ValidationError::with_value(
                "version",
                format!("must be at most {}", CONFIG_VERSION),
                self.version,
            ));
        }

        for category in &self.categories {
            if let Err(e) = Validator::not_empty(category, "categories") {
                errors.push(e);
            }
        }

        if let Err(mut e) = self.channel.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.itunes.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.render.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Renderer options built from the `render` section
    pub fn render_options(&self) -> RenderOptions {
        self.render.to_render_options()
    }

    /// Creates an empty feed with the configured channel and categories
    pub fn into_feed(self) -> Feed {
        let mut feed = Feed::new(self.channel, self.itunes);
        for category in self.categories {
            feed.add_category(category);
        }
        feed
    }
}
