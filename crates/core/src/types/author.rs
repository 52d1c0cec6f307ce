//! Feed and item authorship

use serde::{Deserialize, Serialize};

/// A person credited on the feed or on an episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Website shown next to the podcast cover art
    #[serde(default)]
    pub link: String,
}

impl Author {
    /// Creates an author without a website link
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            link: String::new(),
        }
    }

    /// Sets the website link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}
