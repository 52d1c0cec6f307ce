// crates/rss/src/error.rs
//! Error types for feed rendering

use podfeed_xml::XmlError;
use thiserror::Error;

/// Result type for feed rendering operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while rendering a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// A required iTunes field on an item is absent or empty
    #[error("{field} is missing from your frontmatter")]
    MissingRequiredField {
        /// Wire name of the missing field (e.g. `mp3URL`)
        field: &'static str,
        /// Debug dump of the offending record
        record: String,
    },

    /// The XML tree could not be written
    #[error("Failed to serialize feed: {0}")]
    Serialization(#[from] XmlError),
}

impl FeedError {
    /// Returns the missing field name for validation failures
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            FeedError::MissingRequiredField { field, .. } => Some(*field),
            FeedError::Serialization(_) => None,
        }
    }
}
