// crates/xml-tree/src/error.rs
//! Error types for XML serialization

use thiserror::Error;

/// Result type for XML serialization
pub type XmlResult<T> = Result<T, XmlError>;

/// Errors that can occur while writing a tree
#[derive(Debug, Error)]
pub enum XmlError {
    /// The underlying writer rejected an event
    #[error("XML write error: {0}")]
    Write(String),

    /// Serialized bytes were not valid UTF-8
    #[error("Serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
