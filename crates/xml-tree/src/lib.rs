// crates/xml-tree/src/lib.rs
//! Generic XML tree builder
//!
//! Build a tree of [`Element`]s holding attributes, escaped text and CDATA
//! sections, then serialize it with [`XmlWriter`]. The tree knows nothing
//! about any particular document format.
//!
//! # Example
//!
//! ```rust
//! use podfeed_xml::{Element, XmlWriter};
//!
//! let root = Element::new("note")
//!     .with_attr("lang", "en")
//!     .with_child(Element::text_element("to", "Tove & Jani"))
//!     .with_child(Element::cdata_element("body", "<b>hi</b>"));
//!
//! let xml = XmlWriter::new().to_string(&root).expect("serialize");
//! assert_eq!(
//!     xml,
//!     r#"<note lang="en"><to>Tove &amp; Jani</to><body><![CDATA[<b>hi</b>]]></body></note>"#
//! );
//! ```

mod error;
mod tree;
mod writer;

pub use error::{XmlError, XmlResult};
pub use tree::{Element, Node};
pub use writer::XmlWriter;
