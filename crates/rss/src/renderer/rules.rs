//! Table-driven field emission
//!
//! Each record type has a list of [`FieldRule`]s: a field name, a presence
//! predicate and a builder that pushes the element(s) for that field. Rules
//! run in table order, so the table is also the document order.

use crate::error::FeedResult;
use podfeed_xml::Element;

/// How one field of `T` becomes XML
pub(crate) struct FieldRule<T> {
    pub field: &'static str,
    pub present: fn(&T) -> bool,
    pub build: fn(&T, &mut Element) -> FeedResult<()>,
}

/// Applies every rule whose predicate holds, in order
pub(crate) fn apply<T>(rules: &[FieldRule<T>], record: &T, parent: &mut Element) -> FeedResult<()> {
    for rule in rules {
        if (rule.present)(record) {
            (rule.build)(record, parent)?;
        } else {
            log::trace!("<{}>: omitting {}", parent.name(), rule.field);
        }
    }
    Ok(())
}

pub(crate) fn always<T>(_: &T) -> bool {
    true
}

/// Creates an element in the iTunes namespace
pub(crate) fn itunes(field: &str) -> Element {
    Element::new(format!("itunes:{}", field))
}

pub(crate) fn itunes_text(field: &str, text: impl Into<String>) -> Element {
    itunes(field).with_text(text)
}

pub(crate) fn itunes_cdata(field: &str, text: impl Into<String>) -> Element {
    itunes(field).with_cdata(text)
}
