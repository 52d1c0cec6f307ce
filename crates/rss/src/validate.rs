//! Required-field lookup

use crate::error::{FeedError, FeedResult};
use podfeed_core::Presence;
use std::fmt::Debug;

/// Returns `value` when present, otherwise reports the record and fails
///
/// The diagnostic names `key` and dumps `record` on the error log before the
/// render is aborted.
pub(crate) fn require<'a, R, V>(record: &R, key: &'static str, value: &'a V) -> FeedResult<&'a V>
where
    R: Debug,
    V: Presence + ?Sized,
{
    if value.is_present() {
        return Ok(value);
    }

    let dump = format!("{:#?}", record);
    log::error!(
        "{} is missing from your frontmatter\n ---- \n error found in {}",
        key,
        dump
    );
    Err(FeedError::MissingRequiredField {
        field: key,
        record: dump,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use podfeed_core::ITunesItem;

    #[test]
    fn test_present_value_is_returned() {
        let itunes = ITunesItem::new("http://x/e.mp3", 1000, 60.0, "ep1");
        let url = require(&itunes, "mp3URL", &itunes.mp3_url).expect("present");
        assert_eq!(url, "http://x/e.mp3");
    }

    #[test]
    fn test_missing_value_fails_with_record_dump() {
        let itunes = ITunesItem::new("", 1000, 60.0, "ep1");
        let err = require(&itunes, "mp3URL", &itunes.mp3_url).unwrap_err();

        match err {
            FeedError::MissingRequiredField { field, record } => {
                assert_eq!(field, "mp3URL");
                assert!(record.contains("ITunesItem"));
                assert!(record.contains("ep1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_length_is_missing() {
        let itunes = ITunesItem::new("http://x/e.mp3", 0, 60.0, "ep1");
        let err = require(&itunes, "enclosureLength", &itunes.enclosure_length).unwrap_err();
        assert_eq!(err.missing_field(), Some("enclosureLength"));
    }
}
