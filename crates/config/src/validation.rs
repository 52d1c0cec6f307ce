//! Validation system for configuration values
//!
//! Each config section implements the `ConfigSection` trait, which reports
//! every invalid field at once rather than stopping at the first.

pub use crate::error::ValidationError;
use url::Url;

/// Trait for configuration sections that can validate themselves
pub trait ConfigSection {
    /// Validates the configuration section
    ///
    /// Returns a list of validation errors. Empty list means valid.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Returns the section name for error reporting
    fn section_name(&self) -> &'static str;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a numeric value is within a range
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a string parses as an absolute http or https URL
    pub fn http_url(value: &str, field: &str) -> Result<(), ValidationError> {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(_) => Err(ValidationError::with_value(
                field,
                "must use http or https",
                value,
            )),
            Err(e) => Err(ValidationError::with_value(
                field,
                format!("is not a valid URL ({})", e),
                value,
            )),
        }
    }

    /// Like [`Validator::http_url`], but an unset or empty value passes
    pub fn optional_http_url(value: Option<&str>, field: &str) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.is_empty() => Self::http_url(v, field),
            _ => Ok(()),
        }
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
