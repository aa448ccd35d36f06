//! Validation Utilities
//!
//! Field-level checks shared by the entity constructors. Lengths count
//! Unicode scalar values, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9-.]+")
        .expect("email pattern must compile")
});

/// Check an email address against the registration format.
///
/// The pattern is anchored at the start only, so trailing garbage after a
/// well-formed address still passes. Matching is exact-case; addresses that
/// differ only in case are distinct.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Reject a string whose character count exceeds `max`.
pub(crate) fn require_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }
    Ok(())
}

/// Reject a value outside the closed interval `[min, max]`. NaN never passes.
pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}
