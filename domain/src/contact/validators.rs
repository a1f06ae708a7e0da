//! Field validators.
//!
//! Both checks are shallow on purpose: `is_valid_email` only checks the
//! `local@domain.tld` shape and does not attempt RFC 5322.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True when the trimmed value is non-empty.
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the value has the shape `local@domain.tld` with no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
