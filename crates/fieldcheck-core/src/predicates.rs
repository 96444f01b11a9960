//! Standalone value predicates
//!
//! These are the building blocks behind the rule catalogue, exposed so callers
//! can reuse them without going through a rule list. Lengths are counted in
//! Unicode scalar values.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"))
}

/// Present and non-empty
pub fn is_required(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

/// `local@domain.tld` with no whitespace and exactly one `@`
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Optional `+`, then 1-16 digits with a non-zero first digit; whitespace is ignored
pub fn is_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    phone_regex().is_match(&compact)
}

pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Parse a trimmed decimal number, rejecting NaN and infinities
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

pub fn is_integer(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n.fract() == 0.0)
}

pub fn is_positive(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

pub fn is_negative(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n < 0.0)
}

/// Number within `[min, max]`, both ends inclusive
pub fn is_between(value: &str, min: f64, max: f64) -> bool {
    parse_number(value).is_some_and(|n| n >= min && n <= max)
}

/// Absolute URL with a scheme
pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}
