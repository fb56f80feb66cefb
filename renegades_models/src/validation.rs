//! Field checks shared by all submission kinds. Checks are plain predicates,
//! so a submission can run every check and report the full list of failures
//! in one pass.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

/// A single failed field check, reported with the exact wording the client
/// displays next to the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All failed checks of one submission, in field declaration order.
pub type ValidationErrors = Vec<ValidationError>;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s\-+()]{0,30}$").unwrap());

static IBAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").unwrap());

static BIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{8}([A-Z0-9]{3})?$").unwrap());

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Checks that the trimmed value is between `min` and `max` characters long
/// (both inclusive).
pub fn string_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    (min..=max).contains(&len)
}

/// Checks the rough `local@domain.tld` shape and an overall length limit of
/// 255 characters. The value is matched as sent, without trimming.
pub fn email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value) && value.chars().count() <= 255
}

/// Checks for digits, whitespace and `-+()` only, at most 30 characters.
/// Empty values pass, phone numbers are optional everywhere.
pub fn phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    PHONE_REGEX.is_match(value)
}

/// Checks the IBAN shape (two letters, two check digits, up to 30
/// alphanumerics) after stripping whitespace and uppercasing. Empty values
/// pass.
pub fn iban(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let normalized = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    IBAN_REGEX.is_match(&normalized)
}

/// Checks for 8 or 11 alphanumerics after stripping whitespace and
/// uppercasing. Empty values pass.
pub fn bic(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let normalized = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    BIC_REGEX.is_match(&normalized)
}

/// Checks for an ISO `YYYY-MM-DD` string denoting a real calendar date.
/// Empty values fail, dates are only requested where they are mandatory.
pub fn date(value: &str) -> bool {
    DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_length_trims_before_counting() {
        assert!(string_length("  ab  ", 2, 2));
        assert!(!string_length("   ", 1, 100));
        assert!(string_length("", 0, 100));
    }

    #[test]
    fn string_length_bounds_are_inclusive() {
        assert!(!string_length(&"x".repeat(0), 1, 3));
        assert!(string_length(&"x".repeat(1), 1, 3));
        assert!(string_length(&"x".repeat(3), 1, 3));
        assert!(!string_length(&"x".repeat(4), 1, 3));
    }

    #[test]
    fn string_length_counts_characters_not_bytes() {
        assert!(string_length("äöü", 3, 3));
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("max.mustermann@example.de"));
        assert!(email("a@b.co"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!email(""));
        assert!(!email("max@example"));
        assert!(!email("max example@example.de"));
        assert!(!email("max@@example.de"));
        assert!(!email(" max@example.de"));
    }

    #[test]
    fn email_rejects_overlong_addresses() {
        let local = "x".repeat(250);
        assert!(!email(&format!("{local}@example.de")));
        let local = "x".repeat(244);
        assert!(email(&format!("{local}@example.de")));
    }

    #[test]
    fn phone_accepts_common_formats() {
        assert!(phone(""));
        assert!(phone("+49 911 1234567"));
        assert!(phone("(0911) 123-456"));
    }

    #[test]
    fn phone_rejects_letters_and_overlong_numbers() {
        assert!(!phone("0911/123456"));
        assert!(!phone("call me"));
        assert!(!phone(&"1".repeat(31)));
    }

    #[test]
    fn iban_normalizes_spacing_and_case() {
        assert!(iban("DE89370400440532013000"));
        assert!(iban("de89 3704 0044 0532 0130 00"));
        assert!(iban(""));
    }

    #[test]
    fn iban_rejects_malformed_values() {
        assert!(!iban("89370400440532013000"));
        assert!(!iban("DEXX370400440532013000"));
        assert!(!iban(" "));
    }

    #[test]
    fn bic_accepts_both_lengths() {
        assert!(bic("MARKDEF1"));
        assert!(bic("markdef1100"));
        assert!(bic(""));
    }

    #[test]
    fn bic_rejects_other_lengths() {
        assert!(!bic("MARKDEF"));
        assert!(!bic("MARKDEF11"));
        assert!(!bic("MARKDEF1100X"));
    }

    #[test]
    fn validation_error_serializes_field_and_message() {
        let error = ValidationError {
            field: "email",
            message: "Invalid email address",
        };

        assert_eq!(
            serde_json::to_value(error).unwrap(),
            serde_json::json!({"field": "email", "message": "Invalid email address"})
        );
    }

    #[test]
    fn date_requires_real_calendar_dates() {
        assert!(date("1990-05-17"));
        assert!(date("2000-02-29"));
        assert!(!date("2001-02-29"));
        assert!(!date("1990-13-01"));
        assert!(!date("17.05.1990"));
        assert!(!date("1990-5-17"));
        assert!(!date(""));
    }
}
