use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use thiserror::Error;

use super::field::{InputKind, TextField};

/// Format problems with a filled-in field.
///
/// These are hints shown beside the field; they never make a section
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error("expected a time as HH:MM: {0}")]
    InvalidTime(String),
    #[error("ICCID must be 19-20 digits")]
    InvalidIccid(String),
}

static ICCID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{19,20}$").expect("valid hardcoded regex"));

/// Validates a decimal number such as `-37.8136` or `0.35`.
pub fn validate_number(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(ValidationError::InvalidNumber(value.to_string())),
    }
}

/// Validates a 24-hour time of day (e.g., `07:30`, `17:00`).
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidTime(value.to_string()))
}

/// Validates a SIM card ICCID: 19 or 20 ASCII digits.
pub fn validate_iccid(value: &str) -> Result<(), ValidationError> {
    if ICCID_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIccid(value.to_string()))
    }
}

/// Returns the format hint for a field's current value, if any.
///
/// Blank values have no hint; whether a blank is acceptable is the
/// completion evaluator's concern.
pub fn field_hint(field: TextField, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return None;
    }
    let result = match (field, field.input_kind()) {
        (TextField::SimCardIccid, _) => validate_iccid(value),
        (_, InputKind::Decimal) => validate_number(value),
        (_, InputKind::Time) => validate_time_of_day(value),
        (_, InputKind::Free | InputKind::Digits) => Ok(()),
    };
    result.err()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_number ---

    #[test]
    fn number_decimal() {
        assert_eq!(validate_number("0.35"), Ok(()));
        assert_eq!(validate_number("-37.8136"), Ok(()));
    }

    #[test]
    fn number_rejects_stray_chars() {
        assert_eq!(
            validate_number("1.2.3"),
            Err(ValidationError::InvalidNumber("1.2.3".to_string()))
        );
        assert!(validate_number("-").is_err());
    }

    #[test]
    fn number_rejects_non_finite() {
        assert!(validate_number("inf").is_err());
        assert!(validate_number("NaN").is_err());
    }

    #[quickcheck]
    fn formatted_floats_are_valid(n: f64) -> bool {
        !n.is_finite() || validate_number(&n.to_string()).is_ok()
    }

    // --- validate_time_of_day ---

    #[test]
    fn time_valid() {
        assert_eq!(validate_time_of_day("17:00"), Ok(()));
        assert_eq!(validate_time_of_day("00:00"), Ok(()));
        assert_eq!(validate_time_of_day("23:59"), Ok(()));
    }

    #[test]
    fn time_out_of_range() {
        assert_eq!(
            validate_time_of_day("24:00"),
            Err(ValidationError::InvalidTime("24:00".to_string()))
        );
        assert!(validate_time_of_day("12:60").is_err());
    }

    #[test]
    fn time_missing_colon() {
        assert!(validate_time_of_day("1700").is_err());
    }

    #[quickcheck]
    fn every_minute_of_the_day_is_valid(h: u8, m: u8) -> bool {
        let (h, m) = (h % 24, m % 60);
        validate_time_of_day(&format!("{h:02}:{m:02}")).is_ok()
    }

    // --- validate_iccid ---

    #[test]
    fn iccid_lengths() {
        assert_eq!(validate_iccid(&"8".repeat(19)), Ok(()));
        assert_eq!(validate_iccid(&"8".repeat(20)), Ok(()));
        assert!(validate_iccid(&"8".repeat(18)).is_err());
        assert!(validate_iccid(&"8".repeat(21)).is_err());
    }

    #[test]
    fn iccid_rejects_letters() {
        assert_eq!(
            validate_iccid("896101234567890123A"),
            Err(ValidationError::InvalidIccid("896101234567890123A".to_string()))
        );
    }

    #[test]
    fn iccid_rejects_non_ascii_digits() {
        let arabic_indic = "\u{0668}".repeat(19);
        assert!(validate_iccid(&arabic_indic).is_err());
        let fullwidth = "\u{FF18}".repeat(20);
        assert!(validate_iccid(&fullwidth).is_err());
    }

    // --- field_hint ---

    #[test]
    fn blank_has_no_hint() {
        assert_eq!(field_hint(TextField::Latitude, "  "), None);
        assert_eq!(field_hint(TextField::SimCardIccid, ""), None);
    }

    #[test]
    fn hint_dispatches_on_field() {
        assert!(field_hint(TextField::Latitude, "north").is_some());
        assert!(field_hint(TextField::PeakStartTime, "5pm").is_some());
        assert!(field_hint(TextField::SimCardIccid, "123").is_some());
        assert_eq!(field_hint(TextField::PeakEndTime, "21:00"), None);
        assert_eq!(field_hint(TextField::PowerRating, "22"), None);
    }

    #[quickcheck]
    fn free_text_never_hints(s: String) -> bool {
        field_hint(TextField::LocationName, &s).is_none()
            && field_hint(TextField::OcppId, &s).is_none()
    }
}
