//! Helpers for turning loosely-typed request fields into validated values

use chrono::{DateTime, NaiveDate};
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};

/// Trimmed value when present and non-blank
pub fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// (whose date part is used). Blank input yields `None`.
pub fn parse_date(field: &str, value: &Option<String>) -> AppResult<Option<NaiveDate>> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| AppError::Validation(format!("Invalid {}: expected YYYY-MM-DD", field)))
}

/// Validate an email address the same way registration does
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_trims_and_drops_blank() {
        assert_eq!(present(&Some("  Jane ".into())), Some("Jane".into()));
        assert_eq!(present(&Some("   ".into())), None);
        assert_eq!(present(&None), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 12, 24);
        assert_eq!(parse_date("date", &Some("2026-12-24".into())).unwrap(), expected);
        assert_eq!(
            parse_date("date", &Some("2026-12-24T10:00:00Z".into())).unwrap(),
            expected
        );
        assert_eq!(parse_date("date", &Some("".into())).unwrap(), None);
        assert!(matches!(
            parse_date("date", &Some("24/12/2026".into())),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("not-an-email"));
    }
}
