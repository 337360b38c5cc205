//! Calendar date parsing for form input.

use chrono::NaiveDate;

use crate::error::DomainError;

/// Parses a `YYYY-MM-DD` calendar date as produced by a date input.
///
/// ```
/// use atelier_domain::common::parse_calendar_date;
/// use chrono::Datelike;
///
/// let date = parse_calendar_date("2024-03-15").unwrap();
/// assert_eq!(date.month(), 3);
/// ```
///
/// # Errors
///
/// Returns `DomainError::Validation` for blank input and
/// `DomainError::Parse` for anything that is not a valid date.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, DomainError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DomainError::validation("Meeting date is required"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::parse(format!("Invalid date '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_calendar_date_valid() {
        let date = parse_calendar_date("2024-01-15").expect("valid date");
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_calendar_date_trims() {
        assert!(parse_calendar_date(" 2024-01-15 ").is_ok());
    }

    #[test]
    fn test_parse_calendar_date_blank_is_validation_error() {
        assert!(matches!(
            parse_calendar_date("  "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_calendar_date_invalid() {
        assert!(matches!(
            parse_calendar_date("2024-02-30"),
            Err(DomainError::Parse(_))
        ));
        assert!(parse_calendar_date("15/01/2024").is_err());
        assert!(parse_calendar_date("2024-01-15T10:30:00Z").is_err());
    }
}
