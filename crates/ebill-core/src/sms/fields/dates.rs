//! Bill date grammar: `DD-MMM-YY` with a case-insensitive month abbreviation.

use chrono::NaiveDate;

use crate::error::FieldErrorKind;

/// Parse a bill date such as `27-JUL-25`.
///
/// The month portion is normalized to title case before parsing, so `JUL`,
/// `Jul` and `jul` are all accepted; longer month names are truncated to
/// their three-letter abbreviation. Two-digit years pivot per chrono's
/// `%y` rule (00-68 map to 20xx).
pub fn parse_bill_date(value: &str) -> Result<NaiveDate, FieldErrorKind> {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return Err(FieldErrorKind::InvalidDate(
            "expected DD-MMM-YY".to_string(),
        ));
    }

    let normalized = format!("{}-{}-{}", parts[0], normalize_month(parts[1]), parts[2]);
    NaiveDate::parse_from_str(&normalized, "%d-%b-%y")
        .map_err(|e| FieldErrorKind::InvalidDate(e.to_string()))
}

/// Title-case the first three letters of the month portion.
fn normalize_month(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 3 {
        return raw.to_string();
    }

    let mut month = String::new();
    month.extend(chars[0].to_uppercase());
    for c in &chars[1..3] {
        month.extend(c.to_lowercase());
    }
    month
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_date() {
        assert_eq!(
            parse_bill_date("27-Jul-25"),
            Ok(NaiveDate::from_ymd_opt(2025, 7, 27).unwrap())
        );
    }

    #[test]
    fn test_month_case_insensitive() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap();
        assert_eq!(parse_bill_date("27-JUL-25"), Ok(expected));
        assert_eq!(parse_bill_date("27-Jul-25"), Ok(expected));
        assert_eq!(parse_bill_date("27-jul-25"), Ok(expected));
    }

    #[test]
    fn test_full_month_name_truncated() {
        assert_eq!(
            parse_bill_date("27-JULY-25"),
            Ok(NaiveDate::from_ymd_opt(2025, 7, 27).unwrap())
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(
            parse_bill_date("01-Jan-99"),
            Ok(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap())
        );
        assert_eq!(
            parse_bill_date("01-Jan-00"),
            Ok(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_wrong_part_count() {
        assert_eq!(
            parse_bill_date("27-JUL"),
            Err(FieldErrorKind::InvalidDate("expected DD-MMM-YY".to_string()))
        );
        assert!(parse_bill_date("2025-07-27-01").is_err());
    }

    #[test]
    fn test_unparsable_month() {
        assert!(matches!(
            parse_bill_date("27-XYZ-25"),
            Err(FieldErrorKind::InvalidDate(_))
        ));
    }

    #[test]
    fn test_invalid_day() {
        assert!(matches!(
            parse_bill_date("32-Jul-25"),
            Err(FieldErrorKind::InvalidDate(_))
        ));
    }
}
