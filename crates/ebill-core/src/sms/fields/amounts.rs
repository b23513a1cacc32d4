//! Currency amount grammars.
//!
//! Amounts arrive as free text such as `Rs. 12,345.67`; balance and payment
//! fields may carry a trailing date (`Rs. 1,000.00 on 15-JUL-25`).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::dates::parse_bill_date;
use super::patterns::AMOUNT_PATTERN;
use crate::error::FieldErrorKind;

/// Parse the first numeric substring of the value as a decimal amount.
///
/// Thousands separators are stripped; the optional currency prefix and any
/// other surrounding text are ignored.
pub fn parse_amount(value: &str) -> Result<Decimal, FieldErrorKind> {
    let matched = AMOUNT_PATTERN
        .find(value)
        .ok_or_else(|| FieldErrorKind::InvalidAmount("no numeric value found".to_string()))?;

    let cleaned = matched.as_str().replace(',', "");
    cleaned
        .parse::<Decimal>()
        .map_err(|e| FieldErrorKind::InvalidAmount(e.to_string()))
}

/// Parse `<amount> on <date>` composites.
///
/// The amount portion is always required; the date portion is parsed only
/// when the literal ` on ` separator is present. A missing date segment is
/// not an error, balances and payments may be reported without one.
pub fn parse_amount_with_date(
    value: &str,
) -> Result<(Decimal, Option<NaiveDate>), FieldErrorKind> {
    let (amount_part, date_part) = match value.split_once(" on ") {
        Some((amount, date)) => (amount, Some(date)),
        None => (value, None),
    };

    let amount = parse_amount(amount_part)?;
    let date = match date_part {
        Some(raw) => Some(parse_bill_date(raw)?),
        None => None,
    };

    Ok((amount, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_with_currency_prefix_and_commas() {
        assert_eq!(
            parse_amount("Rs. 12,345.67"),
            Ok(Decimal::new(1_234_567, 2))
        );
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(parse_amount("Rs. 0.00"), Ok(Decimal::new(0, 2)));
    }

    #[test]
    fn test_bare_amount() {
        assert_eq!(parse_amount("1425.80"), Ok(Decimal::new(142_580, 2)));
    }

    #[test]
    fn test_negative_amount_is_extracted() {
        // Sign capture is the parser's job; rejection is the validator's.
        assert_eq!(parse_amount("Rs. -50.00"), Ok(Decimal::new(-5_000, 2)));
    }

    #[test]
    fn test_no_numeric_value() {
        assert_eq!(
            parse_amount("Rs."),
            Err(FieldErrorKind::InvalidAmount(
                "no numeric value found".to_string()
            ))
        );
    }

    #[test]
    fn test_comma_only_match_fails() {
        assert!(matches!(
            parse_amount("a,b"),
            Err(FieldErrorKind::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_with_date() {
        let (amount, date) = parse_amount_with_date("Rs. 1,000.00 on 15-JUL-25").unwrap();
        assert_eq!(amount, Decimal::new(100_000, 2));
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 15));
    }

    #[test]
    fn test_amount_without_date() {
        let (amount, date) = parse_amount_with_date("Rs. 500.00").unwrap();
        assert_eq!(amount, Decimal::new(50_000, 2));
        assert_eq!(date, None);
    }

    #[test]
    fn test_amount_with_bad_date_fails() {
        assert!(matches!(
            parse_amount_with_date("Rs. 500.00 on yesterday"),
            Err(FieldErrorKind::InvalidDate(_))
        ));
    }
}
