//! Meter reading grammars: reading deltas and tagged net units.

use super::patterns::{NET_UNITS_PATTERN, READING_PATTERN};
use crate::error::FieldErrorKind;

/// One meter's readings for the billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterReading {
    /// Counter value at the start of the period.
    pub previous: i64,

    /// Counter value at the end of the period.
    pub current: i64,

    /// Units metered over the period.
    pub units: i64,
}

/// Parse a reading delta such as `12345-12367=22`.
pub fn parse_reading(value: &str) -> Result<MeterReading, FieldErrorKind> {
    let caps = READING_PATTERN.captures(value).ok_or_else(|| {
        FieldErrorKind::InvalidReading(
            "expected format '<previous>-<current>=<units>'".to_string(),
        )
    })?;

    let previous = caps[1]
        .parse()
        .map_err(|_| FieldErrorKind::InvalidReading("previous reading".to_string()))?;
    let current = caps[2]
        .parse()
        .map_err(|_| FieldErrorKind::InvalidReading("current reading".to_string()))?;
    let units = caps[3]
        .parse()
        .map_err(|_| FieldErrorKind::InvalidReading("units".to_string()))?;

    Ok(MeterReading {
        previous,
        current,
        units,
    })
}

/// Parse a net-units value such as `13 (Imp)` or `-5 (Exp)`.
///
/// Returns the signed unit count and the literal parenthesized tag; tag
/// vocabulary is checked later by validation, not here.
pub fn parse_net_units(value: &str) -> Result<(i64, String), FieldErrorKind> {
    let caps = NET_UNITS_PATTERN
        .captures(value)
        .ok_or_else(|| FieldErrorKind::InvalidValue("net units format".to_string()))?;

    let units = caps[1]
        .parse()
        .map_err(|_| FieldErrorKind::InvalidValue("net units value".to_string()))?;

    Ok((units, caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_delta() {
        assert_eq!(
            parse_reading("12345-12367=22"),
            Ok(MeterReading {
                previous: 12345,
                current: 12367,
                units: 22,
            })
        );
    }

    #[test]
    fn test_reading_delta_with_spaces() {
        assert_eq!(
            parse_reading("12345 - 12367 = 22"),
            Ok(MeterReading {
                previous: 12345,
                current: 12367,
                units: 22,
            })
        );
    }

    #[test]
    fn test_reading_missing_units_group() {
        assert_eq!(
            parse_reading("12345-12367"),
            Err(FieldErrorKind::InvalidReading(
                "expected format '<previous>-<current>=<units>'".to_string()
            ))
        );
    }

    #[test]
    fn test_reading_non_numeric() {
        assert!(parse_reading("abc-def=ghi").is_err());
    }

    #[test]
    fn test_net_units_import() {
        assert_eq!(parse_net_units("13 (Imp)"), Ok((13, "Imp".to_string())));
    }

    #[test]
    fn test_net_units_negative() {
        assert_eq!(parse_net_units("-5 (Exp)"), Ok((-5, "Exp".to_string())));
    }

    #[test]
    fn test_net_units_missing_tag() {
        assert_eq!(
            parse_net_units("13"),
            Err(FieldErrorKind::InvalidValue("net units format".to_string()))
        );
    }

    #[test]
    fn test_net_units_missing_integer() {
        assert!(parse_net_units("(Imp)").is_err());
    }

    #[test]
    fn test_net_units_malformed_sign_run() {
        assert_eq!(
            parse_net_units("--5 (Imp)"),
            Err(FieldErrorKind::InvalidValue("net units value".to_string()))
        );
    }
}
