//! Account line grammar: `<number> [(<type>)]`.

use super::patterns::ACCOUNT_PATTERN;
use crate::error::FieldErrorKind;

/// Parse an account value such as `123456789 (Domestic)`.
///
/// The number is the leading digit run; the parenthesized type suffix is
/// optional.
pub fn parse_account(value: &str) -> Result<(String, Option<String>), FieldErrorKind> {
    let caps = ACCOUNT_PATTERN
        .captures(value)
        .ok_or_else(|| FieldErrorKind::InvalidValue("account format".to_string()))?;

    let number = caps[1].to_string();
    let account_type = caps.get(2).map(|m| m.as_str().to_string());

    Ok((number, account_type))
}
