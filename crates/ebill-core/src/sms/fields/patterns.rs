//! Regex patterns for the bill-message field grammars.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // First numeric substring: optional sign, digit groups with optional
    // commas, optional decimal fraction.
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"[-+]?[\d,]+(?:\.\d+)?"
    ).unwrap();

    // Meter reading delta: <previous>-<current>=<units>
    pub static ref READING_PATTERN: Regex = Regex::new(
        r"(\d+)\s*-\s*(\d+)\s*=\s*(\d+)"
    ).unwrap();

    // Net units: <signedInt> (<tag>)
    pub static ref NET_UNITS_PATTERN: Regex = Regex::new(
        r"([-\d]+)\s*\((\w+)\)"
    ).unwrap();

    // Account line: <number> [(<type>)]
    pub static ref ACCOUNT_PATTERN: Regex = Regex::new(
        r"(\d+)\s*(?:\(([^)]+)\))?"
    ).unwrap();
}
