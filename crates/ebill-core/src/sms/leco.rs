//! Parser for LECO electricity-bill notification messages.
//!
//! The message is a line-oriented `key: value` grammar with one exception:
//! the free-text account name follows the `A/N` line on its own line,
//! without a colon. A typical body:
//!
//! ```text
//! A/N: 123456789 (Domestic)
//! Account Name Example
//! Read On: 27-JUL-25
//! Imp: 12345-12367=22
//! Net Units: 13 (Imp)
//! Monthly Bill: Rs. 1,234.56
//! Total Payable: Rs. 1,425.80
//! ```

use tracing::debug;

use super::fields::{
    parse_account, parse_amount, parse_amount_with_date, parse_bill_date, parse_net_units,
    parse_reading,
};
use super::{ParsedSms, Result, SmsParser};
use crate::error::{FieldErrorKind, ParseError};
use crate::models::bill::ElectricityBill;

/// Parser for the LECO bill-message grammar.
pub struct LecoParser;

impl LecoParser {
    pub fn new() -> Self {
        Self
    }

    /// Run extraction without the validation gate.
    ///
    /// Returns the partially-populated record together with every
    /// field-level issue encountered, so callers can inspect problems that
    /// [`SmsParser::parse`] drops under its precedence policy.
    pub fn extract(&self, body: &str) -> (ElectricityBill, Vec<ParseError>) {
        let mut bill = ElectricityBill::default();
        let mut issues = Vec::new();
        let mut pending_account_name = false;

        for raw in body.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            // Forwarded messages quote each line with a single marker.
            let line = line.strip_prefix('>').map(str::trim).unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            if pending_account_name {
                pending_account_name = false;
                if !line.contains(':') {
                    bill.account_name = Some(line.to_string());
                    continue;
                }
                // The expected continuation never arrived; the line is
                // still processed as an ordinary field line below.
                issues.push(ParseError::MissingAccountName);
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            if let Err(kind) = dispatch_field(&mut bill, &mut pending_account_name, key, value) {
                issues.push(ParseError::Field {
                    key: key.to_string(),
                    kind,
                });
            }
        }

        if pending_account_name {
            issues.push(ParseError::MissingAccountName);
        }

        (bill, issues)
    }
}

impl Default for LecoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Route one recognized field line into the record.
///
/// Unrecognized keys are ignored. A successful `A/N` line arms the
/// pending-account-name state consumed by the caller's line loop.
fn dispatch_field(
    bill: &mut ElectricityBill,
    pending_account_name: &mut bool,
    key: &str,
    value: &str,
) -> std::result::Result<(), FieldErrorKind> {
    match key {
        "A/N" => {
            let (number, account_type) = parse_account(value)?;
            bill.account_number = number;
            bill.account_type = account_type;
            *pending_account_name = true;
        }
        "Read On" => bill.read_on = Some(parse_bill_date(value)?),
        "Imp" => {
            let reading = parse_reading(value)?;
            bill.import_previous = reading.previous;
            bill.import_current = reading.current;
            bill.import_units = reading.units;
        }
        "Exp" => {
            let reading = parse_reading(value)?;
            bill.export_previous = reading.previous;
            bill.export_current = reading.current;
            bill.export_units = reading.units;
        }
        "Net Units" => {
            let (units, kind) = parse_net_units(value)?;
            bill.net_units = units;
            bill.net_units_type = Some(kind);
        }
        "Monthly Bill" => bill.monthly_bill = parse_amount(value)?,
        "Other Charges" => bill.other_charges = parse_amount(value)?,
        "SSCL" => bill.sscl = parse_amount(value)?,
        "Opening Balance" => {
            let (amount, date) = parse_amount_with_date(value)?;
            bill.opening_balance = amount;
            bill.opening_balance_date = date;
        }
        "Total Payable" => bill.total_payable = parse_amount(value)?,
        "Last Payment" => {
            let (amount, date) = parse_amount_with_date(value)?;
            bill.last_payment_amount = amount;
            bill.last_payment_date = date;
        }
        "Last Amount Paid for Generation" => {
            bill.last_generation_payment = parse_amount(value)?;
        }
        _ => {}
    }
    Ok(())
}

impl SmsParser for LecoParser {
    fn name(&self) -> &'static str {
        "leco"
    }

    /// Parse a LECO bill message.
    ///
    /// Field-level issues never halt extraction. Validation then gates the
    /// outcome: a failure supersedes any collected field issues and the
    /// partial record is discarded; a pass returns the record even when
    /// optional fields were unparseable.
    fn parse(&self, body: &str) -> Result<ParsedSms> {
        let (bill, issues) = self.extract(body);

        for issue in &issues {
            debug!("leco extraction issue: {}", issue);
        }

        bill.validate()?;

        if !issues.is_empty() {
            debug!("leco bill accepted with {} unparsed field(s)", issues.len());
        }

        Ok(ParsedSms::LecoBill(bill))
    }
}
