//! Electricity-bill record extracted from a provider SMS.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Recognized net-units direction tags.
pub const NET_UNITS_TYPES: [&str; 2] = ["Imp", "Exp"];

/// A parsed electricity-bill notification.
///
/// The bill assembler populates this field by field in one pass over the
/// message; callers receive it only after [`validate`](Self::validate) has
/// passed. Fields the message did not carry keep their defaults. Options
/// serialize as explicit `null`s so sink rows keep a stable column set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectricityBill {
    /// Account number from the `A/N` line.
    pub account_number: String,

    /// Account type, the parenthesized suffix of the `A/N` line.
    pub account_type: Option<String>,

    /// Account holder name, taken from the continuation line after `A/N`.
    pub account_name: Option<String>,

    /// Date the meter was read.
    pub read_on: Option<NaiveDate>,

    /// Import meter reading at the start of the period.
    pub import_previous: i64,

    /// Import meter reading at the end of the period.
    pub import_current: i64,

    /// Units consumed from the grid.
    pub import_units: i64,

    /// Export meter reading at the start of the period.
    pub export_previous: i64,

    /// Export meter reading at the end of the period.
    pub export_current: i64,

    /// Units generated into the grid.
    pub export_units: i64,

    /// Net units for the period; negative when export dominates.
    pub net_units: i64,

    /// Direction tag for the net position, one of [`NET_UNITS_TYPES`].
    pub net_units_type: Option<String>,

    /// Charge for the billing month.
    pub monthly_bill: Decimal,

    /// Additional charges outside the monthly bill.
    pub other_charges: Decimal,

    /// Social Security Contribution Levy.
    pub sscl: Decimal,

    /// Balance carried into the period.
    pub opening_balance: Decimal,

    /// Date the opening balance was struck, when reported.
    pub opening_balance_date: Option<NaiveDate>,

    /// Total amount due.
    pub total_payable: Decimal,

    /// Most recent payment received.
    pub last_payment_amount: Decimal,

    /// Date of the most recent payment, when reported.
    pub last_payment_date: Option<NaiveDate>,

    /// Most recent payment made for generated units.
    pub last_generation_payment: Decimal,
}

impl ElectricityBill {
    /// Check the record against the billing invariants.
    ///
    /// Returns the first violation found: required fields (account number,
    /// read-on date) are checked before the numeric invariants, and the
    /// net-units tag vocabulary last. Net units themselves are legitimately
    /// signed and are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.account_number.is_empty() {
            return Err(ValidationError::MissingRequiredField("account number"));
        }

        if self.read_on.is_none() {
            return Err(ValidationError::MissingRequiredField("read on date"));
        }

        let readings = [
            ("import previous reading", self.import_previous),
            ("import current reading", self.import_current),
            ("import units", self.import_units),
            ("export previous reading", self.export_previous),
            ("export current reading", self.export_current),
            ("export units", self.export_units),
        ];
        for (field, value) in readings {
            if value < 0 {
                return Err(ValidationError::NegativeAmount { field });
            }
        }

        let amounts = [
            ("monthly bill", self.monthly_bill),
            ("other charges", self.other_charges),
            ("SSCL", self.sscl),
            ("opening balance", self.opening_balance),
            ("total payable", self.total_payable),
            ("last payment", self.last_payment_amount),
            ("last generation payment", self.last_generation_payment),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount { field });
            }
        }

        if let Some(kind) = &self.net_units_type {
            if !NET_UNITS_TYPES.contains(&kind.as_str()) {
                return Err(ValidationError::UnknownNetUnitsKind(kind.clone()));
            }
        }

        Ok(())
    }
}
