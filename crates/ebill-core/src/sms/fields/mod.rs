//! Field sub-parsers for the bill-message grammar.
//!
//! Each grammar family is independent: dates, currency amounts (with an
//! optional trailing date), meter-reading deltas, tagged net units, and the
//! account line. All of them return [`FieldErrorKind`](crate::error::FieldErrorKind)
//! on failure; the assembler tags that with the originating message key.

pub mod account;
pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod readings;

pub use account::parse_account;
pub use amounts::{parse_amount, parse_amount_with_date};
pub use dates::parse_bill_date;
pub use readings::{parse_net_units, parse_reading, MeterReading};
