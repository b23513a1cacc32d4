//! SMS message parsing.

pub mod fields;
mod leco;

pub use leco::LecoParser;

use crate::error::ParseError;
use crate::models::bill::ElectricityBill;

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The closed set of record kinds the registered parsers can produce.
///
/// Routing code matches on this exhaustively, so adding an issuer grammar
/// forces every dispatch site to handle it at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSms {
    /// An electricity bill in the LECO notification grammar.
    LecoBill(ElectricityBill),
}

/// A parser for one issuer's message grammar.
///
/// Implementations are stateless, hold no I/O, and are safe to call
/// concurrently; a parse is a pure function of the message body.
pub trait SmsParser: Send + Sync {
    /// Fixed identifier for this grammar.
    fn name(&self) -> &'static str;

    /// Try the message body against this grammar.
    fn parse(&self, body: &str) -> Result<ParsedSms>;
}
