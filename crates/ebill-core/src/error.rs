//! Error types for the ebill-core library.

use thiserror::Error;

/// What went wrong inside a single field sub-parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The value did not hold a parsable `DD-MMM-YY` date.
    #[error("invalid date format: {0}")]
    InvalidDate(String),

    /// The value did not match the `<previous>-<current>=<units>` grammar.
    #[error("invalid reading format: {0}")]
    InvalidReading(String),

    /// The value did not contain a numeric amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Generic malformation (account or net-units grammar).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Errors raised while parsing one bill message.
///
/// Field-level errors are collected during assembly and never halt it; the
/// validation pass decides whether they surface to the caller (see
/// [`crate::sms::SmsParser::parse`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A recognized field line whose value failed its sub-grammar, tagged
    /// with the key that selected it.
    #[error("{key}: {kind}")]
    Field { key: String, kind: FieldErrorKind },

    /// The account-name continuation line after `A/N` was never supplied.
    #[error("account name expected after A/N line but not supplied")]
    MissingAccountName,

    /// The assembled record violated a post-parse invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Post-assembly invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field required for a valid record was never extracted.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A monetary or meter-reading field carried a negative value.
    #[error("{field} must be non-negative")]
    NegativeAmount { field: &'static str },

    /// The net-units tag is not part of the recognized vocabulary.
    #[error("unknown net units type: {0}")]
    UnknownNetUnitsKind(String),
}

/// Errors raised by record sinks.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to encode the record for the sink.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// I/O error while appending.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("sink error: {0}")]
    Sink(String),
}

/// Errors raised by the message-routing service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Every registered parser rejected the message.
    #[error("no registered parser matched the message: {}", format_failures(.0))]
    NoMatch(Vec<ParserFailure>),

    /// A matched record could not be handed to its sink.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// One parser's reason for rejecting a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{parser}: {error}")]
pub struct ParserFailure {
    /// Name of the rejecting parser.
    pub parser: &'static str,

    /// The error it returned.
    pub error: ParseError,
}

fn format_failures(failures: &[ParserFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_carries_key() {
        let err = ParseError::Field {
            key: "Imp".to_string(),
            kind: FieldErrorKind::InvalidReading("expected format '<previous>-<current>=<units>'".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Imp: invalid reading format: expected format '<previous>-<current>=<units>'"
        );
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let err = ValidationError::NegativeAmount { field: "monthly bill" };
        assert_eq!(err.to_string(), "monthly bill must be non-negative");

        let err = ValidationError::MissingRequiredField("account number");
        assert_eq!(err.to_string(), "missing required field: account number");
    }

    #[test]
    fn test_no_match_aggregates_failures() {
        let err = ServiceError::NoMatch(vec![ParserFailure {
            parser: "leco",
            error: ParseError::Validation(ValidationError::MissingRequiredField("read on date")),
        }]);
        assert_eq!(
            err.to_string(),
            "no registered parser matched the message: leco: missing required field: read on date"
        );
    }
}
