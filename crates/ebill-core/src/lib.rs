//! Core library for utility e-bill SMS ingestion.
//!
//! This crate provides:
//! - Line-oriented parsing of provider bill-notification messages
//! - Post-extraction validation of the assembled bill record
//! - A message router that tries registered parsers against an inbound SMS
//! - A storage seam ("append record") for accepted bills

pub mod error;
pub mod models;
pub mod service;
pub mod sms;
pub mod storage;

pub use error::{
    FieldErrorKind, ParseError, ParserFailure, ServiceError, StorageError, ValidationError,
};
pub use models::bill::{ElectricityBill, NET_UNITS_TYPES};
pub use models::config::{EbillConfig, SinkFormat, StorageConfig};
pub use models::message::Message;
pub use service::{BillService, MessageService};
pub use sms::{LecoParser, ParsedSms, SmsParser};
pub use storage::{BillSink, MemorySink};
