//! Data models for the ebill pipeline.

pub mod bill;
pub mod config;
pub mod message;

pub use bill::{ElectricityBill, NET_UNITS_TYPES};
pub use config::{EbillConfig, SinkFormat, StorageConfig};
pub use message::Message;
