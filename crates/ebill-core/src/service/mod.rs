//! Services wiring parsers to storage.

mod bill;
mod message;

pub use bill::BillService;
pub use message::MessageService;

use crate::error::ServiceError;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
