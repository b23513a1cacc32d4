//! Storage seam for accepted bills.
//!
//! A sink exposes one operation, "append record"; idempotency and record
//! identity are the sink's own concern. File-backed sinks live in the CLI;
//! the in-memory sink here backs tests and dry runs.

mod memory;

pub use memory::MemorySink;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::bill::ElectricityBill;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A destination for accepted electricity bills.
#[async_trait]
pub trait BillSink: Send + Sync {
    /// Append one bill to the sink.
    async fn append(&self, bill: &ElectricityBill) -> Result<()>;
}
