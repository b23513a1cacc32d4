//! Bill-handling service: hands accepted bills to their sink.

use tracing::{error, info};

use super::Result;
use crate::models::bill::ElectricityBill;
use crate::storage::BillSink;

/// Handles validated electricity bills by appending them to a sink.
pub struct BillService {
    sink: Box<dyn BillSink>,
}

impl BillService {
    pub fn new(sink: Box<dyn BillSink>) -> Self {
        Self { sink }
    }

    /// Append one bill to the configured sink.
    pub async fn handle(&self, bill: &ElectricityBill) -> Result<()> {
        info!(account = %bill.account_number, "handling electricity bill");

        if let Err(e) = self.sink.append(bill).await {
            error!("failed to store bill: {}", e);
            return Err(e.into());
        }

        info!("bill stored");
        Ok(())
    }
}
