//! In-memory bill sink.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{BillSink, Result};
use crate::models::bill::ElectricityBill;

/// Sink that collects bills in memory.
///
/// Clones share the same backing store, so a test can keep a handle while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bills: Arc<Mutex<Vec<ElectricityBill>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bills appended so far, in arrival order.
    pub fn bills(&self) -> Vec<ElectricityBill> {
        self.bills.lock().unwrap().clone()
    }

    /// Number of bills appended so far.
    pub fn len(&self) -> usize {
        self.bills.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BillSink for MemorySink {
    async fn append(&self, bill: &ElectricityBill) -> Result<()> {
        self.bills.lock().unwrap().push(bill.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(account: &str) -> ElectricityBill {
        ElectricityBill {
            account_number: account.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let sink = MemorySink::new();
        sink.append(&bill("111")).await.unwrap();
        sink.append(&bill("222")).await.unwrap();

        let stored = sink.bills();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].account_number, "111");
        assert_eq!(stored[1].account_number, "222");
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.append(&bill("111")).await.unwrap();

        assert_eq!(handle.len(), 1);
        assert!(!handle.is_empty());
    }
}
