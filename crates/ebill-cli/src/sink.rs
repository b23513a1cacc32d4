//! File-backed bill sinks: JSON-Lines and CSV.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use ebill_core::{BillSink, ElectricityBill, SinkFormat, StorageError};

/// Build the sink matching the configured format.
pub fn open_sink(path: &Path, format: SinkFormat) -> Box<dyn BillSink> {
    match format {
        SinkFormat::Jsonl => Box::new(JsonlSink::new(path)),
        SinkFormat::Csv => Box::new(CsvSink::new(path)),
    }
}

/// Sink appending one JSON object per line.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BillSink for JsonlSink {
    async fn append(&self, bill: &ElectricityBill) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let line = serde_json::to_string(bill)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Sink appending CSV rows, writing the header only into an empty file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub(crate) const CSV_HEADER: [&str; 21] = [
    "account_number",
    "account_type",
    "account_name",
    "read_on",
    "import_previous",
    "import_current",
    "import_units",
    "export_previous",
    "export_current",
    "export_units",
    "net_units",
    "net_units_type",
    "monthly_bill",
    "other_charges",
    "sscl",
    "opening_balance",
    "opening_balance_date",
    "total_payable",
    "last_payment_amount",
    "last_payment_date",
    "last_generation_payment",
];

#[async_trait]
impl BillSink for CsvSink {
    async fn append(&self, bill: &ElectricityBill) -> Result<(), StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_empty {
            wtr.write_record(CSV_HEADER).map_err(csv_error)?;
        }

        wtr.write_record(csv_row(bill)).map_err(csv_error)?;
        wtr.flush()?;
        Ok(())
    }
}

fn csv_error(e: csv::Error) -> StorageError {
    StorageError::Sink(e.to_string())
}

pub(crate) fn csv_row(bill: &ElectricityBill) -> Vec<String> {
    let date = |d: &Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

    vec![
        bill.account_number.clone(),
        bill.account_type.clone().unwrap_or_default(),
        bill.account_name.clone().unwrap_or_default(),
        date(&bill.read_on),
        bill.import_previous.to_string(),
        bill.import_current.to_string(),
        bill.import_units.to_string(),
        bill.export_previous.to_string(),
        bill.export_current.to_string(),
        bill.export_units.to_string(),
        bill.net_units.to_string(),
        bill.net_units_type.clone().unwrap_or_default(),
        bill.monthly_bill.to_string(),
        bill.other_charges.to_string(),
        bill.sscl.to_string(),
        bill.opening_balance.to_string(),
        date(&bill.opening_balance_date),
        bill.total_payable.to_string(),
        bill.last_payment_amount.to_string(),
        date(&bill.last_payment_date),
        bill.last_generation_payment.to_string(),
    ]
}
