//! Configuration structures for the ingestion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the ebill pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EbillConfig {
    /// Record sink configuration.
    pub storage: StorageConfig,
}

impl Default for EbillConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

/// Record sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File parsed bills are appended to.
    pub path: PathBuf,

    /// Encoding used when appending records.
    pub format: SinkFormat,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bills.jsonl"),
            format: SinkFormat::Jsonl,
        }
    }
}

/// On-disk encoding for appended records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    /// One JSON object per line.
    Jsonl,
    /// Comma-separated rows with a header.
    Csv,
}

impl Default for SinkFormat {
    fn default() -> Self {
        Self::Jsonl
    }
}

impl EbillConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}
