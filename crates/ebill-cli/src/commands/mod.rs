//! CLI command implementations.

pub mod batch;
pub mod ingest;
pub mod parse;

use std::path::Path;

use ebill_core::EbillConfig;

/// Load the configuration file if one was given, otherwise defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EbillConfig> {
    match config_path {
        Some(path) => Ok(EbillConfig::from_file(Path::new(path))?),
        None => Ok(EbillConfig::default()),
    }
}
