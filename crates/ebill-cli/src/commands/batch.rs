//! Batch command - route message files into the configured sink.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use ebill_core::{BillService, LecoParser, Message, MessageService, SinkFormat};

use super::load_config;
use crate::sink::open_sink;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Sink file (default: from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sink encoding (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<SinkFormatArg>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SinkFormatArg {
    /// One JSON object per line
    Jsonl,
    /// Comma-separated rows with a header
    Csv,
}

impl From<SinkFormatArg> for SinkFormat {
    fn from(arg: SinkFormatArg) -> Self {
        match arg {
            SinkFormatArg::Jsonl => SinkFormat::Jsonl,
            SinkFormatArg::Csv => SinkFormat::Csv,
        }
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Explicit flags win over configured values.
    let sink_path = args.output.unwrap_or(config.storage.path);
    let sink_format = args.format.map(Into::into).unwrap_or(config.storage.format);

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();
    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let service = MessageService::new(
        vec![Box::new(LecoParser::new())],
        BillService::new(open_sink(&sink_path, sink_format)),
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut succeeded = 0usize;
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    for path in files {
        let result = route_file(&service, &path).await;

        match result {
            Ok(()) => succeeded += 1,
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    failures.push((path.clone(), error_msg));
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        succeeded + failures.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(succeeded).green(),
        style(failures.len()).red()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, error) in &failures {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}

async fn route_file(service: &MessageService, path: &PathBuf) -> anyhow::Result<()> {
    let body = fs::read_to_string(path)?;
    let sender = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("batch")
        .to_string();

    service.pass_message(&Message::new(sender, body)).await?;
    Ok(())
}
