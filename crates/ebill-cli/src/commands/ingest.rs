//! Ingest command - process a JSON-Lines feed of message envelopes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, warn};

use ebill_core::{BillService, LecoParser, Message, MessageService};

use super::load_config;
use crate::sink::open_sink;

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// JSON-Lines file of message envelopes, or '-' for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Sink file (default: from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: IngestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let sink_path = args.output.unwrap_or(config.storage.path);

    let reader: Box<dyn Read> = if args.input.as_os_str() == "-" {
        Box::new(std::io::stdin())
    } else {
        Box::new(File::open(&args.input)?)
    };

    let service = MessageService::new(
        vec![Box::new(LecoParser::new())],
        BillService::new(open_sink(&sink_path, config.storage.format)),
    );

    let mut routed = 0usize;
    let mut skipped = 0usize;
    let mut failures: Vec<(usize, String)> = Vec::new();

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let msg: Message = match serde_json::from_str(&line) {
            Ok(msg) => msg,
            Err(e) => {
                if args.continue_on_error {
                    warn!("Skipping malformed envelope on line {}: {}", line_no + 1, e);
                    failures.push((line_no + 1, e.to_string()));
                    continue;
                }
                anyhow::bail!("Malformed envelope on line {}: {}", line_no + 1, e);
            }
        };

        if msg.test {
            debug!(sender = %msg.sender, "skipping test envelope");
            skipped += 1;
            continue;
        }

        match service.pass_message(&msg).await {
            Ok(()) => routed += 1,
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to route envelope on line {}: {}", line_no + 1, error_msg);
                    failures.push((line_no + 1, error_msg));
                } else {
                    anyhow::bail!("Failed to route envelope on line {}: {}", line_no + 1, error_msg);
                }
            }
        }
    }

    println!(
        "{} Ingested feed in {:?}: {} routed, {} test envelopes skipped, {} failed",
        style("✓").green(),
        start.elapsed(),
        style(routed).green(),
        skipped,
        style(failures.len()).red()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed envelopes:").red());
        for (line_no, error) in &failures {
            println!("  - line {line_no}: {error}");
        }
    }

    Ok(())
}
