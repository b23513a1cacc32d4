//! Parse command - extract a bill from a single SMS body.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use ebill_core::{ElectricityBill, LecoParser, ParsedSms, SmsParser};

use crate::sink::{csv_row, CSV_HEADER};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file with the SMS body, or '-' for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print field-level extraction issues to stderr
    #[arg(long)]
    show_issues: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, _config_path: Option<&str>) -> anyhow::Result<()> {
    let body = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    info!("parsing message from {}", args.input.display());

    let parser = LecoParser::new();

    if args.show_issues {
        let (_, issues) = parser.extract(&body);
        for issue in &issues {
            eprintln!("{} {}", style("issue:").yellow(), issue);
        }
    }

    let ParsedSms::LecoBill(bill) = parser
        .parse(&body)
        .map_err(|e| anyhow::anyhow!("message rejected: {e}"))?;

    let output = format_bill(&bill, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

fn format_bill(bill: &ElectricityBill, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(bill)?),
        OutputFormat::Csv => format_csv(bill),
        OutputFormat::Text => Ok(format_text(bill)),
    }
}

fn format_csv(bill: &ElectricityBill) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(bill))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(bill: &ElectricityBill) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", bill.account_number));
    if let Some(account_type) = &bill.account_type {
        output.push_str(&format!("Type: {account_type}\n"));
    }
    if let Some(name) = &bill.account_name {
        output.push_str(&format!("Name: {name}\n"));
    }
    if let Some(read_on) = bill.read_on {
        output.push_str(&format!("Read on: {read_on}\n"));
    }
    output.push('\n');

    output.push_str("Meters:\n");
    output.push_str(&format!(
        "  Import: {} -> {} ({} units)\n",
        bill.import_previous, bill.import_current, bill.import_units
    ));
    output.push_str(&format!(
        "  Export: {} -> {} ({} units)\n",
        bill.export_previous, bill.export_current, bill.export_units
    ));
    if let Some(kind) = &bill.net_units_type {
        output.push_str(&format!("  Net:    {} ({kind})\n", bill.net_units));
    }
    output.push('\n');

    output.push_str("Charges:\n");
    output.push_str(&format!("  Monthly bill:  Rs. {}\n", bill.monthly_bill));
    output.push_str(&format!("  Other charges: Rs. {}\n", bill.other_charges));
    output.push_str(&format!("  SSCL:          Rs. {}\n", bill.sscl));
    output.push_str(&format!("  Total payable: Rs. {}\n", bill.total_payable));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill() -> ElectricityBill {
        ElectricityBill {
            account_number: "123456789".to_string(),
            account_type: Some("Domestic".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_json_round_trips() {
        let output = format_bill(&bill(), OutputFormat::Json).unwrap();
        let parsed: ElectricityBill = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, bill());
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let output = format_bill(&bill(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("account_number,"));
        assert!(lines[1].starts_with("123456789,Domestic,"));
    }

    #[test]
    fn test_text_summary_names_the_account() {
        let output = format_bill(&bill(), OutputFormat::Text).unwrap();
        assert!(output.contains("Account: 123456789"));
        assert!(output.contains("Type: Domestic"));
    }
}
