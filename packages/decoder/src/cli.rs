//! Command-line interface for the decoder.

use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::hin::HinCode;

/// Hullid Decoder - Decode and validate Hull Identification Numbers.
#[derive(Parser)]
#[command(name = "hullid-decoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a 12-character HIN and print its fields.
    Decode {
        /// Hull Identification Number (e.g., BMA45678H485)
        hin: String,

        /// Emit the decoded fields as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

/// Decoded field report for `--json` output.
#[derive(Serialize)]
struct DecodeReport<'a> {
    hin: &'a str,
    manufacturer_code: &'a str,
    serial_number: &'a str,
    raw_production_date: &'a str,
    production_month: u8,
    production_year: Option<u16>,
    model_year: Option<u16>,
    manufacturer: &'a str,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { hin, json } => decode_command(&hin, json),
    }
}

/// Execute the decode command.
fn decode_command(raw: &str, json: bool) -> Result<()> {
    tracing::debug!(input = raw, "Decoding HIN");

    let hin = HinCode::parse(raw)?;

    if json {
        let report = DecodeReport {
            hin: hin.as_str(),
            manufacturer_code: hin.manufacturer_code(),
            serial_number: hin.serial_number(),
            raw_production_date: hin.raw_production_date(),
            production_month: hin.production_month(),
            production_year: hin.production_year(),
            model_year: hin.model_year(),
            manufacturer: hin.manufacturer(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} {}", style("Decoded").bold(), style(hin.as_str()).cyan());
    println!();
    println!(
        "  Manufacturer code: {}",
        style(hin.manufacturer_code()).green()
    );
    println!("  Serial number: {}", style(hin.serial_number()).green());
    println!("  Raw production date: {}", hin.raw_production_date());
    println!("  Production month: {}", hin.production_month());
    println!("  Production year: {}", format_year(hin.production_year()));
    println!("  Model year: {}", format_year(hin.model_year()));
    println!("  Manufacturer: {}", hin.manufacturer());

    Ok(())
}

/// Render a derived year, marking the unknown case.
fn format_year(year: Option<u16>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => style("unknown").yellow().to_string(),
    }
}
