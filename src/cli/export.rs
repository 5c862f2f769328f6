//! CLI command for data export
//!
//! CSV is the shareable record listing; JSON is the full store state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{TiffinError, TiffinResult};
use crate::export::{export_csv, export_file_name, export_json};
use crate::services::RecordStore;
use crate::storage::KeyValueStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (Date,Meal,Price), one row per meal
    Csv,
    /// JSON (prices, advance, and all records)
    Json,
}

/// Arguments for `tiffin export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to tiffin-records-<today>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Default output file for a format
pub fn default_output(format: ExportFormat, today: NaiveDate) -> PathBuf {
    match format {
        ExportFormat::Csv => PathBuf::from(export_file_name(today)),
        ExportFormat::Json => {
            PathBuf::from(format!("tiffin-export-{}.json", today.format("%Y-%m-%d")))
        }
    }
}

/// Handle `tiffin export`
pub fn handle_export<S: KeyValueStore>(
    store: &RecordStore<S>,
    settings: &Settings,
    args: ExportArgs,
) -> TiffinResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| default_output(args.format, chrono::Local::now().date_naive()));

    let file = File::create(&output).map_err(|e| {
        TiffinError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            export_csv(store.records(), &settings.currency_symbol, &mut writer)?;
        }
        ExportFormat::Json => {
            export_json(store, &mut writer, args.pretty)?;
        }
    }
    writer
        .flush()
        .map_err(|e| TiffinError::Export(e.to_string()))?;

    println!(
        "Exported {} records to: {}",
        store.records().len(),
        output.display()
    );

    Ok(())
}
