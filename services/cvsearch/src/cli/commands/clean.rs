//! Clean records command - prepare transcription records for indexing

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::records::{read_records, RecordCleaner, RecordFormat};
use crate::core::services::Services;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Format of the input record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON array of objects
    Json,
    /// CSV with a header row
    Csv,
}

impl From<InputFormat> for RecordFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => RecordFormat::Json,
            InputFormat::Csv => RecordFormat::Csv,
        }
    }
}

/// Arguments for the clean-records command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Record file (CSV or JSON array)
    pub input: PathBuf,

    /// Input format (default: from the file extension)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Write cleaned records here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Execute the clean-records command
pub fn execute(
    args: CleanArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.input)?;
    let record_format = args
        .input_format
        .map_or_else(|| RecordFormat::from_path(&args.input), RecordFormat::from);
    let records = read_records(&text, record_format)?;

    let outcome = RecordCleaner::from_schema(&services.schema).clean(records);
    let json = serde_json::to_string_pretty(&outcome.records)?;
    output::write_or_print(&json, args.output.as_deref())?;

    // Counts go to stderr when records went to stdout
    let stats = outcome.stats;
    match format {
        OutputFormat::Human => {
            let summary = format!(
                "{} of {} records kept, {} dropped, {} values filled",
                colors::number(&stats.kept.to_string()),
                colors::number(&stats.input.to_string()),
                colors::number(&stats.dropped.to_string()),
                colors::number(&stats.filled.to_string())
            );
            if args.output.is_some() {
                output::print_success(&summary);
            } else {
                eprintln!("{summary}");
            }
            if stats.kept == 0 {
                output::print_warning("No records left to index");
            }
        }
        OutputFormat::Json => {
            if args.output.is_some() {
                output::print_output(&stats, format);
            } else {
                eprintln!("{}", serde_json::to_string(&stats)?);
            }
        }
    }

    Ok(())
}
