//! Export command - write the document loaded by the search UI

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::export::SearchUiDocument;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the export-config command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Execute the export-config command
///
/// The document is always JSON; `--format` only changes the confirmation
/// printed after writing to a file.
pub fn execute(
    args: ExportArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = SearchUiDocument::assemble(services);
    let json = document.to_json_pretty()?;
    output::write_or_print(&json, args.output.as_deref())?;

    if let Some(path) = &args.output {
        match format {
            OutputFormat::Human => output::print_success(&format!(
                "Search UI configuration written to {}",
                colors::file_path(&path.display().to_string())
            )),
            OutputFormat::Json => output::print_output(
                &serde_json::json!({ "written": path.display().to_string() }),
                format,
            ),
        }
    }

    Ok(())
}
