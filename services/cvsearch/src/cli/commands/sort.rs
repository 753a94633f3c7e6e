//! Sort options command - list the sort selector entries

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the sort-options command
#[derive(Args, Debug)]
pub struct SortArgs {}

/// Execute the sort-options command
pub fn execute(
    _args: SortArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = services.builder().build_sort_options_from_config()?;

    match format {
        OutputFormat::Human => {
            output::print_header(&services.config.ui.sort_label);
            for (i, option) in options.iter().enumerate() {
                let keys = option
                    .value
                    .iter()
                    .map(|k| format!("{} {}", k.field, k.direction.as_str()))
                    .collect::<Vec<_>>();
                println!(
                    "  {}. {} {}",
                    colors::number(&(i + 1).to_string()),
                    option.name,
                    colors::dim(&format!("[{}]", output::format_field_list(&keys)))
                );
            }
        }
        OutputFormat::Json => output::print_output(&options, format),
    }

    Ok(())
}
