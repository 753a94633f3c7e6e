//! Index mapping command - print the index-creation body

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the index-mapping command
#[derive(Args, Debug)]
pub struct MappingArgs {}

/// Execute the index-mapping command
pub fn execute(
    _args: MappingArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = services.schema.mapping_body(&services.config.index);

    match format {
        OutputFormat::Human => {
            output::print_header(&format!("Index {}", services.config.connector.index));
            println!(
                "  shards: {}, replicas: {}",
                colors::number(&services.config.index.number_of_shards.to_string()),
                colors::number(&services.config.index.number_of_replicas.to_string())
            );
            for field in services.schema.fields() {
                let mut notes = Vec::new();
                if field.required {
                    notes.push("required".to_string());
                }
                if let Some(default) = &field.default {
                    notes.push(format!("default {default:?}"));
                }
                println!(
                    "  {}: {} {}",
                    colors::field(&field.name),
                    field.field_type.as_str(),
                    colors::dim(&notes.join(", "))
                );
            }
        }
        OutputFormat::Json => output::print_output(&body, format),
    }

    Ok(())
}
