//! Facet fields command - list facet fields in render order

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the facet-fields command
#[derive(Args, Debug)]
pub struct FacetArgs {
    /// Only list disjunctive facets
    #[arg(long, short = 'd')]
    pub disjunctive: bool,
}

/// One facet in the listing
#[derive(Debug, Serialize)]
pub struct FacetEntry {
    pub field: String,
    pub kind: &'static str,
    pub disjunctive: bool,
}

/// Facets selected by `args`, in declaration order
pub fn list_facets(
    args: &FacetArgs,
    services: &Services,
) -> crate::core::error::Result<Vec<FacetEntry>> {
    let search = &services.search;
    let entries = services
        .builder()
        .get_facet_fields()?
        .into_iter()
        .map(|field| FacetEntry {
            disjunctive: search.is_disjunctive(&field),
            kind: search
                .facet_fields()
                .iter()
                .find(|f| f.name == field)
                .map_or("value", |f| f.kind.as_str()),
            field,
        })
        .filter(|entry| !args.disjunctive || entry.disjunctive)
        .collect();
    Ok(entries)
}

/// Execute the facet-fields command
pub fn execute(
    args: FacetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = list_facets(&args, services)?;

    match format {
        OutputFormat::Human => {
            for entry in &entries {
                let marker = if entry.disjunctive {
                    colors::dim(" (disjunctive)")
                } else {
                    colors::dim("")
                };
                println!("{}{}", colors::field(&entry.field), marker);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
