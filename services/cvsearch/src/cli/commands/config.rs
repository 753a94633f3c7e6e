//! Config command - show the built search configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::{ConnectorConfig, UiConfig};
use crate::core::services::Services;
use crate::core::SearchConfiguration;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show connector and UI settings
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub search: &'a SearchConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<&'a ConnectorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<&'a UiConfig>,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;
    let response = ConfigResponse {
        search: &services.search,
        connector: args.all.then_some(&config.connector),
        ui: args.all.then_some(&config.ui),
    };

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_human(response: &ConfigResponse<'_>) {
    let search = response.search;

    output::print_header("Search fields:");
    for field in search.search_fields() {
        println!(
            "  {} (weight {})",
            colors::field(&field.name),
            output::format_weight_colored(field.weight)
        );
    }

    output::print_header("Result fields:");
    println!("  {}", output::format_field_list(search.result_fields()));

    output::print_header("Facets:");
    for facet in search.facet_fields() {
        let mode = if search.is_disjunctive(&facet.name) {
            "disjunctive"
        } else {
            "conjunctive"
        };
        println!(
            "  {} [{}] {}",
            colors::field(&facet.name),
            facet.kind.as_str(),
            colors::dim(mode)
        );
    }

    output::print_header("Sort options:");
    for option in search.sort_options() {
        println!("  {} {}", option.name, colors::dim(&format!("({})", option.id)));
    }

    if let Some(connector) = response.connector {
        output::print_header("Connector:");
        println!("  host: {}", connector.host);
        println!("  index: {}", connector.index);
    }

    if let Some(ui) = response.ui {
        output::print_header("UI:");
        println!(
            "  always_search_on_initial_load: {}",
            ui.always_search_on_initial_load
        );
        println!(
            "  autocomplete_minimum_characters: {}",
            ui.autocomplete_minimum_characters
        );
        println!(
            "  autocomplete_suggestion_size: {}",
            ui.autocomplete_suggestion_size
        );
        println!("  debounce_length_ms: {}", ui.debounce_length_ms);
        println!("  sort_label: {}", ui.sort_label);
        println!(
            "  results_per_page_options: {:?}",
            ui.results_per_page_options
        );
    }
}
