//! Info command - show version and configuration summary

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Summary response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub host: String,
    pub index: String,
    pub search_fields: usize,
    pub facets: usize,
    pub sort_options: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

/// Execute the info command
pub fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = if args.detailed {
        let xdg = crate::core::xdg::XdgDirs::new();
        Some(xdg.config_file().to_string_lossy().into_owned())
    } else {
        None
    };

    let info = InfoResponse {
        name: "cvsearch".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        host: services.config.connector.host.clone(),
        index: services.config.connector.index.clone(),
        search_fields: services.search.search_fields().len(),
        facets: services.search.facet_fields().len(),
        sort_options: services.search.sort_options().len(),
        config_file,
    };

    match format {
        OutputFormat::Human => {
            println!("cvsearch {}", info.version);
            println!("Backend: {}/{}", info.host, info.index);
            println!("Search fields: {}", info.search_fields);
            println!("Facets: {}", info.facets);
            println!("Sort options: {}", info.sort_options);
            if let Some(path) = &info.config_file {
                println!("Config file: {path}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
