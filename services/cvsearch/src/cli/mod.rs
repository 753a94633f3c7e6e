//! CLI adapter for cvsearch
//!
//! Exposes every configuration operation on the command line, for
//! inspection, scripting and for writing the document the search UI loads.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cvsearch - search interface configuration
///
/// Builds and checks the configuration of the transcription search page:
/// weighted search fields, result fields, facets, sort options and widget
/// layout.
#[derive(Parser, Debug)]
#[command(name = "cvsearch")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Search interface configuration builder", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file (overrides CVSEARCH_CONFIG and the XDG location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the built search configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// List the facet fields in render order
    #[command(name = "facet-fields")]
    FacetFields(commands::FacetArgs),

    /// List the options of the sort selector
    #[command(name = "sort-options")]
    SortOptions(commands::SortArgs),

    /// Write the document loaded by the search UI
    #[command(name = "export-config")]
    ExportConfig(commands::ExportArgs),

    /// Print the index-creation body for the search backend
    #[command(name = "index-mapping")]
    IndexMapping(commands::MappingArgs),

    /// Check the configuration and report the first problem found
    #[command(name = "validate-config")]
    ValidateConfig(commands::ValidateArgs),

    /// Fill defaults and drop incomplete records before indexing
    #[command(name = "clean-records")]
    CleanRecords(commands::CleanArgs),

    /// Show version and configuration summary
    Info(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  cvsearch completions bash > ~/.local/share/bash-completion/completions/cvsearch
    ///   zsh:   cvsearch completions zsh > ~/.zfunc/_cvsearch
    ///   fish:  cvsearch completions fish > ~/.config/fish/completions/cvsearch.fish
    Completions(commands::CompletionsArgs),
}

/// Install the tracing subscriber used by the binary.
///
/// Logs go to stderr so JSON output on stdout stays parseable. The filter
/// comes from `RUST_LOG` (default `cvsearch=warn`); setting
/// `CVSEARCH_LOG_FORMAT=json` switches to structured JSON lines.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvsearch=warn"));
    let json = std::env::var("CVSEARCH_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialise logging: {e}");
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Load configuration
    let config = Config::load_with_xdg(&xdg, cli.config.as_deref());

    // Validation reports problems itself instead of failing on startup
    if let Commands::ValidateConfig(args) = cli.command {
        return commands::validate::execute(args, config, cli.format);
    }

    let config = config?;
    config.log_config();

    // Build everything once; authoring mistakes abort here
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::FacetFields(args) => commands::facets::execute(args, &services, cli.format),
        Commands::SortOptions(args) => commands::sort::execute(args, &services, cli.format),
        Commands::ExportConfig(args) => commands::export::execute(args, &services, cli.format),
        Commands::IndexMapping(args) => commands::mapping::execute(args, &services, cli.format),
        Commands::CleanRecords(args) => commands::clean::execute(args, &services, cli.format),
        Commands::Info(args) => commands::info::execute(args, &services, cli.format),
        Commands::ValidateConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
