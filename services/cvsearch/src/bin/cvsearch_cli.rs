//! cvsearch CLI - search interface configuration builder
//!
//! Builds, checks and exports the configuration of the transcription
//! search page.
//!
//! # Examples
//!
//! ```bash
//! # Show the built configuration
//! cvsearch show-config
//!
//! # Write the document the search UI loads
//! cvsearch export-config --output search-ui.json
//!
//! # Print the index-creation body
//! cvsearch index-mapping --format json
//!
//! # Clean records before indexing
//! cvsearch clean-records transcriptions.json -o cleaned.json
//! ```

use clap::Parser;
use cvsearch::cli::{init_tracing, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("cvsearch {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
