//! cvsearch - search interface configuration for the Common Voice
//! transcription index
//!
//! Derives the configuration a pre-built search UI framework needs
//! (weighted search fields, result projections, facets, sort options and
//! widget layout) from static declarations, validating every field
//! reference at startup.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - builder (declarations -> search configuration)
//!   - schema, layout, export, records
//!   - config, error, xdg, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - one command per operation, human or JSON output

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::builder::{ConfigBuilder, SearchConfiguration, SearchDeclaration, SortOption};
pub use core::config::Config;
pub use core::error::{CvSearchError, Result};
pub use core::services::Services;
