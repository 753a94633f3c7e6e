//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod clean;
pub mod completions;
pub mod config;
pub mod export;
pub mod facets;
pub mod info;
pub mod mapping;
pub mod sort;
pub mod validate;

// Re-export argument types for use in mod.rs
pub use clean::CleanArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use facets::FacetArgs;
pub use info::InfoArgs;
pub use mapping::MappingArgs;
pub use sort::SortArgs;
pub use validate::ValidateArgs;
