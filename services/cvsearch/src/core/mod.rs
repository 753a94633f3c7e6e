//! Core domain logic (front-end agnostic)
//!
//! This module contains everything that does not depend on how the
//! configuration is surfaced (CLI today).
//!
//! # Architecture
//!
//! - **builder**: Search configuration from static declarations
//! - **schema**: Fields of the remote index, index-creation body
//! - **layout**: Widget placement with checked field references
//! - **export**: Document handed to the search UI framework
//! - **records**: Record cleaning before indexing
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod field_names;
pub mod layout;
pub mod records;
pub mod schema;
pub mod services;
pub mod xdg;

// Re-export key types for convenience
pub use builder::{ConfigBuilder, SearchConfiguration, SearchDeclaration};
pub use config::Config;
pub use error::{CvSearchError, Result};
pub use services::Services;
