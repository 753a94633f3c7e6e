//! Error types and error handling for cvsearch.
//!
//! Authoring mistakes in the search declaration or layout surface as
//! `ConfigurationError` and abort startup. The remaining variants cover
//! the outer surfaces (config files, record files).

use thiserror::Error;

/// Result type alias for cvsearch operations
pub type Result<T> = std::result::Result<T, CvSearchError>;

/// Main error type for cvsearch
#[derive(Error, Debug)]
pub enum CvSearchError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl CvSearchError {
    /// Shorthand for building a `ConfigurationError`
    pub fn config(message: impl Into<String>) -> Self {
        CvSearchError::ConfigurationError(message.into())
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error comes from a malformed declaration or config file
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CvSearchError::ConfigurationError(_) | CvSearchError::TomlError(_)
        )
    }
}
