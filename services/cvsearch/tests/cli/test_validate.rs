//! Tests for the validate-config command

use cvsearch::cli::commands::validate::{execute, ValidateArgs};
use cvsearch::cli::OutputFormat;
use cvsearch::core::config::Config;
use cvsearch::CvSearchError;

#[test]
fn test_valid_default_config() {
    let result = execute(ValidateArgs {}, Ok(Config::default()), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_invalid_declaration_reported() {
    let mut config = Config::default();
    config.declaration.disjunctive_facets.push("region".to_string());

    let err = execute(ValidateArgs {}, Ok(config), OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("disjunctive facet 'region'"));
}

#[test]
fn test_load_error_reported() {
    let load = Err(CvSearchError::config("Failed to read config file: missing"));
    let err = execute(ValidateArgs {}, load, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
