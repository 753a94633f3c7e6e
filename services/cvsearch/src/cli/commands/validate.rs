//! Validate command - check the configuration without using it

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::Result as CoreResult;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Validation report
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execute the validate-config command
///
/// Takes the outcome of config loading so file and environment errors are
/// reported the same way as declaration errors. Prints the outcome and
/// returns the error when the configuration is invalid, so the process
/// exits non-zero.
pub fn execute(
    _args: ValidateArgs,
    config: CoreResult<Config>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = config.and_then(Services::new);
    let response = ValidateResponse {
        valid: result.is_ok(),
        error: result.as_ref().err().map(|e| e.message()),
    };

    match format {
        OutputFormat::Human => match &response.error {
            None => output::print_success("Configuration is valid"),
            Some(message) => output::print_error(message),
        },
        OutputFormat::Json => output::print_output(&response, format),
    }

    result.map(|_| ()).map_err(Into::into)
}
