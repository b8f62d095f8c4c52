//! Culler CLI entrypoint for batch image review.

use std::io::{self, Write};
use std::process::ExitCode;

use culler::{CullError, CullerConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CullError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&config),
        OperationMode::Review => cli::review::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CullError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CullerConfig, CullError> {
    CullerConfig::load().map_err(|error| CullError::Configuration {
        message: error.to_string(),
    })
}
