//! Morsel CLI entrypoint for the restaurant review composer.

use std::io::{self, Write};
use std::process::ExitCode;

use morsel::{MorselConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

use cli::CliError;

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

async fn run() -> Result<(), CliError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::CatalogListing => cli::catalog_listing::run(),
        OperationMode::Compose => cli::compose::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CliError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MorselConfig, CliError> {
    MorselConfig::load().map_err(|error| CliError::Configuration {
        message: error.to_string(),
    })
}
