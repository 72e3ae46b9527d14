//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges
//! values from command-line arguments, environment variables, and
//! configuration files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence
//! (lowest to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.morsel.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `MORSEL`-prefixed variables
//! 4. **Command-line arguments** – `--list-catalog`, `--no-clipboard`,
//!    `--telemetry`
//!
//! # Configuration File
//!
//! Place `.morsel.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! list_catalog = false
//! no_clipboard = true
//! telemetry = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive review composer TUI (default).
    Compose,
    /// Print the catalogs to stdout and exit.
    CatalogListing,
}

/// Application configuration supporting CLI, environment, and file
/// sources.
///
/// # Example
///
/// ```no_run
/// use morsel::MorselConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MorselConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MORSEL",
    discovery(
        dotfile_name = ".morsel.toml",
        config_file_name = "morsel.toml",
        app_name = "morsel"
    )
)]
pub struct MorselConfig {
    /// Prints the category, item, and characteristic catalogs to
    /// stdout and exits without starting the composer.
    ///
    /// Can be provided via:
    /// - CLI: `--list-catalog` / `-l`
    /// - Config file: `list_catalog = true`
    ///
    /// Note: Environment variable `MORSEL_LIST_CATALOG` is not
    /// supported because `ortho_config` does not load boolean values
    /// from the environment.
    #[ortho_config(cli_short = 'l')]
    pub list_catalog: bool,

    /// Disables OSC 52 clipboard writes.
    ///
    /// Some terminals mishandle OSC 52 sequences; with this set, copy
    /// attempts surface the failure indicator instead of emitting the
    /// escape sequence.
    ///
    /// Can be provided via:
    /// - CLI: `--no-clipboard`
    /// - Config file: `no_clipboard = true`
    pub no_clipboard: bool,

    /// Streams telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    pub telemetry: bool,
}

impl MorselConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `CatalogListing` when catalog listing was requested,
    /// `Compose` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.list_catalog {
            OperationMode::CatalogListing
        } else {
            OperationMode::Compose
        }
    }
}

#[cfg(test)]
mod tests;
