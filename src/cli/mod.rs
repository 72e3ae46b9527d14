//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`catalog_listing`]: Print the category and characteristic catalogs
//! - [`compose`]: Interactive review composer TUI

use thiserror::Error;

pub mod catalog_listing;
pub mod compose;

/// Errors surfaced by the CLI entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CliError {
    /// Configuration loading or argument parsing failed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Detail from the configuration loader.
        message: String,
    },

    /// The terminal user interface failed to initialise or run.
    #[error("TUI error: {message}")]
    Terminal {
        /// Detail from the TUI framework.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Operating system error detail.
        message: String,
    },
}
