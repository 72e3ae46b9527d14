//! Catalog listing operation.
//!
//! Prints the category, item, and characteristic catalogs to stdout in
//! the order the composer offers them, so users can script against the
//! available options without opening the TUI.

use std::io::{self, Write};

use morsel::catalog;

use super::CliError;

/// Prints the catalogs to stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] when writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    write_catalog(&mut stdout)
}

/// Writes the catalogs to the given writer.
fn write_catalog<W: Write>(writer: &mut W) -> Result<(), CliError> {
    for entry in catalog::categories() {
        writeln!(writer, "{}:", entry.name).map_err(|e| io_error(&e))?;
        for item in entry.items {
            let characteristics = catalog::characteristics_for(item).unwrap_or(&[]).join(", ");
            writeln!(writer, "  {item}: {characteristics}").map_err(|e| io_error(&e))?;
        }
        writeln!(writer).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to a [`CliError::Io`].
fn io_error(error: &io::Error) -> CliError {
    CliError::Io {
        message: error.to_string(),
    }
}
