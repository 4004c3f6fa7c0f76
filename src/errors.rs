//! Defines application-specific error types.
//!
//! Per-file problems never show up here: they are reported as
//! [`SkipRecord`](crate::core_types::SkipRecord)s by the concatenation engine.
//! This enum only covers failures that end a whole run.

use thiserror::Error;

/// Errors that abort a `filecat` run.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while opening or writing the output, or reading the settings file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error related to clipboard operations (copying).
    #[error("Clipboard error: {0}")]
    Clipboard(String), // arboard::Error doesn't implement std::error::Error directly

    /// Error reading, parsing or updating the settings store.
    #[error("Settings error: {0}")]
    Settings(String),

    /// The run was cancelled through the progress callback (e.g., Ctrl+C).
    #[error("Operation cancelled by user")]
    Interrupted,

    /// No candidate files matched the given roots and filters.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
