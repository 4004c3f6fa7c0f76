//! `filecat` is a library and command-line tool that gathers files from a set
//! of root files and directories and concatenates their text into one output.
//!
//! A run has two stages:
//! 1.  **Gather**: normalize the roots, walk directories (pruning excluded
//!     directory names) and keep the files whose extension is selected.
//! 2.  **Concatenate**: for each candidate, apply the size cap and the binary
//!     check, read the text, normalize line endings, optionally clean `.cs`
//!     files with an external tool, and write it after a
//!     `============ <path> ============` header.
//!
//! Files that cannot be included are never fatal: they are reported as
//! [`SkipRecord`]s in the [`RunResult`].
//!
//! # Example: Library Usage
//!
//! ```
//! use filecat::{concatenate_to_string, gather, OptionsBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("b.txt"), "second").unwrap();
//! fs::write(temp_dir.path().join("a.txt"), "first\r\n").unwrap();
//! fs::write(temp_dir.path().join("image.png"), [0x89, b'P', 0, 0]).unwrap();
//!
//! let options = OptionsBuilder::new().extensions(["txt"]).build().unwrap();
//! let files = gather(&[temp_dir.path()], &options);
//! assert_eq!(files.len(), 2);
//!
//! let output = concatenate_to_string(&files, &options, None).unwrap();
//! assert_eq!(output.result.written, 2);
//! assert!(output.text.contains("a.txt ============\nfirst\n\n============"));
//! assert!(output.text.ends_with("second\n"));
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod settings;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, Options, OptionsBuilder, OutputDestination};
pub use core_types::{ConcatOutput, RunResult, SkipReason, SkipRecord};
pub use discovery::gather;
pub use output::{
    concatenate_to_file, concatenate_to_string, concatenate_to_writer, Concatenator, Progress,
};

use crate::errors::{io_error_with_path, Error, Result};
use crate::output::{dry_run::write_dry_run_output, writer::write_output};
use crate::processing::default_cleaner;
use crate::progress::{progress_callback, NoOpProgress, ProgressReporter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Gathers the candidates of `config` and lists them on `writer` instead of
/// concatenating them.
///
/// # Returns
/// The listed candidates. Returns `Err(Error::NoFilesFound)` if there are none.
pub fn dry_run(config: &Config, writer: &mut dyn Write) -> Result<Vec<PathBuf>> {
    let files = gather(&config.roots, &config.options);
    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    write_dry_run_output(writer, &files).map_err(|e| io_error_with_path(e, "<dry run output>"))?;
    Ok(files)
}

/// Executes a complete run: gather, then concatenate into the destination
/// of `config`.
///
/// This mirrors the command-line execution. A dry run prints the candidate
/// list on stdout and returns an empty [`RunResult`].
///
/// # Arguments
/// * `config` - The configuration for the entire run.
/// * `token` - Checked between files; once cancelled the run ends with
///   `Error::Interrupted` and leaves no output behind.
/// * `progress_reporter` - Receives `(done, total)` updates, if given.
///
/// # Errors
/// Returns `Err(Error::NoFilesFound)` if gathering yields no candidates, and
/// propagates output and cancellation errors. Per-file problems are reported
/// in the returned [`RunResult`] instead.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress_reporter: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunResult> {
    if config.dry_run {
        let mut stdout = io::stdout().lock();
        dry_run(config, &mut stdout)?;
        return Ok(RunResult::default());
    }

    let files = gather(&config.roots, &config.options);
    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    log::info!("Concatenating {} file(s)", files.len());

    let engine = if config.options.clean_flags().any() {
        Concatenator::with_cleaner(&config.options, default_cleaner(config.cleaner_path.as_deref()))
    } else {
        Concatenator::new(&config.options)
    };

    let reporter: Arc<dyn ProgressReporter> =
        progress_reporter.unwrap_or_else(|| Arc::new(NoOpProgress));
    reporter.set_message("Concatenating".to_string());
    let mut callback = progress_callback(reporter.as_ref(), token);
    let result = write_output(
        &engine,
        &files,
        &config.output_destination,
        Some(&mut callback),
    );
    reporter.finish();
    result
}
