// src/output/mod.rs

//! Produces the concatenated output and the run report.
//!
//! [`Concatenator`] is the engine. The free functions below are shortcuts
//! that build one from `Options` with the default cleaner lookup.

use crate::config::Options;
use crate::core_types::{ConcatOutput, RunResult};
use crate::errors::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod dry_run;
mod engine;
pub mod file_block;
pub mod summary;
pub mod writer; // Manages the output destination

pub use engine::{Concatenator, Progress};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary steps and one decimal, up to terabytes.
///
/// # Examples
/// ```
/// use filecat::output::human_size;
///
/// assert_eq!(human_size(0), "0.0 B");
/// assert_eq!(human_size(1536), "1.5 KB");
/// assert_eq!(human_size(6 * 1024 * 1024), "6.0 MB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, SIZE_UNITS[unit])
}

/// Concatenates `files` into `writer`. See [`Concatenator`].
pub fn concatenate_to_writer<W: Write + ?Sized>(
    files: &[PathBuf],
    options: &Options,
    writer: &mut W,
    progress: Option<Progress<'_>>,
) -> Result<RunResult> {
    Concatenator::new(options).to_writer(files, writer, progress)
}

/// Concatenates `files` into the file at `out_path`. See [`Concatenator::to_file`].
pub fn concatenate_to_file(
    files: &[PathBuf],
    options: &Options,
    out_path: &Path,
    progress: Option<Progress<'_>>,
) -> Result<RunResult> {
    Concatenator::new(options).to_file(files, out_path, progress)
}

/// Concatenates `files` in memory. See [`Concatenator::to_string`].
pub fn concatenate_to_string(
    files: &[PathBuf],
    options: &Options,
    progress: Option<Progress<'_>>,
) -> Result<ConcatOutput> {
    Concatenator::new(options).to_string(files, progress)
}
