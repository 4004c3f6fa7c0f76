//! Defines core data structures used throughout the pipeline.
//!
//! These types form the result contract of the concatenation engine: which
//! files were skipped and why, how many were written, and the joined text for
//! the in-memory variant.

use crate::output::human_size;
use std::fmt;
use std::path::PathBuf;

/// Why a candidate file was left out of the output.
///
/// The `Display` implementation is the human-readable reason shown to users.
///
/// # Examples
///
/// ```
/// use filecat::core_types::SkipReason;
///
/// let reason = SkipReason::SizeExceeded { size: 6 * 1024 * 1024, limit_mb: 5.0 };
/// assert_eq!(reason.to_string(), "size 6.0 MB exceeds the 5 MB limit");
/// assert_eq!(SkipReason::Binary.to_string(), "binary or non-UTF-8 content");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The file is larger than the configured per-file cap.
    SizeExceeded {
        /// Size of the file in bytes.
        size: u64,
        /// The configured cap, in megabytes, as the user expressed it.
        limit_mb: f64,
    },
    /// The file's leading bytes contain a NUL byte or are not valid UTF-8.
    Binary,
    /// Stat-ing, reading or transforming the file failed.
    Io(String),
}

impl SkipReason {
    /// Returns `true` for the size-cap variant.
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, SkipReason::SizeExceeded { .. })
    }

    /// Returns `true` for the binary/non-UTF-8 variant.
    pub fn is_binary(&self) -> bool {
        matches!(self, SkipReason::Binary)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SizeExceeded { size, limit_mb } => {
                write!(
                    f,
                    "size {} exceeds the {} MB limit",
                    human_size(*size),
                    limit_mb
                )
            }
            SkipReason::Binary => f.write_str("binary or non-UTF-8 content"),
            SkipReason::Io(message) => write!(f, "error: {}", message),
        }
    }
}

/// A file that was not written, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipRecord {
    /// Absolute path of the skipped file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl SkipRecord {
    pub(crate) fn new(path: impl Into<PathBuf>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

/// Outcome of one concatenation run.
///
/// `skipped` is ordered like the input file list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    /// Number of files whose content was written to the sink.
    pub written: usize,
    /// Files left out, in processing order.
    pub skipped: Vec<SkipRecord>,
}

/// Result of the in-memory variant: the joined text plus the run result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConcatOutput {
    /// The concatenated output, byte-identical to what the file sink would write.
    pub text: String,
    /// Written count and skip records.
    pub result: RunResult,
}
