// src/filtering/size.rs

use crate::config::Options;

/// Checks if a file of `len` bytes is within the configured per-file cap.
///
/// The cap is inclusive: a file of exactly `max_bytes_per_file` bytes passes.
#[inline]
pub fn passes_size_filter(len: u64, options: &Options) -> bool {
    len <= options.max_bytes_per_file()
}
