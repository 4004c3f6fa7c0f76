// src/config/parsing.rs

use crate::constants::BYTES_PER_MB;
use crate::errors::{Error, Result};
use byte_unit::Byte;
use std::collections::BTreeSet;
use std::str::FromStr; // Import the FromStr trait

/// Splits a comma-separated list, trimming entries and dropping empty ones.
///
/// # Examples
/// ```
/// use filecat::config::parse_csv_list;
///
/// assert_eq!(parse_csv_list(" rs, toml ,,md "), vec!["rs", "toml", "md"]);
/// assert!(parse_csv_list("   ").is_empty());
/// ```
pub fn parse_csv_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes extensions to lower case with a leading dot, dropping blanks.
///
/// # Examples
/// ```
/// use filecat::config::normalize_extensions;
///
/// let exts = normalize_extensions(["RS", ".Toml", " md ", ""]);
/// assert_eq!(
///     exts.into_iter().collect::<Vec<_>>(),
///     vec![".md", ".rs", ".toml"]
/// );
/// ```
pub fn normalize_extensions<I, S>(exts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .filter_map(|e| {
            let e = e.as_ref().trim().to_lowercase();
            if e.is_empty() {
                None
            } else if e.starts_with('.') {
                Some(e)
            } else {
                Some(format!(".{}", e))
            }
        })
        .collect()
}

/// Normalizes directory names: trimmed, blanks dropped, case preserved.
pub(crate) fn normalize_dir_names<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Parses a human-readable size string (`"512k"`, `"2MiB"`, `"1024"`) into bytes.
pub(crate) fn parse_max_size(max_size_str: &str) -> Result<u64> {
    let bytes = Byte::from_str(max_size_str)
        .map_err(|e| Error::Config(format!("Invalid size format '{}': {}", max_size_str, e)))?
        .as_u128();
    u64::try_from(bytes)
        .map_err(|_| Error::Config(format!("Size '{}' is too large", max_size_str)))
}

/// Converts a megabyte quantity into the byte cap used by the engine.
pub(crate) fn mb_to_bytes(mb: f64) -> Result<u64> {
    if !mb.is_finite() || mb <= 0.0 {
        return Err(Error::Config(format!(
            "maximum size must be a positive number of megabytes, got {}",
            mb
        )));
    }
    let bytes = (mb * BYTES_PER_MB) as u64;
    if bytes == 0 {
        return Err(Error::Config(format!(
            "maximum size of {} MB is smaller than one byte",
            mb
        )));
    }
    Ok(bytes)
}
