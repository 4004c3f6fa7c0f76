// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads a whole file and decodes it as UTF-8, replacing invalid sequences
/// with U+FFFD. Only I/O can fail; decoding never does.
///
/// # Examples
/// ```
/// # use filecat::processing::read_lossy;
/// # use tempfile::tempdir;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let path = temp.path().join("latin1.txt");
/// std::fs::write(&path, b"caf\xe9")?;
/// assert_eq!(read_lossy(&path)?, "caf\u{FFFD}");
/// # Ok(())
/// # }
/// ```
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
