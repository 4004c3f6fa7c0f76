// src/filtering/text_detection.rs

use crate::constants::BINARY_SAMPLE_BYTES;
use std::{fs::File, io::Read, path::Path, str};


/// Checks if a byte buffer is binary: it contains a NUL byte or is not valid UTF-8.
///
/// # Examples
/// ```
/// use filecat::filtering::is_binary_buffer;
///
/// assert!(!is_binary_buffer(b"This is valid UTF-8 text."));
/// assert!(is_binary_buffer(b"This contains a null byte \0."));
/// assert!(is_binary_buffer(&[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f])); // "Hell\x80o"
/// ```
pub fn is_binary_buffer(buffer: &[u8]) -> bool {
    buffer.contains(&0) || str::from_utf8(buffer).is_err()
}

/// Checks if a file is binary by sampling up to `sample_bytes` leading bytes.
///
/// The sample is decoded strictly: a multi-byte sequence cut off by the end
/// of the sample counts as invalid UTF-8.
///
/// Any I/O error (missing file, permission denied, ...) classifies the file as
/// binary so that unreadable content never ends up in text output.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use filecat::filtering::is_binary_with_sample;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let text_file = temp.path().join("text.txt");
/// let binary_file = temp.path().join("binary.bin");
///
/// fs::write(&text_file, "Hello, world!")?;
/// assert!(!is_binary_with_sample(&text_file, 8192));
///
/// fs::write(&binary_file, b"binary\0data")?;
/// assert!(is_binary_with_sample(&binary_file, 8192));
/// # Ok(())
/// # }
/// ```
pub fn is_binary_with_sample(path: &Path, sample_bytes: usize) -> bool {
    match read_sample(path, sample_bytes) {
        Ok(sample) => is_binary_buffer(&sample),
        Err(e) => {
            log::debug!(
                "Could not sample '{}', treating it as binary: {}",
                path.display(),
                e
            );
            true
        }
    }
}

/// [`is_binary_with_sample`] with the default 8192-byte sample.
pub fn is_binary(path: &Path) -> bool {
    is_binary_with_sample(path, BINARY_SAMPLE_BYTES)
}

fn read_sample(path: &Path, sample_bytes: usize) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(sample_bytes);
    file.take(sample_bytes as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
