//! Provides a trait and implementations for transforming file content.

use std::fmt;

mod eol;

// Re-export the standalone functions
pub use eol::normalize_eol;

/// A trait for content transformation filters.
///
/// Filters are applied sequentially to the content of each text file.
pub trait ContentFilter: Send + Sync {
    /// Applies the filter to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

// Implement Debug manually for Box<dyn ContentFilter> by using the name method.
impl fmt::Debug for Box<dyn ContentFilter> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

/// Filter rewriting `\r\n` and lone `\r` line endings to `\n`.
#[derive(Debug)]
pub struct NormalizeEolFilter;

impl ContentFilter for NormalizeEolFilter {
    fn apply(&self, content: &str) -> String {
        eol::normalize_eol(content)
    }
    fn name(&self) -> &'static str {
        "NormalizeEolFilter"
    }
}
