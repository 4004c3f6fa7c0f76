// src/processing/filters/eol.rs

/// Rewrites Windows (`\r\n`) and classic Mac (`\r`) line endings to `\n`.
///
/// `\r\n` is handled first so it collapses to a single `\n`.
///
/// # Examples
/// ```
/// use filecat::processing::filters::normalize_eol;
///
/// assert_eq!(normalize_eol("a\r\nb\rc\n"), "a\nb\nc\n");
/// assert_eq!(normalize_eol("\r\r\n"), "\n\n");
/// ```
pub fn normalize_eol(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_text_is_unchanged() {
        assert_eq!(normalize_eol("one\ntwo\n"), "one\ntwo\n");
    }

    #[test]
    fn test_trailing_cr() {
        assert_eq!(normalize_eol("end\r"), "end\n");
    }

    #[test]
    fn test_mixed_endings() {
        assert_eq!(normalize_eol("a\r\n\r\nb\r\rc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_eol(""), "");
    }
}
