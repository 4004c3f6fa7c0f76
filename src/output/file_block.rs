// src/output/file_block.rs

use crate::constants::HEADER_RULE;
use std::path::Path;

/// Formats the header line for a file: `============ <path> ============`.
pub fn format_header(path: &Path) -> String {
    format!("{} {} {}\n", HEADER_RULE, path.display(), HEADER_RULE)
}

/// Renders one file's block of output.
///
/// The block is the optional header followed by the content, with a `\n`
/// appended if the content does not already end with one. When
/// `separate` is set, a blank line is placed in front of the header to
/// separate it from the previous block.
pub(crate) fn render_file_block(
    path: &Path,
    content: &str,
    add_header: bool,
    separate: bool,
) -> String {
    let mut block = String::with_capacity(content.len() + 64);
    if add_header {
        if separate {
            block.push('\n');
        }
        block.push_str(&format_header(path));
    }
    block.push_str(content);
    if !content.ends_with('\n') {
        block.push('\n');
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header() {
        assert_eq!(
            format_header(Path::new("/base/src/main.rs")),
            "============ /base/src/main.rs ============\n"
        );
    }

    #[test]
    fn test_block_with_header_adds_missing_newline() {
        let block = render_file_block(Path::new("/p/a.txt"), "hello", true, false);
        assert_eq!(block, "============ /p/a.txt ============\nhello\n");
    }

    #[test]
    fn test_block_keeps_existing_newline() {
        let block = render_file_block(Path::new("/p/a.txt"), "hello\n", false, true);
        assert_eq!(block, "hello\n");
    }

    #[test]
    fn test_separated_block() {
        let block = render_file_block(Path::new("/p/b.txt"), "", true, true);
        assert_eq!(block, "\n============ /p/b.txt ============\n\n");
    }
}
