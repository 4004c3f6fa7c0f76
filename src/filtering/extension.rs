// src/filtering/extension.rs

use crate::config::Options;
use std::path::Path;

/// Returns the lower-cased, dot-prefixed extension of `path`, if any.
///
/// Follows the usual "last suffix" rule: `archive.tar.gz` → `.gz`, and a
/// leading dot alone (`.gitignore`) is not an extension.
pub(crate) fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Checks if a path passes the include-extension filter of `options`.
///
/// An empty include set lets every file through. Otherwise the file must have
/// an extension whose lower-cased, dot-prefixed form is in the set.
///
/// # Examples
///
/// ```
/// use filecat::config::OptionsBuilder;
/// use filecat::filtering::passes_extension_filter;
/// use std::path::Path;
///
/// let all = OptionsBuilder::new().build().unwrap();
/// assert!(passes_extension_filter(Path::new("Makefile"), &all));
///
/// let rust_only = OptionsBuilder::new().extensions(["rs"]).build().unwrap();
/// assert!(passes_extension_filter(Path::new("src/MAIN.RS"), &rust_only));
/// assert!(!passes_extension_filter(Path::new("Cargo.toml"), &rust_only));
/// assert!(!passes_extension_filter(Path::new("Makefile"), &rust_only));
/// ```
pub fn passes_extension_filter(path: &Path, options: &Options) -> bool {
    let include = options.include_extensions();
    if include.is_empty() {
        return true;
    }
    match dotted_extension(path) {
        Some(ext) => include.contains(&ext),
        None => false, // No extension, but include list specified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsBuilder;

    fn options_with(exts: &[&str]) -> Options {
        OptionsBuilder::new()
            .extensions(exts.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a/b.RS")).as_deref(), Some(".rs"));
        assert_eq!(dotted_extension(Path::new("x.tar.gz")).as_deref(), Some(".gz"));
        assert_eq!(dotted_extension(Path::new(".gitignore")), None);
        assert_eq!(dotted_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn test_ext_no_filters() {
        let options = options_with(&[]);
        assert!(passes_extension_filter(Path::new("file.txt"), &options));
        assert!(passes_extension_filter(Path::new("file"), &options));
        assert!(passes_extension_filter(Path::new(".env"), &options));
    }

    #[test]
    fn test_ext_include() {
        let options = options_with(&["txt", ".md"]);
        assert!(passes_extension_filter(Path::new("file.txt"), &options));
        assert!(passes_extension_filter(Path::new("FILE.MD"), &options)); // Case insensitive
        assert!(!passes_extension_filter(Path::new("file.rs"), &options));
        assert!(!passes_extension_filter(Path::new("file"), &options)); // No extension fails include
    }

    #[test]
    fn test_ext_include_uses_last_suffix() {
        let options = options_with(&["gz"]);
        assert!(passes_extension_filter(Path::new("logs.tar.gz"), &options));
        let options = options_with(&["tar"]);
        assert!(!passes_extension_filter(Path::new("logs.tar.gz"), &options));
    }
}
