//! Defines the run configuration: the immutable [`Options`] bundle consumed by
//! the engine, and the [`Config`] that the command-line caller builds around it.
//!
//! `Options` is a value object. It is constructed once per run through
//! [`OptionsBuilder`], which normalizes extensions and enforces a positive
//! per-file size cap, and is only ever read afterwards.

use crate::constants::{BYTES_PER_MB, CLEANABLE_EXTENSION, DEFAULT_MAX_MB};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use builder::{ConfigBuilder, OptionsBuilder};
mod builder;
mod builder_logic;
pub(crate) mod parsing;
mod validation;

pub use parsing::{normalize_extensions, parse_csv_list};

/// Flags selecting which transformations the external code cleaner applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanFlags {
    /// Strip comments and documentation comments.
    pub remove_comments: bool,
    /// Strip `using` directives.
    pub remove_usings: bool,
}

impl CleanFlags {
    /// Returns `true` if at least one cleaning pass is requested.
    pub fn any(&self) -> bool {
        self.remove_comments || self.remove_usings
    }
}

/// Immutable options for one gather + concatenate run.
///
/// # Examples
///
/// ```
/// use filecat::config::OptionsBuilder;
///
/// let options = OptionsBuilder::new()
///     .extensions(["RS", ".toml"])
///     .exclude_dirs(["target"])
///     .max_mb(1.0)
///     .build()
///     .unwrap();
///
/// assert!(options.include_extensions().contains(".rs"));
/// assert!(options.include_extensions().contains(".toml"));
/// assert_eq!(options.max_bytes_per_file(), 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub(crate) recursive: bool,
    pub(crate) include_extensions: BTreeSet<String>,
    pub(crate) exclude_dir_names: BTreeSet<String>,
    pub(crate) ignore_binaries: bool,
    pub(crate) max_bytes_per_file: u64,
    pub(crate) max_mb: f64,
    pub(crate) add_headers: bool,
    pub(crate) normalize_eol: bool,
    pub(crate) clean_flags: CleanFlags,
}

impl Options {
    /// Whether directory roots are walked recursively or only one level deep.
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Lower-cased, dot-prefixed extensions. Empty means every extension.
    pub fn include_extensions(&self) -> &BTreeSet<String> {
        &self.include_extensions
    }

    /// Directory basenames pruned anywhere inside a walked tree.
    pub fn exclude_dir_names(&self) -> &BTreeSet<String> {
        &self.exclude_dir_names
    }

    /// Whether files classified as binary/non-UTF-8 are skipped.
    pub fn ignore_binaries(&self) -> bool {
        self.ignore_binaries
    }

    /// Files strictly larger than this are skipped. Always greater than zero.
    pub fn max_bytes_per_file(&self) -> u64 {
        self.max_bytes_per_file
    }

    /// The size cap as the user expressed it, in megabytes.
    pub fn max_mb(&self) -> f64 {
        self.max_mb
    }

    /// Whether a header line with the file path precedes each file.
    pub fn add_headers(&self) -> bool {
        self.add_headers
    }

    /// Whether `\r\n` and `\r` are rewritten to `\n`.
    pub fn normalize_eol(&self) -> bool {
        self.normalize_eol
    }

    /// Flags gating the external cleaner for `.cs` files.
    pub fn clean_flags(&self) -> CleanFlags {
        self.clean_flags
    }

    /// Returns `true` if the external cleaner should run for `path`.
    pub fn wants_cleaning(&self, path: &Path) -> bool {
        self.clean_flags.any()
            && crate::filtering::dotted_extension(path).as_deref() == Some(CLEANABLE_EXTENSION)
    }
}

impl Default for Options {
    /// Mirrors the defaults of a fresh profile: recursive, headers, binary skip
    /// and EOL normalization enabled, 5 MB cap, no filters.
    fn default() -> Self {
        Self {
            recursive: true,
            include_extensions: BTreeSet::new(),
            exclude_dir_names: BTreeSet::new(),
            ignore_binaries: true,
            max_bytes_per_file: (DEFAULT_MAX_MB * BYTES_PER_MB) as u64,
            max_mb: DEFAULT_MAX_MB,
            add_headers: true,
            normalize_eol: true,
            clean_flags: CleanFlags::default(),
        }
    }
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
    #[cfg(feature = "clipboard")]
    /// Copy the output to the system clipboard (requires the `clipboard` feature).
    Clipboard,
}

/// Everything the command-line caller needs for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root files and directories, as given (normalized by the gatherer).
    pub roots: Vec<PathBuf>,
    /// Options handed to the gatherer and the engine.
    pub options: Options,
    /// Specifies where the final output should be written.
    pub output_destination: OutputDestination,
    /// Explicit path of the external cleaner, overriding discovery.
    pub cleaner_path: Option<PathBuf>,
    /// If `true`, list the candidate files instead of concatenating them.
    pub dry_run: bool,
}

impl Config {
    /// Creates a default `Config` rooted at `.` for tests and doc tests.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            options: Options::default(),
            output_destination: OutputDestination::Stdout,
            cleaner_path: None,
            dry_run: false,
        }
    }
}
