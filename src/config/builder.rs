// src/config/builder.rs

use super::{
    builder_logic::{apply_cli_options, determine_output_destination},
    parsing::{mb_to_bytes, normalize_dir_names, normalize_extensions, parse_csv_list, parse_max_size},
    validation::validate_builder_options,
    CleanFlags, Config, Options,
};
use crate::cli::Cli;
use crate::constants::{BYTES_PER_MB, DEFAULT_MAX_MB};
use crate::errors::{Error, Result};
use crate::settings::Profile;
use std::path::PathBuf;

/// How the size cap was expressed before validation.
#[derive(Debug, Clone)]
enum SizeLimit {
    Megabytes(f64),
    Bytes(u64),
    Text(String),
}

/// Builds an [`Options`] value, validating and normalizing its inputs.
///
/// Every setter is optional; unset values fall back to [`Options::default`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    recursive: Option<bool>,
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    ignore_binaries: Option<bool>,
    size_limit: Option<SizeLimit>,
    add_headers: Option<bool>,
    normalize_eol: Option<bool>,
    remove_comments: Option<bool>,
    remove_usings: Option<bool>,
}

impl OptionsBuilder {
    /// Creates a builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk directory roots recursively (default) or only their direct children.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Include only these extensions (any case, with or without the dot).
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(exts.into_iter().map(|e| e.as_ref().to_string()).collect());
        self
    }

    /// Same as [`extensions`](Self::extensions), from a comma-separated list.
    pub fn extensions_csv(self, csv: &str) -> Self {
        self.extensions(parse_csv_list(csv))
    }

    /// Prune directories with these basenames.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_dirs = Some(names.into_iter().map(|n| n.as_ref().to_string()).collect());
        self
    }

    /// Same as [`exclude_dirs`](Self::exclude_dirs), from a comma-separated list.
    pub fn exclude_dirs_csv(self, csv: &str) -> Self {
        self.exclude_dirs(parse_csv_list(csv))
    }

    /// Skip files classified as binary/non-UTF-8.
    pub fn ignore_binaries(mut self, ignore: bool) -> Self {
        self.ignore_binaries = Some(ignore);
        self
    }

    /// Per-file size cap in megabytes (1 MB = 1024 * 1024 bytes).
    pub fn max_mb(mut self, mb: f64) -> Self {
        self.size_limit = Some(SizeLimit::Megabytes(mb));
        self
    }

    /// Per-file size cap in bytes.
    pub fn max_bytes(mut self, bytes: u64) -> Self {
        self.size_limit = Some(SizeLimit::Bytes(bytes));
        self
    }

    /// Per-file size cap as a human-readable size (`"512k"`, `"2MiB"`).
    pub fn max_size(mut self, size: &str) -> Self {
        self.size_limit = Some(SizeLimit::Text(size.to_string()));
        self
    }

    /// Emit a header line with the file path before each file.
    pub fn add_headers(mut self, headers: bool) -> Self {
        self.add_headers = Some(headers);
        self
    }

    /// Rewrite `\r\n` and `\r` to `\n`.
    pub fn normalize_eol(mut self, normalize: bool) -> Self {
        self.normalize_eol = Some(normalize);
        self
    }

    /// Ask the external cleaner to strip comments from `.cs` files.
    pub fn remove_comments(mut self, remove: bool) -> Self {
        self.remove_comments = Some(remove);
        self
    }

    /// Ask the external cleaner to strip `using` directives from `.cs` files.
    pub fn remove_usings(mut self, remove: bool) -> Self {
        self.remove_usings = Some(remove);
        self
    }

    /// Validates the settings and produces the immutable [`Options`].
    ///
    /// # Errors
    /// Returns `Error::Config` if the size cap is not a positive size.
    pub fn build(self) -> Result<Options> {
        let defaults = Options::default();

        let (max_bytes_per_file, max_mb) = match self.size_limit {
            None => (defaults.max_bytes_per_file, DEFAULT_MAX_MB),
            Some(SizeLimit::Megabytes(mb)) => (mb_to_bytes(mb)?, mb),
            Some(SizeLimit::Bytes(bytes)) => (bytes, bytes as f64 / BYTES_PER_MB),
            Some(SizeLimit::Text(text)) => {
                let bytes = parse_max_size(&text)?;
                (bytes, bytes as f64 / BYTES_PER_MB)
            }
        };
        if max_bytes_per_file == 0 {
            return Err(Error::Config(
                "maximum size per file must be greater than zero".to_string(),
            ));
        }

        Ok(Options {
            recursive: self.recursive.unwrap_or(defaults.recursive),
            include_extensions: self
                .extensions
                .map(normalize_extensions)
                .unwrap_or_default(),
            exclude_dir_names: self
                .exclude_dirs
                .map(normalize_dir_names)
                .unwrap_or_default(),
            ignore_binaries: self.ignore_binaries.unwrap_or(defaults.ignore_binaries),
            max_bytes_per_file,
            max_mb,
            add_headers: self.add_headers.unwrap_or(defaults.add_headers),
            normalize_eol: self.normalize_eol.unwrap_or(defaults.normalize_eol),
            clean_flags: CleanFlags {
                remove_comments: self.remove_comments.unwrap_or(false),
                remove_usings: self.remove_usings.unwrap_or(false),
            },
        })
    }
}

/// A builder for creating a [`Config`] programmatically or from the CLI.
///
/// # Examples
///
/// ```
/// use filecat::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root("src")
///     .extensions(["rs"])
///     .output_file("bundle.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.roots.len(), 1);
/// assert!(config.options.include_extensions().contains(".rs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(super) roots: Vec<String>,
    pub(super) options: OptionsBuilder,
    pub(super) output_file: Option<String>,
    #[cfg(feature = "clipboard")]
    pub(super) paste: Option<bool>,
    pub(super) cleaner_path: Option<String>,
    pub(super) dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed CLI arguments, optionally layered over a stored profile.
    ///
    /// The profile provides the starting point (roots, options, output path);
    /// arguments given on the command line then take precedence.
    pub fn from_cli(cli: Cli, profile: Option<&Profile>) -> Self {
        let base = match profile {
            Some(p) => Self::from_profile(p),
            None => Self::new(),
        };
        apply_cli_options(base, cli)
    }

    /// Creates a builder holding the checked roots, options and output path of `profile`.
    pub fn from_profile(profile: &Profile) -> Self {
        let mut builder = Self::new()
            .roots(profile.checked_roots())
            .options(profile.options_builder());
        if let Some(out) = &profile.output_path {
            if !out.trim().is_empty() {
                builder = builder.output_file(out.trim());
            }
        }
        builder
    }

    /// Adds one root file or directory.
    pub fn root(mut self, path: impl Into<String>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Replaces the root list.
    pub fn roots<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the whole options builder.
    pub fn options(mut self, options: OptionsBuilder) -> Self {
        self.options = options;
        self
    }

    /// Shorthand for `OptionsBuilder::extensions`.
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options = self.options.extensions(exts);
        self
    }

    /// Shorthand for `OptionsBuilder::exclude_dirs`.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options = self.options.exclude_dirs(names);
        self
    }

    /// Write the output to this file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[cfg(feature = "clipboard")]
    /// Copy the output to the clipboard instead of writing it.
    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = Some(paste);
        self
    }

    /// Use this executable (or `.dll`) as the external code cleaner.
    pub fn cleaner_path(mut self, path: impl Into<String>) -> Self {
        self.cleaner_path = Some(path.into());
        self
    }

    /// List candidates instead of concatenating.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the builder and constructs the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` on conflicting options, a missing root list or an
    /// invalid size cap.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let output_destination = determine_output_destination(
            self.output_file,
            #[cfg(feature = "clipboard")]
            self.paste,
        );

        Ok(Config {
            roots: self.roots.into_iter().map(PathBuf::from).collect(),
            options: self.options.build()?,
            output_destination,
            cleaner_path: self.cleaner_path.map(PathBuf::from),
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}
