// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::cli::Cli;
use crate::config::OutputDestination;
use std::path::PathBuf;

/// Layers parsed CLI arguments over `base`.
///
/// Value options replace what `base` holds only when given. Each boolean option
/// has a positive and a negative flag; whichever is present wins, and with
/// neither the value from `base` is kept.
pub(super) fn apply_cli_options(mut builder: ConfigBuilder, cli: Cli) -> ConfigBuilder {
    if !cli.paths.is_empty() {
        builder = builder.roots(cli.paths);
    }

    let mut options = builder.options.clone();
    if !cli.extensions.is_empty() {
        options = options.extensions_csv(&cli.extensions.join(","));
    }
    if !cli.exclude_dirs.is_empty() {
        options = options.exclude_dirs_csv(&cli.exclude_dirs.join(","));
    }
    if let Some(recursive) = paired_flag(cli.recursive, cli.no_recursive) {
        options = options.recursive(recursive);
    }
    if let Some(ignore) = paired_flag(cli.skip_binary, cli.include_binary) {
        options = options.ignore_binaries(ignore);
    }
    if let Some(headers) = paired_flag(cli.headers, cli.no_headers) {
        options = options.add_headers(headers);
    }
    if let Some(normalize) = paired_flag(cli.normalize_eol, cli.keep_eol) {
        options = options.normalize_eol(normalize);
    }
    if let Some(mb) = cli.max_mb {
        options = options.max_mb(mb);
    }
    if let Some(size) = cli.max_size.as_deref() {
        options = options.max_size(size);
    }
    if let Some(remove) = paired_flag(cli.cs_remove_comments, cli.no_cs_remove_comments) {
        options = options.remove_comments(remove);
    }
    if let Some(remove) = paired_flag(cli.cs_remove_usings, cli.no_cs_remove_usings) {
        options = options.remove_usings(remove);
    }
    builder = builder.options(options);

    if let Some(out) = cli.output_file {
        builder = builder.output_file(out);
    }
    #[cfg(feature = "clipboard")]
    if cli.paste {
        // A clipboard run never writes the profile's output file.
        builder.output_file = None;
        builder = builder.paste(true);
    }
    if let Some(cleaner) = cli.cleaner {
        builder = builder.cleaner_path(cleaner);
    }
    if cli.dry_run {
        builder = builder.dry_run(true);
    }
    builder
}

/// Resolves a `--x` / `--no-x` pair. clap keeps at most one of them set.
fn paired_flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(
    output_file: Option<String>,
    #[cfg(feature = "clipboard")] paste: Option<bool>,
) -> OutputDestination {
    if let Some(file_path_str) = output_file {
        OutputDestination::File(PathBuf::from(file_path_str))
    } else {
        #[cfg(feature = "clipboard")]
        if paste.unwrap_or(false) {
            OutputDestination::Clipboard
        } else {
            OutputDestination::Stdout
        }
        #[cfg(not(feature = "clipboard"))]
        {
            OutputDestination::Stdout
        }
    }
}
