// src/cli.rs

use clap::{Parser, Subcommand};

/// Concatenates the text of selected files and directories into one output.
///
/// filecat walks the given files and directories, keeps the files that match the
/// extension filter (pruning excluded directory names), and writes their content
/// one after the other, each preceded by a `============ <path> ============`
/// header. Binary files, files above the size cap and unreadable files are
/// skipped and listed in a report on stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Files and directories to concatenate. Defaults to the roots of --profile.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    // --- Filtering Options ---
    /// Include only files with these extensions, comma-separated (case-insensitive, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXTS", action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Skip files whose path contains one of these names, comma-separated (repeatable).
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAMES", action = clap::ArgAction::Append)]
    pub exclude_dirs: Vec<String>,

    /// Only list the direct children of directory arguments.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Walk directory arguments recursively (the default; overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Include files detected as binary/non-UTF-8 (default is to skip them).
    #[arg(short = 'B', long, action = clap::ArgAction::SetTrue, overrides_with = "skip_binary")]
    pub include_binary: bool,

    /// Skip files detected as binary/non-UTF-8 (the default; overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "include_binary")]
    pub skip_binary: bool,

    /// Maximum size of a single file in megabytes (default 5). Larger files are skipped.
    #[arg(short = 'm', long, value_name = "MB")]
    pub max_mb: Option<f64>,

    /// Maximum size of a single file as a byte size (e.g., "512k", "2MiB").
    #[arg(short = 'M', long, value_name = "SIZE", conflicts_with = "max_mb")]
    pub max_size: Option<String>,

    // --- Content Processing Options ---
    /// Do not write a '============ <path> ============' header before each file.
    #[arg(short = 'H', long, action = clap::ArgAction::SetTrue, overrides_with = "headers")]
    pub no_headers: bool,

    /// Write a header before each file (the default; overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_headers")]
    pub headers: bool,

    /// Keep line endings as they are instead of converting them to '\n'.
    #[arg(short = 'k', long, action = clap::ArgAction::SetTrue, overrides_with = "normalize_eol")]
    pub keep_eol: bool,

    /// Convert line endings to '\n' (the default; overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "keep_eol")]
    pub normalize_eol: bool,

    /// Remove comments from .cs files with the external code cleaner.
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_cs_remove_comments")]
    pub cs_remove_comments: bool,

    /// Keep comments in .cs files (overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "cs_remove_comments")]
    pub no_cs_remove_comments: bool,

    /// Remove 'using' directives from .cs files with the external code cleaner.
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_cs_remove_usings")]
    pub cs_remove_usings: bool,

    /// Keep 'using' directives in .cs files (overrides a profile).
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "cs_remove_usings")]
    pub no_cs_remove_usings: bool,

    /// Path of the external code cleaner (an executable, or a .dll run with 'dotnet').
    #[arg(long, value_name = "PATH", env = "FILECAT_CLEANER")]
    pub cleaner: Option<String>,

    // --- Output Destination ---
    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    #[cfg(feature = "clipboard")]
    /// Copy output to the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue, conflicts_with = "output_file")]
    pub paste: bool,

    // --- Profiles ---
    /// Start from the settings stored in this profile.
    #[arg(short = 'P', long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Store the effective settings of this run under this profile name.
    #[arg(short = 'S', long, value_name = "NAME")]
    pub save_profile: Option<String>,

    /// Use this settings file instead of the one in the user configuration directory.
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<String>,

    // --- Execution Control ---
    /// Print the files that would be concatenated, without their content.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Do not print the report of written and skipped files.
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}

/// Subcommands besides the default concatenation.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage stored profiles.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

/// Profile management actions.
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommand {
    /// List stored profiles, marking the current one.
    List,
    /// Print the settings of a profile.
    Show {
        /// Profile name.
        name: String,
    },
    /// Delete a profile.
    Delete {
        /// Profile name.
        name: String,
    },
    /// Rename a profile.
    Rename {
        /// Current name.
        old: String,
        /// New name.
        new: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["filecat", "a", "b"]);
        assert_eq!(cli.paths, vec!["a", "b"]);
        assert!(cli.extensions.is_empty());
        assert!(!cli.no_recursive);
        assert!(cli.max_mb.is_none());
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn test_repeatable_csv_options() {
        let cli = Cli::parse_from(["filecat", "-e", "rs,toml", "-e", "md", "-x", "target", "src"]);
        assert_eq!(cli.extensions, vec!["rs,toml", "md"]);
        assert_eq!(cli.exclude_dirs, vec!["target"]);
        assert_eq!(cli.paths, vec!["src"]);
    }

    #[test]
    fn test_paired_flags_last_one_wins() {
        let cli = Cli::parse_from(["filecat", ".", "-n", "--recursive", "--headers", "-H"]);
        assert!(cli.recursive);
        assert!(!cli.no_recursive);
        assert!(cli.no_headers);
        assert!(!cli.headers);

        let cli = Cli::parse_from(["filecat", ".", "--skip-binary", "-B", "-k", "--normalize-eol"]);
        assert!(cli.include_binary);
        assert!(!cli.skip_binary);
        assert!(cli.normalize_eol);
        assert!(!cli.keep_eol);
    }

    #[test]
    fn test_max_mb_conflicts_with_max_size() {
        let result = Cli::try_parse_from(["filecat", ".", "-m", "1", "-M", "1MiB"]);
        assert!(result.is_err());
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_paste_conflicts_with_output() {
        let result = Cli::try_parse_from(["filecat", ".", "-o", "out.txt", "-p"]);
        assert!(result.is_err());
    }
}
