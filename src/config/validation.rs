// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::{Error, Result};

/// Validates combinations of options that clap cannot express, or that only
/// arise when a profile and command-line arguments are merged.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    #[cfg(feature = "clipboard")]
    {
        if builder.output_file.is_some() && builder.paste.unwrap_or(false) {
            return Err(Error::Config(
                "Cannot use --output <FILE> (-o) and --paste (-p) simultaneously.".to_string(),
            ));
        }
    }
    if builder.roots.iter().all(|r| r.trim().is_empty()) {
        return Err(Error::Config(
            "No input paths given (pass PATHS or use --profile).".to_string(),
        ));
    }
    Ok(())
}
