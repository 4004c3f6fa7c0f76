//! The `filecat` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `filecat` library.
//!
//! # Example
//!
//! ```
//! use filecat::prelude::*;
//! # fn main() -> Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("notes.md"), "# Notes").unwrap();
//!
//! let options = OptionsBuilder::new().extensions(["md"]).build()?;
//! let files = gather(&[dir.path()], &options);
//! let output = Concatenator::new(&options).to_string(&files, None)?;
//! assert_eq!(output.result.written, 1);
//! assert!(output.text.ends_with("# Notes\n"));
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{
    CleanFlags, Config, ConfigBuilder, Options, OptionsBuilder, OutputDestination,
};
pub use crate::core_types::{ConcatOutput, RunResult, SkipReason, SkipRecord};
pub use crate::discovery::{gather, normalize_path};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_binary, passes_extension_filter, passes_size_filter};
pub use crate::output::{Concatenator, Progress};
pub use crate::processing::{ContentTransformer, ExternalCleaner, NoCleaner, TextCleaner};
pub use crate::settings::{JsonFileStore, Profile, ProfileItem, SettingsStore};
pub use crate::{dry_run, run};
