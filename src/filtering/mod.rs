// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! The gatherer uses the extension and exclusion checks; the concatenation
//! engine uses the size and binary checks. They are exposed publicly so they
//! can be used on their own.

mod exclusion;
mod extension;
mod size;
mod text_detection;

pub(crate) use extension::dotted_extension;

pub use exclusion::{has_excluded_component, is_excluded_dir_name};
pub use extension::passes_extension_filter;
pub use size::passes_size_filter;
pub use text_detection::{is_binary, is_binary_buffer, is_binary_with_sample};
