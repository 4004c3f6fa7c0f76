// src/filtering/exclusion.rs

use crate::config::Options;
use std::path::{Component, Path};

/// Checks if a directory basename is in the exclude set.
#[inline]
pub fn is_excluded_dir_name(name: &str, options: &Options) -> bool {
    options.exclude_dir_names().contains(name)
}

/// Checks if any component of `path` is an excluded name.
///
/// Every normal component is inspected: the directories above a walked root,
/// the directories below it and the file name itself.
///
/// # Examples
///
/// ```
/// use filecat::config::OptionsBuilder;
/// use filecat::filtering::has_excluded_component;
/// use std::path::Path;
///
/// let options = OptionsBuilder::new().exclude_dirs(["node_modules"]).build().unwrap();
/// assert!(has_excluded_component(Path::new("/web/node_modules/lib/index.js"), &options));
/// assert!(!has_excluded_component(Path::new("/web/src/index.js"), &options));
/// ```
pub fn has_excluded_component(path: &Path, options: &Options) -> bool {
    if options.exclude_dir_names().is_empty() {
        return false;
    }
    path.components().any(|component| match component {
        Component::Normal(segment) => is_excluded_dir_name(&segment.to_string_lossy(), options),
        _ => false,
    })
}
