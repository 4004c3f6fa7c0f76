// src/discovery/walker.rs

use crate::config::Options;
use crate::filtering::is_excluded_dir_name;
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Configures a `walkdir` walk below a directory root, based on `Options`.
///
/// - Non-recursive mode lists only the direct children (max depth 1).
/// - Directories whose basename is excluded are pruned: their subtree is
///   never read.
/// - Entries are sorted by file name so the order is deterministic.
/// - Symlinked directories are not descended.
pub(super) fn build_walker<'a>(
    root: &Path,
    options: &'a Options,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    if !options.recursive() {
        // Max depth 1 means only the immediate children of the root
        walker = walker.max_depth(1);
        debug!("Recursion disabled (max depth: 1).");
    } else {
        debug!("Recursion enabled (no max depth).");
    }

    walker.into_iter().filter_entry(move |entry| {
        if entry.file_type().is_dir()
            && is_excluded_dir_name(&entry.file_name().to_string_lossy(), options)
        {
            debug!("Pruning excluded directory {:?}", entry.path());
            return false;
        }
        true
    })
}
