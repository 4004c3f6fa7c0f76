// src/discovery/entry_processor.rs

use crate::config::Options;
use crate::filtering::{has_excluded_component, passes_extension_filter};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// Decides whether a walked entry becomes a candidate file.
///
/// Returns `None` for directories, walk errors (logged), entries that are not
/// files after following a symlink, files whose path contains an excluded name and
/// files failing the extension filter. Excluded names are matched against
/// every component of the full path, including those above `root`.
pub(super) fn process_direntry(
    entry_result: walkdir::Result<DirEntry>,
    root: &Path,
    options: &Options,
) -> Option<PathBuf> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Skipping unreadable entry below '{}': {}", root.display(), e);
            return None;
        }
    };

    let file_type = entry.file_type();
    if file_type.is_dir() {
        return None;
    }
    let path = entry.path();
    // Symlinks count when they point at a regular file.
    let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
    if !is_file {
        debug!("Skipping non-file entry {:?}", path);
        return None;
    }

    if has_excluded_component(path, options) {
        debug!("Skipping {:?}: path contains an excluded name", path);
        return None;
    }

    if !passes_extension_filter(path, options) {
        return None;
    }

    Some(path.to_path_buf())
}
