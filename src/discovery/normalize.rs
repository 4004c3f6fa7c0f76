// src/discovery/normalize.rs

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute and folds `.` and `..` segments lexically.
///
/// Symlinks are not resolved and the path does not need to exist. If the
/// current directory cannot be determined, a relative path is folded as is.
///
/// # Examples
///
/// ```
/// use filecat::discovery::normalize_path;
/// use std::path::Path;
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(normalize_path(Path::new("/a/./b/../c/")), Path::new("/a/c"));
/// assert_eq!(normalize_path(Path::new("/../x")), Path::new("/x"));
/// # }
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                log::warn!(
                    "Cannot determine the current directory, keeping '{}' relative: {}",
                    path.display(),
                    e
                );
                path.to_path_buf()
            }
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // ".." at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(segment) => normalized.push(segment),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Normalizes every path and keeps the first occurrence of each, in input order.
///
/// Applying it to its own output returns the same list.
///
/// # Examples
///
/// ```
/// use filecat::discovery::normalize_and_dedupe;
/// use std::path::PathBuf;
///
/// # #[cfg(unix)]
/// # {
/// let paths = normalize_and_dedupe(["/b", "/a/../b", "/a", "/a/."]);
/// assert_eq!(paths, vec![PathBuf::from("/b"), PathBuf::from("/a")]);
/// # }
/// ```
pub fn normalize_and_dedupe<I, P>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for path in paths {
        let normalized = normalize_path(path.as_ref());
        if seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }
    out
}
