//! Turns user-chosen roots into the ordered list of candidate files.
use crate::config::Options;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

mod entry_processor;
mod normalize;
mod walker;

pub use normalize::{normalize_and_dedupe, normalize_path};

use entry_processor::process_direntry;
use walker::build_walker;

/// Gathers candidate files from a list of roots.
///
/// Each root is normalized first and duplicate roots are dropped. A root that
/// is a file becomes a candidate when it passes the extension filter; a root
/// that is a directory is walked (recursively unless disabled), pruning
/// excluded directory names. Roots that do not exist are skipped silently.
///
/// Within a directory root, files come out sorted by file name at each level.
/// Roots are handled in the order given and the final list is deduplicated,
/// so a file reachable from two roots appears once, at its first position.
///
/// Size and binary checks are not applied here. Walk errors are logged and
/// skipped.
///
/// # Examples
///
/// ```
/// use filecat::{gather, OptionsBuilder};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::create_dir(temp.path().join("node_modules"))?;
/// fs::write(temp.path().join("node_modules/dep.js"), "x")?;
/// fs::write(temp.path().join("app.js"), "y")?;
///
/// let options = OptionsBuilder::new().exclude_dirs(["node_modules"]).build()?;
/// let files = gather(&[temp.path()], &options);
/// assert_eq!(files.len(), 1);
/// assert!(files[0].ends_with("app.js"));
/// # Ok(())
/// # }
/// ```
pub fn gather<P: AsRef<Path>>(roots: &[P], options: &Options) -> Vec<PathBuf> {
    let _span = tracing::debug_span!("gather", roots = roots.len()).entered();
    let mut candidates = Vec::new();

    for root in normalize_and_dedupe(roots) {
        match fs::metadata(&root) {
            Ok(meta) if meta.is_file() => {
                if crate::filtering::passes_extension_filter(&root, options) {
                    candidates.push(root);
                }
            }
            Ok(meta) if meta.is_dir() => {
                let before = candidates.len();
                candidates.extend(
                    build_walker(&root, options)
                        .filter_map(|entry| process_direntry(entry, &root, options)),
                );
                debug!(
                    "Root {:?} contributed {} candidate(s)",
                    root,
                    candidates.len() - before
                );
            }
            Ok(_) => debug!("Skipping root {:?}: not a file or directory", root),
            Err(e) => debug!("Skipping root {:?}: {}", root, e),
        }
    }

    let candidates = normalize_and_dedupe(candidates);
    debug!("Gathering complete. Candidates: {}", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsBuilder;
    use tempfile::tempdir;

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn setup() -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.cs"), "a").unwrap();
        fs::write(root.join("src/main.cs"), "m").unwrap();
        fs::write(root.join("src/nested/deep.cs"), "d").unwrap();
        fs::write(root.join("bin/out.cs"), "o").unwrap();
        temp
    }

    #[test]
    fn test_recursive_walk_is_sorted_and_pruned() {
        let temp = setup();
        let root = normalize_path(temp.path());
        let options = OptionsBuilder::new().exclude_dirs(["bin"]).build().unwrap();
        let files = gather(&[&root], &options);
        assert_eq!(
            names(&files, &root),
            vec!["a.cs", "b.txt", "src/main.cs", "src/nested/deep.cs"]
        );
    }

    #[test]
    fn test_non_recursive_lists_direct_children_only() {
        let temp = setup();
        let root = normalize_path(temp.path());
        let options = OptionsBuilder::new().recursive(false).build().unwrap();
        let files = gather(&[&root], &options);
        assert_eq!(names(&files, &root), vec!["a.cs", "b.txt"]);
    }

    #[test]
    fn test_extension_filter_applies_to_walk_and_file_roots() {
        let temp = setup();
        let root = normalize_path(temp.path());
        let options = OptionsBuilder::new().extensions(["CS"]).build().unwrap();
        let files = gather(&[root.join("b.txt"), root.join("src")], &options);
        assert_eq!(names(&files, &root), vec!["src/main.cs", "src/nested/deep.cs"]);
    }

    #[test]
    fn test_missing_roots_are_skipped() {
        let temp = setup();
        let root = normalize_path(temp.path());
        let files = gather(
            &[root.join("does-not-exist"), root.join("a.cs")],
            &Options::default(),
        );
        assert_eq!(names(&files, &root), vec!["a.cs"]);
    }

    #[test]
    fn test_overlapping_roots_keep_first_position() {
        let temp = setup();
        let root = normalize_path(temp.path());
        let options = Options::default();
        let files = gather(
            &[root.join("src/main.cs"), root.clone(), root.join("src/./")],
            &options,
        );
        let listed = names(&files, &root);
        assert_eq!(listed[0], "src/main.cs");
        assert_eq!(listed.iter().filter(|n| *n == "src/main.cs").count(), 1);
        assert_eq!(listed.len(), 5);
    }

    #[test]
    fn test_excluded_name_above_root_excludes_files() {
        let temp = tempdir().unwrap();
        let root = normalize_path(&temp.path().join("build").join("project"));
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("kept.cs"), "k").unwrap();
        let options = OptionsBuilder::new().exclude_dirs(["build"]).build().unwrap();
        assert!(gather(&[&root], &options).is_empty());
    }

    #[test]
    fn test_excluded_file_name_is_rejected_in_walk() {
        let temp = tempdir().unwrap();
        let root = normalize_path(temp.path());
        fs::write(root.join("Makefile"), "all:").unwrap();
        fs::write(root.join("main.c"), "int main;").unwrap();
        let options = OptionsBuilder::new().exclude_dirs(["Makefile"]).build().unwrap();
        assert_eq!(names(&gather(&[&root], &options), &root), vec!["main.c"]);
    }

    #[test]
    fn test_explicit_file_root_is_not_excluded() {
        let temp = tempdir().unwrap();
        let root = normalize_path(temp.path());
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("build/gen.cs"), "g").unwrap();
        let options = OptionsBuilder::new().exclude_dirs(["build"]).build().unwrap();
        let files = gather(&[root.join("build/gen.cs")], &options);
        assert_eq!(names(&files, &root), vec!["build/gen.cs"]);
    }

    #[test]
    fn test_excluded_dir_skipped_without_recursion() {
        let temp = setup();
        let root = normalize_path(temp.path());
        fs::write(root.join("bin.cs"), "x").unwrap();
        let options = OptionsBuilder::new()
            .recursive(false)
            .exclude_dirs(["bin", "src"])
            .build()
            .unwrap();
        assert_eq!(names(&gather(&[&root], &options), &root), vec!["a.cs", "b.txt", "bin.cs"]);
    }
}
