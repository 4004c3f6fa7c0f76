// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn filecat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("filecat"))
}

/// Writes `content` to `relative_path` below `dir`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: impl AsRef<[u8]>) {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
}

/// The header line written before `path`.
#[allow(dead_code)]
pub fn header(path: &Path) -> String {
    format!("============ {} ============\n", path.display())
}
