// tests/output_file.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, filecat_cmd, header};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_output_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let src_path = temp.path().join("src");
    create_file(&src_path, "a.txt", "Content A");
    let output_path = temp.path().join("bundle.txt");

    filecat_cmd()
        .arg(&src_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(format!(
            "Wrote 1 file(s) to {}.",
            output_path.display()
        )));

    let output_content = fs::read_to_string(&output_path)?;
    assert_eq!(
        output_content,
        format!("{}Content A\n", header(&src_path.join("a.txt")))
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_replaces_existing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let src_path = temp.path().join("src");
    create_file(&src_path, "a.txt", "fresh");
    let output_path = temp.path().join("bundle.txt");
    fs::write(&output_path, "stale content that is much longer than the new one")?;

    filecat_cmd()
        .arg(&src_path)
        .args(["-H", "-o"])
        .arg(&output_path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output_path)?, "fresh\n");
    // No temporary files are left next to the output.
    let leftovers: Vec<_> = fs::read_dir(temp.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(".filecat-"))
        .collect();
    assert!(leftovers.is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_file_inside_root_is_not_its_own_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A");
    let output_path = temp.path().join("out").join("bundle.txt");
    fs::create_dir(temp.path().join("out"))?;

    filecat_cmd()
        .arg(temp.path())
        .args(["-x", "out", "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = fs::read_to_string(&output_path)?;
    assert_eq!(content.matches("============ ").count(), 1);

    temp.close()?;
    Ok(())
}

#[test]
fn test_unwritable_output_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A");

    filecat_cmd()
        .arg(temp.path().join("a.txt"))
        .arg("-o")
        .arg(temp.path().join("missing-dir").join("bundle.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: I/O error"));

    temp.close()?;
    Ok(())
}
