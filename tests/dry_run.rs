// tests/dry_run.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, filecat_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dry_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A");
    create_file(temp.path(), "sub/b.rs", "B");

    let expected = format!(
        "--- Dry Run: Files that would be processed ---\n- {}\n- {}\n--- End Dry Run (2 file(s)) ---\n",
        temp.path().join("a.txt").display(),
        temp.path().join("sub").join("b.rs").display(),
    );

    filecat_cmd()
        .arg(temp.path())
        .arg("-D")
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("Wrote").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_dry_run_lists_binary_and_large_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "blob.bin", [0u8, 1, 2]);
    create_file(temp.path(), "big.txt", "x".repeat(4096));

    filecat_cmd()
        .arg(temp.path())
        .args(["-D", "-M", "1KiB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blob.bin"))
        .stdout(predicate::str::contains("big.txt"))
        .stdout(predicate::str::contains("xxxx").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_dry_run_does_not_write_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.txt", "A");
    let output_path = temp.path().join("bundle.txt");

    filecat_cmd()
        .arg(temp.path().join("src"))
        .arg("-D")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"));

    assert!(!output_path.exists());

    temp.close()?;
    Ok(())
}
