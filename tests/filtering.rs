// tests/filtering.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, filecat_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_extension_filter_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "Main.CS", "class Main {}");
    create_file(temp.path(), "notes.md", "# notes");
    create_file(temp.path(), "script.py", "print()");
    create_file(temp.path(), "Makefile", "all:");

    filecat_cmd()
        .arg(temp.path())
        .args(["-e", ".cs", "-e", "MD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class Main {}"))
        .stdout(predicate::str::contains("# notes"))
        .stdout(predicate::str::contains("print()").not())
        .stdout(predicate::str::contains("all:").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_extension_filter_applies_to_file_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "keep.rs", "keep");
    create_file(temp.path(), "drop.txt", "drop");

    filecat_cmd()
        .arg(temp.path().join("keep.rs"))
        .arg(temp.path().join("drop.txt"))
        .args(["-e", "rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep"))
        .stdout(predicate::str::contains("drop").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_excluded_directories_are_pruned_at_any_depth() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/main.rs", "main");
    create_file(temp.path(), "src/target/gen.rs", "generated");
    create_file(temp.path(), "target/debug/out.rs", "build output");
    create_file(temp.path(), "node_modules/pkg/index.rs", "dependency");

    filecat_cmd()
        .arg(temp.path())
        .args(["-x", "target, node_modules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("generated").not())
        .stdout(predicate::str::contains("build output").not())
        .stdout(predicate::str::contains("dependency").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_non_recursive_lists_direct_children_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "top.txt", "top level");
    create_file(temp.path(), "nested/deep.txt", "nested level");

    filecat_cmd()
        .arg(temp.path())
        .arg("--no-recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("top level"))
        .stdout(predicate::str::contains("nested level").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_excluded_directory_contributes_nothing_without_recursion(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "top.txt", "top level");
    create_file(temp.path(), "vendor/dep.txt", "vendored");

    filecat_cmd()
        .arg(temp.path())
        .arg(temp.path().join("vendor"))
        .args(["--no-recursive", "-x", "vendor", "-H"])
        .assert()
        .success()
        .stdout("top level\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_binary_files_are_skipped_and_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "image.png", [0x89, b'P', b'N', b'G', 0x00, 0x1a]);
    create_file(temp.path(), "latin1.txt", [b'c', b'a', b'f', 0xe9]);
    create_file(temp.path(), "text.txt", "plain");

    filecat_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("plain"))
        .stdout(predicate::str::contains("image.png").not())
        .stdout(predicate::str::contains("latin1.txt").not())
        .stderr(predicate::str::contains("Wrote 1 file(s)"))
        .stderr(predicate::str::contains("Skipped 2 file(s):"))
        .stderr(predicate::str::contains("binary or non-UTF-8 content"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_include_binary_reads_lossily() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "latin1.txt", [b'c', b'a', b'f', 0xe9]);

    filecat_cmd()
        .arg(temp.path())
        .args(["-B", "-H"])
        .assert()
        .success()
        .stdout("caf\u{fffd}\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_size_cap_skips_large_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "big.txt", "x".repeat(2048));
    create_file(temp.path(), "small.txt", "small");

    filecat_cmd()
        .arg(temp.path())
        .args(["--max-size", "1KiB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("small"))
        .stdout(predicate::str::contains("xxxx").not())
        .stderr(predicate::str::contains("big.txt: size 2.0 KB exceeds"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_zero_size_cap_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a");

    filecat_cmd()
        .arg(temp.path())
        .args(["-m", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive number of megabytes"));

    temp.close()?;
    Ok(())
}
