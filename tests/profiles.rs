// tests/profiles.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, filecat_cmd};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn settings_arg(dir: &Path) -> String {
    dir.join("settings.json").to_string_lossy().into_owned()
}

#[test]
fn test_save_then_run_from_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let project = temp.path().join("project");
    create_file(&project, "main.rs", "fn main() {}");
    create_file(&project, "notes.txt", "notes");
    let settings = settings_arg(temp.path());

    filecat_cmd()
        .arg(&project)
        .args(["-e", "rs", "-H", "-q", "-S", "work", "--settings", &settings])
        .assert()
        .success()
        .stdout("fn main() {}\n");

    let stored: serde_json::Value = serde_json::from_str(&fs::read_to_string(&settings)?)?;
    assert_eq!(stored["profiles"]["current"], "work");
    assert_eq!(stored["profiles"]["work"]["opts"]["exts"], ".rs");
    assert_eq!(stored["profiles"]["work"]["opts"]["headers"], false);
    assert_eq!(
        stored["profiles"]["work"]["list"]["items"][0],
        format!("{}|1", project.display())
    );

    // No paths: the profile's roots and options are used.
    filecat_cmd()
        .args(["-P", "work", "-q", "--settings", &settings])
        .assert()
        .success()
        .stdout("fn main() {}\n");

    // Command-line values override the profile.
    filecat_cmd()
        .args(["-P", "work", "-e", "txt", "-q", "--settings", &settings])
        .assert()
        .success()
        .stdout("notes\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_profile_list_show_rename_delete() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.txt", "A");
    let settings = settings_arg(temp.path());

    for name in ["beta", "alpha"] {
        filecat_cmd()
            .arg(temp.path().join("src"))
            .args(["-q", "-S", name, "--settings", &settings])
            .assert()
            .success();
    }

    filecat_cmd()
        .args(["profile", "list", "--settings", &settings])
        .assert()
        .success()
        .stdout("* alpha\n  beta\n");

    filecat_cmd()
        .args(["profile", "show", "beta", "--settings", &settings])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recursive\": true"))
        .stdout(predicate::str::contains("\"max_mb\": 5.0"));

    filecat_cmd()
        .args(["profile", "rename", "alpha", "gamma", "--settings", &settings])
        .assert()
        .success();

    filecat_cmd()
        .args(["profile", "delete", "beta", "--settings", &settings])
        .assert()
        .success();

    filecat_cmd()
        .args(["profile", "list", "--settings", &settings])
        .assert()
        .success()
        .stdout("* gamma\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_rename_onto_existing_profile_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A");
    let settings = settings_arg(temp.path());

    for name in ["one", "two"] {
        filecat_cmd()
            .arg(temp.path().join("a.txt"))
            .args(["-q", "-S", name, "--settings", &settings])
            .assert()
            .success();
    }

    filecat_cmd()
        .args(["profile", "rename", "one", "two", "--settings", &settings])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_profile_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let settings = settings_arg(temp.path());

    filecat_cmd()
        .args(["-P", "nope", "--settings", &settings])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'nope' does not exist"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_corrupt_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let settings = settings_arg(temp.path());
    fs::write(&settings, "{ not json")?;

    filecat_cmd()
        .args(["profile", "list", "--settings", &settings])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings error"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_positive_flags_override_a_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let project = temp.path().join("project");
    create_file(&project, "top.txt", "top");
    create_file(&project, "nested/deep.txt", "deep");
    let settings = settings_arg(temp.path());

    filecat_cmd()
        .arg(&project)
        .args(["-n", "-H", "-q", "-S", "flat", "--settings", &settings])
        .assert()
        .success()
        .stdout("top\n");

    filecat_cmd()
        .args(["-P", "flat", "-q", "--recursive", "--headers", "--settings", &settings])
        .assert()
        .success()
        .stdout(predicate::str::contains("deep\n"))
        .stdout(predicate::str::contains("top.txt ============\ntop\n"));

    temp.close()?;
    Ok(())
}
