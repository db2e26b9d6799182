//! Command-line behavior that happens before the terminal UI starts

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn routinist(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("routinist").unwrap();
    // Keep the user's own config out of the run
    let config = config_dir.path().join("config.toml");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();

    routinist(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("[CATALOG]"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    routinist(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_catalog_fails_before_ui() {
    let dir = TempDir::new().unwrap();

    routinist(&dir)
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog file not found"));
}

#[test]
fn test_invalid_catalog_fails_before_ui() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("products.json");
    let mut file = std::fs::File::create(&catalog).unwrap();
    file.write_all(b"{\"products\": [").unwrap();

    routinist(&dir)
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog JSON"));
}

#[test]
fn test_catalog_path_from_config() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("from-config.json");
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[catalog]\npath = {:?}\n", missing.display().to_string()),
    )
    .unwrap();

    routinist(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-config.json"));
}
