//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hexgen() -> Command {
    Command::cargo_bin("hexgen").unwrap()
}

#[test]
fn invalid_name_reports_validation_error() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "...", "--no-lint"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"))
        .stderr(predicate::str::contains("alphanumeric"));

    // Validation precedes all I/O — nothing was written.
    assert!(!temp.path().join("src").exists());
}

#[test]
fn conflict_error_lists_every_offending_file() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .success();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cache.port.ts"))
        .stderr(predicate::str::contains("cache.token.ts"))
        .stderr(predicate::str::contains("index.ts"));
}

#[test]
fn unknown_kind_is_a_clap_error() {
    hexgen()
        .args(["generate", "widget", "Cache"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn broken_template_override_names_the_template() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("hexgen.toml"),
        "[templates]\n\"port.interface\" = \"missing/override.tera\"\n",
    )
    .unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port.interface"))
        .stderr(predicate::str::contains("override.tera"));

    // Template errors abort before any write.
    assert!(!temp.path().join("src").exists());
}

#[test]
fn suggestions_hint_at_verbose_flag() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "..."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}
