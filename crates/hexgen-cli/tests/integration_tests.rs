//! Integration tests for hexgen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hexgen() -> Command {
    Command::cargo_bin("hexgen").unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    hexgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hexgen"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag() {
    hexgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_help_lists_flags() {
    hexgen()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--no-lint"));
}

// ── generate port ─────────────────────────────────────────────────────────────

#[test]
fn generate_port_writes_five_files() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "ObjectStorage", "--no-lint"])
        .assert()
        .success();

    let dir = temp.path().join("src/ports/object-storage");
    for file in [
        "object-storage.port.ts",
        "object-storage.token.ts",
        "object-storage.service.ts",
        "object-storage.module.ts",
        "index.ts",
    ] {
        assert!(dir.join(file).exists(), "missing {file}");
    }

    let token = std::fs::read_to_string(dir.join("object-storage.token.ts")).unwrap();
    assert!(token.contains("OBJECT_STORAGE_PORT"));
}

#[test]
fn generate_port_without_service_and_module() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args([
            "generate",
            "port",
            "Cache",
            "--no-service",
            "--no-module",
            "--no-lint",
        ])
        .assert()
        .success();

    let dir = temp.path().join("src/ports/cache");
    assert!(dir.join("cache.port.ts").exists());
    assert!(!dir.join("cache.service.ts").exists());
    assert!(!dir.join("cache.module.ts").exists());
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--dry-run", "--no-lint"])
        .assert()
        .success();

    assert!(!temp.path().join("src").exists());
}

#[test]
fn conflict_fails_and_force_recovers() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .success();

    // Same invocation again: every file conflicts, exit code 2.
    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--force", "--no-lint"])
        .assert()
        .success();
}

// ── generate adapter / full ───────────────────────────────────────────────────

#[test]
fn adapter_imports_generated_port() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "ObjectStorage", "--no-lint"])
        .assert()
        .success();

    hexgen()
        .current_dir(temp.path())
        .args([
            "generate",
            "adapter",
            "S3",
            "--port",
            "ObjectStorage",
            "--no-lint",
        ])
        .assert()
        .success();

    let adapter =
        std::fs::read_to_string(temp.path().join("src/adapters/s3/s3.adapter.ts")).unwrap();
    assert!(adapter.contains("implements ObjectStoragePort"));
    assert!(adapter.contains("../../ports/object-storage/object-storage.port"));
}

#[test]
fn full_generates_port_and_adapter() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "full", "ObjectStorage", "S3", "--no-lint"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("src/ports/object-storage/object-storage.port.ts")
            .exists()
    );
    let module = std::fs::read_to_string(temp.path().join("src/adapters/s3/s3.module.ts")).unwrap();
    assert!(module.contains("OBJECT_STORAGE_PORT"));
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn project_config_changes_style_and_directories() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("hexgen.toml"),
        "[output]\nports = \"lib/ports\"\n\n[style]\nquotes = \"double\"\nsemicolons = false\n",
    )
    .unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .success();

    let token =
        std::fs::read_to_string(temp.path().join("lib/ports/cache/cache.token.ts")).unwrap();
    assert!(token.contains("\"CACHE_PORT\""));
    assert!(!token.contains(';'));
}

#[test]
fn malformed_config_warns_but_generation_proceeds() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("hexgen.toml"), "not valid toml = = =").unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));

    assert!(temp.path().join("src/ports/cache/cache.port.ts").exists());
}

// ── missing inputs without a terminal ─────────────────────────────────────────

#[test]
fn missing_inputs_fail_fast_when_not_a_terminal() {
    let temp = TempDir::new().unwrap();

    // stdin is not a TTY under assert_cmd, so the interactive path must
    // refuse instead of blocking.
    hexgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("hexgen generate"));
}

#[test]
fn full_with_one_name_fails_fast_when_not_a_terminal() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "full", "ObjectStorage"])
        .assert()
        .failure()
        .code(2);
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_generated_ports() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "ObjectStorage", "--no-lint"])
        .assert()
        .success();

    hexgen()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ObjectStorage"))
        .stdout(predicate::str::contains("OBJECT_STORAGE_PORT"));
}

#[test]
fn list_json_format() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["generate", "port", "Cache", "--no-lint"])
        .assert()
        .success();

    hexgen()
        .current_dir(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\": \"CACHE_PORT\""));
}

#[test]
fn list_with_no_ports_succeeds() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ports found"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_writes_default_config() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join("hexgen.toml")).unwrap();
    assert!(config.contains("[output]"));
    assert!(config.contains("[style]"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("hexgen.toml"), "# mine\n").unwrap();

    hexgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    assert_eq!(
        std::fs::read_to_string(temp.path().join("hexgen.toml")).unwrap(),
        "# mine\n"
    );
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary() {
    hexgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexgen"));
}
