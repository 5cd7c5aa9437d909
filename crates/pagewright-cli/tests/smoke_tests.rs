//! Smoke tests for the pagewright CLI

#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pagewright() -> Command {
    let mut cmd = Command::cargo_bin("pagewright").expect("pagewright binary should exist");
    for var in [
        "PAGEWRIGHT_BASE_URL",
        "PAGEWRIGHT_USERNAME",
        "PAGEWRIGHT_PASSWORD",
        "PAGEWRIGHT_HEADLESS",
        "PAGEWRIGHT_CHROMIUM_PATH",
        "PAGEWRIGHT_ELEMENT_TIMEOUT_MS",
    ] {
        let _ = cmd.env_remove(var);
    }
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pagewright()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2.0"));
}

#[test]
fn test_help_lists_subcommands() {
    pagewright()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("smoke"));
}

#[test]
fn test_no_args_fails() {
    pagewright().assert().failure();
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_scaffolds_project() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("shop-tests");

    pagewright()
        .args(["--color", "never", "init"])
        .arg(&target)
        .args(["--base-url", "http://localhost:8080"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created"));

    let manifest = fs::read_to_string(target.join("Cargo.toml")).unwrap();
    assert!(manifest.contains("name = \"shop-tests\""));
    let yaml = fs::read_to_string(target.join("pagewright.yaml")).unwrap();
    assert!(yaml.contains("base_url: http://localhost:8080"));
    assert!(target.join("tests/login.rs").exists());
    assert!(target.join("tests/inventory.rs").exists());
}

#[test]
fn test_init_keeps_existing_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), "# mine").unwrap();

    pagewright()
        .args(["--color", "never", "init", "--name", "shop"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("SKIP"));

    assert_eq!(fs::read_to_string(temp.path().join("Cargo.toml")).unwrap(), "# mine");
}

#[test]
fn test_init_rejects_bad_name() {
    let temp = TempDir::new().unwrap();
    pagewright()
        .args(["init", "--name", "Bad Name"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_prints_defaults_masked() {
    let temp = TempDir::new().unwrap();
    pagewright()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://www.saucedemo.com"))
        .stdout(predicate::str::contains("secret_sauce").not());
}

#[test]
fn test_config_env_override() {
    let temp = TempDir::new().unwrap();
    pagewright()
        .current_dir(temp.path())
        .env("PAGEWRIGHT_BASE_URL", "http://localhost:3000")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:3000"));
}

#[test]
fn test_config_missing_file_fails() {
    pagewright()
        .args(["config", "--file", "/nonexistent/pagewright.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// Smoke
// ============================================================================

#[test]
fn test_smoke_demo_passes() {
    let temp = TempDir::new().unwrap();
    pagewright()
        .current_dir(temp.path())
        .args(["--color", "never", "smoke", "--demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("PASS read first item: Sauce Labs Backpack"));
}

#[test]
fn test_smoke_demo_reports_bad_credentials() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagewright.yaml"),
        "credentials:\n  username: locked_out_user\n  password: secret_sauce\nelement_timeout_ms: 200\n",
    )
    .unwrap();

    pagewright()
        .current_dir(temp.path())
        .args(["--color", "never", "smoke", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PASS open login page"))
        .stderr(predicate::str::contains("PASS log in: locked_out_user"))
        .stderr(predicate::str::contains("FAIL verify inventory"));
}

#[test]
fn test_smoke_color_never_keeps_logs_plain() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagewright.yaml"),
        "credentials:\n  username: locked_out_user\n  password: secret_sauce\nelement_timeout_ms: 200\n",
    )
    .unwrap();

    pagewright()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .args(["--color", "never", "smoke", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page verification failed"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
