//! Binary-level tests for the `kiln` CLI.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// `kiln` running in `dir` with an empty environment.
fn kiln(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("kiln");
    cmd.current_dir(dir.path()).env_clear();
    cmd
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_help_lists_archetypes() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("service"))
        .stdout(predicate::str::contains("--package-root"));
}

// ── settings ──────────────────────────────────────────────────────────────────

#[test]
fn info_shows_defaults() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["info", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workers"))
        .stdout(predicate::str::contains("= 4"))
        .stdout(predicate::str::contains("= INFO"))
        .stdout(predicate::str::contains("= None"));
}

#[test]
fn process_env_beats_dotenv() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "WORKERS=8\nLOG_LEVEL=ERROR\n").unwrap();

    kiln(&dir)
        .env("WORKERS", "16")
        .args(["config", "get", "workers"])
        .assert()
        .success()
        .stdout("16\n");

    kiln(&dir)
        .args(["config", "get", "log_level"])
        .assert()
        .success()
        .stdout("ERROR\n");
}

#[test]
fn json_info_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let assert = kiln(&dir)
        .env("DATABASE_URL", "postgres://db")
        .args(["info", "--output-format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["workers"], 4);
    assert_eq!(value["database_url"], "postgres://db");
    assert_eq!(value["log_level"], "INFO");
}

#[test]
fn run_applies_config_file_and_debug_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.toml"), "workers = 9\n").unwrap();

    kiln(&dir)
        .args(["run", "--debug", "-c", "app.toml", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extra configuration loaded from app.toml"))
        .stdout(predicate::str::contains("= 9"))
        .stdout(predicate::str::contains("= true"))
        .stdout(predicate::str::contains("Executing main logic"));
}

#[test]
fn missing_config_file_exits_3() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["info", "--config", "nope.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_setting_exits_4() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), r#"{"log_level": "NOPE"}"#).unwrap();

    kiln(&dir)
        .args(["info", "--config", "bad.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("log_level"));
}

#[test]
fn unsupported_config_format_exits_4() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.yaml"), "workers: 2\n").unwrap();

    kiln(&dir)
        .args(["info", "--config", "app.yaml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(".yaml"));
}

#[test]
fn unknown_setting_exits_2() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["config", "get", "colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Known settings"));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_service_creates_three_files() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["--no-color", "generate", "service", "widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File created").count(3))
        .stdout(predicate::str::contains("service widget generated successfully"));

    let implementation = fs::read_to_string(dir.path().join("src/app/widget/widget.py")).unwrap();
    assert!(implementation.contains("class WidgetService:"));
    assert!(implementation.contains("def run(self):"));

    let test = fs::read_to_string(dir.path().join("tests/test_widget.py")).unwrap();
    assert!(test.contains("from app.widget.widget import WidgetService"));
    assert!(dir.path().join("src/app/widget/__init__.py").is_file());
}

#[test]
fn generate_twice_skips_everything() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["generate", "util", "widget"])
        .assert()
        .success();

    let implementation = dir.path().join("src/app/widget/widget.py");
    fs::write(&implementation, "# hand edited\n").unwrap();

    kiln(&dir)
        .args(["--no-color", "generate", "util", "widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("will not be overwritten").count(3))
        .stdout(predicate::str::contains("File created").not());

    assert_eq!(fs::read_to_string(implementation).unwrap(), "# hand edited\n");
}

#[test]
fn generate_respects_custom_roots() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .env("KILN_TESTS_ROOT", "checks")
        .args(["generate", "model", "order", "--package-root", "lib/shop"])
        .assert()
        .success();

    let model = fs::read_to_string(dir.path().join("lib/shop/order/order.py")).unwrap();
    assert!(model.starts_with("from pydantic import BaseModel"));
    assert!(model.contains("class Order(BaseModel):"));

    let test = fs::read_to_string(dir.path().join("checks/test_order.py")).unwrap();
    assert!(test.contains("from shop.order.order import Order"));
}

#[test]
fn generate_rejects_path_like_names() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["generate", "module", "../escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid scaffold name"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn unknown_archetype_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["generate", "plugin", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("module, service, model or util"));
}

#[test]
fn completions_bash() {
    let dir = TempDir::new().unwrap();
    kiln(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kiln"));
}
