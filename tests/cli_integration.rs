//! CLI integration tests for textkv
//!
//! These tests run the binary against files in a temporary directory and
//! check both command output and the resulting file content.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the textkv binary, isolated from any global
/// configuration
fn textkv_cmd(dir: &TempDir) -> assert_cmd::Command {
    let config = dir.path().join("textkv.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("textkv"));
    cmd.current_dir(dir.path())
        .env("TEXTKV_CONFIG", &config)
        .env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.trim().to_string())
        .collect()
}

// =============================================================================
// Separator Format
// =============================================================================

#[test]
fn test_set_then_get() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["set", "app.properties", "x", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set x"));

    textkv_cmd(&dir)
        .args(["get", "app.properties", "x"])
        .assert()
        .success()
        .stdout("1\n");

    textkv_cmd(&dir)
        .args(["set", "app.properties", "x", "2"])
        .assert()
        .success();

    assert_eq!(read_lines(&dir.path().join("app.properties")), vec!["x=2"]);
}

#[test]
fn test_get_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "app.properties", "a=1\n");

    textkv_cmd(&dir)
        .args(["get", "app.properties", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not found: b"));
}

#[test]
fn test_get_on_missing_file_fails_softly() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["get", "nothing.properties", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not found"));

    assert!(!dir.path().join("nothing.properties").exists());
}

#[test]
fn test_get_json() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "app.properties", "url=http://host/?a=b\n");

    let output = textkv_cmd(&dir)
        .args(["get", "app.properties", "url", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["key"], "url");
    assert_eq!(json["value"], "http://host/?a=b");
}

#[test]
fn test_set_updates_duplicates_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "app.properties", "k=1\njunk line\nother=x\nk=2\n");

    textkv_cmd(&dir)
        .args(["set", "app.properties", "k", "new"])
        .assert()
        .success();

    textkv_cmd(&dir)
        .args(["set", "app.properties", "added", ""])
        .assert()
        .success();

    assert_eq!(read_lines(&path), vec!["k=new", "other=x", "k=new", "added="]);
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "app.properties", "\u{feff}b=2\na=1\n");

    let output = textkv_cmd(&dir)
        .args(["list", "app.properties", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "key": "b", "value": "2" },
            { "key": "a", "value": "1" },
        ])
    );
}

// =============================================================================
// Marker Format
// =============================================================================

#[test]
fn test_marker_list() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "notes.txt", "■A\n■B\nvalue2\n■C\nline 1\nline 2\n");

    textkv_cmd(&dir)
        .args(["list", "notes.txt", "--codec", "marker"])
        .assert()
        .success()
        .stdout("B\tvalue2\nC\tline 1\nline 2\n");
}

#[test]
fn test_marker_keeps_empty_bodies_when_configured() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "textkv.toml",
        "default_codec = \"marker\"\n[marker]\ndrop_empty_bodies = false\n",
    );
    write_file(&dir, "notes.txt", "■A\n■B\nvalue2\n");

    textkv_cmd(&dir)
        .args(["list", "notes.txt"])
        .assert()
        .success()
        .stdout("A\t\nB\tvalue2\n");
}

#[test]
fn test_marker_set_writes_records() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["set", "notes.txt", "Key1", "Value1", "--codec", "marker"])
        .assert()
        .success();

    textkv_cmd(&dir)
        .args(["get", "notes.txt", "Key1", "--codec", "marker"])
        .assert()
        .success()
        .stdout("Value1\n");

    assert_eq!(read_lines(&dir.path().join("notes.txt")), vec!["■Key1", "Value1"]);
}

// =============================================================================
// Lines and Conversion
// =============================================================================

#[test]
fn test_lines_filters_comments() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "data.txt", "# header\n  one  \r\n\n#two\nthree # trailing\n");

    textkv_cmd(&dir)
        .args(["lines", "data.txt", "--comment", "#"])
        .assert()
        .success()
        .stdout("one\nthree # trailing\n");
}

#[test]
fn test_convert_marker_to_separator() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "notes.txt", "■host\nexample.org\n■port\n8080\n");

    textkv_cmd(&dir)
        .args([
            "convert", "notes.txt", "app.properties", "--from", "marker", "--to", "separator",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 entries"));

    assert_eq!(
        read_lines(&dir.path().join("app.properties")),
        vec!["host=example.org", "port=8080"]
    );
}

#[test]
fn test_unknown_codec_is_rejected() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["list", "app.properties", "--codec", "yaml"])
        .assert()
        .failure();
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["config", "init", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    textkv_cmd(&dir)
        .args(["config", "init", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    textkv_cmd(&dir)
        .args(["--config", "custom.toml", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_codec = \"separator\""));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    textkv_cmd(&dir)
        .args(["--config", "missing.toml", "list", "app.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "textkv.toml", "[separator]\nseparator = \"\"\n");

    textkv_cmd(&dir)
        .args(["list", "app.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}
