//! Integration tests for the cmslint binary.
// `cargo_bin` is deprecated in favor of the `cargo_bin!` macro; both work.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"
backend:
  name: github
  repo: user/repo
collections:
  - name: posts
    label: Posts
    folder: _posts
    fields:
      - name: title
        label: Title
        widget: string
"#;

const EMPTY_FILES_CONFIG: &str = r#"
backend:
  name: github
  repo: user/repo
collections:
  - name: posts
    label: Posts
    files: []
"#;

/// A project directory with a `.git` marker so settings discovery stays inside it.
fn setup_project(config: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    let file = temp.path().join("config.yml");
    fs::write(&file, config).unwrap();
    (temp, file)
}

fn cmslint() -> Command {
    let mut cmd = Command::new(cargo_bin("cmslint"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_requires_a_filename() -> Result<(), Box<dyn std::error::Error>> {
    cmslint()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must pass a filename!"));
    Ok(())
}

#[test]
fn cli_reports_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmslint()
        .arg(temp.path().join("nope.yml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_reports_parse_errors() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project("backend: [oops\n");
    cmslint()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn cli_pretty_output_is_default() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project(VALID_CONFIG);
    cmslint()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("root/backendExists"))
        .stdout(predicate::str::contains("Config has backend settings."))
        .stdout(predicate::str::contains(
            "root.collections.0.fields.0/fieldHasRequiredProps",
        ))
        .stdout(predicate::str::contains("errors=0"));
    Ok(())
}

#[test]
fn cli_json_output_lists_records() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project(EMPTY_FILES_CONFIG);
    let out = cmslint().arg(&file).args(["-o", "json"]).output()?;
    assert!(out.status.success());
    let records: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    let failing: Vec<_> = records
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["type"] == "error")
        .collect();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0]["name"], "collectionIsFolderOrFilesCollection");
    assert_eq!(failing[0]["path"], serde_json::json!(["collections", 0]));
    assert_eq!(failing[0]["message"], "Collection has an empty \"files\" list!");
    Ok(())
}

#[test]
fn cli_json_lines_one_record_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project(VALID_CONFIG);
    let out = cmslint()
        .arg(&file)
        .args(["--output", "json-lines", "--quiet"])
        .output()?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.trim().is_empty());

    let out = cmslint().arg(&file).args(["--output", "json-lines"]).output()?;
    let text = String::from_utf8(out.stdout)?;
    for line in text.lines() {
        let rec: serde_json::Value = serde_json::from_str(line)?;
        assert_eq!(rec["type"], "success");
    }
    Ok(())
}

#[test]
fn cli_unknown_output_falls_back_to_pretty() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project(VALID_CONFIG);
    cmslint()
        .arg(&file)
        .args(["-o", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("— Summary —"));
    Ok(())
}

#[test]
fn cli_check_fails_on_errors() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, file) = setup_project(EMPTY_FILES_CONFIG);
    cmslint().arg(&file).assert().success();
    cmslint().arg(&file).arg("--check").assert().code(1);

    let (_temp, valid) = setup_project(VALID_CONFIG);
    cmslint().arg(&valid).arg("--check").assert().success();
    Ok(())
}

#[test]
fn cli_reads_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, file) = setup_project(EMPTY_FILES_CONFIG);
    fs::write(
        temp.path().join("cmslint.toml"),
        "output = \"json\"\nquiet = true\n[rules]\ndisable = [\"collectionIsFolderOrFilesCollection\"]\n",
    )?;
    let out = cmslint().arg(&file).output()?;
    assert!(out.status.success());
    let records: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(records, serde_json::json!([]));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    cmslint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
