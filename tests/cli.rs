//! End-to-end CLI tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const PAGE: &str = r##"
<html><body>
  <table id="stock">
    <thead><tr><th>Name</th><th>Qty</th></tr></thead>
    <tbody><tr><td>Widget, Inc.</td><td>5</td></tr></tbody>
  </table>
  <table id="audit">
    <tr><td>He said "hi"</td></tr>
  </table>
  <button class="btn-export-csv" data-target="#stock" data-filename="stock.csv"></button>
  <button class="btn-export-csv" data-target="#audit"></button>
  <button class="btn-export-csv" data-target="#gone" data-filename="gone.csv"></button>
</body></html>
"##;

fn write_page(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("page.html");
    fs::write(&path, PAGE).unwrap();
    path
}

#[test]
fn test_explicit_table_export() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    Command::cargo_bin("tabrip")
        .unwrap()
        .arg(&page)
        .args(["--table", "#stock", "--name", "stock.csv"])
        .args(["--out-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported #stock"));

    let csv = fs::read_to_string(dir.path().join("stock.csv")).unwrap();
    assert_eq!(csv, "\"Name\",\"Qty\"\n\"Widget, Inc.\",\"5\"");
}

#[test]
fn test_default_file_name_is_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    Command::cargo_bin("tabrip")
        .unwrap()
        .arg(&page)
        .args(["--table", "#stock"])
        .args(["--out-dir", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("export.csv").exists());
}

#[test]
fn test_missing_table_is_silent_noop() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    Command::cargo_bin("tabrip")
        .unwrap()
        .arg(&page)
        .args(["--table", "#doesNotExist", "--name", "x.csv"])
        .args(["--out-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert!(!dir.path().join("x.csv").exists());
}

#[test]
fn test_trigger_discovery_runs_every_control() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    Command::cargo_bin("tabrip")
        .unwrap()
        .arg(&page)
        .args(["--out-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 exported, 1 skipped"));

    let stock = fs::read_to_string(dir.path().join("stock.csv")).unwrap();
    assert_eq!(stock, "\"Name\",\"Qty\"\n\"Widget, Inc.\",\"5\"");

    // Control without data-filename falls back to the default name
    let audit = fs::read_to_string(dir.path().join("export.csv")).unwrap();
    assert_eq!(audit, "\"He said \"\"hi\"\"\"");

    assert!(!dir.path().join("gone.csv").exists());
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    let output = Command::cargo_bin("tabrip")
        .unwrap()
        .arg(&page)
        .args(["--table", "#stock", "--format", "json"])
        .args(["--out-dir", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["exports"][0]["target"], "#stock");
    assert_eq!(value["exports"][0]["rows"], 2);
    assert!(value["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn test_unreadable_input_fails() {
    Command::cargo_bin("tabrip")
        .unwrap()
        .arg("no-such-page.html")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to load"));
}
