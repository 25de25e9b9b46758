//! CLI integration tests
//!
//! Tests the sheetlite binary directly using assert_cmd to exercise
//! main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

/// Two-sheet workbook used by the success-path tests.
fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();

    let sales = workbook.add_worksheet();
    sales.set_name("Sales Data").unwrap();
    sales.write_string(0, 0, "region").unwrap();
    sales.write_string(0, 1, "units").unwrap();
    sales.write_string(1, 0, "north").unwrap();
    sales.write_number(1, 1, 40.0).unwrap();

    let inventory = workbook.add_worksheet();
    inventory.set_name("Inventory").unwrap();
    inventory.write_string(0, 0, "sku").unwrap();
    inventory.write_string(1, 0, "sku-1").unwrap();

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetlite"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("sheets"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetlite"));
}

#[test]
fn test_convert_help() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a workbook"));
}

#[test]
fn test_sheets_help() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["sheets", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List a workbook"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_writes_database() {
    let tmp = TempDir::new().unwrap();
    let xlsx = tmp.path().join("db.xlsx");
    let db = tmp.path().join("data.db");
    write_fixture(&xlsx);

    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["convert"])
        .arg(&xlsx)
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales_Data"))
        .stdout(predicate::str::contains("Conversion Complete"))
        .stdout(predicate::str::contains("data.db"));

    assert!(db.exists());
}

#[test]
fn test_convert_verbose_reports_sheet_count() {
    let tmp = TempDir::new().unwrap();
    let xlsx = tmp.path().join("db.xlsx");
    let db = tmp.path().join("data.db");
    write_fixture(&xlsx);

    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["convert", "--verbose"])
        .arg(&xlsx)
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 sheets"));
}

#[test]
fn test_convert_missing_source_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.xlsx");
    let db = tmp.path().join("data.db");

    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["convert"])
        .arg(&missing)
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("source workbook not found"))
        .stderr(predicate::str::contains("missing.xlsx"));

    assert!(!db.exists());
}

#[test]
fn test_convert_requires_arguments() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEETS COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheets_lists_sheet_to_table_mapping() {
    let tmp = TempDir::new().unwrap();
    let xlsx = tmp.path().join("db.xlsx");
    write_fixture(&xlsx);

    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.arg("sheets")
        .arg(&xlsx)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales Data"))
        .stdout(predicate::str::contains("Sales_Data"))
        .stdout(predicate::str::contains("2 sheets total"));
}

#[test]
fn test_sheets_missing_source_fails() {
    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.args(["sheets", "no-such-file.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source workbook not found"));
}

#[test]
fn test_sheets_does_not_write_anything() {
    let tmp = TempDir::new().unwrap();
    let xlsx = tmp.path().join("db.xlsx");
    write_fixture(&xlsx);

    let dir_entries = |path: &Path| {
        let mut entries: Vec<_> = std::fs::read_dir(path)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        entries.sort();
        entries
    };

    let before = dir_entries(tmp.path());

    let mut cmd = Command::cargo_bin("sheetlite").unwrap();
    cmd.arg("sheets").arg(&xlsx).assert().success();

    assert_eq!(before, dir_entries(tmp.path()));
}
