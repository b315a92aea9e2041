//! Integration tests for the billing engine CLI.
//!
//! These tests run the actual binary, drive the interactive shell over
//! stdin, and verify the bill artifacts written to a scratch directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = "product_code,product_name,price\n\
                       A1,Sparkler,10\n\
                       B2,Rocket,25.5\n\
                       C3,Fountain,12.75\n";

/// Creates a scratch working directory containing a catalog file.
fn setup_workdir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("catalog.csv"), CATALOG).unwrap();
    dir
}

/// Runs the binary in `dir` with the given stdin script and returns stdout.
fn run_shell(dir: &TempDir, script: &str) -> String {
    let mut cmd = Command::cargo_bin("billing-engine").unwrap();
    let assert = cmd
        .current_dir(dir.path())
        .arg("catalog.csv")
        .write_stdin(script)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Finds artifact files in `dir` by extension, sorted by name.
fn find_bills(dir: &TempDir, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.extension().map(|e| e == extension).unwrap_or(false)
                && p.file_name()
                    .map(|n| n.to_string_lossy().starts_with("bill_"))
                    .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}

#[test]
fn test_add_and_total() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 3\nadd B2 2\ntotal\nquit\n");

    assert!(output.contains("Loaded catalog with 3 products"));
    assert!(output.contains("Added: A1 - Sparkler - 10 x 3 = 30"));
    assert!(output.contains("Added: B2 - Rocket - 25.5 x 2 = 51"));
    assert!(output.contains("Total: 81"));
}

#[test]
fn test_generate_bill_writes_both_artifacts() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 3\nadd B2 2\nbill\nquit\n");

    assert!(output.contains("Saved"));

    let texts = find_bills(&dir, "txt");
    let docs = find_bills(&dir, "doc");
    assert_eq!(texts.len(), 1);
    assert_eq!(docs.len(), 1);

    let text = fs::read_to_string(&texts[0]).unwrap();
    assert!(text.starts_with("==== Wholesale Crackers Bill ===="));
    assert!(text.contains("A1 - Sparkler - 10 x 3 = 30"));
    assert!(text.contains("B2 - Rocket - 25.5 x 2 = 51"));
    assert!(text.ends_with("TOTAL: 81\n"));

    let doc = fs::read_to_string(&docs[0]).unwrap();
    assert!(doc.contains("Wholesale Crackers Bill"));
    assert!(doc.contains("TOTAL: 81"));
    assert!(doc.contains("- Page 1 -"));
}

#[test]
fn test_bill_clears_session() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 1\nbill\ntotal\nquit\n");

    assert!(output.contains("Saved"));
    assert!(output.contains("Total: 0"));
}

#[test]
fn test_unknown_code_reported_inline_and_session_continues() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 3\nadd Z9 1\ntotal\nquit\n");

    assert!(output.contains("Unknown product code 'Z9'"));
    assert!(output.contains("Total: 30"));
}

#[test]
fn test_invalid_quantities_reported_inline() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 0\nadd A1 -2\nadd A1 two\ntotal\nquit\n");

    assert!(output.contains("Invalid quantity 0"));
    assert!(output.contains("Invalid quantity -2"));
    assert!(output.contains("Invalid quantity 'two'"));
    assert!(output.contains("Total: 0"));
}

#[test]
fn test_empty_bill_is_refused() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "bill\nquit\n");

    assert!(output.contains("no items have been added"));
    assert!(find_bills(&dir, "txt").is_empty());
}

#[test]
fn test_clear_discards_items() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add A1 3\nclear\ntotal\nquit\n");

    assert!(output.contains("Cleared all items"));
    assert!(output.contains("Total: 0"));
}

#[test]
fn test_codes_accepted_case_insensitively() {
    let dir = setup_workdir();
    let output = run_shell(&dir, "add c3 2\ntotal\nquit\n");

    assert!(output.contains("Added: C3 - Fountain - 12.75 x 2 = 25.5"));
    assert!(output.contains("Total: 25.5"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("billing-engine").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing catalog file"));
}

#[test]
fn test_missing_catalog_file_error() {
    let mut cmd = Command::cargo_bin("billing-engine").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_malformed_catalog_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("catalog.csv"),
        "product_code,product_name,price\nA1,Sparkler,cheap\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("billing-engine").unwrap();
    cmd.current_dir(dir.path())
        .arg("catalog.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog row 2"));
}

#[test]
fn test_eof_ends_session_cleanly() {
    let dir = setup_workdir();
    let mut cmd = Command::cargo_bin("billing-engine").unwrap();
    cmd.current_dir(dir.path())
        .arg("catalog.csv")
        .write_stdin("add A1 1\n")
        .assert()
        .success();
}
