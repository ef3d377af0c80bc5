//! End-to-end tests for the mojifix binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mojifix() -> Command {
    Command::cargo_bin("mojifix").expect("mojifix binary")
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    mojifix()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_source_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    mojifix()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!missing.exists());
}

#[test]
fn test_repairs_in_place_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "cafe.txt", "CafÃ©\n");

    mojifix()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("utf-8"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "Café\n");
}

#[test]
fn test_writes_to_explicit_destination() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(&dir, "in.txt", "Bayč±ndč±r and Lukič‡\n");
    let dest = dir.path().join("out.txt");

    mojifix().arg(&source).arg(&dest).assert().success();

    assert_eq!(
        fs::read_to_string(&source).unwrap(),
        "Bayč±ndč±r and Lukič‡\n"
    );
    assert_eq!(fs::read_to_string(&dest).unwrap(), "Bayındır and Lukić\n");
}

#[test]
fn test_reports_corrupt_sequence_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "counts.txt", "GÃ¶teborg CafÃ©\n");

    mojifix()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 before, 0 after"));
}

#[test]
fn test_clean_file_survives_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "clean.txt", "Café déjà vu\nSÃO PAULO\n");

    mojifix().arg(&path).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Café déjà vu\nSÃO PAULO\n"
    );
}
