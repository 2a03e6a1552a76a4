// tests/integration/failures.rs
use std::fs;

use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn too_few_components_is_a_reported_error() {
    let ws = TempWorkspace::new();
    ws.write("version.json", r#"{"version":"1.0"}"#);

    ws.command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("auto-increment")));

    assert_eq!(ws.stored_version(), "1.0");
    assert!(!ws.file("versionTemporary.txt").exists());
}

#[test]
fn corrupt_version_file_is_fatal() {
    let ws = TempWorkspace::new();
    ws.write("version.json", r#"{"version": 12}"#);

    ws.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse version record"));
}

#[test]
fn unwritable_mirror_is_not_fatal() {
    let ws = TempWorkspace::new();
    fs::create_dir(ws.file("versionTemporary.txt")).unwrap();

    ws.command()
        .assert()
        .success()
        .stdout("1.0.0\n")
        .stderr(predicate::str::contains("could not write mirror file"));

    assert_eq!(ws.stored_version(), "1.0.0");
}

#[test]
fn strict_rejects_bad_explicit_version() {
    let ws = TempWorkspace::new();

    ws.command().args(["--strict", "-v", "1.2"]).assert().failure();

    assert!(!ws.file("version.json").exists());
}
