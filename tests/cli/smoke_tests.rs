use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn shows_help() {
    TempWorkspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verbump").and(predicate::str::contains("--set-version")));
}

#[test]
fn shows_version() {
    TempWorkspace::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    TempWorkspace::new().command().arg("--bogus").assert().code(2);
}

#[test]
fn quiet_prints_nothing() {
    let ws = TempWorkspace::new();
    ws.command().arg("--quiet").assert().success().stdout(predicate::str::is_empty());
    assert_eq!(ws.read("versionTemporary.txt"), "1.0.0");
}
