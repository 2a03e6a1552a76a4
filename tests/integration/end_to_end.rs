// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn first_run_creates_base_version() {
    let ws = TempWorkspace::new();

    ws.command().assert().success().stdout("1.0.0\n");

    assert_eq!(ws.read("version.json"), r#"{"version":"1.0.0"}"#);
    assert_eq!(ws.read("versionTemporary.txt"), "1.0.0");
}

#[test]
fn existing_version_is_incremented() {
    let ws = TempWorkspace::new();
    ws.write("version.json", r#"{"version":"2.3.4"}"#);

    ws.command().assert().success().stdout("2.3.5\n");

    assert_eq!(ws.stored_version(), "2.3.5");
    assert_eq!(ws.read("versionTemporary.txt"), "2.3.5");
}

#[test]
fn explicit_version_overwrites_anything() {
    let ws = TempWorkspace::new();
    ws.write("version.json", "this is not json");

    ws.command().args(["-v", "9.9.9"]).assert().success().stdout("9.9.9\n");

    assert_eq!(ws.stored_version(), "9.9.9");
    assert_eq!(ws.read("versionTemporary.txt"), "9.9.9");
}

#[test]
fn consecutive_runs_step_by_one() {
    let ws = TempWorkspace::new();
    ws.write("version.json", r#"{"version":"0.4.8"}"#);

    for expected in ["0.4.9", "0.4.10", "0.4.11"] {
        ws.command().assert().success();
        assert_eq!(ws.stored_version(), expected);
    }
}

#[test]
fn non_numeric_patch_is_coerced_unless_strict() {
    let ws = TempWorkspace::new();
    ws.write("version.json", r#"{"version":"1.0.x"}"#);

    ws.command()
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed version '1.0.x'"));
    assert_eq!(ws.stored_version(), "1.0.x");

    ws.command().assert().success().stdout("1.0.1\n");
}

#[test]
fn custom_paths_and_no_mirror() {
    let ws = TempWorkspace::new();

    ws.command().args(["--file", "meta.json", "--no-mirror"]).assert().success();

    assert_eq!(ws.read("meta.json"), r#"{"version":"1.0.0"}"#);
    assert!(!ws.file("version.json").exists());
    assert!(!ws.file("versionTemporary.txt").exists());

    ws.command().args(["-f", "meta.json", "-m", "v.txt"]).assert().success().stdout("1.0.1\n");
    assert_eq!(ws.read("v.txt"), "1.0.1");
}
