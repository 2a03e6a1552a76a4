// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Scratch directory acting as the working directory of one `verbump` run.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    #[allow(dead_code)]
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.file(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.file(rel)).unwrap()
    }

    /// Version stored in `version.json`.
    #[allow(dead_code)]
    pub fn stored_version(&self) -> String {
        let value: serde_json::Value = serde_json::from_str(&self.read("version.json")).unwrap();
        value["version"].as_str().unwrap().to_string()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_verbump"));
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}
