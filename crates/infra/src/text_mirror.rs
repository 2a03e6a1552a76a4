// crates/infra/src/text_mirror.rs
use std::path::{Path, PathBuf};

use verbump_ports::VersionMirror;
use verbump_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Writes the bare version string, without a trailing newline.
#[derive(Debug, Clone)]
pub struct TextMirror {
    path: PathBuf,
}

impl TextMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionMirror for TextMirror {
    fn mirror(&self, version: &str) -> Result<()> {
        FileWriter::overwrite(&self.path, version.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source })?;
        log::debug!("mirrored {version} to {}", self.path.display());
        Ok(())
    }
}
