// crates/infra/src/json_store.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use verbump_domain::VersionRecord;
use verbump_ports::VersionStore;
use verbump_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// [`VersionStore`] backed by a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonVersionStore {
    path: PathBuf,
}

impl JsonVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(record: &VersionRecord) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(record)?)
    }

    fn write_error(&self, source: std::io::Error) -> InfrastructureError {
        InfrastructureError::FileWrite { path: self.path.clone(), source }
    }
}

impl VersionStore for JsonVersionStore {
    fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    fn initialize(&self) -> Result<VersionRecord> {
        let record = VersionRecord::base();
        let data = Self::encode(&record)?;
        FileWriter::overwrite(&self.path, &data).map_err(|e| self.write_error(e))?;
        log::debug!("created {} with {}", self.path.display(), record.version);
        Ok(record)
    }

    fn load(&self) -> Result<VersionRecord> {
        let data = FileReader::read_to_end(&self.path)
            .map_err(|source| InfrastructureError::FileRead { path: self.path.clone(), source })?;
        let record = serde_json::from_slice(&data)
            .map_err(|e| InfrastructureError::Parse { path: self.path.clone(), details: e.to_string() })?;
        Ok(record)
    }

    fn persist(&self, record: &VersionRecord) -> Result<()> {
        let data = Self::encode(record)?;
        FileWriter::overwrite(&self.path, &data).map_err(|e| self.write_error(e))?;
        log::debug!("wrote {} to {}", record.version, self.path.display());
        Ok(())
    }
}
