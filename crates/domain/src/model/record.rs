use serde::{Deserialize, Serialize};
use verbump_shared_kernel::DomainResult;

use crate::{defaults::BASE_VERSION, model::Version, options::ParseMode};

/// The persisted record: `{"version":"MAJOR.MINOR.PATCH"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }

    /// Record holding [`BASE_VERSION`].
    pub fn base() -> Self {
        Self::new(BASE_VERSION)
    }

    /// Raise the patch component in place and return the new version string.
    /// On error the record is left unchanged.
    pub fn increment(&mut self, mode: ParseMode) -> DomainResult<String> {
        let next = Version::parse(&self.version, mode)?.bump_patch()?;
        self.version = next.to_string();
        Ok(self.version.clone())
    }

    /// Check the current value against `mode` without changing it.
    pub fn validate(&self, mode: ParseMode) -> DomainResult<()> {
        Version::parse(&self.version, mode).map(|_| ())
    }
}

impl Default for VersionRecord {
    fn default() -> Self {
        Self::base()
    }
}
