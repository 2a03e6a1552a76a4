// crates/ports/src/mirror.rs
use verbump_shared_kernel::Result;

/// Port for the secondary plain-text copy of the current version.
pub trait VersionMirror {
    fn mirror(&self, version: &str) -> Result<()>;
}
