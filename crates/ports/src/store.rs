// crates/ports/src/store.rs
use verbump_domain::VersionRecord;
use verbump_shared_kernel::Result;

/// Port for the persisted version record.
pub trait VersionStore {
    /// True iff the record is present and statable. Stat failures of any kind
    /// count as absent.
    fn exists(&self) -> bool;

    /// Write a fresh record holding the base version and return it.
    fn initialize(&self) -> Result<VersionRecord>;

    fn load(&self) -> Result<VersionRecord>;

    /// Replace the stored record with `record`.
    fn persist(&self, record: &VersionRecord) -> Result<()>;
}
