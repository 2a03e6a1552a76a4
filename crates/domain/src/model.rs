pub mod record;
pub mod version;

pub use record::VersionRecord;
pub use version::Version;
