// crates/domain/src/defaults.rs

/// Version written when no version file exists yet.
pub const BASE_VERSION: &str = "1.0.0";

pub const DEFAULT_VERSION_FILE: &str = "version.json";

/// Plain-text copy of the current version read by other build steps.
pub const DEFAULT_MIRROR_FILE: &str = "versionTemporary.txt";
