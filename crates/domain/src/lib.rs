#![allow(clippy::multiple_crate_versions)]

pub mod defaults;
pub mod model;
pub mod options;

pub use model::{Version, VersionRecord};
pub use options::ParseMode;
