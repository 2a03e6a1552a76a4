//! # Ports
//!
//! Interface definitions for the files a version bump touches.
//!
//! - [`store`]: the persisted version record
//! - [`mirror`]: the plain-text copy consumed by other build steps
//!
//! The use case only sees these traits, so tests can swap in memory-backed
//! stubs for the real file adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod mirror;
pub mod store;

pub use mirror::VersionMirror;
pub use store::VersionStore;
