//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`bump`]: one invocation of the version bump, start to finish
//! - [`dto`]: what a bump reports back to the caller
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod bump;
pub mod dto;

pub use bump::{BumpPhase, BumpRequest, BumpVersion};
pub use dto::{BumpMode, BumpOutcome};
