// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod json_store;
pub mod persistence;
pub mod text_mirror;

pub use json_store::JsonVersionStore;
pub use text_mirror::TextMirror;
