// src/bootstrap.rs
use anyhow::{Context, Result};
use verbump_infra::{JsonVersionStore, TextMirror};
use verbump_ports::VersionMirror;
use verbump_usecase::{BumpOutcome, BumpVersion};

use crate::config::Config;

/// Wire the file adapters from `config` and run one bump.
pub fn run_with_config(config: &Config) -> Result<BumpOutcome> {
    let store = JsonVersionStore::new(&config.version_file);
    let mirror = config.mirror_file.as_ref().map(TextMirror::new);
    let usecase = BumpVersion::new(&store, mirror.as_ref().map(|m| m as &dyn VersionMirror));

    usecase
        .run(&config.bump_request())
        .with_context(|| format!("could not update {}", config.version_file.display()))
}
