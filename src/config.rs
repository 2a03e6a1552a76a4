// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use verbump_domain::{
    ParseMode,
    defaults::{DEFAULT_MIRROR_FILE, DEFAULT_VERSION_FILE},
};
use verbump_usecase::BumpRequest;

use crate::cli::Args;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub set_version: Option<String>,
    pub version_file: PathBuf,
    /// `None` disables the mirror step.
    pub mirror_file: Option<PathBuf>,
    pub mode: ParseMode,
    pub log_level: LevelFilter,
    pub quiet: bool,
}

impl Config {
    pub fn bump_request(&self) -> BumpRequest {
        BumpRequest::new(self.set_version.clone(), self.mode)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            set_version: None,
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            mirror_file: Some(PathBuf::from(DEFAULT_MIRROR_FILE)),
            mode: ParseMode::default(),
            log_level: LevelFilter::Warn,
            quiet: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            set_version: args.set_version,
            version_file: args.file,
            mirror_file: (!args.no_mirror).then_some(args.mirror),
            mode: ParseMode::from_strict_flag(args.strict),
            log_level: args.log_level.into(),
            quiet: args.quiet,
        }
    }
}
