use std::fmt;

use verbump_domain::{ParseMode, VersionRecord};
use verbump_ports::{VersionMirror, VersionStore};
use verbump_shared_kernel::{ApplicationError, Result, VerbumpError};

use crate::dto::{BumpMode, BumpOutcome};

/// States of a single invocation:
/// `Start -> {SetExplicit | Initialized | AutoIncrement} -> Persisted -> MirrorAttempted -> End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpPhase {
    Start,
    SetExplicit,
    Initialized,
    AutoIncrement,
    Persisted,
    MirrorAttempted,
    End,
}

impl fmt::Display for BumpPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::SetExplicit => "set-explicit",
            Self::Initialized => "initialize",
            Self::AutoIncrement => "auto-increment",
            Self::Persisted => "persist",
            Self::MirrorAttempted => "mirror",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BumpRequest {
    /// Literal version to store instead of incrementing.
    pub explicit: Option<String>,
    pub mode: ParseMode,
}

impl BumpRequest {
    pub fn new(explicit: Option<String>, mode: ParseMode) -> Self {
        Self { explicit: explicit.filter(|v| !v.is_empty()), mode }
    }
}

pub struct BumpVersion<'a> {
    store: &'a dyn VersionStore,
    mirror: Option<&'a dyn VersionMirror>,
}

impl<'a> BumpVersion<'a> {
    pub fn new(store: &'a dyn VersionStore, mirror: Option<&'a dyn VersionMirror>) -> Self {
        Self { store, mirror }
    }

    pub fn run(&self, request: &BumpRequest) -> Result<BumpOutcome> {
        let mut trace = vec![BumpPhase::Start];

        let (record, previous, mode) = match request.explicit.as_deref() {
            Some(explicit) => {
                trace.push(BumpPhase::SetExplicit);
                log::debug!("setting explicit version {explicit}");
                let record = VersionRecord::new(explicit);
                record.validate(request.mode).map_err(|e| failed(BumpPhase::SetExplicit, e))?;
                self.persist(&record, &mut trace)?;
                (record, None, BumpMode::Explicit)
            }
            None if !self.store.exists() => {
                trace.push(BumpPhase::Initialized);
                log::debug!("no version file, starting from base version");
                let record = self.store.initialize().map_err(|e| failed(BumpPhase::Initialized, e))?;
                trace.push(BumpPhase::Persisted);
                (record, None, BumpMode::Initialized)
            }
            None => {
                trace.push(BumpPhase::AutoIncrement);
                let mut record = self.store.load().map_err(|e| failed(BumpPhase::AutoIncrement, e))?;
                let previous = record.version.clone();
                record.increment(request.mode).map_err(|e| failed(BumpPhase::AutoIncrement, e))?;
                log::debug!("incremented {previous} -> {}", record.version);
                self.persist(&record, &mut trace)?;
                (record, Some(previous), BumpMode::Incremented)
            }
        };
        log::info!("version is now {}", record.version);

        let mirror_error = self.mirror.and_then(|mirror| {
            trace.push(BumpPhase::MirrorAttempted);
            match mirror.mirror(&record.version) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("could not write mirror file: {e}");
                    Some(e.to_string())
                }
            }
        });
        trace.push(BumpPhase::End);

        Ok(BumpOutcome { version: record.version, previous, mode, mirror_error, trace })
    }

    fn persist(&self, record: &VersionRecord, trace: &mut Vec<BumpPhase>) -> Result<()> {
        self.store.persist(record).map_err(|e| failed(BumpPhase::Persisted, e))?;
        trace.push(BumpPhase::Persisted);
        Ok(())
    }
}

fn failed(phase: BumpPhase, source: impl Into<VerbumpError>) -> VerbumpError {
    ApplicationError::BumpFailed { phase: phase.to_string(), source: Box::new(source.into()) }.into()
}
