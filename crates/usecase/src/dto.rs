use crate::bump::BumpPhase;

/// Which branch produced the final version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMode {
    Explicit,
    Initialized,
    Incremented,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub version: String,
    /// Version read from the store before incrementing, if one was read.
    pub previous: Option<String>,
    pub mode: BumpMode,
    /// Set when writing the mirror failed; the bump itself still counts.
    pub mirror_error: Option<String>,
    /// Phases visited, in order, starting with [`BumpPhase::Start`].
    pub trace: Vec<BumpPhase>,
}
