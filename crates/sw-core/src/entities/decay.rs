use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Document, PagePerformance};

/// A document that is both losing search traffic and content-stale.
///
/// Recomputed on every run; never persisted as authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecayCandidate {
    pub document: Document,
    pub performance: PagePerformance,
    pub age_days: u32,
}
