//! Record kinds and pipeline steps for Sitewise.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// The collaborator stream an input record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    SearchRow,
    Document,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchRow => "search_row",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PipelineStep
// ---------------------------------------------------------------------------

/// A step of the audit pipeline that can be skipped when its inputs are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    Decay,
    LinkGraph,
    PageTwo,
    Freshness,
    Traffic,
}

impl PipelineStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decay => "decay",
            Self::LinkGraph => "link_graph",
            Self::PageTwo => "page_two",
            Self::Freshness => "freshness",
            Self::Traffic => "traffic",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
