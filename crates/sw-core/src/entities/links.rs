use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A document no other document links to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrphanDocument {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// A document whose outbound internal-link count exceeds the hub threshold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HubDocument {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Out-degree; the ranking key.
    pub outbound: usize,
    /// In-degree; display only.
    pub backlinks: usize,
}

/// Shape of the internal link graph for one run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkGraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    /// Weakly connected components.
    pub components: usize,
    pub orphan_count: usize,
    pub hub_count: usize,
    pub hub_threshold: usize,
}
