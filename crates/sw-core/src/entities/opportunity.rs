use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A page ranking just below the first results page with enough impressions
/// to be worth pushing up.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PageTwoOpportunity {
    pub url: String,
    pub position: f64,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
}

/// Site-wide click totals for the two windows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrafficSummary {
    pub clicks_recent: u64,
    pub clicks_prior: u64,
    /// Absent when the prior window had no clicks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
}
