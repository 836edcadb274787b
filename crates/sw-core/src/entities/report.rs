use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    DecayCandidate, FreshnessReport, HubDocument, LinkGraphSummary, OrphanDocument,
    PageTwoOpportunity, TrafficSummary,
};
use crate::enums::PipelineStep;
use crate::window::ReportWindows;

/// Summary counts. Category counts are taken before top-N truncation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportStats {
    pub total_documents: usize,
    pub total_pages_with_data: usize,
    pub decay_count: usize,
    pub orphan_count: usize,
    pub hub_count: usize,
    pub page_two_count: usize,
    pub neglected_count: usize,
    pub recently_updated_count: usize,
    pub needs_year_update_count: usize,
    /// Input records rejected at the ingestion boundary.
    pub skipped_records: usize,
    /// Document records that replaced an earlier record with the same URL.
    pub duplicate_documents: usize,
}

/// A pipeline step that did not run, and why.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedStep {
    pub step: PipelineStep,
    pub reason: String,
}

/// The exported result of one audit run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<ReportWindows>,
    pub decay_candidates: Vec<DecayCandidate>,
    pub orphaned_documents: Vec<OrphanDocument>,
    pub high_authority_documents: Vec<HubDocument>,
    pub page_two_opportunities: Vec<PageTwoOpportunity>,
    pub freshness: FreshnessReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic: Option<TrafficSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_graph: Option<LinkGraphSummary>,
    pub stats: ReportStats,
    #[serde(default)]
    pub skipped_steps: Vec<SkippedStep>,
}

impl Report {
    /// Whether the given step was skipped in this run.
    #[must_use]
    pub fn was_skipped(&self, step: PipelineStep) -> bool {
        self.skipped_steps.iter().any(|skipped| skipped.step == step)
    }
}
