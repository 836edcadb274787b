//! One audit run: every step over whatever inputs were supplied.

use serde_json::Value;
use sw_core::enums::PipelineStep;
use sw_core::entities::{Report, SkippedStep};
use sw_core::{ReportWindows, RunClock};
use tracing::{info, warn};

use crate::aggregate::{Findings, RunSummary, aggregate};
use crate::decay::correlate_decay;
use crate::freshness::assess_freshness;
use crate::links::LinkGraph;
use crate::normalize::normalize_metrics;
use crate::page_two::find_page_two;
use crate::rank::rank_decay;
use crate::settings::AnalysisSettings;
use crate::store::DocumentStore;
use crate::traffic::summarize_traffic;

/// Raw collaborator output for one run. `None` means the collaborator was not
/// consulted or failed; steps that need it are skipped, never zero-filled.
#[derive(Debug, Clone, Default)]
pub struct AuditInputs {
    pub recent: Option<Vec<Value>>,
    pub prior: Option<Vec<Value>>,
    pub documents: Option<Vec<Value>>,
    /// Date ranges the search rows were fetched for, echoed into the report.
    pub windows: Option<ReportWindows>,
}

const NO_RECENT: &str = "recent search window unavailable";
const NO_PRIOR: &str = "prior search window unavailable";
const NO_DOCUMENTS: &str = "documents unavailable";

/// Run every step and assemble the report.
///
/// Single pass and side-effect free apart from logging: the same inputs,
/// settings and clock always produce the same report.
#[must_use]
pub fn run_audit(inputs: &AuditInputs, settings: &AnalysisSettings, clock: &RunClock) -> Report {
    let metrics = inputs
        .recent
        .as_deref()
        .map(|recent| normalize_metrics(recent, inputs.prior.as_deref()));
    let built = inputs.documents.as_deref().map(DocumentStore::build);

    let mut findings = Findings::default();
    let mut skipped = Vec::new();

    // Decay needs every input.
    let missing: Vec<&str> = [
        (inputs.recent.is_none(), NO_RECENT),
        (inputs.prior.is_none(), NO_PRIOR),
        (inputs.documents.is_none(), NO_DOCUMENTS),
    ]
    .into_iter()
    .filter_map(|(absent, reason)| absent.then_some(reason))
    .collect();
    match (&metrics, &built) {
        (Some(metrics), Some(built)) if missing.is_empty() => {
            let candidates = correlate_decay(&metrics.pages, &built.store, &settings.decay, clock);
            info!(candidates = candidates.len(), "decay correlation complete");
            findings.decay = rank_decay(candidates);
        }
        _ => skip(&mut skipped, PipelineStep::Decay, &missing.join(", ")),
    }

    if let Some(built) = &built {
        let graph = LinkGraph::build(&built.store);
        findings.orphans = graph.orphans(&built.store);
        findings.hubs = graph.hubs(&built.store, settings.hub_threshold);
        let summary = graph.summary(
            findings.orphans.len(),
            findings.hubs.len(),
            settings.hub_threshold,
        );
        info!(
            nodes = summary.node_count,
            edges = summary.edge_count,
            orphans = summary.orphan_count,
            hubs = summary.hub_count,
            "link graph built"
        );
        findings.link_graph = Some(summary);

        findings.freshness = assess_freshness(&built.store, &settings.freshness, clock);
        info!(
            neglected = findings.freshness.neglected.len(),
            needs_year_update = findings.freshness.needs_year_update.len(),
            "freshness assessed"
        );
    } else {
        skip(&mut skipped, PipelineStep::LinkGraph, NO_DOCUMENTS);
        skip(&mut skipped, PipelineStep::Freshness, NO_DOCUMENTS);
    }

    if let Some(metrics) = &metrics {
        findings.page_two = find_page_two(&metrics.pages, &settings.page_two);
        info!(opportunities = findings.page_two.len(), "page-two scan complete");

        match metrics.totals.prior {
            Some(prior) => findings.traffic = Some(summarize_traffic(metrics.totals.recent, prior)),
            None => skip(&mut skipped, PipelineStep::Traffic, NO_PRIOR),
        }
    } else {
        skip(&mut skipped, PipelineStep::PageTwo, NO_RECENT);
        skip(&mut skipped, PipelineStep::Traffic, NO_RECENT);
    }

    let skipped_records = metrics.as_ref().map_or(0, |m| m.rejected.len())
        + built.as_ref().map_or(0, |b| b.rejected.len());

    let run = RunSummary {
        generated_at: clock.now(),
        windows: inputs.windows,
        total_documents: built.as_ref().map_or(0, |b| b.store.len()),
        total_pages_with_data: metrics.as_ref().map_or(0, |m| m.pages.len()),
        skipped_records,
        duplicate_documents: built.as_ref().map_or(0, |b| b.duplicates),
        skipped_steps: skipped,
    };

    aggregate(findings, run, &settings.top_n)
}

fn skip(skipped: &mut Vec<SkippedStep>, step: PipelineStep, reason: &str) {
    warn!(%step, reason, "skipping step");
    skipped.push(SkippedStep {
        step,
        reason: reason.to_string(),
    });
}
