//! Result aggregator: ranked findings plus counts into one [`Report`].

use chrono::{DateTime, Utc};
use sw_core::ReportWindows;
use sw_core::entities::{
    DecayCandidate, FreshnessReport, HubDocument, LinkGraphSummary, OrphanDocument,
    PageTwoOpportunity, Report, ReportStats, SkippedStep, TrafficSummary,
};

use crate::rank::top_n;
use crate::settings::TopN;

/// Every ranked list of a run, before truncation.
#[derive(Debug, Clone, Default)]
pub struct Findings {
    pub decay: Vec<DecayCandidate>,
    pub orphans: Vec<OrphanDocument>,
    pub hubs: Vec<HubDocument>,
    pub page_two: Vec<PageTwoOpportunity>,
    pub freshness: FreshnessReport,
    pub traffic: Option<TrafficSummary>,
    pub link_graph: Option<LinkGraphSummary>,
}

/// What the run saw of its inputs.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub windows: Option<ReportWindows>,
    pub total_documents: usize,
    pub total_pages_with_data: usize,
    pub skipped_records: usize,
    pub duplicate_documents: usize,
    pub skipped_steps: Vec<SkippedStep>,
}

/// Compose the report. Category counts are taken before truncation.
#[must_use]
pub fn aggregate(findings: Findings, run: RunSummary, limits: &TopN) -> Report {
    let stats = ReportStats {
        total_documents: run.total_documents,
        total_pages_with_data: run.total_pages_with_data,
        decay_count: findings.decay.len(),
        orphan_count: findings.orphans.len(),
        hub_count: findings.hubs.len(),
        page_two_count: findings.page_two.len(),
        neglected_count: findings.freshness.neglected.len(),
        recently_updated_count: findings.freshness.recently_updated.len(),
        needs_year_update_count: findings.freshness.needs_year_update.len(),
        skipped_records: run.skipped_records,
        duplicate_documents: run.duplicate_documents,
    };

    let FreshnessReport {
        neglected,
        recently_updated,
        needs_year_update,
    } = findings.freshness;

    Report {
        generated_at: run.generated_at,
        windows: run.windows,
        decay_candidates: top_n(findings.decay, limits.decay),
        orphaned_documents: top_n(findings.orphans, limits.orphans),
        high_authority_documents: top_n(findings.hubs, limits.hubs),
        page_two_opportunities: top_n(findings.page_two, limits.page_two),
        freshness: FreshnessReport {
            neglected: top_n(neglected, limits.neglected),
            recently_updated: top_n(recently_updated, limits.recently_updated),
            needs_year_update: top_n(needs_year_update, limits.needs_year_update),
        },
        traffic: findings.traffic,
        link_graph: findings.link_graph,
        stats,
        skipped_steps: run.skipped_steps,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::settings::AnalysisSettings;

    fn orphan(n: usize) -> OrphanDocument {
        OrphanDocument {
            id: n.to_string(),
            url: format!("/post-{n}"),
            title: format!("Post {n}"),
        }
    }

    #[test]
    fn counts_survive_truncation() {
        let findings = Findings {
            orphans: (0..30).map(orphan).collect(),
            ..Findings::default()
        };
        let run = RunSummary {
            total_documents: 30,
            skipped_records: 2,
            ..RunSummary::default()
        };

        let report = aggregate(findings, run, &AnalysisSettings::default().top_n);

        assert_eq!(report.orphaned_documents.len(), 20);
        assert_eq!(report.orphaned_documents[0].url, "/post-0");
        assert_eq!(report.stats.orphan_count, 30);
        assert_eq!(report.stats.total_documents, 30);
        assert_eq!(report.stats.skipped_records, 2);
        assert_eq!(report.stats.decay_count, 0);
    }
}
