//! Content freshness: neglected posts, recent edits, and outdated years in titles.

use sw_core::RunClock;
use sw_core::entities::{Document, FreshnessReport, StaleDocument, YearUpdateCandidate};

use crate::settings::FreshnessThresholds;
use crate::store::DocumentStore;

/// Classify every document by time since its last modification.
///
/// Lists are complete and ranked; truncation happens in the aggregator.
#[must_use]
pub fn assess_freshness(
    store: &DocumentStore,
    thresholds: &FreshnessThresholds,
    clock: &RunClock,
) -> FreshnessReport {
    let ages: Vec<StaleDocument> = store.iter().map(|doc| stale_entry(doc, clock)).collect();

    let mut neglected: Vec<StaleDocument> = ages
        .iter()
        .filter(|entry| entry.days_since_update > thresholds.neglected_after_days)
        .cloned()
        .collect();
    neglected.sort_by(|a, b| b.days_since_update.cmp(&a.days_since_update));

    let mut recently_updated: Vec<StaleDocument> = ages
        .into_iter()
        .filter(|entry| entry.days_since_update <= thresholds.recent_within_days)
        .collect();
    recently_updated.sort_by_key(|entry| entry.days_since_update);

    let needs_year_update = store
        .iter()
        .filter_map(|doc| year_update(doc, clock.year(), thresholds.year_lookback))
        .collect();

    FreshnessReport {
        neglected,
        recently_updated,
        needs_year_update,
    }
}

fn stale_entry(doc: &Document, clock: &RunClock) -> StaleDocument {
    StaleDocument {
        id: doc.id.clone(),
        url: doc.url.clone(),
        title: doc.title.clone(),
        modified_at: doc.modified_at,
        days_since_update: clock.age_days(doc.modified_at),
    }
}

fn year_update(doc: &Document, current_year: i32, lookback: u32) -> Option<YearUpdateCandidate> {
    let mentioned_years = outdated_years(&doc.title, current_year, lookback);
    if mentioned_years.is_empty() {
        return None;
    }
    Some(YearUpdateCandidate {
        id: doc.id.clone(),
        url: doc.url.clone(),
        title: doc.title.clone(),
        mentioned_years,
        suggested_year: current_year,
    })
}

/// Years from the `lookback` years before `current_year` that appear in
/// `text` as standalone four-digit numbers. Sorted, without repeats.
#[must_use]
pub fn outdated_years(text: &str, current_year: i32, lookback: u32) -> Vec<i32> {
    let oldest = current_year.saturating_sub(i32::try_from(lookback).unwrap_or(i32::MAX));
    let mut years: Vec<i32> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse().ok())
        .filter(|year| (oldest..current_year).contains(year))
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::settings::AnalysisSettings;

    fn clock() -> RunClock {
        RunClock::at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    }

    fn doc(url: &str, title: &str, modified_days_ago: i64) -> Document {
        let modified_at: DateTime<Utc> = clock().now() - Duration::days(modified_days_ago);
        Document {
            id: url.into(),
            url: url.into(),
            title: title.into(),
            published_at: modified_at - Duration::days(30),
            modified_at,
            body: String::new(),
        }
    }

    #[test]
    fn classifies_by_days_since_update() {
        let store: DocumentStore = [
            doc("/fresh", "Fresh", 3),
            doc("/old", "Old", 400),
            doc("/middle", "Middle", 90),
            doc("/older", "Older", 700),
            doc("/edge", "Edge", 30),
            doc("/just-over", "Just over", 181),
        ]
        .into_iter()
        .collect();

        let report = assess_freshness(&store, &AnalysisSettings::default().freshness, &clock());

        let neglected: Vec<(&str, u32)> = report
            .neglected
            .iter()
            .map(|d| (d.url.as_str(), d.days_since_update))
            .collect();
        assert_eq!(neglected, vec![("/older", 700), ("/old", 400), ("/just-over", 181)]);

        let recent: Vec<&str> = report.recently_updated.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(recent, vec!["/fresh", "/edge"]);
        assert!(report.needs_year_update.is_empty());
    }

    #[test]
    fn titles_with_previous_years_need_update() {
        let store: DocumentStore = [
            doc("/best", "Best Griddles of 2025", 10),
            doc("/current", "Griddle Deals 2026", 10),
            doc("/both", "2024 vs 2025: What Changed", 10),
            doc("/ancient", "Top Picks 2019", 10),
        ]
        .into_iter()
        .collect();

        let report = assess_freshness(&store, &AnalysisSettings::default().freshness, &clock());
        let found: Vec<(&str, Vec<i32>)> = report
            .needs_year_update
            .iter()
            .map(|c| (c.url.as_str(), c.mentioned_years.clone()))
            .collect();
        assert_eq!(found, vec![("/best", vec![2025]), ("/both", vec![2024, 2025])]);
        assert!(report.needs_year_update.iter().all(|c| c.suggested_year == 2026));
    }

    #[rstest]
    #[case("Best of 2025", vec![2025])]
    #[case("Models 12025 and 20250", vec![])]
    #[case("2025-2025 recap (2024)", vec![2024, 2025])]
    #[case("No year here", vec![])]
    #[case("Plans for 2027", vec![])]
    fn finds_standalone_years(#[case] title: &str, #[case] expected: Vec<i32>) {
        assert_eq!(outdated_years(title, 2026, 2), expected);
    }
}
