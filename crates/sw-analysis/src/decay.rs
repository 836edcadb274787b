//! Decay correlator: declining pages joined with stale documents.

use sw_core::RunClock;
use sw_core::entities::{DecayCandidate, PagePerformance};

use crate::normalize::PerformanceSet;
use crate::settings::DecayThresholds;
use crate::store::DocumentStore;

/// Whether a page lost enough previously-high-value traffic to matter.
///
/// A page without a prior baseline has no change percentage and is never
/// declining, whatever the thresholds.
#[must_use]
pub fn is_declining(performance: &PagePerformance, thresholds: &DecayThresholds) -> bool {
    performance.clicks_prior() >= thresholds.high_value_clicks
        && performance
            .change_pct()
            .is_some_and(|change| change < thresholds.decline_pct)
}

/// Emit a candidate for every declining page whose document is stale.
///
/// Pages with no matching document (category pages, external URLs) are
/// skipped. Output follows the performance set's order; ranking is left to
/// [`crate::rank::rank_decay`].
#[must_use]
pub fn correlate_decay(
    performance: &PerformanceSet,
    store: &DocumentStore,
    thresholds: &DecayThresholds,
    clock: &RunClock,
) -> Vec<DecayCandidate> {
    performance
        .iter()
        .filter(|page| is_declining(page, thresholds))
        .filter_map(|page| {
            let document = store.get(page.url())?;
            let age_days = clock.age_days(document.published_at);
            (age_days > thresholds.stale_after_days).then(|| DecayCandidate {
                document: document.clone(),
                performance: page.clone(),
                age_days,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rstest::rstest;
    use sw_core::entities::Document;

    use super::*;

    fn clock() -> RunClock {
        RunClock::at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    }

    fn document(url: &str, age_days: i64) -> Document {
        let published_at = clock().now() - Duration::days(age_days);
        Document {
            id: url.trim_start_matches('/').into(),
            url: url.into(),
            title: url.into(),
            published_at,
            modified_at: published_at,
            body: String::new(),
        }
    }

    fn thresholds() -> DecayThresholds {
        DecayThresholds {
            high_value_clicks: 100,
            decline_pct: -10.0,
            stale_after_days: 365,
        }
    }

    #[test]
    fn stale_declining_page_is_a_candidate() {
        let performance: PerformanceSet = [
            PagePerformance::new("/x", 400, 500, 10_000, 0.04, 5.0),
            PagePerformance::new("/y", 0, 5, 300, 0.0, 30.0),
        ]
        .into_iter()
        .collect();
        let store: DocumentStore = [document("/x", 400), document("/y", 900)].into_iter().collect();

        let candidates = correlate_decay(&performance, &store, &thresholds(), &clock());

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].document.url, "/x");
        assert_eq!(candidates[0].age_days, 400);
        assert_eq!(candidates[0].performance.change_pct(), Some(-20.0));
    }

    #[test]
    fn pages_without_documents_are_skipped() {
        let performance: PerformanceSet = [PagePerformance::new("/category/griddles/", 100, 900, 0, 0.0, 3.0)]
            .into_iter()
            .collect();
        let candidates = correlate_decay(&performance, &DocumentStore::default(), &thresholds(), &clock());
        assert!(candidates.is_empty());
    }

    #[rstest]
    #[case::exactly_high_value(100, 89, 400, true)]
    #[case::below_high_value(99, 10, 400, false)]
    #[case::decline_at_threshold(200, 180, 400, false)]
    #[case::decline_past_threshold(200, 179, 400, true)]
    #[case::age_at_threshold(200, 100, 365, false)]
    #[case::age_past_threshold(200, 100, 366, true)]
    #[case::growth(200, 300, 900, false)]
    fn thresholds_are_all_required(
        #[case] clicks_prior: u64,
        #[case] clicks_recent: u64,
        #[case] age_days: i64,
        #[case] expected: bool,
    ) {
        let performance: PerformanceSet =
            [PagePerformance::new("/p", clicks_recent, clicks_prior, 1_000, 0.1, 4.0)]
                .into_iter()
                .collect();
        let store: DocumentStore = [document("/p", age_days)].into_iter().collect();

        let candidates = correlate_decay(&performance, &store, &thresholds(), &clock());
        assert_eq!(!candidates.is_empty(), expected);
    }

    #[test]
    fn zero_prior_never_declines_even_with_zero_threshold() {
        let loose = DecayThresholds {
            high_value_clicks: 0,
            decline_pct: 0.0,
            stale_after_days: 0,
        };
        let page = PagePerformance::new("/new", 0, 0, 10, 0.0, 40.0);
        assert!(!is_declining(&page, &loose));
    }
}
