//! Opportunity ranker: ordering and top-N truncation of findings.

use std::cmp::Ordering;

use sw_core::entities::DecayCandidate;

/// Decay order: prior clicks descending, then the size of the drop
/// descending, then URL ascending so the order is total.
#[must_use]
pub fn compare_decay(a: &DecayCandidate, b: &DecayCandidate) -> Ordering {
    b.performance
        .clicks_prior()
        .cmp(&a.performance.clicks_prior())
        .then_with(|| drop_magnitude(b).total_cmp(&drop_magnitude(a)))
        .then_with(|| a.performance.url().cmp(b.performance.url()))
}

fn drop_magnitude(candidate: &DecayCandidate) -> f64 {
    candidate.performance.change_pct().map_or(0.0, f64::abs)
}

#[must_use]
pub fn rank_decay(mut candidates: Vec<DecayCandidate>) -> Vec<DecayCandidate> {
    candidates.sort_by(compare_decay);
    candidates
}

/// Keep the first `n` items of an already-ranked list.
#[must_use]
pub fn top_n<T>(mut ranked: Vec<T>, n: usize) -> Vec<T> {
    ranked.truncate(n);
    ranked
}
