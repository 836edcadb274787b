//! Site-wide click totals across both windows.

use sw_core::entities::{TrafficSummary, percent_change};

#[must_use]
pub fn summarize_traffic(clicks_recent: u64, clicks_prior: u64) -> TrafficSummary {
    TrafficSummary {
        clicks_recent,
        clicks_prior,
        change_pct: percent_change(clicks_recent, clicks_prior),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_against_prior_total() {
        let summary = summarize_traffic(5_100, 6_000);
        assert_eq!(summary.change_pct, Some(-15.0));
    }

    #[test]
    fn empty_prior_has_no_change() {
        assert_eq!(summarize_traffic(10, 0).change_pct, None);
    }
}
