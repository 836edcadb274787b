use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Percentage change from `previous` to `current`.
///
/// Undefined (`None`) when `previous` is zero: such a page has no baseline and
/// must never take part in decline rankings.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_change(current: u64, previous: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    let previous = previous as f64;
    Some((current as f64 - previous) / previous * 100.0)
}

/// Search performance of one page over the recent window, with the prior
/// window's clicks for comparison.
///
/// Immutable once built: `change_pct` is derived at construction and the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(from = "PerformanceFields")]
pub struct PagePerformance {
    url: String,
    clicks_recent: u64,
    clicks_prior: u64,
    impressions: u64,
    ctr: f64,
    position: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    change_pct: Option<f64>,
}

/// Wire shape accepted on deserialization; `change_pct` is always recomputed.
#[derive(Deserialize, JsonSchema)]
struct PerformanceFields {
    url: String,
    clicks_recent: u64,
    clicks_prior: u64,
    impressions: u64,
    ctr: f64,
    position: f64,
}

impl From<PerformanceFields> for PagePerformance {
    fn from(fields: PerformanceFields) -> Self {
        Self::new(
            fields.url,
            fields.clicks_recent,
            fields.clicks_prior,
            fields.impressions,
            fields.ctr,
            fields.position,
        )
    }
}

impl PagePerformance {
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        clicks_recent: u64,
        clicks_prior: u64,
        impressions: u64,
        ctr: f64,
        position: f64,
    ) -> Self {
        Self {
            url: url.into(),
            clicks_recent,
            clicks_prior,
            impressions,
            ctr,
            position,
            change_pct: percent_change(clicks_recent, clicks_prior),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn clicks_recent(&self) -> u64 {
        self.clicks_recent
    }

    #[must_use]
    pub const fn clicks_prior(&self) -> u64 {
        self.clicks_prior
    }

    #[must_use]
    pub const fn impressions(&self) -> u64 {
        self.impressions
    }

    #[must_use]
    pub const fn ctr(&self) -> f64 {
        self.ctr
    }

    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Period-over-period click change in percent, absent without a prior baseline.
    #[must_use]
    pub const fn change_pct(&self) -> Option<f64> {
        self.change_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_is_computed_against_prior() {
        let perf = PagePerformance::new("/x", 400, 500, 9_000, 0.04, 6.2);
        assert_eq!(perf.change_pct(), Some(-20.0));
    }

    #[test]
    fn zero_prior_leaves_change_undefined() {
        let perf = PagePerformance::new("/new", 250, 0, 1_000, 0.25, 3.0);
        assert_eq!(perf.change_pct(), None);

        let json = serde_json::to_value(&perf).unwrap();
        assert!(json.get("change_pct").is_none());
    }

    #[test]
    fn deserialization_recomputes_change() {
        let json = r#"{"url":"/x","clicks_recent":50,"clicks_prior":100,"impressions":10,"ctr":0.5,"position":2.0,"change_pct":12345.0}"#;
        let perf: PagePerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.change_pct(), Some(-50.0));
    }

    #[test]
    fn percent_change_handles_growth() {
        assert_eq!(percent_change(150, 100), Some(50.0));
        assert_eq!(percent_change(0, 0), None);
    }
}
