//! The explicit settings value passed into every pipeline step.

use serde::Serialize;
use sw_config::{AnalysisConfig, LimitsConfig, SitewiseConfig};

use crate::error::AnalysisError;

/// Thresholds that make a page a decay candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecayThresholds {
    /// Minimum prior-window clicks (inclusive).
    pub high_value_clicks: u64,
    /// Change in percent the page must fall below (exclusive).
    pub decline_pct: f64,
    /// Age in days the document must exceed.
    pub stale_after_days: u32,
}

/// Average-position band and impression floor for page-two opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageTwoBand {
    pub min_position: f64,
    pub max_position: f64,
    /// Impressions must exceed this.
    pub min_impressions: u64,
}

impl PageTwoBand {
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        (self.min_position..=self.max_position).contains(&position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreshnessThresholds {
    pub neglected_after_days: u32,
    pub recent_within_days: u32,
    pub year_lookback: u32,
}

/// How many entries of each ranked list make it into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopN {
    pub decay: usize,
    pub orphans: usize,
    pub hubs: usize,
    pub page_two: usize,
    pub neglected: usize,
    pub recently_updated: usize,
    pub needs_year_update: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisSettings {
    pub decay: DecayThresholds,
    /// Out-degree a document must exceed to be a hub.
    pub hub_threshold: usize,
    pub page_two: PageTwoBand,
    pub freshness: FreshnessThresholds,
    pub top_n: TopN,
}

impl AnalysisSettings {
    /// Build settings from the `analysis` and `limits` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Settings`] if the thresholds fail validation.
    pub fn new(analysis: &AnalysisConfig, limits: &LimitsConfig) -> Result<Self, AnalysisError> {
        analysis.validate()?;
        Ok(Self::from_sections(analysis, limits))
    }

    /// Build settings from a fully loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &SitewiseConfig) -> Result<Self, AnalysisError> {
        Self::new(&config.analysis, &config.limits)
    }

    const fn from_sections(analysis: &AnalysisConfig, limits: &LimitsConfig) -> Self {
        Self {
            decay: DecayThresholds {
                high_value_clicks: analysis.high_value_threshold,
                decline_pct: analysis.decline_threshold_pct,
                stale_after_days: analysis.stale_threshold_days,
            },
            hub_threshold: analysis.hub_threshold,
            page_two: PageTwoBand {
                min_position: analysis.page_two_min_position,
                max_position: analysis.page_two_max_position,
                min_impressions: analysis.page_two_min_impressions,
            },
            freshness: FreshnessThresholds {
                neglected_after_days: analysis.neglected_after_days,
                recent_within_days: analysis.recent_within_days,
                year_lookback: analysis.year_lookback,
            },
            top_n: TopN {
                decay: limits.decay,
                orphans: limits.orphans,
                hubs: limits.hubs,
                page_two: limits.page_two,
                neglected: limits.neglected,
                recently_updated: limits.recently_updated,
                needs_year_update: limits.needs_year_update,
            },
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self::from_sections(&AnalysisConfig::default(), &LimitsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_config_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.decay.high_value_clicks, 100);
        assert_eq!(settings.decay.decline_pct, -10.0);
        assert_eq!(settings.decay.stale_after_days, 365);
        assert_eq!(settings.hub_threshold, 5);
        assert_eq!(settings.top_n.decay, 20);
        assert_eq!(settings.top_n.orphans, 20);
        assert_eq!(settings.top_n.hubs, 10);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let analysis = AnalysisConfig {
            decline_threshold_pct: f64::NAN,
            ..Default::default()
        };
        let err = AnalysisSettings::new(&analysis, &LimitsConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("invalid analysis settings"));
    }

    #[test]
    fn page_two_band_is_inclusive() {
        let band = AnalysisSettings::default().page_two;
        assert!(band.contains(11.0));
        assert!(band.contains(20.0));
        assert!(!band.contains(10.9));
        assert!(!band.contains(20.1));
    }
}
