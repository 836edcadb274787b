//! Audit thresholds.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Minimum prior-window clicks for a page to count as high value.
const fn default_high_value_threshold() -> u64 {
    100
}

/// Period-over-period change (percent) below which a page is declining.
const fn default_decline_threshold_pct() -> f64 {
    -10.0
}

/// Age in days past which a published document is stale.
const fn default_stale_threshold_days() -> u32 {
    365
}

/// Out-degree above which a document is a hub.
const fn default_hub_threshold() -> usize {
    5
}

const fn default_neglected_after_days() -> u32 {
    180
}

const fn default_recent_within_days() -> u32 {
    30
}

/// How many calendar years before the current one count as outdated in titles.
const fn default_year_lookback() -> u32 {
    2
}

const fn default_page_two_min_position() -> f64 {
    11.0
}

const fn default_page_two_max_position() -> f64 {
    20.0
}

const fn default_page_two_min_impressions() -> u64 {
    100
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: u64,

    #[serde(default = "default_decline_threshold_pct")]
    pub decline_threshold_pct: f64,

    #[serde(default = "default_stale_threshold_days")]
    pub stale_threshold_days: u32,

    #[serde(default = "default_hub_threshold")]
    pub hub_threshold: usize,

    /// Days without modification after which a document is neglected.
    #[serde(default = "default_neglected_after_days")]
    pub neglected_after_days: u32,

    /// Days within which a modification counts as recent.
    #[serde(default = "default_recent_within_days")]
    pub recent_within_days: u32,

    #[serde(default = "default_year_lookback")]
    pub year_lookback: u32,

    /// Best (lowest) average position of the page-two band, inclusive.
    #[serde(default = "default_page_two_min_position")]
    pub page_two_min_position: f64,

    /// Worst (highest) average position of the page-two band, inclusive.
    #[serde(default = "default_page_two_max_position")]
    pub page_two_max_position: f64,

    /// Impressions a page-two page must exceed to be worth pushing.
    #[serde(default = "default_page_two_min_impressions")]
    pub page_two_min_impressions: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: default_high_value_threshold(),
            decline_threshold_pct: default_decline_threshold_pct(),
            stale_threshold_days: default_stale_threshold_days(),
            hub_threshold: default_hub_threshold(),
            neglected_after_days: default_neglected_after_days(),
            recent_within_days: default_recent_within_days(),
            year_lookback: default_year_lookback(),
            page_two_min_position: default_page_two_min_position(),
            page_two_max_position: default_page_two_max_position(),
            page_two_min_impressions: default_page_two_min_impressions(),
        }
    }
}

impl AnalysisConfig {
    /// Reject thresholds that would make a step meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-finite or positive
    /// decline threshold, or a page-two band that is empty or not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.decline_threshold_pct.is_finite() || self.decline_threshold_pct > 0.0 {
            return Err(ConfigError::invalid(
                "analysis.decline_threshold_pct",
                format!(
                    "must be a finite number <= 0, got {}",
                    self.decline_threshold_pct
                ),
            ));
        }
        if !(self.page_two_min_position.is_finite() && self.page_two_min_position > 0.0) {
            return Err(ConfigError::invalid(
                "analysis.page_two_min_position",
                "must be a positive number",
            ));
        }
        if !self.page_two_max_position.is_finite()
            || self.page_two_min_position > self.page_two_max_position
        {
            return Err(ConfigError::invalid(
                "analysis.page_two_max_position",
                format!(
                    "must be >= page_two_min_position ({})",
                    self.page_two_min_position
                ),
            ));
        }
        Ok(())
    }
}
