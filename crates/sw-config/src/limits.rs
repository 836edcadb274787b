//! Top-N sizes of each ranked list in the report.

use serde::{Deserialize, Serialize};

const fn default_decay() -> usize {
    20
}

const fn default_orphans() -> usize {
    20
}

const fn default_hubs() -> usize {
    10
}

const fn default_page_two() -> usize {
    10
}

const fn default_neglected() -> usize {
    15
}

const fn default_recently_updated() -> usize {
    10
}

const fn default_needs_year_update() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitsConfig {
    #[serde(default = "default_decay")]
    pub decay: usize,

    #[serde(default = "default_orphans")]
    pub orphans: usize,

    #[serde(default = "default_hubs")]
    pub hubs: usize,

    #[serde(default = "default_page_two")]
    pub page_two: usize,

    #[serde(default = "default_neglected")]
    pub neglected: usize,

    #[serde(default = "default_recently_updated")]
    pub recently_updated: usize,

    #[serde(default = "default_needs_year_update")]
    pub needs_year_update: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            decay: default_decay(),
            orphans: default_orphans(),
            hubs: default_hubs(),
            page_two: default_page_two(),
            neglected: default_neglected(),
            recently_updated: default_recently_updated(),
            needs_year_update: default_needs_year_update(),
        }
    }
}
