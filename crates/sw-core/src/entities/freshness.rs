use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A document ranked by how long ago it was last modified.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StaleDocument {
    pub id: String,
    pub url: String,
    pub title: String,
    pub modified_at: DateTime<Utc>,
    pub days_since_update: u32,
}

/// A document whose title still advertises a past year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct YearUpdateCandidate {
    pub id: String,
    pub url: String,
    pub title: String,
    pub mentioned_years: Vec<i32>,
    pub suggested_year: i32,
}

/// Content freshness findings over the whole document store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FreshnessReport {
    pub neglected: Vec<StaleDocument>,
    pub recently_updated: Vec<StaleDocument>,
    pub needs_year_update: Vec<YearUpdateCandidate>,
}
