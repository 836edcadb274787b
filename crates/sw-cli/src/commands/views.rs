//! Flat row shapes for table output.

use serde::Serialize;
use sw_core::entities::{DecayCandidate, HubDocument, StaleDocument, YearUpdateCandidate};

#[derive(Serialize)]
pub struct DecayRow<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub clicks_prior: u64,
    pub clicks_recent: u64,
    pub change_pct: Option<f64>,
    pub age_days: u32,
}

impl<'a> From<&'a DecayCandidate> for DecayRow<'a> {
    fn from(candidate: &'a DecayCandidate) -> Self {
        Self {
            url: &candidate.document.url,
            title: &candidate.document.title,
            clicks_prior: candidate.performance.clicks_prior(),
            clicks_recent: candidate.performance.clicks_recent(),
            change_pct: candidate.performance.change_pct(),
            age_days: candidate.age_days,
        }
    }
}

pub fn decay_rows(candidates: &[DecayCandidate]) -> Vec<DecayRow<'_>> {
    candidates.iter().map(DecayRow::from).collect()
}

#[derive(Serialize)]
pub struct HubRow<'a> {
    pub url: &'a str,
    pub outbound: usize,
    pub backlinks: usize,
}

pub fn hub_rows(hubs: &[HubDocument]) -> Vec<HubRow<'_>> {
    hubs.iter()
        .map(|hub| HubRow {
            url: &hub.url,
            outbound: hub.outbound,
            backlinks: hub.backlinks,
        })
        .collect()
}

#[derive(Serialize)]
pub struct StaleRow<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub days_since_update: u32,
}

pub fn stale_rows(documents: &[StaleDocument]) -> Vec<StaleRow<'_>> {
    documents
        .iter()
        .map(|doc| StaleRow {
            url: &doc.url,
            title: &doc.title,
            days_since_update: doc.days_since_update,
        })
        .collect()
}

#[derive(Serialize)]
pub struct YearRow<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub mentioned_years: &'a [i32],
    pub suggested_year: i32,
}

pub fn year_rows(candidates: &[YearUpdateCandidate]) -> Vec<YearRow<'_>> {
    candidates
        .iter()
        .map(|c| YearRow {
            url: &c.url,
            title: &c.title,
            mentioned_years: &c.mentioned_years,
            suggested_year: c.suggested_year,
        })
        .collect()
}
