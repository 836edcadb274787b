//! Metrics normalizer: two windows of raw search rows into one performance
//! record per page.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde_json::Value;
use sw_core::MalformedRecord;
use sw_core::entities::PagePerformance;
use sw_core::enums::RecordKind;
use sw_core::raw::{BaselineRow, SearchRow, parse_baseline_row, parse_search_row};
use tracing::debug;

/// Per-page performance, in the order pages first appear in the recent window.
#[derive(Debug, Clone, Default)]
pub struct PerformanceSet {
    pages: Vec<PagePerformance>,
    index: HashMap<String, usize>,
}

impl PerformanceSet {
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&PagePerformance> {
        self.index.get(url).map(|&i| &self.pages[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PagePerformance> {
        self.pages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<PagePerformance> for PerformanceSet {
    /// Later entries for an already-seen URL are ignored.
    fn from_iter<I: IntoIterator<Item = PagePerformance>>(iter: I) -> Self {
        let mut set = Self::default();
        for page in iter {
            if let Entry::Vacant(slot) = set.index.entry(page.url().to_string()) {
                slot.insert(set.pages.len());
                set.pages.push(page);
            }
        }
        set
    }
}

/// Click totals over every valid row of each window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTotals {
    pub recent: u64,
    /// Absent when no prior window was supplied.
    pub prior: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedMetrics {
    pub pages: PerformanceSet,
    pub totals: ClickTotals,
    /// Rows rejected from either window.
    pub rejected: Vec<MalformedRecord>,
}

/// Join the recent and prior windows by page URL.
///
/// Pages only in the recent window get `clicks_prior = 0` (and so no change
/// percentage); pages only in the prior window are dropped. Without a prior
/// window every page has `clicks_prior = 0`, so callers must not rank
/// declines from the result in that case.
///
/// Prior rows only need a page and clicks. Totals saturate at `u64::MAX`.
#[must_use]
pub fn normalize_metrics(recent: &[Value], prior: Option<&[Value]>) -> NormalizedMetrics {
    let mut rejected = Vec::new();

    let recent_rows = validate_window("recent", recent, &mut rejected, parse_search_row, |row: &SearchRow| {
        row.url.as_str()
    });
    let prior_rows = prior.map(|rows| {
        validate_window("prior", rows, &mut rejected, parse_baseline_row, |row: &BaselineRow| {
            row.url.as_str()
        })
    });

    let prior_clicks: HashMap<&str, u64> = prior_rows
        .iter()
        .flatten()
        .map(|row| (row.url.as_str(), row.clicks))
        .collect();

    let pages = recent_rows
        .iter()
        .map(|row| {
            PagePerformance::new(
                row.url.as_str(),
                row.clicks,
                prior_clicks.get(row.url.as_str()).copied().unwrap_or(0),
                row.impressions,
                row.ctr,
                row.position,
            )
        })
        .collect();

    let totals = ClickTotals {
        recent: total(recent_rows.iter().map(|row| row.clicks)),
        prior: prior_rows
            .as_ref()
            .map(|rows| total(rows.iter().map(|row| row.clicks))),
    };

    NormalizedMetrics {
        pages,
        totals,
        rejected,
    }
}

fn total(clicks: impl Iterator<Item = u64>) -> u64 {
    clicks.fold(0, u64::saturating_add)
}

/// Validate one window, keeping the first row per page.
fn validate_window<T>(
    window: &str,
    rows: &[Value],
    rejected: &mut Vec<MalformedRecord>,
    parse: fn(usize, &Value) -> Result<T, MalformedRecord>,
    url_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut valid = Vec::with_capacity(rows.len());

    for (index, value) in rows.iter().enumerate() {
        match parse(index, value) {
            Ok(row) => {
                let url = url_of(&row);
                if let Some(first) = seen.get(url) {
                    debug!(%url, window, "duplicate search row");
                    rejected.push(MalformedRecord::new(
                        RecordKind::SearchRow,
                        index,
                        Some(url),
                        format!("{window} window: duplicate of row #{first}"),
                    ));
                    continue;
                }
                seen.insert(url.to_string(), index);
                valid.push(row);
            }
            Err(mut record) => {
                record.reason = format!("{window} window: {}", record.reason);
                debug!(%record, "skipping search row");
                rejected.push(record);
            }
        }
    }

    valid
}
