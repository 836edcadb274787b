//! Collaborator records as they arrive, and their validation into typed values.
//!
//! Collaborators hand over loosely-typed JSON. Each record is converted here,
//! at the ingestion boundary, into a [`SearchRow`] or a [`Document`]; records
//! that cannot be converted become a [`MalformedRecord`] for the caller to
//! skip and count. Nothing dynamically typed travels past this module.
//!
//! Two shapes are accepted for each stream:
//! - search rows: the Search Console shape (`keys[0]` holds the page) or a
//!   flat `page_url` / `page` / `url` field;
//! - documents: the WordPress REST shape (`link`, `date`, `modified`,
//!   `title.rendered`, `content.rendered`) or the flat contract shape (`url`,
//!   `published_at`, `modified_at`, `title`, `body`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Document;
use crate::enums::RecordKind;
use crate::errors::MalformedRecord;

/// One loosely-typed search analytics row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSearchRow {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(
        default,
        alias = "page",
        alias = "url",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// A validated search analytics row for one page in one window.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRow {
    pub url: String,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

impl RawSearchRow {
    /// The page this row describes: the flat field wins over `keys[0]`.
    #[must_use]
    pub fn page_key(&self) -> Option<&str> {
        self.page_url
            .as_deref()
            .or_else(|| self.keys.first().map(String::as_str))
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate into a [`SearchRow`].
    ///
    /// Absent clicks, impressions and ctr count as zero. Position is required.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] when the page key is missing, a metric is
    /// negative, not finite or beyond `u64`, ctr falls outside `[0, 1]`, or position is
    /// missing or not positive.
    pub fn validate(&self, index: usize) -> Result<SearchRow, MalformedRecord> {
        let Some(url) = self.page_key() else {
            return Err(MalformedRecord::new(
                RecordKind::SearchRow,
                index,
                None,
                "missing page key",
            ));
        };
        let reject = |reason: String| {
            MalformedRecord::new(RecordKind::SearchRow, index, Some(url), reason)
        };

        let clicks = count(self.clicks, "clicks").map_err(reject)?;
        let impressions = count(self.impressions, "impressions").map_err(reject)?;

        let ctr = self.ctr.unwrap_or(0.0);
        if !(0.0..=1.0).contains(&ctr) {
            return Err(reject(format!("ctr {ctr} outside [0, 1]")));
        }

        let position = match self.position {
            Some(position) if position.is_finite() && position > 0.0 => position,
            Some(position) => return Err(reject(format!("position must be positive, got {position}"))),
            None => return Err(reject("missing position".into())),
        };

        Ok(SearchRow {
            url: url.to_string(),
            clicks,
            impressions,
            ctr,
            position,
        })
    }

    /// Validate only what a comparison baseline needs: the page and its clicks.
    ///
    /// Prior-window rows feed nothing but `clicks_prior`, so a missing or odd
    /// position, impressions or ctr does not cost a page its baseline.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] when the page key is missing or clicks is
    /// negative, not finite, or too large.
    pub fn validate_baseline(&self, index: usize) -> Result<BaselineRow, MalformedRecord> {
        let Some(url) = self.page_key() else {
            return Err(MalformedRecord::new(
                RecordKind::SearchRow,
                index,
                None,
                "missing page key",
            ));
        };
        let clicks = count(self.clicks, "clicks").map_err(|reason| {
            MalformedRecord::new(RecordKind::SearchRow, index, Some(url), reason)
        })?;

        Ok(BaselineRow {
            url: url.to_string(),
            clicks,
        })
    }
}

/// A validated prior-window row: the clicks a page had before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineRow {
    pub url: String,
    pub clicks: u64,
}

/// 2^64, the first whole number a `u64` cannot hold.
const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: Option<f64>, field: &str) -> Result<u64, String> {
    match value.map(f64::round) {
        None => Ok(0),
        Some(v) if !v.is_finite() || v < 0.0 => {
            Err(format!("{field} must be a non-negative number, got {v}"))
        }
        Some(v) if v >= COUNT_LIMIT => Err(format!("{field} {v} exceeds the counter range")),
        Some(v) => Ok(v as u64),
    }
}

/// Parse one loosely-typed search row.
///
/// # Errors
///
/// Returns a [`MalformedRecord`] if the value does not have the row shape or
/// fails [`RawSearchRow::validate`].
pub fn parse_search_row(index: usize, value: &Value) -> Result<SearchRow, MalformedRecord> {
    RawSearchRow::deserialize(value)
        .map_err(|e| {
            MalformedRecord::new(
                RecordKind::SearchRow,
                index,
                None,
                format!("unreadable row: {e}"),
            )
        })?
        .validate(index)
}

/// Parse one loosely-typed prior-window row.
///
/// # Errors
///
/// Returns a [`MalformedRecord`] if the value does not have the row shape or
/// fails [`RawSearchRow::validate_baseline`].
pub fn parse_baseline_row(index: usize, value: &Value) -> Result<BaselineRow, MalformedRecord> {
    RawSearchRow::deserialize(value)
        .map_err(|e| {
            MalformedRecord::new(
                RecordKind::SearchRow,
                index,
                None,
                format!("unreadable row: {e}"),
            )
        })?
        .validate_baseline(index)
}

/// Text that is either plain or wrapped as `{ "rendered": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RenderedText {
    Plain(String),
    Rendered { rendered: String },
}

impl RenderedText {
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Plain(text) | Self::Rendered { rendered: text } => text,
        }
    }
}

/// One loosely-typed content record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawDocumentRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<RenderedText>,
    #[serde(default, alias = "date")]
    pub published_at: Option<String>,
    #[serde(default, alias = "modified")]
    pub modified_at: Option<String>,
    #[serde(default, alias = "content")]
    pub body: Option<RenderedText>,
}

impl RawDocumentRecord {
    /// Validate into a [`Document`].
    ///
    /// A missing id falls back to the URL; missing title or body become empty.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] when the URL is missing or empty, either
    /// timestamp is missing or unparseable, or the id is neither a string nor
    /// a number.
    pub fn into_document(self, index: usize) -> Result<Document, MalformedRecord> {
        let Some(url) = self.url.filter(|url| !url.trim().is_empty()) else {
            return Err(MalformedRecord::new(
                RecordKind::Document,
                index,
                None,
                "missing url",
            ));
        };
        let reject =
            |reason: String| MalformedRecord::new(RecordKind::Document, index, Some(&url), reason);

        let published_at = required_timestamp(self.published_at.as_deref(), "published_at")
            .map_err(reject)?;
        let modified_at =
            required_timestamp(self.modified_at.as_deref(), "modified_at").map_err(reject)?;

        let id = match self.id {
            None | Some(Value::Null) => url.clone(),
            Some(Value::String(id)) if !id.is_empty() => id,
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => return Err(reject(format!("unsupported id {other}"))),
        };

        Ok(Document {
            id,
            title: self.title.map(RenderedText::into_string).unwrap_or_default(),
            body: self.body.map(RenderedText::into_string).unwrap_or_default(),
            url,
            published_at,
            modified_at,
        })
    }
}

fn required_timestamp(value: Option<&str>, field: &str) -> Result<DateTime<Utc>, String> {
    let value = value.ok_or_else(|| format!("missing {field}"))?;
    parse_timestamp(value).ok_or_else(|| format!("unparseable {field} '{value}'"))
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse one loosely-typed content record.
///
/// # Errors
///
/// Returns a [`MalformedRecord`] if the value does not have the record shape
/// or fails [`RawDocumentRecord::into_document`].
pub fn parse_document(index: usize, value: &Value) -> Result<Document, MalformedRecord> {
    RawDocumentRecord::deserialize(value)
        .map_err(|e| {
            MalformedRecord::new(
                RecordKind::Document,
                index,
                None,
                format!("unreadable record: {e}"),
            )
        })?
        .into_document(index)
}
