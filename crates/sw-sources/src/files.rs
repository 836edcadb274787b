//! File-backed collaborators: exported search rows and document dumps.
//!
//! `.jsonl` / `.ndjson` files hold one record per line. Anything else is read
//! as JSON: either a top-level array or an object wrapping the array under
//! `rows`, `posts` or `documents`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use sw_core::DateRange;
use tracing::debug;

use crate::error::SourceError;
use crate::{ContentSource, SearchPerformanceSource};

const WRAPPER_KEYS: [&str; 3] = ["rows", "posts", "documents"];

/// Read every record from `path`.
///
/// A line of a JSON Lines file that is not valid JSON becomes `null`, so the
/// pipeline counts it as malformed instead of losing the whole file.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be read, or
/// [`SourceError::Parse`] if a JSON file has no record array.
pub fn read_records(path: &Path) -> Result<Vec<Value>, SourceError> {
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if is_json_lines(path) {
        let lines = serde_jsonlines::json_lines::<Value, _>(path).map_err(io_error)?;
        let records: Vec<Value> = lines
            .enumerate()
            .map(|(line, record)| {
                record.unwrap_or_else(|e| {
                    debug!(path = %path.display(), line = line + 1, %e, "unreadable line");
                    Value::Null
                })
            })
            .collect();
        return Ok(records);
    }

    let text = std::fs::read_to_string(path).map_err(io_error)?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| SourceError::Parse(format!("{}: {e}", path.display())))?;
    unwrap_records(value).ok_or_else(|| {
        SourceError::Parse(format!(
            "{}: expected an array or an object with one of {}",
            path.display(),
            WRAPPER_KEYS.join(", ")
        ))
    })
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson"))
}

fn unwrap_records(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(records) => Some(records),
        Value::Object(mut map) => WRAPPER_KEYS.iter().find_map(|key| match map.remove(*key) {
            Some(Value::Array(records)) => Some(records),
            _ => None,
        }),
        _ => None,
    }
}

/// Search rows exported to a file. The date range is not consulted; the file
/// is taken to cover exactly the window it is assigned to.
#[derive(Debug, Clone)]
pub struct JsonFileRows {
    path: PathBuf,
}

impl JsonFileRows {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SearchPerformanceSource for JsonFileRows {
    fn name(&self) -> &str {
        "search rows file"
    }

    async fn fetch_rows(&self, range: DateRange) -> Result<Vec<Value>, SourceError> {
        let rows = read_records(&self.path)?;
        debug!(path = %self.path.display(), rows = rows.len(), start = %range.start, end = %range.end, "read search rows");
        Ok(rows)
    }
}

/// Documents dumped to a file.
#[derive(Debug, Clone)]
pub struct JsonFileDocuments {
    path: PathBuf,
}

impl JsonFileDocuments {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for JsonFileDocuments {
    fn name(&self) -> &str {
        "documents file"
    }

    async fn fetch_documents(&self) -> Result<Vec<Value>, SourceError> {
        let documents = read_records(&self.path)?;
        debug!(path = %self.path.display(), documents = documents.len(), "read documents");
        Ok(documents)
    }
}
