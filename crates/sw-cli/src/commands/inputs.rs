use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use sw_core::MalformedRecord;

/// Read a records file for a single-step command.
pub fn read(path: &Path, what: &str) -> anyhow::Result<Vec<Value>> {
    sw_sources::read_records(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))
}

pub fn log_rejected<'a>(rejected: impl IntoIterator<Item = &'a MalformedRecord>) {
    let mut count = 0usize;
    for record in rejected {
        tracing::debug!(%record, "skipped");
        count += 1;
    }
    if count > 0 {
        tracing::info!(count, "skipped malformed records");
    }
}
