use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A published content document, keyed by its canonical URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    /// Opaque identifier assigned by the content backend.
    pub id: String,
    /// Canonical URL; the join key against page performance.
    pub url: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Raw markup body.
    pub body: String,
}
