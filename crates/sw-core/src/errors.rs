//! Cross-cutting error types for Sitewise.
//!
//! This module defines the error taxonomy shared by every crate. Domain-specific
//! errors (e.g., `SourceError`, `ConfigError`) are defined in their respective
//! crates and mapped into [`CoreError`] where the caller needs to decide between
//! aborting and continuing with partial data.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::RecordKind;

/// Errors that can be raised by any Sitewise crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required collaborator credential or endpoint is absent.
    #[error("Configuration missing for '{section}': {}", fields.join(", "))]
    ConfigurationMissing { section: String, fields: Vec<String> },

    /// A collaborator call failed (network, auth, quota).
    #[error("{collaborator} unavailable: {source}")]
    CollaboratorUnavailable {
        collaborator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An individual input record is missing required fields.
    #[error("{0}")]
    MalformedRecord(MalformedRecord),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Wrap a collaborator failure with the collaborator's name.
    pub fn unavailable<E>(collaborator: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CollaboratorUnavailable {
            collaborator: collaborator.into(),
            source: Box::new(source),
        }
    }

    /// Whether the caller must halt before producing a report.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::ConfigurationMissing { .. })
    }
}

/// A rejected input record. Recovered locally by skipping and counting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MalformedRecord {
    /// Which collaborator stream the record came from.
    pub kind: RecordKind,
    /// Zero-based position in the input sequence.
    pub index: usize,
    /// URL or key of the record, when one could be read.
    pub key: Option<String>,
    pub reason: String,
}

impl MalformedRecord {
    #[must_use]
    pub fn new(kind: RecordKind, index: usize, key: Option<&str>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            key: key.map(str::to_string),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {} #{}", self.kind, self.index)?;
        if let Some(key) = &self.key {
            write!(f, " ({key})")?;
        }
        write!(f, ": {}", self.reason)
    }
}
