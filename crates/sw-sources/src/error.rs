//! Collaborator error types.

use std::path::PathBuf;

use sw_config::ConfigError;
use sw_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to an external collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The collaborator returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Credentials were rejected (401/403).
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// The collaborator returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Reading an input file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A response or file did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The collaborator's configuration section is incomplete.
    #[error(transparent)]
    NotConfigured(#[from] ConfigError),
}

impl SourceError {
    /// Map into the core taxonomy, naming the collaborator.
    ///
    /// Missing configuration stays blocking; everything else becomes
    /// [`CoreError::CollaboratorUnavailable`].
    #[must_use]
    pub fn into_core(self, collaborator: &str) -> CoreError {
        match self {
            Self::NotConfigured(err) => err.into(),
            other => CoreError::unavailable(collaborator, other),
        }
    }
}
