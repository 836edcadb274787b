//! # sw-sources
//!
//! External collaborators for Sitewise.
//!
//! Each collaborator hands raw, loosely-typed records to the analysis
//! pipeline; validation happens there, never here.
//! - [`SearchPerformanceSource`]: page rows for one date range
//!   ([`SearchConsoleClient`], [`JsonFileRows`])
//! - [`ContentSource`]: every published document ([`WordPressClient`],
//!   [`JsonFileDocuments`])
//! - [`AlertSink`]: fire-and-forget notifications ([`TelegramAlertSink`],
//!   [`LogAlertSink`])

pub mod files;
pub mod search_console;
pub mod telegram;
pub mod wordpress;

mod error;
mod http;

pub use error::SourceError;
pub use files::{JsonFileDocuments, JsonFileRows, read_records};
pub use search_console::SearchConsoleClient;
pub use telegram::{LogAlertSink, TelegramAlertSink};
pub use wordpress::WordPressClient;

use async_trait::async_trait;
use serde_json::Value;
use sw_core::DateRange;

/// Supplies per-page search-performance rows for a date range.
#[async_trait]
pub trait SearchPerformanceSource: Send + Sync {
    /// Collaborator name used in logs and alerts.
    fn name(&self) -> &str;

    /// Fetch every row for `range`, fully paginated.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the collaborator cannot be reached or its
    /// response cannot be read.
    async fn fetch_rows(&self, range: DateRange) -> Result<Vec<Value>, SourceError>;
}

/// Supplies every published document, fully paginated.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns [`SourceError`] if the collaborator cannot be reached or its
    /// response cannot be read.
    async fn fetch_documents(&self) -> Result<Vec<Value>, SourceError>;
}

/// Accepts free-text notifications. Delivery failures are logged, never returned.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn notify(&self, message: &str);
}
