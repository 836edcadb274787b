//! Analysis error types for sw-analysis.

use sw_config::ConfigError;

/// Errors raised while preparing an audit run.
///
/// The pipeline itself is infallible once its settings exist: bad records are
/// rejected and counted, missing inputs skip the steps that need them.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Thresholds or limits from configuration are unusable.
    #[error("invalid analysis settings: {0}")]
    Settings(#[from] ConfigError),
}
