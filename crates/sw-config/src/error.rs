//! Configuration error types.

use sw_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration section is missing fields.
    #[error("Configuration section '{section}' is not configured (missing {})", missing.join(", "))]
    NotConfigured { section: String, missing: Vec<String> },

    /// A `.env` file exists but could not be read or parsed.
    #[error("Could not load .env: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotConfigured { section, missing } => Self::ConfigurationMissing {
                section,
                fields: missing,
            },
            ConfigError::InvalidValue { field, reason } => {
                Self::Validation(format!("{field}: {reason}"))
            }
            ConfigError::Figment(e) => Self::Validation(e.to_string()),
            ConfigError::Dotenv(e) => Self::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_maps_to_blocking_core_error() {
        let err = ConfigError::NotConfigured {
            section: "search_console".into(),
            missing: vec!["access_token".into()],
        };
        assert_eq!(
            err.to_string(),
            "Configuration section 'search_console' is not configured (missing access_token)"
        );

        let core: CoreError = err.into();
        assert!(core.is_blocking());
        assert_eq!(
            core.to_string(),
            "Configuration missing for 'search_console': access_token"
        );
    }

    #[test]
    fn invalid_value_is_not_blocking() {
        let core: CoreError = ConfigError::invalid("analysis.hub_threshold", "must be positive").into();
        assert!(!core.is_blocking());
    }
}
