//! # sw-config
//!
//! Layered configuration loading for Sitewise using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SITEWISE_*` prefix, `__` as separator)
//! 2. Project-level `.sitewise/config.toml`
//! 3. User-level `~/.config/sitewise/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SITEWISE_SEARCH_CONSOLE__ACCESS_TOKEN` -> `search_console.access_token`,
//! `SITEWISE_ANALYSIS__HUB_THRESHOLD` -> `analysis.hub_threshold`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sw_config::SitewiseConfig;
//!
//! let config = SitewiseConfig::load_with_dotenv().expect("config");
//!
//! if config.wordpress.is_configured() {
//!     println!("WordPress site: {}", config.wordpress.base_url);
//! }
//! ```

mod analysis;
mod error;
mod limits;
mod search_console;
mod telegram;
mod wordpress;

pub use analysis::AnalysisConfig;
pub use error::ConfigError;
pub use limits::LimitsConfig;
pub use search_console::SearchConsoleConfig;
pub use telegram::TelegramConfig;
pub use wordpress::WordPressConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

const REDACTED: &str = "********";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SitewiseConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub search_console: SearchConsoleConfig,
    #[serde(default)]
    pub wordpress: WordPressConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl SitewiseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = Self::load_dotenv() {
            warn!(%error, "ignoring unreadable .env");
        }
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sitewise/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SITEWISE_").split("__"))
    }

    /// Check every section's values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.search_console.validate()?;
        self.wordpress.validate()
    }

    /// A copy safe to print: credentials that are set are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        mask(&mut config.search_console.access_token);
        mask(&mut config.wordpress.app_password);
        mask(&mut config.telegram.bot_token);
        config
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sitewise").join("config.toml"))
    }

    /// Load `.env` from the current directory or its nearest ancestor.
    ///
    /// Returns `false` when there is no `.env` to load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if a `.env` exists but cannot be read
    /// or parsed.
    pub fn load_dotenv() -> Result<bool, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(true),
            Err(error) if error.not_found() => Ok(false),
            Err(error) => Err(error.into()),
        }
    }
}

fn mask(secret: &mut String) {
    if !secret.is_empty() {
        *secret = REDACTED.to_string();
    }
}

/// Fail with [`ConfigError::NotConfigured`] naming every empty field.
pub(crate) fn require_fields(section: &str, fields: &[(&str, &str)]) -> Result<(), ConfigError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::NotConfigured {
            section: section.to_string(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SitewiseConfig::default();
        assert!(!config.search_console.is_configured());
        assert!(!config.wordpress.is_configured());
        assert!(!config.telegram.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = SitewiseConfig::from_figment(&SitewiseConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config.analysis.high_value_threshold, 100);
            assert_eq!(config.limits.decay, 20);
            Ok(())
        });
    }

    #[test]
    fn redacted_masks_only_set_secrets() {
        let mut config = SitewiseConfig::default();
        config.wordpress.app_password = "abcd efgh".into();
        config.wordpress.username = "editor".into();

        let redacted = config.redacted();
        assert_eq!(redacted.wordpress.app_password, REDACTED);
        assert_eq!(redacted.wordpress.username, "editor");
        assert!(redacted.search_console.access_token.is_empty());
    }
}
