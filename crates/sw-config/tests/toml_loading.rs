//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sw_config::{ConfigError, LimitsConfig, SitewiseConfig};

#[test]
fn loads_analysis_thresholds_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
high_value_threshold = 250
decline_threshold_pct = -25.5
stale_threshold_days = 540
hub_threshold = 12
year_lookback = 3
"#,
        )?;

        let config: SitewiseConfig = Figment::from(Serialized::defaults(SitewiseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analysis.high_value_threshold, 250);
        assert_eq!(config.analysis.decline_threshold_pct, -25.5);
        assert_eq!(config.analysis.stale_threshold_days, 540);
        assert_eq!(config.analysis.hub_threshold, 12);
        assert_eq!(config.analysis.year_lookback, 3);
        // untouched fields keep their defaults
        assert_eq!(config.analysis.neglected_after_days, 180);
        assert_eq!(config.limits, LimitsConfig::default());
        Ok(())
    });
}

#[test]
fn loads_collaborator_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[search_console]
site_url = "sc-domain:example.com"
access_token = "ya29.token"
window_days = 14

[wordpress]
base_url = "https://example.com"
username = "editor"
app_password = "abcd efgh ijkl mnop"
per_page = 50
request_delay_ms = 0

[telegram]
bot_token = "123:abc"
chat_id = "-100200300"
"#,
        )?;

        let config: SitewiseConfig = Figment::from(Serialized::defaults(SitewiseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.search_console.is_configured());
        assert_eq!(config.search_console.window_days, 14);
        assert_eq!(config.search_console.lag_days, 3);
        assert!(config.wordpress.is_configured());
        assert_eq!(config.wordpress.per_page, 50);
        assert_eq!(config.wordpress.request_delay_ms, 0);
        assert!(config.telegram.is_configured());
        assert_eq!(config.telegram.endpoint, "https://api.telegram.org");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sitewise")?;
        jail.create_file(
            ".sitewise/config.toml",
            r#"
[limits]
decay = 5
hubs = 3
"#,
        )?;

        let config = SitewiseConfig::load().expect("config loads");
        assert_eq!(config.limits.decay, 5);
        assert_eq!(config.limits.hubs, 3);
        assert_eq!(config.limits.orphans, 20);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_loading() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sitewise")?;
        jail.create_file(
            ".sitewise/config.toml",
            r#"
[analysis]
page_two_min_position = 25.0
page_two_max_position = 20.0
"#,
        )?;

        let err = SitewiseConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sitewise")?;
        jail.create_file(".sitewise/config.toml", "[analysis\nhub_threshold = ")?;

        let err = SitewiseConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}
