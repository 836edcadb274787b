use anyhow::Context;
use sw_config::SitewiseConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<SitewiseConfig> {
    let config = SitewiseConfig::load_with_dotenv().context("failed to load sitewise configuration")?;
    if !config.telegram.is_configured() {
        tracing::debug!("telegram not configured; alerts will only be logged");
    }
    Ok(config)
}
