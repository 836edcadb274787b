pub mod audit;
pub mod config;
pub mod decay;
pub mod dispatch;
pub mod freshness;
pub mod links;
pub mod page_two;
pub mod schema;
pub mod windows;

mod inputs;
mod views;

use anyhow::Context;
use sw_analysis::AnalysisSettings;
use sw_config::SitewiseConfig;

use crate::cli::GlobalFlags;

/// Analysis settings from config, with `--limit` applied.
fn settings(config: &SitewiseConfig, flags: &GlobalFlags) -> anyhow::Result<AnalysisSettings> {
    let mut settings = AnalysisSettings::from_config(config).context("invalid analysis settings")?;
    flags.apply_limit(&mut settings);
    Ok(settings)
}
