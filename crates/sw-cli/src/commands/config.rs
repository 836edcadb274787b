use sw_config::SitewiseConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `sitewise config`. Credentials are masked.
pub fn handle(config: &SitewiseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&config.redacted(), flags.format)
}
