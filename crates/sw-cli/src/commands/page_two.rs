use sw_analysis::normalize_metrics;
use sw_analysis::page_two::find_page_two;
use sw_analysis::rank::top_n;
use sw_config::SitewiseConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RowsFileArgs;
use crate::commands::inputs;
use crate::output::output;

/// Handle `sitewise page-two`.
pub fn handle(args: &RowsFileArgs, config: &SitewiseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = super::settings(config, flags)?;
    let recent = inputs::read(&args.recent, "recent search rows")?;
    let metrics = normalize_metrics(&recent, None);
    inputs::log_rejected(&metrics.rejected);

    let opportunities = top_n(
        find_page_two(&metrics.pages, &settings.page_two),
        settings.top_n.page_two,
    );
    output(&opportunities, flags.format)
}
