use sw_analysis::freshness::assess_freshness;
use sw_analysis::rank::top_n;
use sw_analysis::DocumentStore;
use sw_config::SitewiseConfig;
use sw_core::entities::FreshnessReport;

use crate::cli::root_commands::DocumentFileArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{inputs, views};
use crate::output::{output, output_sections};

/// Handle `sitewise freshness`.
pub fn handle(
    args: &DocumentFileArgs,
    config: &SitewiseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let settings = super::settings(config, flags)?;
    let documents = inputs::read(&args.documents, "documents")?;
    let built = DocumentStore::build(&documents);
    inputs::log_rejected(&built.rejected);

    let full = assess_freshness(&built.store, &settings.freshness, &flags.clock());
    let limits = &settings.top_n;
    let report = FreshnessReport {
        neglected: top_n(full.neglected, limits.neglected),
        recently_updated: top_n(full.recently_updated, limits.recently_updated),
        needs_year_update: top_n(full.needs_year_update, limits.needs_year_update),
    };

    match flags.format {
        OutputFormat::Table => output_sections(&[
            (
                "Neglected documents",
                serde_json::to_value(views::stale_rows(&report.neglected))?,
            ),
            (
                "Recently updated",
                serde_json::to_value(views::stale_rows(&report.recently_updated))?,
            ),
            (
                "Titles with past years",
                serde_json::to_value(views::year_rows(&report.needs_year_update))?,
            ),
        ]),
        format => output(&report, format),
    }
}
