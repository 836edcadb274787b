use serde::Serialize;
use sw_analysis::rank::top_n;
use sw_analysis::{DocumentStore, LinkGraph};
use sw_config::SitewiseConfig;
use sw_core::entities::{HubDocument, LinkGraphSummary, OrphanDocument};

use crate::cli::root_commands::DocumentFileArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{inputs, views};
use crate::output::{output, output_sections};

#[derive(Serialize)]
struct LinksResponse {
    summary: LinkGraphSummary,
    orphaned_documents: Vec<OrphanDocument>,
    high_authority_documents: Vec<HubDocument>,
}

/// Handle `sitewise links`.
pub fn handle(
    args: &DocumentFileArgs,
    config: &SitewiseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let settings = super::settings(config, flags)?;
    let documents = inputs::read(&args.documents, "documents")?;
    let built = DocumentStore::build(&documents);
    inputs::log_rejected(&built.rejected);

    let graph = LinkGraph::build(&built.store);
    let orphans = graph.orphans(&built.store);
    let hubs = graph.hubs(&built.store, settings.hub_threshold);
    let response = LinksResponse {
        summary: graph.summary(orphans.len(), hubs.len(), settings.hub_threshold),
        orphaned_documents: top_n(orphans, settings.top_n.orphans),
        high_authority_documents: top_n(hubs, settings.top_n.hubs),
    };

    match flags.format {
        OutputFormat::Table => output_sections(&[
            ("Link graph", serde_json::to_value(&response.summary)?),
            (
                "Orphaned documents",
                serde_json::to_value(&response.orphaned_documents)?,
            ),
            (
                "Link hubs",
                serde_json::to_value(views::hub_rows(&response.high_authority_documents))?,
            ),
        ]),
        format => output(&response, format),
    }
}
