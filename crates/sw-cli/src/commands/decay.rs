use sw_analysis::decay::correlate_decay;
use sw_analysis::rank::{rank_decay, top_n};
use sw_analysis::{DocumentStore, normalize_metrics};
use sw_config::SitewiseConfig;

use crate::cli::root_commands::DecayArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{inputs, views};
use crate::output::output;

/// Handle `sitewise decay`.
pub fn handle(args: &DecayArgs, config: &SitewiseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = super::settings(config, flags)?;
    let clock = flags.clock();

    let recent = inputs::read(&args.recent, "recent search rows")?;
    let prior = inputs::read(&args.prior, "prior search rows")?;
    let documents = inputs::read(&args.documents, "documents")?;

    let metrics = normalize_metrics(&recent, Some(prior.as_slice()));
    let built = DocumentStore::build(&documents);
    inputs::log_rejected(metrics.rejected.iter().chain(&built.rejected));

    let candidates = rank_decay(correlate_decay(
        &metrics.pages,
        &built.store,
        &settings.decay,
        &clock,
    ));
    let top = top_n(candidates, settings.top_n.decay);

    match flags.format {
        OutputFormat::Table => output(&views::decay_rows(&top), flags.format),
        format => output(&top, format),
    }
}
