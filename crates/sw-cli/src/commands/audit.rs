use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde_json::{Value, json};
use sw_analysis::{AuditInputs, run_audit};
use sw_config::{SearchConsoleConfig, SitewiseConfig, WordPressConfig};
use sw_core::entities::Report;
use sw_core::{CoreError, DateRange, ReportWindows};
use sw_schema::SchemaRegistry;
use sw_sources::{
    AlertSink, ContentSource, JsonFileDocuments, JsonFileRows, SearchConsoleClient,
    SearchPerformanceSource, WordPressClient,
};
use tracing::{info, warn};

use crate::alerts;
use crate::cli::root_commands::AuditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::views;
use crate::output::{output, output_sections};
use crate::progress::Progress;

/// Where each input comes from for this run.
struct Collaborators {
    recent: Arc<dyn SearchPerformanceSource>,
    prior: Arc<dyn SearchPerformanceSource>,
    documents: Box<dyn ContentSource>,
}

impl Collaborators {
    /// Files where given, live clients otherwise. Fails before any fetch if a
    /// needed live client is not configured.
    fn resolve(args: &AuditArgs, config: &SitewiseConfig) -> Result<Self, CoreError> {
        let mut live_rows: Option<Arc<dyn SearchPerformanceSource>> = None;
        let mut rows_source = |path: Option<&Path>| -> Result<Arc<dyn SearchPerformanceSource>, CoreError> {
            if let Some(path) = path {
                return Ok(Arc::new(JsonFileRows::new(path)));
            }
            if let Some(client) = &live_rows {
                return Ok(Arc::clone(client));
            }
            let client = live_search_console(&config.search_console)?;
            live_rows = Some(Arc::clone(&client));
            Ok(client)
        };

        let recent = rows_source(args.recent.as_deref())?;
        let prior = rows_source(args.prior.as_deref())?;
        let documents: Box<dyn ContentSource> = match &args.documents {
            Some(path) => Box::new(JsonFileDocuments::new(path)),
            None => live_wordpress(&config.wordpress)?,
        };

        Ok(Self {
            recent,
            prior,
            documents,
        })
    }
}

fn live_search_console(
    config: &SearchConsoleConfig,
) -> Result<Arc<dyn SearchPerformanceSource>, CoreError> {
    let client = SearchConsoleClient::new(config).map_err(|e| e.into_core("search console"))?;
    Ok(Arc::new(client))
}

fn live_wordpress(config: &WordPressConfig) -> Result<Box<dyn ContentSource>, CoreError> {
    let client = WordPressClient::new(config).map_err(|e| e.into_core("wordpress"))?;
    Ok(Box::new(client))
}

/// Handle `sitewise audit`.
pub async fn handle(
    args: &AuditArgs,
    config: &SitewiseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let clock = flags.clock();
    let settings = super::settings(config, flags)?;
    let alerts = alerts::sink(&config.telegram);
    let windows = ReportWindows::ending(
        clock.today(),
        config.search_console.lag_days,
        config.search_console.window_days,
    )?;

    let collaborators = match Collaborators::resolve(args, config) {
        Ok(collaborators) => collaborators,
        Err(error) => {
            alerts
                .notify(&alerts::message("audit blocked", &error.to_string()))
                .await;
            return Err(error).context("cannot start audit");
        }
    };

    let progress = Progress::spinner("fetching recent search rows");
    let recent = fetch_window(
        collaborators.recent.as_ref(),
        windows.recent,
        "recent",
        alerts.as_ref(),
    )
    .await;
    progress.set_message("fetching prior search rows");
    let prior = fetch_window(
        collaborators.prior.as_ref(),
        windows.prior,
        "prior",
        alerts.as_ref(),
    )
    .await;

    progress.set_message("fetching documents");
    let documents = match collaborators.documents.fetch_documents().await {
        Ok(documents) => documents,
        Err(error) => {
            progress.finish_err("document fetch failed");
            let error = error.into_core(collaborators.documents.name());
            alerts
                .notify(&alerts::message("audit aborted", &error.to_string()))
                .await;
            return Err(error).context("cannot audit without documents");
        }
    };
    progress.finish_clear();
    info!(documents = documents.len(), "documents fetched");

    let inputs = AuditInputs {
        recent,
        prior,
        documents: Some(documents),
        windows: Some(windows),
    };
    let report = run_audit(&inputs, &settings, &clock);
    SchemaRegistry::new()
        .validate_report(&report)
        .context("report does not match its schema")?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    match flags.format {
        OutputFormat::Table => output_sections(&report_sections(&report)?),
        format => output(&report, format),
    }
}

/// Fetch one search window. A failure is alerted and yields `None`, so the
/// steps that need this window are skipped instead of fed zeros.
async fn fetch_window(
    source: &dyn SearchPerformanceSource,
    range: DateRange,
    label: &str,
    alerts: &dyn AlertSink,
) -> Option<Vec<Value>> {
    match source.fetch_rows(range).await {
        Ok(rows) => {
            info!(window = label, rows = rows.len(), "search rows fetched");
            Some(rows)
        }
        Err(error) => {
            let error = error.into_core(source.name());
            warn!(window = label, %error, "search window unavailable");
            alerts
                .notify(&alerts::message(
                    &format!("{label} search window unavailable"),
                    &error.to_string(),
                ))
                .await;
            None
        }
    }
}

fn report_sections(report: &Report) -> anyhow::Result<Vec<(&'static str, Value)>> {
    let mut summary = serde_json::to_value(&report.stats)?;
    if let (Some(map), Some(traffic)) = (summary.as_object_mut(), &report.traffic) {
        map.insert("clicks_recent".into(), json!(traffic.clicks_recent));
        map.insert("clicks_prior".into(), json!(traffic.clicks_prior));
        map.insert("traffic_change_pct".into(), json!(traffic.change_pct));
    }

    Ok(vec![
        ("Summary", summary),
        (
            "Decaying content",
            serde_json::to_value(views::decay_rows(&report.decay_candidates))?,
        ),
        (
            "Orphaned documents",
            serde_json::to_value(&report.orphaned_documents)?,
        ),
        (
            "Link hubs",
            serde_json::to_value(views::hub_rows(&report.high_authority_documents))?,
        ),
        (
            "Page-two opportunities",
            serde_json::to_value(&report.page_two_opportunities)?,
        ),
        (
            "Neglected documents",
            serde_json::to_value(views::stale_rows(&report.freshness.neglected))?,
        ),
        (
            "Titles with past years",
            serde_json::to_value(views::year_rows(&report.freshness.needs_year_update))?,
        ),
        ("Skipped steps", serde_json::to_value(&report.skipped_steps)?),
    ])
}
