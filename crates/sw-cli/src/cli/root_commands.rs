use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the full audit and print the report.
    Audit(AuditArgs),
    /// Pages losing clicks whose content is also stale.
    Decay(DecayArgs),
    /// Internal link graph: orphans and hubs.
    Links(DocumentFileArgs),
    /// Neglected, recently updated, and outdated-year documents.
    Freshness(DocumentFileArgs),
    /// Pages ranking just below the first results page.
    PageTwo(RowsFileArgs),
    /// Show the recent and prior search windows for today.
    Windows,
    /// Print the JSON Schema of an exported type, or list them.
    Schema(SchemaArgs),
    /// Show the resolved configuration with secrets masked.
    Config,
}

/// Every input is read from its file when given, otherwise fetched from the
/// configured live collaborator.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Search rows for the recent window (.json or .jsonl)
    #[arg(long)]
    pub recent: Option<PathBuf>,

    /// Search rows for the prior window (.json or .jsonl)
    #[arg(long)]
    pub prior: Option<PathBuf>,

    /// Content documents (.json or .jsonl)
    #[arg(long)]
    pub documents: Option<PathBuf>,

    /// Also write the pretty JSON report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DecayArgs {
    #[arg(long)]
    pub recent: PathBuf,

    #[arg(long)]
    pub prior: PathBuf,

    #[arg(long)]
    pub documents: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct DocumentFileArgs {
    #[arg(long)]
    pub documents: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct RowsFileArgs {
    /// Search rows for the recent window
    #[arg(long)]
    pub recent: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. report, decay_candidate); omit to list all
    pub name: Option<String>,
}
