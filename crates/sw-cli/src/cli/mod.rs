use chrono::{DateTime, Utc};
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sitewise` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sitewise",
    version,
    about = "Sitewise - content decay and internal link audits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max entries per ranked list (overrides the configured limits)
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pin the run clock to an RFC 3339 instant (reproducible reports)
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            now: self.now,
        }
    }
}
