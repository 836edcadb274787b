use chrono::{DateTime, Utc};
use clap::ValueEnum;
use sw_analysis::AnalysisSettings;
use sw_core::RunClock;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
    pub now: Option<DateTime<Utc>>,
}

impl GlobalFlags {
    /// The run clock: `--now` when given, otherwise the system time.
    #[must_use]
    pub fn clock(&self) -> RunClock {
        self.now.map_or_else(RunClock::system, RunClock::at)
    }

    /// Apply `--limit` to every ranked list.
    pub const fn apply_limit(&self, settings: &mut AnalysisSettings) {
        if let Some(limit) = self.limit {
            let top_n = &mut settings.top_n;
            top_n.decay = limit;
            top_n.orphans = limit;
            top_n.hubs = limit;
            top_n.page_two = limit;
            top_n.neglected = limit;
            top_n.recently_updated = limit;
            top_n.needs_year_update = limit;
        }
    }
}
