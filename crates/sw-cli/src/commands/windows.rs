use serde::Serialize;
use sw_config::SitewiseConfig;
use sw_core::{DateRange, ReportWindows};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Serialize)]
struct WindowRow {
    window: &'static str,
    start: String,
    end: String,
    days: i64,
}

impl WindowRow {
    fn new(window: &'static str, range: DateRange) -> Self {
        Self {
            window,
            start: range.start.to_string(),
            end: range.end.to_string(),
            days: range.days(),
        }
    }
}

/// Handle `sitewise windows`.
pub fn handle(config: &SitewiseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let windows = ReportWindows::ending(
        flags.clock().today(),
        config.search_console.lag_days,
        config.search_console.window_days,
    )?;

    match flags.format {
        OutputFormat::Table => output(
            &[
                WindowRow::new("recent", windows.recent),
                WindowRow::new("prior", windows.prior),
            ],
            flags.format,
        ),
        format => output(&windows, format),
    }
}
