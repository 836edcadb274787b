//! The single "now" snapshot shared by every derived calculation in one run.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Clock fixed at construction. Ages and windows computed from the same
/// `RunClock` always agree on what "today" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    now: DateTime<Utc>,
}

impl RunClock {
    /// Snapshot the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self { now: Utc::now() }
    }

    /// Pin the clock to a known instant (reproducible runs and tests).
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.now.year()
    }

    /// Whole days elapsed since `since`. Future timestamps count as 0.
    #[must_use]
    pub fn age_days(&self, since: DateTime<Utc>) -> u32 {
        let days = (self.now - since).num_days().max(0);
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}
