//! Search-analytics date windows.
//!
//! Two equal-length, contiguous, non-overlapping windows ending `lag_days`
//! before today. Search analytics data lags by a few days, so the most
//! recent days are never part of either window.

use chrono::{Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Number of calendar days covered, both ends included.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// The recent window and the prior window it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportWindows {
    pub recent: DateRange,
    pub prior: DateRange,
}

impl ReportWindows {
    /// Build windows of `window_days` each, the recent one ending
    /// `lag_days` before `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `window_days` is zero or the
    /// windows would fall outside the supported calendar.
    pub fn ending(today: NaiveDate, lag_days: u32, window_days: u32) -> Result<Self, CoreError> {
        if window_days == 0 {
            return Err(CoreError::Validation(
                "report window must cover at least one day".into(),
            ));
        }

        let span = Days::new(u64::from(window_days) - 1);
        let out_of_range = || CoreError::Validation(format!("date windows before {today} are out of range"));

        let recent_end = today
            .checked_sub_days(Days::new(u64::from(lag_days)))
            .ok_or_else(out_of_range)?;
        let recent_start = recent_end.checked_sub_days(span).ok_or_else(out_of_range)?;
        let prior_end = recent_start
            .checked_sub_days(Days::new(1))
            .ok_or_else(out_of_range)?;
        let prior_start = prior_end.checked_sub_days(span).ok_or_else(out_of_range)?;

        Ok(Self {
            recent: DateRange {
                start: recent_start,
                end: recent_end,
            },
            prior: DateRange {
                start: prior_start,
                end: prior_end,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn windows_are_equal_contiguous_and_lagged() {
        let windows = ReportWindows::ending(date(2026, 3, 31), 3, 28).unwrap();

        assert_eq!(
            windows.recent,
            DateRange {
                start: date(2026, 3, 1),
                end: date(2026, 3, 28),
            }
        );
        assert_eq!(
            windows.prior,
            DateRange {
                start: date(2026, 2, 1),
                end: date(2026, 2, 28),
            }
        );
        assert_eq!(windows.recent.days(), 28);
        assert_eq!(windows.prior.days(), 28);
        assert_eq!(windows.prior.end.succ_opt(), Some(windows.recent.start));
    }

    #[test]
    fn zero_lag_ends_today() {
        let windows = ReportWindows::ending(date(2026, 1, 10), 0, 1).unwrap();
        assert_eq!(windows.recent.start, date(2026, 1, 10));
        assert_eq!(windows.recent.end, date(2026, 1, 10));
        assert_eq!(windows.prior.start, date(2026, 1, 9));
    }

    #[test]
    fn zero_length_window_is_rejected() {
        let err = ReportWindows::ending(date(2026, 1, 10), 3, 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
