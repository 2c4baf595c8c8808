use chrono::{Duration, NaiveDate};

use crate::utils::constants::{MAX_WINDOW_EXPONENT, MIN_WINDOW_EXPONENT};

/// A span of `days` calendar days ending on `end`.
///
/// `start` is exclusive and `end` inclusive, so the window holds exactly
/// `days` dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub days: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        Self {
            days,
            start: end - Duration::days(i64::from(days)),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.start && date <= self.end
    }

    /// Every date in the window, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=i64::from(self.days)).map(move |offset| self.start + Duration::days(offset))
    }
}

/// Window sizes the exporter walks through: 2^10 ..= 2^15 days.
pub fn doubling_window_sizes() -> impl Iterator<Item = u32> {
    (MIN_WINDOW_EXPONENT..=MAX_WINDOW_EXPONENT).map(|i| 2u32.pow(i))
}
