//! Calendar months relative to a reference instant.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use dentra_domain::MonthRollover;
use serde::Serialize;

use crate::time::Clock;

/// A calendar month; `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(instant: DateTime<Utc>) -> Self {
        Self::new(instant.year(), instant.month())
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        Self::of(instant) == *self
    }

    /// The month before this one; only January depends on `rollover`.
    pub fn previous(self, rollover: MonthRollover) -> Self {
        if self.month > 1 {
            return Self::new(self.year, self.month - 1);
        }
        match rollover {
            MonthRollover::Calendar => Self::new(self.year - 1, 12),
            MonthRollover::SameYear => Self::new(self.year, 12),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Which of the two compared months an instant falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthBucket {
    Current,
    Previous,
}

/// The current month and the month it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    pub current: YearMonth,
    pub previous: YearMonth,
    #[serde(skip)]
    pub rollover: MonthRollover,
}

impl MonthWindow {
    pub fn around(now: DateTime<Utc>, rollover: MonthRollover) -> Self {
        let current = YearMonth::of(now);
        Self {
            current,
            previous: current.previous(rollover),
            rollover,
        }
    }

    pub fn from_clock(clock: &dyn Clock, rollover: MonthRollover) -> Self {
        Self::around(clock.now(), rollover)
    }

    pub fn bucket(&self, instant: DateTime<Utc>) -> Option<MonthBucket> {
        let month = YearMonth::of(instant);
        if month == self.current {
            Some(MonthBucket::Current)
        } else if month == self.previous {
            Some(MonthBucket::Previous)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn mid_year_previous_month() {
        let window = MonthWindow::around(at(2024, 5, 15), MonthRollover::Calendar);
        assert_eq!(window.current, YearMonth::new(2024, 5));
        assert_eq!(window.previous, YearMonth::new(2024, 4));
        assert_eq!(window.bucket(at(2024, 4, 30)), Some(MonthBucket::Previous));
        assert_eq!(window.bucket(at(2023, 5, 15)), None);
    }

    #[test]
    fn january_rollover_policies() {
        let calendar = MonthWindow::around(at(2025, 1, 10), MonthRollover::Calendar);
        assert_eq!(calendar.previous, YearMonth::new(2024, 12));
        assert_eq!(calendar.bucket(at(2024, 12, 24)), Some(MonthBucket::Previous));

        let same_year = MonthWindow::around(at(2025, 1, 10), MonthRollover::SameYear);
        assert_eq!(same_year.previous, YearMonth::new(2025, 12));
        assert_eq!(same_year.bucket(at(2024, 12, 24)), None);
    }

    #[test]
    fn displays_as_iso_month() {
        assert_eq!(YearMonth::new(2024, 3).to_string(), "2024-03");
    }
}
