//! Calendar dates and the displayed year/month

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// A year/month/day triple with no time component
///
/// Equality and ordering are by calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, returning None for impossible days (e.g. Feb 30)
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Today's date on the local clock
    pub fn today() -> Self {
        CalendarDate(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month of year (0-11)
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday = 0
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// The Sunday that starts this date's week
    pub fn week_start(&self) -> Self {
        let back = Days::new(u64::from(self.weekday_from_sunday()));
        CalendarDate(self.0.checked_sub_days(back).unwrap_or(self.0))
    }

    /// The Saturday that ends this date's week
    pub fn week_end(&self) -> Self {
        let start = self.week_start();
        CalendarDate(start.0.checked_add_days(Days::new(6)).unwrap_or(start.0))
    }

    /// Format with a chrono strftime pattern
    ///
    /// An invalid pattern falls back to ISO `%Y-%m-%d`.
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.0.format(pattern)).is_err() {
            return self.to_string();
        }
        out
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Number of days in a month, from calendar arithmetic
///
/// `month` is 1-12. Returns 0 for an out-of-range month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

/// The year and month currently shown in the grid, independent of selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPosition {
    year: i32,
    month0: u32,
}

impl ViewPosition {
    /// Create a view position; the month wraps into [0, 11]
    pub fn new(year: i32, month0: i32) -> Self {
        let total = i64::from(year) * 12 + i64::from(month0);
        ViewPosition {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// The month containing a date
    pub fn of(date: CalendarDate) -> Self {
        ViewPosition {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month (0-11)
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Move by a number of months, carrying into the year
    pub fn shift_months(&self, delta: i32) -> Self {
        ViewPosition::new(self.year, self.month0 as i32 + delta)
    }

    /// Move by a number of years, keeping the month
    pub fn shift_years(&self, delta: i32) -> Self {
        ViewPosition {
            year: self.year + delta,
            month0: self.month0,
        }
    }

    /// First year of the 12-year window holding this position
    pub fn year_window_start(&self) -> i32 {
        self.year.div_euclid(12) * 12
    }

    /// First day of the displayed month
    pub fn first_day(&self) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month0 + 1, 1)
    }
}
