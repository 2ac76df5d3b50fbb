//! Calendar arithmetic and holiday classification.
//!
//! Pure functions over month tokens and date sets: no timezone conversion,
//! no mutable state. Every derived view (demand, export, headers) is
//! recomputed from these on demand.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::{Result, RosterError};
use crate::types::CalendarDay;

/// A validated `YYYY-MM` month token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthToken {
    first: NaiveDate,
}

impl MonthToken {
    /// Build a token from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| RosterError::InvalidInput(format!("invalid month {year}-{month:02}")))?;
        Ok(Self { first })
    }

    /// The month containing today, in the local calendar.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self { first: today.with_day(1).unwrap_or(today) }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// First day of the month.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Number of days in the month, leap-year correct.
    pub fn days_in_month(self) -> u32 {
        let next_first = if self.first.month() == 12 {
            NaiveDate::from_ymd_opt(self.first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.first.year(), self.first.month() + 1, 1)
        };
        match next_first {
            Some(next) => next.signed_duration_since(self.first).num_days() as u32,
            // Only reachable at the NaiveDate range boundary.
            None => 31,
        }
    }

    /// Date of the given 1-based day of this month, if it exists.
    pub fn date_of(self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.checked_add_days(Days::new(u64::from(day - 1)))
    }

    /// Iterate every date of the month in order.
    pub fn iter_days(self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first;
        (0..self.days_in_month()).filter_map(move |offset| {
            first.checked_add_days(Days::new(u64::from(offset)))
        })
    }
}

impl FromStr for MonthToken {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RosterError::InvalidInput(format!("invalid month token: {s:?}"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.first.year(), self.first.month())
    }
}

/// Single-character weekday label, Sunday first (matches the roster UI).
pub fn weekday_label(day: NaiveDate) -> &'static str {
    match day.weekday() {
        Weekday::Sun => "日",
        Weekday::Mon => "一",
        Weekday::Tue => "二",
        Weekday::Wed => "三",
        Weekday::Thu => "四",
        Weekday::Fri => "五",
        Weekday::Sat => "六",
    }
}

/// Holiday classification rule: explicit date set plus an optional
/// weekend-as-holiday policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
    weekend_as_holiday: bool,
}

impl HolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>, weekend_as_holiday: bool) -> Self {
        Self { dates: dates.into_iter().collect(), weekend_as_holiday }
    }

    pub fn weekend_as_holiday(&self) -> bool {
        self.weekend_as_holiday
    }

    /// Explicit holiday dates, sorted.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Classify a date: explicit set first, then the weekend policy.
    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        if self.dates.contains(&day) {
            return true;
        }
        self.weekend_as_holiday
            && matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Project the month into the classified day sequence every view consumes.
pub fn calendar_days(month: MonthToken, calendar: &HolidayCalendar) -> Vec<CalendarDay> {
    month
        .iter_days()
        .map(|day| CalendarDay { day, holiday: calendar.is_holiday(day) })
        .collect()
}
