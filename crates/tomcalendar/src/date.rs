//! Calendar dates and the arithmetic the date specs are evaluated with.
//!
//! A [`Date`] is a plain civil (year, month, day) value. Construction follows
//! civil-calendar overflow rules, so `2020-13-01` becomes `2021-01-01` and
//! `2021-02-29` becomes `2021-03-01`. All arithmetic after construction is total.

use std::fmt;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, TimeZone, Weekday};
use serde::Serialize;

/// `num_days_from_ce` of 1970-01-01, the reference day for "every Nth
/// day/week" counters.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A civil calendar date, normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Build a date from possibly out-of-range components.
    ///
    /// Months past December roll into the following years and days past the
    /// end of the month roll into the following months. Returns `None` only
    /// when the result is outside the range chrono can represent.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        match day {
            0 => first.pred_opt(),
            day => first.checked_add_days(Days::new(u64::from(day - 1))),
        }
        .map(Date)
    }

    /// The local date right now.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Signed day count from 1970-01-01: negative before the epoch.
    pub fn days_since_epoch(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
    }

    /// Floor of the epoch day count divided by seven.
    ///
    /// Week 0 is the seven days starting 1970-01-01; the day before the
    /// epoch is in week -1.
    pub fn weeks_since_epoch(&self) -> i64 {
        self.days_since_epoch().div_euclid(7)
    }

    /// The day `|offset|` days before the first of the following month.
    ///
    /// An `offset` of -1 is the last day of this date's month, -2 the day
    /// before it. Month lengths and leap years fall out of the calendar
    /// rollover; offsets longer than the month land in the previous month.
    pub fn counted_from_month_end(&self, offset: i32) -> Option<Self> {
        let next_month = self.0.with_day(1)?.checked_add_months(Months::new(1))?;
        next_month
            .checked_sub_days(Days::new(u64::from(offset.unsigned_abs())))
            .map(Date)
    }

    /// Local midnight at the start of this date.
    ///
    /// `None` when midnight does not exist locally (a DST gap at 00:00).
    pub fn local_start_of_day(&self) -> Option<DateTime<Local>> {
        let midnight = self.0.and_hms_opt(0, 0, 0)?;
        Local.from_local_datetime(&midnight).earliest()
    }

    /// The next calendar day.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The `{"year", "month", "day"}` object used by the JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}
