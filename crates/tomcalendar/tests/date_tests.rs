//! Tests for civil-date normalization and epoch-relative arithmetic.

use chrono::{Datelike, Weekday};
use tomcalendar::Date;

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).expect("date in range")
}

// ---------------------------------------------------------------------------
// Construction and normalization
// ---------------------------------------------------------------------------

#[test]
fn plain_date_keeps_its_fields() {
    let d = date(2020, 3, 22);
    assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 22));
    assert_eq!(d.to_string(), "2020-03-22");
}

#[test]
fn month_thirteen_rolls_into_next_year() {
    assert_eq!(date(2020, 13, 1), date(2021, 1, 1));
}

#[test]
fn nonexistent_leap_day_rolls_into_march() {
    assert_eq!(date(2021, 2, 29), date(2021, 3, 1));
    assert_eq!(date(2020, 2, 29).day(), 29);
}

#[test]
fn day_zero_is_last_day_of_previous_month() {
    assert_eq!(date(2020, 3, 0), date(2020, 2, 29));
    assert_eq!(date(2021, 1, 0), date(2020, 12, 31));
}

#[test]
fn day_overflow_rolls_into_next_month() {
    assert_eq!(date(2020, 4, 31), date(2020, 5, 1));
}

// ---------------------------------------------------------------------------
// Weekday and epoch counters
// ---------------------------------------------------------------------------

#[test]
fn epoch_is_a_thursday_with_day_count_zero() {
    let epoch = date(1970, 1, 1);
    assert_eq!(epoch.weekday(), Weekday::Thu);
    assert_eq!(epoch.days_since_epoch(), 0);
    assert_eq!(epoch.weeks_since_epoch(), 0);
}

#[test]
fn day_count_is_signed() {
    assert_eq!(date(1969, 12, 31).days_since_epoch(), -1);
    assert_eq!(date(1960, 1, 1).days_since_epoch(), -3653);
    assert_eq!(date(2000, 1, 1).days_since_epoch(), 10957);
    assert_eq!(date(2020, 12, 31).days_since_epoch(), 18627);
}

#[test]
fn day_count_is_monotonic_across_leap_days() {
    let mut previous = date(1999, 12, 1).days_since_epoch();
    let mut cursor = date(1999, 12, 2);
    while cursor <= date(2001, 3, 31) {
        let current = cursor.days_since_epoch();
        assert_eq!(current, previous + 1, "gap at {cursor}");
        previous = current;
        cursor = cursor.succ().unwrap();
    }
}

#[test]
fn week_count_floors_before_the_epoch() {
    assert_eq!(date(1970, 1, 7).weeks_since_epoch(), 0);
    assert_eq!(date(1970, 1, 8).weeks_since_epoch(), 1);
    assert_eq!(date(1969, 12, 31).weeks_since_epoch(), -1);
    assert_eq!(date(1969, 12, 25).weeks_since_epoch(), -1);
    assert_eq!(date(1969, 12, 24).weeks_since_epoch(), -2);
}

#[test]
fn weekdays_match_the_civil_calendar() {
    assert_eq!(date(2020, 3, 15).weekday(), Weekday::Sun);
    assert_eq!(date(2020, 12, 25).weekday(), Weekday::Fri);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Sat);
}

// ---------------------------------------------------------------------------
// Counting back from the end of the month
// ---------------------------------------------------------------------------

#[test]
fn minus_one_is_last_day_of_month() {
    assert_eq!(date(2020, 2, 10).counted_from_month_end(-1), Some(date(2020, 2, 29)));
    assert_eq!(date(2021, 2, 10).counted_from_month_end(-1), Some(date(2021, 2, 28)));
    assert_eq!(date(2020, 12, 1).counted_from_month_end(-1), Some(date(2020, 12, 31)));
    assert_eq!(date(2020, 4, 30).counted_from_month_end(-1), Some(date(2020, 4, 30)));
}

#[test]
fn minus_two_is_second_to_last_day() {
    assert_eq!(date(2020, 12, 5).counted_from_month_end(-2), Some(date(2020, 12, 30)));
}

#[test]
fn long_offsets_land_in_previous_month() {
    // 31 days back from March 1 in a non-leap year.
    assert_eq!(date(2021, 2, 1).counted_from_month_end(-31), Some(date(2021, 1, 29)));
}

// ---------------------------------------------------------------------------
// Local start of day
// ---------------------------------------------------------------------------

#[test]
fn local_start_of_day_is_on_the_same_date() {
    let d = date(2020, 6, 15);
    let start = d.local_start_of_day().expect("midnight exists");
    assert_eq!(start.date_naive(), d.naive());
    assert_eq!(start.day(), 15);
}
