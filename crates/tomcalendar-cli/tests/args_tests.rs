//! Tests for the argument helpers shared by both binaries.

use std::ffi::OsString;

use tomcalendar::Date;
use tomcalendar_cli::{normalize_args, parse_date, query_dates};

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

#[test]
fn single_dash_long_flags_are_rewritten() {
    let args = normalize_args(
        os(&["tomcalendar", "-calendar", "cal.txt", "-date=2020-03-22"]),
        &["calendar", "date", "since"],
    );
    assert_eq!(
        args,
        os(&["tomcalendar", "--calendar", "cal.txt", "--date=2020-03-22"])
    );
}

#[test]
fn other_arguments_are_left_alone() {
    let input = os(&[
        "tomcalendar-export",
        "--json",
        "out.json",
        "-h",
        "-",
        "-verbose",
        "calendar",
    ]);
    assert_eq!(normalize_args(input.clone(), &["calendar", "json"]), input);
}

#[test]
fn parse_date_accepts_iso_days() {
    assert_eq!(parse_date("2020-03-22").unwrap(), date(2020, 3, 22));
    assert!(parse_date("2020-02-30").is_err());
    assert!(parse_date("03/22/2020").is_err());
}

#[test]
fn explicit_date_wins() {
    let today = date(2020, 3, 25);
    let dates = query_dates(Some("2020-01-01"), Some("2020-03-20"), today).unwrap();
    assert_eq!(dates, [date(2020, 1, 1)]);
}

#[test]
fn since_covers_days_after_it_through_today() {
    let today = date(2020, 3, 3);
    let dates = query_dates(None, Some("2020-02-28"), today).unwrap();
    assert_eq!(
        dates,
        [date(2020, 2, 29), date(2020, 3, 1), date(2020, 3, 2), date(2020, 3, 3)]
    );
}

#[test]
fn default_is_today() {
    let today = date(2020, 3, 3);
    assert_eq!(query_dates(None, None, today).unwrap(), [today]);
}

#[test]
fn malformed_since_is_an_error() {
    let err = query_dates(None, Some("yesterday"), date(2020, 3, 3)).unwrap_err();
    assert!(err.to_string().contains("could not parse date"));
}
