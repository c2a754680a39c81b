//! Agenda queries -- which entries fall on a set of dates.

use tracing::debug;

use crate::date::Date;
use crate::parser::Entry;

/// Entries whose spec occurs on any of `dates`, in entry order.
///
/// Each entry appears at most once, however many of the dates it matches.
pub fn agenda<'a>(entries: &'a [Entry], dates: &[Date]) -> Vec<&'a Entry> {
    let matched: Vec<&Entry> = entries
        .iter()
        .filter(|entry| dates.iter().any(|date| entry.date_spec.occurs_on(date)))
        .collect();
    debug!(
        entries = entries.len(),
        dates = dates.len(),
        matched = matched.len(),
        "evaluated agenda"
    );
    matched
}

/// Titles of the entries that occur on `date`, in entry order.
pub fn titles_on<'a>(entries: &'a [Entry], date: &Date) -> Vec<&'a str> {
    agenda(entries, std::slice::from_ref(date))
        .into_iter()
        .map(|entry| entry.title.as_str())
        .collect()
}

/// Every date strictly after `since`, up to and including `until`.
///
/// Empty when `since` is on or after `until`.
pub fn dates_after(since: Date, until: Date) -> Vec<Date> {
    let mut dates = Vec::new();
    let mut cursor = since.succ();
    while let Some(date) = cursor.filter(|date| *date <= until) {
        dates.push(date);
        cursor = date.succ();
    }
    dates
}
