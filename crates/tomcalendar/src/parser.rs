//! Calendar file parser -- tab-separated lines into an ordered list of entries.
//!
//! Each non-empty, non-comment line is split on its first tab:
//!
//! - `<spec>` declares a date spec for the title-only lines that follow.
//! - `\t<title>` adds an entry under the most recently declared spec.
//! - `<spec>\t<title>` declares a spec and adds an entry under it.
//!
//! Comments are whole lines whose first non-whitespace characters are `#` or
//! `//`. Text after a title is never treated as a comment.
//!
//! The first error aborts the parse; no partial entry list is returned.

use std::io::BufRead;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::datespec::{month_from_name, weekday_from_name, DateSpec};
use crate::error::{CalendarError, Result, SpecError};

/// A calendar item: a title and the spec it recurs on.
///
/// Title-only lines share the spec of the line that declared it, so several
/// entries may point at the same `DateSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "text")]
    pub title: String,
    #[serde(rename = "spec")]
    pub date_spec: Arc<DateSpec>,
}

impl Entry {
    pub fn new(title: impl Into<String>, date_spec: DateSpec) -> Self {
        Entry {
            title: title.into(),
            date_spec: Arc::new(date_spec),
        }
    }
}

/// Parse a calendar from `reader`. `path` only labels error messages and may
/// be empty for unnamed streams.
///
/// # Errors
/// Returns `CalendarError::Io` if reading fails and `CalendarError::Parse`
/// (with path and 1-based line number) for the first malformed line.
pub fn parse<R: BufRead>(reader: R, path: &str) -> Result<Vec<Entry>> {
    let mut state = ParseState::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        state
            .feed(&line, index + 1)
            .map_err(|kind| CalendarError::at(path, index + 1, kind))?;
    }
    let entries = state
        .finish()
        .map_err(|(line, kind)| CalendarError::at(path, line, kind))?;
    debug!(path, entries = entries.len(), "parsed calendar");
    Ok(entries)
}

/// Parse a calendar held in memory.
pub fn parse_str(input: &str, path: &str) -> Result<Vec<Entry>> {
    parse(input.as_bytes(), path)
}

/// The spec most recently declared, and whether any entry used it yet.
struct Declared {
    spec: Arc<DateSpec>,
    text: String,
    line: usize,
    has_entries: bool,
}

#[derive(Default)]
struct ParseState {
    entries: Vec<Entry>,
    current: Option<Declared>,
}

impl ParseState {
    fn feed(&mut self, line: &str, number: usize) -> std::result::Result<(), SpecError> {
        if line.is_empty() || is_comment(line) {
            trace!(line = number, "skipping empty or comment line");
            return Ok(());
        }

        match line.split_once('\t') {
            None => {
                self.declare(line, number)?;
            }
            Some(("", title)) => {
                let current = self.current.as_mut().ok_or(SpecError::MissingDateSpec)?;
                current.has_entries = true;
                self.entries.push(Entry {
                    title: title.to_string(),
                    date_spec: Arc::clone(&current.spec),
                });
            }
            Some((spec_text, title)) => {
                let spec = self.declare(spec_text, number)?;
                self.entries.push(Entry {
                    title: title.to_string(),
                    date_spec: spec,
                });
                if let Some(current) = self.current.as_mut() {
                    current.has_entries = true;
                }
            }
        }
        Ok(())
    }

    fn declare(
        &mut self,
        text: &str,
        number: usize,
    ) -> std::result::Result<Arc<DateSpec>, SpecError> {
        let spec = Arc::new(parse_date_spec(text)?);
        debug!(line = number, spec = %spec, "declared date spec");
        self.current = Some(Declared {
            spec: Arc::clone(&spec),
            text: text.to_string(),
            line: number,
            has_entries: false,
        });
        Ok(spec)
    }

    fn finish(self) -> std::result::Result<Vec<Entry>, (usize, SpecError)> {
        match self.current {
            Some(Declared {
                text,
                line,
                has_entries: false,
                ..
            }) => Err((line, SpecError::NoEntries(text))),
            _ => Ok(self.entries),
        }
    }
}

/// Whole-line `#` or `//` comment, possibly indented.
fn is_comment(line: &str) -> bool {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
    rest.starts_with('#') || rest.starts_with("//")
}

/// Parse the date-spec field of a calendar line.
///
/// Surrounding whitespace is ignored. Productions are tried in order and the
/// first match wins: `a | b` (union), `*`, `*/N`, `Weekday`, `Weekday/N`,
/// `D *` (day of month, negative counts from the end), `Month D` (yearly) and
/// `Month D, YYYY` (single day). Month and weekday names are full English
/// names matched case-insensitively.
///
/// # Errors
/// Returns the [`SpecError`] naming the offending token and constraint.
pub fn parse_date_spec(text: &str) -> std::result::Result<DateSpec, SpecError> {
    let s = text.trim();

    if s.contains('|') {
        return s
            .split('|')
            .map(parse_date_spec)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(DateSpec::Union);
    }

    if s == "*" {
        return Ok(DateSpec::Daily);
    }

    if let Some(n) = s.strip_prefix("*/").filter(|n| is_digits(n)) {
        let count = parse_count(n, SpecError::DayCountTooSmall)?;
        return Ok(DateSpec::EveryNthDay { count });
    }

    if let Some(weekday) = weekday_from_name(s) {
        return Ok(DateSpec::Weekday(weekday));
    }

    if let Some((weekday, n)) = s
        .split_once('/')
        .and_then(|(name, n)| Some((weekday_from_name(name)?, n)))
        .filter(|(_, n)| is_digits(n))
    {
        let count = parse_count(n, SpecError::WeekCountTooSmall)?;
        return Ok(DateSpec::EveryNthWeekday { weekday, count });
    }

    if let Some(day) = s.strip_suffix(" *").filter(|d| is_signed_digits(d)) {
        let value: i64 = day.parse().map_err(|source| SpecError::InvalidDay {
            text: day.to_string(),
            source,
        })?;
        return match i32::try_from(value) {
            Ok(day) if (-31..=-1).contains(&day) || (1..=31).contains(&day) => {
                Ok(DateSpec::DayOfMonth(day))
            }
            _ => Err(SpecError::DayOfMonthOutOfRange(value)),
        };
    }

    if let Some((name, day)) = s
        .split_once(' ')
        .filter(|(name, day)| !name.is_empty() && is_digits(day))
    {
        let month =
            month_from_name(name).ok_or_else(|| SpecError::UnknownMonth(name.to_string()))?;
        let day: u32 = day.parse().map_err(|source| SpecError::InvalidDay {
            text: day.to_string(),
            source,
        })?;
        return Ok(DateSpec::Yearly { month, day });
    }

    if let Some((name, day, year)) = s.split_once(' ').and_then(|(name, rest)| {
        let (day, year) = rest.split_once(", ")?;
        (!name.is_empty() && is_digits(day) && is_digits(year)).then_some((name, day, year))
    }) {
        let month =
            month_from_name(name).ok_or_else(|| SpecError::UnknownMonth(name.to_string()))?;
        let day: u32 = day.parse().map_err(|source| SpecError::InvalidDay {
            text: day.to_string(),
            source,
        })?;
        if !(1..=31).contains(&day) {
            return Err(SpecError::SingleDayOutOfRange(day));
        }
        let year: i32 = year.parse().map_err(|source| SpecError::InvalidYear {
            text: year.to_string(),
            source,
        })?;
        return Ok(DateSpec::SingleDay { year, month, day });
    }

    Err(SpecError::Unrecognized(s.to_string()))
}

impl FromStr for DateSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_date_spec(s)
    }
}

fn parse_count(
    text: &str,
    too_small: fn(String) -> SpecError,
) -> std::result::Result<NonZeroU32, SpecError> {
    let count: u32 = text.parse().map_err(|source| SpecError::InvalidInterval {
        text: text.to_string(),
        source,
    })?;
    NonZeroU32::new(count).ok_or_else(|| too_small(text.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_signed_digits(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}
