//! Date specs -- the recurrence rules a calendar entry can carry.
//!
//! [`DateSpec`] is a closed set of rules evaluated against a [`Date`] with
//! [`DateSpec::occurs_on`]. Every predicate is pure and total.
//!
//! Specs serialize to the external JSON schema, discriminated by `"type"`:
//! `daily`, `union`, `everyNth`, `dayOfWeek`, `dayOfMonth`, `dayOfYear` and
//! `singleDay`. Weekdays are numbered 1-7 with Sunday = 1 in that schema.

use std::fmt;
use std::num::NonZeroU32;

use chrono::{Month, Weekday};
use serde::{Serialize, Serializer};

use crate::date::{Date, DateParts};

/// Full English weekday names, Sunday first.
pub(crate) const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sunday"),
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
];

/// Case-insensitive lookup of a full weekday name ("sunday", "SUNDAY").
/// Abbreviations are not accepted.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(_, full)| full.eq_ignore_ascii_case(name))
        .map(|(weekday, _)| *weekday)
}

/// Case-insensitive lookup of a full month name ("march", "March").
/// Abbreviations are not accepted.
pub fn month_from_name(name: &str) -> Option<Month> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|month| month.name().eq_ignore_ascii_case(name))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_sunday() as usize].1
}

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateSpec {
    /// Every day.
    Daily,

    /// Days whose signed day count since 1970-01-01 is divisible by `count`.
    EveryNthDay { count: NonZeroU32 },

    /// Every occurrence of a weekday.
    Weekday(Weekday),

    /// `weekday` in every `count`th week, counting weeks from 1970-01-01.
    EveryNthWeekday { weekday: Weekday, count: NonZeroU32 },

    /// The `day`th of each month when positive; counted back from the end of
    /// the month when negative (-1 is the last day).
    DayOfMonth(i32),

    /// The same month and day each year. `day` is not range checked.
    Yearly { month: Month, day: u32 },

    /// Exactly one calendar date.
    SingleDay { year: i32, month: Month, day: u32 },

    /// Any of the child specs.
    Union(Vec<DateSpec>),
}

impl DateSpec {
    /// Whether this spec takes place on `date`.
    pub fn occurs_on(&self, date: &Date) -> bool {
        match self {
            DateSpec::Daily => true,
            DateSpec::EveryNthDay { count } => {
                date.days_since_epoch() % i64::from(count.get()) == 0
            }
            DateSpec::Weekday(weekday) => date.weekday() == *weekday,
            DateSpec::EveryNthWeekday { weekday, count } => {
                date.weekday() == *weekday
                    && date.weeks_since_epoch() % i64::from(count.get()) == 0
            }
            DateSpec::DayOfMonth(day) if *day < 0 => date
                .counted_from_month_end(*day)
                .is_some_and(|resolved| resolved.day() == date.day()),
            DateSpec::DayOfMonth(day) => i64::from(*day) == i64::from(date.day()),
            DateSpec::Yearly { month, day } => {
                date.month() == month.number_from_month() && date.day() == *day
            }
            DateSpec::SingleDay { year, month, day } => {
                date.year() == *year
                    && date.month() == month.number_from_month()
                    && date.day() == *day
            }
            DateSpec::Union(specs) => specs.iter().any(|spec| spec.occurs_on(date)),
        }
    }

    fn to_json(&self) -> SpecJson<'_> {
        match self {
            DateSpec::Daily => SpecJson::Daily,
            DateSpec::Union(specs) => SpecJson::Union { specs },
            DateSpec::EveryNthDay { count } => SpecJson::EveryNth {
                spec: Box::new(SpecJson::Daily),
                base_date: EPOCH_PARTS,
                n: count.get(),
            },
            DateSpec::Weekday(weekday) => day_of_week(*weekday),
            DateSpec::EveryNthWeekday { weekday, count } => SpecJson::EveryNth {
                spec: Box::new(day_of_week(*weekday)),
                base_date: EPOCH_PARTS,
                n: count.get(),
            },
            DateSpec::DayOfMonth(day) => SpecJson::DayOfMonth { day: *day },
            DateSpec::Yearly { month, day } => SpecJson::DayOfYear {
                month: month.number_from_month(),
                day: *day,
            },
            DateSpec::SingleDay { year, month, day } => SpecJson::SingleDay {
                date: DateParts {
                    year: *year,
                    month: month.number_from_month(),
                    day: *day,
                },
            },
        }
    }
}

const EPOCH_PARTS: DateParts = DateParts {
    year: 1970,
    month: 1,
    day: 1,
};

fn day_of_week(weekday: Weekday) -> SpecJson<'static> {
    SpecJson::DayOfWeek {
        weekday: weekday.number_from_sunday(),
    }
}

/// Wire shape of a spec.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum SpecJson<'a> {
    Daily,
    Union {
        specs: &'a [DateSpec],
    },
    EveryNth {
        spec: Box<SpecJson<'a>>,
        #[serde(rename = "baseDate")]
        base_date: DateParts,
        n: u32,
    },
    DayOfWeek {
        weekday: u32,
    },
    DayOfMonth {
        day: i32,
    },
    DayOfYear {
        month: u32,
        day: u32,
    },
    SingleDay {
        date: DateParts,
    },
}

impl Serialize for DateSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Renders the spec in calendar-file syntax. Specs produced by the parser
/// render to text that parses back to an equal spec.
impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpec::Daily => f.write_str("*"),
            DateSpec::EveryNthDay { count } => write!(f, "*/{count}"),
            DateSpec::Weekday(weekday) => f.write_str(weekday_name(*weekday)),
            DateSpec::EveryNthWeekday { weekday, count } => {
                write!(f, "{}/{count}", weekday_name(*weekday))
            }
            DateSpec::DayOfMonth(day) => write!(f, "{day} *"),
            DateSpec::Yearly { month, day } => write!(f, "{} {day}", month.name()),
            DateSpec::SingleDay { year, month, day } => {
                write!(f, "{} {day}, {year}", month.name())
            }
            DateSpec::Union(specs) => {
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{spec}")?;
                }
                Ok(())
            }
        }
    }
}
