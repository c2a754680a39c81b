//! Error types for calendar parsing and export.

use std::num::ParseIntError;

use thiserror::Error;

/// What was wrong with a single calendar line, without location context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The text matched none of the date-spec productions.
    #[error("unrecognized date specifier: {0:?}")]
    Unrecognized(String),

    #[error("could not parse interval {text:?}: {source}")]
    InvalidInterval { text: String, source: ParseIntError },

    #[error("day count is {0:?}, but must be at least 1")]
    DayCountTooSmall(String),

    #[error("week count is {0:?}, but must be at least 1")]
    WeekCountTooSmall(String),

    #[error("could not parse day of month {text:?}: {source}")]
    InvalidDay { text: String, source: ParseIntError },

    #[error("day of month {0} is out of range [-31, -1] ∪ [1, 31]")]
    DayOfMonthOutOfRange(i64),

    #[error("day of month {0} is out of range [1, 31]")]
    SingleDayOutOfRange(u32),

    #[error("unrecognized month {0:?}")]
    UnknownMonth(String),

    #[error("could not parse year {text:?}: {source}")]
    InvalidYear { text: String, source: ParseIntError },

    /// A title-only line appeared before any date spec was declared.
    #[error("date spec required for first entry")]
    MissingDateSpec,

    /// The last spec declared on its own line never received an entry.
    #[error("date spec {0:?} has no entries")]
    NoEntries(String),
}

/// Errors surfaced by parsing or exporting a calendar.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// A grammar, range or structural error, located by path and 1-based line.
    #[error("{path}:{line}: {kind}")]
    Parse {
        path: String,
        line: usize,
        kind: SpecError,
    },

    #[error("read calendar: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalendarError {
    pub(crate) fn at(path: &str, line: usize, kind: SpecError) -> Self {
        CalendarError::Parse {
            path: path.to_string(),
            line,
            kind,
        }
    }

    /// The 1-based line number of a parse error, if this is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CalendarError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The underlying line-level error, if this is a parse error.
    pub fn kind(&self) -> Option<&SpecError> {
        match self {
            CalendarError::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Convenience alias used throughout tomcalendar.
pub type Result<T> = std::result::Result<T, CalendarError>;
