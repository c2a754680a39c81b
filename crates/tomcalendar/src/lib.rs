//! # tomcalendar
//!
//! Plain-text recurring calendars. A calendar file pairs date specs ("every
//! third day", "the last day of the month", "December 25") with entry titles,
//! one per tab-separated line; this crate parses such files and answers which
//! entries fall on a given date.
//!
//! ## Quick start
//!
//! ```rust
//! use tomcalendar::{agenda::titles_on, parse_str, Date};
//!
//! let entries = parse_str("*\tDaily\n*/3\tEvery third day\nSunday\tOnly Sunday\n", "").unwrap();
//! let epoch = Date::from_ymd(1970, 1, 1).unwrap();
//! assert_eq!(titles_on(&entries, &epoch), ["Daily", "Every third day"]);
//! ```
//!
//! ## Modules
//!
//! - [`date`]: civil dates, weekday and epoch-relative day counts
//! - [`datespec`]: the recurrence rules and their JSON form
//! - [`parser`]: calendar text → ordered list of [`Entry`]
//! - [`agenda`]: filter entries by date, enumerate date ranges
//! - [`export`]: `{"entries": [...]}` JSON document
//! - [`error`]: Error types

pub mod agenda;
pub mod date;
pub mod datespec;
pub mod error;
pub mod export;
pub mod parser;

pub use agenda::{agenda, dates_after};
pub use date::Date;
pub use datespec::DateSpec;
pub use error::{CalendarError, SpecError};
pub use export::{to_json, write_json};
pub use parser::{parse, parse_date_spec, parse_str, Entry};
