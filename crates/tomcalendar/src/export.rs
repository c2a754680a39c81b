//! JSON export of parsed calendars.
//!
//! The document is a single object, `{"entries": [{"text": ..., "spec": ...}]}`,
//! written pretty-printed with two-space indentation and a trailing newline.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::parser::Entry;

/// The exported document: every entry of every calendar, in input order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalendarExport<'a> {
    pub entries: &'a [Entry],
}

impl<'a> CalendarExport<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        CalendarExport { entries }
    }
}

/// Render `entries` as the pretty-printed export document.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&CalendarExport::new(entries))?;
    json.push('\n');
    Ok(json)
}

/// Write the export document for `entries` to `writer`.
///
/// # Errors
/// Returns `CalendarError::Json` if encoding fails and `CalendarError::Io` if
/// the writer does.
pub fn write_json<W: Write>(mut writer: W, entries: &[Entry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &CalendarExport::new(entries))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
