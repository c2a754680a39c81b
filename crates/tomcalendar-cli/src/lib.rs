//! Helpers shared by the `tomcalendar` and `tomcalendar-export` binaries.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tomcalendar::{Date, Entry};
use tracing_subscriber::EnvFilter;

/// Format accepted by `--date` and `--since`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Install a compact stderr subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Rewrite single-dash long flags (`-calendar x`, `-json=out.json`) to the
/// double-dash form clap expects. Only names in `long_flags` are touched.
pub fn normalize_args<I>(args: I, long_flags: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if long_flags.contains(&name) {
                OsString::from(format!("--{rest}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` flag value.
pub fn parse_date(text: &str) -> Result<Date> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Date::from)
        .with_context(|| format!("could not parse date {text:?} (expected YYYY-MM-DD)"))
}

/// The dates an agenda query covers.
///
/// `date` wins over `since`; `since` covers every day after it through
/// `today`; with neither, just `today`.
pub fn query_dates(date: Option<&str>, since: Option<&str>, today: Date) -> Result<Vec<Date>> {
    match (date, since) {
        (Some(date), _) => Ok(vec![parse_date(date)?]),
        (None, Some(since)) => Ok(tomcalendar::dates_after(parse_date(since)?, today)),
        (None, None) => Ok(vec![today]),
    }
}

/// Parse the calendar at `path`, or standard input when `path` is `None`.
pub fn read_calendar(path: Option<&Path>) -> Result<Vec<Entry>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open calendar {}", path.display()))?;
            let label = path.to_string_lossy();
            tomcalendar::parse(BufReader::new(file), &label)
                .with_context(|| format!("could not parse calendar {}", path.display()))
        }
        None => tomcalendar::parse(io::stdin().lock(), "")
            .context("could not parse calendar from stdin"),
    }
}
