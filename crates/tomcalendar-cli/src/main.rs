//! `tomcalendar`: print the agenda of a calendar file.
//!
//! ## Usage
//!
//! ```sh
//! # Today's entries
//! tomcalendar --calendar ~/calendar.txt
//!
//! # A specific day, calendar on stdin
//! tomcalendar --date 2020-03-22 < calendar.txt
//!
//! # Everything that happened after a date, up to today
//! tomcalendar -calendar calendar.txt -since 2020-03-01
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tomcalendar::Date;
use tomcalendar_cli::{install_tracing, normalize_args, query_dates, read_calendar};

#[derive(Parser, Debug)]
#[command(
    name = "tomcalendar",
    version,
    about = "Print the calendar entries that fall on a date"
)]
struct Cli {
    /// Path to the calendar file to read (reads stdin if omitted)
    #[arg(long, env = "TOMCALENDAR_CALENDAR")]
    calendar: Option<PathBuf>,

    /// Date whose agenda to print, e.g. 2020-03-22 (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Print the agenda of every day AFTER this date up to today (ignored with --date)
    #[arg(long)]
    since: Option<String>,
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse_from(normalize_args(
        std::env::args_os(),
        &["calendar", "date", "since"],
    ));

    let dates = query_dates(cli.date.as_deref(), cli.since.as_deref(), Date::today())?;
    let entries = read_calendar(cli.calendar.as_deref())?;

    let mut out = io::stdout().lock();
    for entry in tomcalendar::agenda(&entries, &dates) {
        writeln!(out, "{}", entry.title).context("could not write agenda")?;
    }
    Ok(())
}
