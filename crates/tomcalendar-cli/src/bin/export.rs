//! `tomcalendar-export`: convert calendar files to JSON.
//!
//! ```sh
//! tomcalendar-export --calendar home.txt --calendar work.txt --json calendar.json
//! tomcalendar-export < calendar.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tomcalendar_cli::{install_tracing, normalize_args, read_calendar};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "tomcalendar-export",
    version,
    about = "Export calendar files as JSON"
)]
struct Cli {
    /// Path to a calendar file to read; repeat for several (reads stdin if omitted)
    #[arg(long)]
    calendar: Vec<PathBuf>,

    /// Path to write the JSON to (writes stdout if omitted)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse_from(normalize_args(std::env::args_os(), &["calendar", "json"]));

    let entries = if cli.calendar.is_empty() {
        read_calendar(None)?
    } else {
        let mut entries = Vec::new();
        for path in &cli.calendar {
            entries.extend(read_calendar(Some(path.as_path()))?);
        }
        entries
    };
    info!(entries = entries.len(), "exporting calendar");

    match cli.json {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("could not open JSON file {}", path.display()))?;
            tomcalendar::write_json(BufWriter::new(file), &entries)
                .with_context(|| format!("could not write JSON file {}", path.display()))?;
        }
        None => {
            tomcalendar::write_json(io::stdout().lock(), &entries)
                .context("could not write JSON")?;
        }
    }
    Ok(())
}
