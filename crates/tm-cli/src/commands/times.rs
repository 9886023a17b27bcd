//! Times command for recomputing every row's start time.
//!
//! Rows are processed in stored `orderIndex` order. A start time that does
//! not parse leaves the rows exactly as stored and nothing is written.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tm_core::try_calculate_agenda_times;

use super::util::{format_agenda, load_agenda, save_agenda};

#[derive(Debug, Args)]
pub struct TimesArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Override the meeting start time (e.g., "06:30 PM").
    #[arg(long)]
    pub start: Option<String>,

    /// Write the recalculated agenda back to the file.
    #[arg(long)]
    pub write: bool,

    /// Output the agenda document as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &TimesArgs) -> Result<()> {
    let stored = load_agenda(&args.file)?;
    let start = args
        .start
        .clone()
        .unwrap_or_else(|| stored.start_time.clone());

    let mut ordered = stored.clone();
    ordered.sort_rows();

    let agenda = match try_calculate_agenda_times(&ordered.rows, &start) {
        Ok(rows) => {
            ordered.rows = rows;
            ordered.start_time = start.trim().to_string();
            if args.write {
                save_agenda(&args.file, &ordered)?;
            }
            ordered
        }
        Err(err) => {
            tracing::warn!(start = %start, error = %err, "start time invalid, agenda left unchanged");
            stored
        }
    };

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&agenda)?)?;
    } else {
        write!(writer, "{}", format_agenda(&agenda))?;
    }
    Ok(())
}
