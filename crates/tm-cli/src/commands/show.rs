//! Show command for printing an agenda as stored.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::util::{format_agenda, load_agenda};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Output the agenda document as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &ShowArgs) -> Result<()> {
    let agenda = load_agenda(&args.file)?;

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&agenda)?)?;
    } else {
        write!(writer, "{}", format_agenda(&agenda))?;
    }
    Ok(())
}
