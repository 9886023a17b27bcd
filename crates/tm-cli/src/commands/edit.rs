//! Agenda editing commands: add, add-break, add-header, remove, move.
//!
//! Every command loads the document, applies one edit through [`Agenda`],
//! which recomputes all row times, and rewrites the file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tm_core::{Agenda, AgendaRow, RoleTimer, RowId};
use uuid::Uuid;

use super::util::{load_agenda, parse_duration, resolve_row_id, save_agenda, short_id};
use crate::Config;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// What happens in this slot (e.g., "Ice Breaker").
    #[arg(long)]
    pub activity: String,

    /// Who presents.
    #[arg(long, default_value = "")]
    pub presenter: String,

    /// Red (maximum) time: m:ss, 7m, 90s or 6m30s.
    #[arg(long)]
    pub red: String,

    /// Green signal time. Defaults to the red time.
    #[arg(long)]
    pub green: Option<String>,

    /// Yellow signal time. Defaults to the red time.
    #[arg(long)]
    pub yellow: Option<String>,

    /// Insert at this position instead of appending.
    #[arg(long)]
    pub position: Option<usize>,
}

#[derive(Debug, Args)]
pub struct AddBreakArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Break length, minutes part.
    #[arg(long)]
    pub minutes: u32,

    /// Break length, seconds part (0-59).
    #[arg(long, default_value_t = 0)]
    pub seconds: u32,

    /// Label for the break. Defaults to the configured break label.
    #[arg(long)]
    pub activity: Option<String>,

    /// Insert at this position instead of appending.
    #[arg(long)]
    pub position: Option<usize>,
}

#[derive(Debug, Args)]
pub struct AddHeaderArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Session title (e.g., "Prepared Speeches").
    #[arg(long)]
    pub title: String,

    /// Insert at this position instead of appending.
    #[arg(long)]
    pub position: Option<usize>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Row ID or unique prefix.
    pub row: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Agenda file.
    pub file: PathBuf,

    /// Row ID or unique prefix.
    pub row: String,

    /// Target position (0-based).
    pub position: usize,
}

fn new_row_id() -> Result<RowId> {
    Ok(RowId::new(Uuid::new_v4().to_string())?)
}

/// Loads an agenda with rows sorted by their stored order.
fn open(path: &Path) -> Result<Agenda> {
    let mut agenda = load_agenda(path)?;
    agenda.normalize_order();
    Ok(agenda)
}

fn insert<W: Write>(
    writer: &mut W,
    path: &Path,
    row: AgendaRow,
    position: Option<usize>,
) -> Result<()> {
    let mut agenda = open(path)?;
    let id = row.id.clone();
    agenda.insert_row(row, position)?;
    save_agenda(path, &agenda)?;

    let inserted = agenda
        .row(&id)
        .context("inserted row missing from agenda")?;
    writeln!(
        writer,
        "Added {} {} at {} (position {})",
        inserted.kind.label(),
        short_id(&id),
        inserted.time,
        inserted.order_index
    )?;
    Ok(())
}

pub fn add<W: Write>(writer: &mut W, args: &AddArgs) -> Result<()> {
    let red = parse_duration(&args.red).context("invalid --red")?;
    let green = args
        .green
        .as_deref()
        .map(parse_duration)
        .transpose()
        .context("invalid --green")?
        .unwrap_or(red);
    let yellow = args
        .yellow
        .as_deref()
        .map(parse_duration)
        .transpose()
        .context("invalid --yellow")?
        .unwrap_or(red);
    let timer = RoleTimer::new(green, yellow, red)?;

    let row = AgendaRow::regular_item(new_row_id()?, &args.activity, &args.presenter, timer);
    insert(writer, &args.file, row, args.position)
}

pub fn add_break<W: Write>(writer: &mut W, args: &AddBreakArgs, config: &Config) -> Result<()> {
    let activity = args
        .activity
        .as_deref()
        .unwrap_or(&config.break_activity);
    let row = AgendaRow::timed_break(new_row_id()?, activity, args.minutes, args.seconds)?;
    insert(writer, &args.file, row, args.position)
}

pub fn add_header<W: Write>(writer: &mut W, args: &AddHeaderArgs) -> Result<()> {
    let row = AgendaRow::session_header(new_row_id()?, &args.title);
    insert(writer, &args.file, row, args.position)
}

pub fn remove<W: Write>(writer: &mut W, args: &RemoveArgs) -> Result<()> {
    let mut agenda = open(&args.file)?;
    let id = resolve_row_id(&agenda, &args.row)?;
    let removed = agenda.remove_row(&id)?;
    save_agenda(&args.file, &agenda)?;

    writeln!(
        writer,
        "Removed {} {} ({})",
        removed.kind.label(),
        short_id(&removed.id),
        removed.activity
    )?;
    Ok(())
}

pub fn move_row<W: Write>(writer: &mut W, args: &MoveArgs) -> Result<()> {
    let mut agenda = open(&args.file)?;
    let id = resolve_row_id(&agenda, &args.row)?;
    agenda.move_row(&id, args.position)?;
    save_agenda(&args.file, &agenda)?;

    let moved = agenda.row(&id).context("moved row missing from agenda")?;
    writeln!(
        writer,
        "Moved {} to position {} at {}",
        short_id(&id),
        moved.order_index,
        moved.time
    )?;
    Ok(())
}
