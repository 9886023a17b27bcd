//! Shared utilities for CLI commands.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use tm_core::timer::{format_threshold, parse_threshold};
use tm_core::{Agenda, AgendaRow, RowId, RowKind, format_clock};

/// Pre-compiled regex for `7m30s` / `7m` / `90s` durations.
static UNIT_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)m)?\s*(?:(\d+)s)?$").unwrap());

/// Number of id characters shown in tables.
const SHORT_ID_LEN: usize = 8;

/// Parse a duration as `m:ss`, `Nm`, `Ns` or `NmMs` into seconds.
pub fn parse_duration(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.contains(':') {
        return parse_threshold(s).map_err(Into::into);
    }

    let caps = UNIT_DURATION_RE
        .captures(s)
        .filter(|caps| caps.get(1).is_some() || caps.get(2).is_some());
    let Some(caps) = caps else {
        bail!("Invalid duration: {s}. Use m:ss (e.g., 7:00) or units (e.g., 7m, 90s, 6m30s)");
    };

    let minutes: u32 = caps
        .get(1)
        .map_or(Ok(0), |m| m.as_str().parse::<u32>())
        .context("failed to parse minutes in duration")?;
    let seconds: u32 = caps
        .get(2)
        .map_or(Ok(0), |m| m.as_str().parse::<u32>())
        .context("failed to parse seconds in duration")?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .with_context(|| format!("duration too large: {s}"))
}

/// Parse a `YYYY-MM` month.
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    use chrono::Datelike;

    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month: {s}. Use YYYY-MM (e.g., 2026-10)"))?;
    Ok((date.year(), date.month()))
}

/// Reads an agenda document.
pub fn load_agenda(path: &Path) -> Result<Agenda> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let agenda: Agenda = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse agenda {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = agenda.rows.len(), "loaded agenda");
    Ok(agenda)
}

/// Writes an agenda document, replacing the file atomically.
pub fn save_agenda(path: &Path, agenda: &Agenda) -> Result<()> {
    let mut json = serde_json::to_string_pretty(agenda).context("failed to serialize agenda")?;
    json.push('\n');

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, json)
        .with_context(|| format!("failed to write {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = agenda.rows.len(), "saved agenda");
    Ok(())
}

/// Resolves a full row id or a unique id prefix.
pub fn resolve_row_id(agenda: &Agenda, needle: &str) -> Result<RowId> {
    let needle = needle.trim();
    if needle.is_empty() {
        bail!("row id cannot be empty");
    }

    if let Some(row) = agenda.rows.iter().find(|row| row.id.as_str() == needle) {
        return Ok(row.id.clone());
    }

    let mut matches = agenda
        .rows
        .iter()
        .filter(|row| row.id.as_str().starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(row), None) => Ok(row.id.clone()),
        (Some(_), Some(_)) => bail!("row id prefix is ambiguous: {needle}"),
        (None, _) => bail!("row not found: {needle}"),
    }
}

/// Returns a short prefix of a row id for display.
pub fn short_id(id: &RowId) -> String {
    id.as_str().chars().take(SHORT_ID_LEN).collect()
}

fn table_line(cols: [&str; 6]) -> String {
    let [pos, time, kind, duration, id, activity] = cols;
    format!("{pos:>2}  {time:<8}  {kind:<6}  {duration:>8}  {id:<8}  {activity}")
        .trim_end()
        .to_string()
}

fn describe(row: &AgendaRow) -> String {
    if row.presenter_name.is_empty() {
        row.activity.clone()
    } else if row.activity.is_empty() {
        row.presenter_name.clone()
    } else {
        format!("{} ({})", row.activity, row.presenter_name)
    }
}

/// Formats an agenda as a human-readable table.
pub fn format_agenda(agenda: &Agenda) -> String {
    let mut output = String::new();

    writeln!(output, "AGENDA {}", agenda.meeting_id).unwrap();
    match agenda.end_time() {
        Some(end) => writeln!(
            output,
            "Starts {}, ends {} ({} min)",
            agenda.start_time,
            format_clock(end),
            agenda.total_duration_minutes()
        )
        .unwrap(),
        None => writeln!(output, "Starts {} (invalid start time)", agenda.start_time).unwrap(),
    }
    writeln!(output).unwrap();

    if agenda.rows.is_empty() {
        writeln!(output, "No agenda rows.").unwrap();
        return output;
    }

    writeln!(
        output,
        "{}",
        table_line(["#", "TIME", "KIND", "DURATION", "ID", "ACTIVITY"])
    )
    .unwrap();

    for (index, row) in agenda.rows.iter().enumerate() {
        let pos = index.to_string();
        let time = if row.time.is_empty() { "--" } else { row.time.as_str() };
        let duration = match row.kind {
            RowKind::SessionHeader => "-".to_string(),
            RowKind::RegularItem | RowKind::TimedBreak => format_threshold(row.duration_seconds),
        };
        let id = short_id(&row.id);
        let activity = describe(row);
        writeln!(
            output,
            "{}",
            table_line([
                pos.as_str(),
                time,
                row.kind.label(),
                duration.as_str(),
                id.as_str(),
                activity.as_str(),
            ])
        )
        .unwrap();
    }

    output
}
