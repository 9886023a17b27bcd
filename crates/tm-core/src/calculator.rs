//! Sequential agenda time computation.
//!
//! # Algorithm Summary
//!
//! 1. Parse the meeting start time into a running clock
//! 2. The first row starts at the meeting start time
//! 3. Every later row starts when the previous row ends: the clock advances by
//!    the previous row's duration in whole minutes (seconds are dropped)
//! 4. Session headers hold zero duration, so the row after a header starts at
//!    the header's time
//!
//! The whole list is recomputed on every call. Failures never propagate from
//! the primary entry points: an empty list or an unparsable start time hands
//! the rows back untouched and logs a warning.

use chrono::NaiveTime;

use crate::clock::{ClockError, advance_clock, format_clock, parse_clock};
use crate::row::AgendaRow;

/// Computes a start time for every row.
///
/// Returns a copy of `rows` with each `time` field overwritten. If `rows` is
/// empty or `meeting_start_time` does not parse, the rows come back unchanged.
pub fn calculate_agenda_times(rows: &[AgendaRow], meeting_start_time: &str) -> Vec<AgendaRow> {
    if rows.is_empty() {
        return Vec::new();
    }
    match try_calculate_agenda_times(rows, meeting_start_time) {
        Ok(timed) => timed,
        Err(err) => {
            tracing::warn!(%err, rows = rows.len(), "agenda times left unchanged");
            rows.to_vec()
        }
    }
}

/// Like [`calculate_agenda_times`], but reports an unparsable start time.
///
/// The start time is validated even when `rows` is empty.
pub fn try_calculate_agenda_times(
    rows: &[AgendaRow],
    meeting_start_time: &str,
) -> Result<Vec<AgendaRow>, ClockError> {
    let start = parse_clock(meeting_start_time)?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    Ok(assign_times(rows, meeting_start_time.trim(), start))
}

/// Recalculates times after an edit at `start_position`.
///
/// Always recomputes the entire list from the first row; `start_position`
/// is only range-checked. The start time defaults to the time stored on the
/// first row when no override is given.
pub fn recalculate_times_from_position(
    rows: &[AgendaRow],
    start_position: usize,
    meeting_start_time: Option<&str>,
) -> Vec<AgendaRow> {
    if start_position >= rows.len() {
        tracing::debug!(
            start_position,
            rows = rows.len(),
            "recalculation position out of range"
        );
        return rows.to_vec();
    }

    let start = meeting_start_time.unwrap_or(rows[0].time.as_str());
    calculate_agenda_times(rows, start)
}

fn assign_times(rows: &[AgendaRow], start_text: &str, start: NaiveTime) -> Vec<AgendaRow> {
    let mut clock = start;
    let mut previous: Option<&AgendaRow> = None;

    rows.iter()
        .map(|row| {
            let time = match previous {
                None if !row.is_header() => start_text.to_string(),
                None => format_clock(clock),
                Some(prev) => {
                    clock = advance_clock(clock, prev.effective_duration_seconds());
                    format_clock(clock)
                }
            };
            previous = Some(row);

            AgendaRow {
                time,
                ..row.clone()
            }
        })
        .collect()
}
