//! Meeting agenda documents and editing.
//!
//! Every edit renumbers `order_index` and rewrites all row times from the
//! meeting start. Nothing is patched incrementally.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::calculate_agenda_times;
use crate::clock::{ClockError, advance_clock, parse_clock, whole_minutes};
use crate::row::AgendaRow;
use crate::types::{MeetingId, RowId};

/// Errors from agenda editing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("row not found: {0}")]
    UnknownRow(RowId),

    #[error("row already exists: {0}")]
    DuplicateRow(RowId),

    #[error("position {position} is out of range for an agenda with {len} rows")]
    PositionOutOfRange { position: usize, len: usize },

    #[error(transparent)]
    InvalidStartTime(#[from] ClockError),
}

/// A meeting's agenda as persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agenda {
    pub meeting_id: MeetingId,

    /// Meeting start in `hh:mm AM/PM` form.
    pub start_time: String,

    #[serde(default)]
    pub rows: Vec<AgendaRow>,
}

impl Agenda {
    /// Creates an empty agenda, validating the start time.
    pub fn new(meeting_id: MeetingId, start_time: &str) -> Result<Self, AgendaError> {
        parse_clock(start_time)?;
        Ok(Self {
            meeting_id,
            start_time: start_time.trim().to_string(),
            rows: Vec::new(),
        })
    }

    pub fn position_of(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|row| &row.id == id)
    }

    pub fn row(&self, id: &RowId) -> Option<&AgendaRow> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Inserts a row at `position`, or appends when `None`.
    pub fn insert_row(
        &mut self,
        row: AgendaRow,
        position: Option<usize>,
    ) -> Result<(), AgendaError> {
        if self.position_of(&row.id).is_some() {
            return Err(AgendaError::DuplicateRow(row.id));
        }
        let position = position.unwrap_or(self.rows.len());
        if position > self.rows.len() {
            return Err(AgendaError::PositionOutOfRange {
                position,
                len: self.rows.len(),
            });
        }

        tracing::debug!(row = %row.id, position, "inserting agenda row");
        self.rows.insert(position, row);
        self.recalculate();
        Ok(())
    }

    /// Removes a row and returns it.
    pub fn remove_row(&mut self, id: &RowId) -> Result<AgendaRow, AgendaError> {
        let position = self.require_position(id)?;

        tracing::debug!(row = %id, position, "removing agenda row");
        let removed = self.rows.remove(position);
        self.recalculate();
        Ok(removed)
    }

    /// Moves a row so it ends up at index `to`.
    pub fn move_row(&mut self, id: &RowId, to: usize) -> Result<(), AgendaError> {
        let from = self.require_position(id)?;
        if to >= self.rows.len() {
            return Err(AgendaError::PositionOutOfRange {
                position: to,
                len: self.rows.len(),
            });
        }

        tracing::debug!(row = %id, from, to, "moving agenda row");
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        self.recalculate();
        Ok(())
    }

    /// Applies `edit` to a row, then recalculates.
    ///
    /// The row's id is restored if `edit` changes it.
    pub fn update_row<F>(&mut self, id: &RowId, edit: F) -> Result<(), AgendaError>
    where
        F: FnOnce(&mut AgendaRow),
    {
        let position = self.require_position(id)?;

        let row = &mut self.rows[position];
        edit(row);
        row.id = id.clone();

        tracing::debug!(row = %id, position, "updated agenda row");
        self.recalculate();
        Ok(())
    }

    /// Changes the meeting start time and recalculates.
    pub fn set_start_time(&mut self, start_time: &str) -> Result<(), AgendaError> {
        parse_clock(start_time)?;
        self.start_time = start_time.trim().to_string();
        self.recalculate();
        Ok(())
    }

    /// Renumbers rows and rewrites every row time from the start.
    pub fn recalculate(&mut self) {
        self.renumber();
        self.rows = calculate_agenda_times(&self.rows, &self.start_time);
    }

    /// Stable-sorts rows by `order_index` and renumbers them `0..n`.
    ///
    /// Row times are left as stored.
    pub fn sort_rows(&mut self) {
        self.rows.sort_by_key(|row| row.order_index);
        self.renumber();
    }

    /// Stable-sorts rows by `order_index` and recalculates.
    ///
    /// Use after loading rows whose stored order may not match list order.
    pub fn normalize_order(&mut self) {
        self.sort_rows();
        self.recalculate();
    }

    fn renumber(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.order_index = u32::try_from(index).unwrap_or(u32::MAX);
        }
    }

    /// Sum of whole-minute durations, as the clock sees them.
    pub fn total_duration_minutes(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| u64::from(whole_minutes(row.effective_duration_seconds())))
            .sum()
    }

    /// When the last row finishes, or `None` if the start time is invalid.
    pub fn end_time(&self) -> Option<NaiveTime> {
        let start = parse_clock(&self.start_time).ok()?;
        Some(self.rows.iter().fold(start, |clock, row| {
            advance_clock(clock, row.effective_duration_seconds())
        }))
    }

    fn require_position(&self, id: &RowId) -> Result<usize, AgendaError> {
        self.position_of(id)
            .ok_or_else(|| AgendaError::UnknownRow(id.clone()))
    }
}
