//! Agenda rows - one line of a meeting's running order.

use serde::{Deserialize, Serialize};

use crate::timer::{RoleTimer, TimerError, break_duration_seconds};
use crate::types::RowId;

/// What an agenda row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// A speech, role or other timed item.
    RegularItem,
    /// A divider labelling the rows that follow. Never consumes time.
    SessionHeader,
    /// A fixed-length pause.
    TimedBreak,
}

impl RowKind {
    /// Short label for table output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RegularItem => "item",
            Self::SessionHeader => "header",
            Self::TimedBreak => "break",
        }
    }
}

/// One line item in a meeting agenda.
///
/// Field names follow the document store's camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaRow {
    /// Unique within one agenda.
    pub id: RowId,

    /// Display order.
    #[serde(default)]
    pub order_index: u32,

    pub kind: RowKind,

    /// Computed start time (`"09:05 AM"`). Overwritten on every recalculation.
    #[serde(default)]
    pub time: String,

    /// Red threshold for items, break length for breaks. Ignored for headers.
    #[serde(default)]
    pub duration_seconds: u32,

    #[serde(default)]
    pub activity: String,

    #[serde(default)]
    pub presenter_name: String,
}

impl AgendaRow {
    /// A timed speaking item whose duration is the role's red threshold.
    pub fn regular_item(
        id: RowId,
        activity: impl Into<String>,
        presenter_name: impl Into<String>,
        timer: RoleTimer,
    ) -> Self {
        Self {
            id,
            order_index: 0,
            kind: RowKind::RegularItem,
            time: String::new(),
            duration_seconds: timer.duration_seconds(),
            activity: activity.into(),
            presenter_name: presenter_name.into(),
        }
    }

    /// A break entered as minutes + seconds.
    pub fn timed_break(
        id: RowId,
        activity: impl Into<String>,
        minutes: u32,
        seconds: u32,
    ) -> Result<Self, TimerError> {
        Ok(Self {
            id,
            order_index: 0,
            kind: RowKind::TimedBreak,
            time: String::new(),
            duration_seconds: break_duration_seconds(minutes, seconds)?,
            activity: activity.into(),
            presenter_name: String::new(),
        })
    }

    /// A session divider.
    pub fn session_header(id: RowId, title: impl Into<String>) -> Self {
        Self {
            id,
            order_index: 0,
            kind: RowKind::SessionHeader,
            time: String::new(),
            duration_seconds: 0,
            activity: title.into(),
            presenter_name: String::new(),
        }
    }

    pub const fn is_header(&self) -> bool {
        matches!(self.kind, RowKind::SessionHeader)
    }

    /// Seconds this row holds the floor. Headers always report zero.
    pub const fn effective_duration_seconds(&self) -> u32 {
        if self.is_header() {
            0
        } else {
            self.duration_seconds
        }
    }
}
