//! Core domain logic for club meeting agendas.
//!
//! This crate contains the fundamental types and logic for:
//! - Agenda times: computing each row's start time from the meeting start
//! - Agenda editing: insert/remove/move/update with full recalculation
//! - Role timers: green/yellow/red thresholds and break durations
//! - Leaderboard: "Gem of the Month" score summation and ranking

mod agenda;
mod calculator;
pub mod clock;
pub mod leaderboard;
mod row;
pub mod timer;
pub mod types;

pub use agenda::{Agenda, AgendaError};
pub use calculator::{
    calculate_agenda_times, recalculate_times_from_position, try_calculate_agenda_times,
};
pub use clock::{ClockError, format_clock, parse_clock};
pub use leaderboard::{LeaderboardEntry, PerformanceRecord, gems_of_the_month, monthly_leaderboard};
pub use row::{AgendaRow, RowKind};
pub use timer::{RoleTimer, TimerError};
pub use types::{MeetingId, MemberId, RowId, ValidationError};
