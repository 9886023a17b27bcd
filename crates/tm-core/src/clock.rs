//! Wall-clock parsing and formatting for agenda times.
//!
//! Agenda times are 12-hour clock strings such as `"09:05 AM"`. Durations
//! advance the clock in whole minutes only; leftover seconds are dropped.

use chrono::{Duration, NaiveTime};
use thiserror::Error;

/// Canonical display format (`"09:05 AM"`).
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Accepted input formats, tried in order.
const PARSE_FORMATS: [&str; 2] = [CLOCK_FORMAT, "%I:%M%p"];

/// Errors from clock parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The input did not match `hh:mm AM/PM`.
    #[error("invalid clock time '{input}', expected hh:mm AM/PM (e.g. 09:00 AM)")]
    Unparsable { input: String },
}

/// Parses a 12-hour clock string.
///
/// Surrounding whitespace is ignored, a single-digit hour is accepted and the
/// AM/PM marker is case-insensitive.
pub fn parse_clock(input: &str) -> Result<NaiveTime, ClockError> {
    let trimmed = input.trim();
    PARSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ClockError::Unparsable {
            input: input.to_string(),
        })
}

/// Formats a time in the canonical `hh:mm AM/PM` form.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Whole minutes contributed by a duration in seconds (truncating).
pub const fn whole_minutes(duration_seconds: u32) -> u32 {
    duration_seconds / 60
}

/// Advances `time` by the whole-minute part of `duration_seconds`.
///
/// Wraps around midnight.
pub fn advance_clock(time: NaiveTime, duration_seconds: u32) -> NaiveTime {
    let minutes = i64::from(whole_minutes(duration_seconds));
    let (advanced, _) = time.overflowing_add_signed(Duration::minutes(minutes));
    advanced
}
