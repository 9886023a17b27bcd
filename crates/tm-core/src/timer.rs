//! Speaking-role timer thresholds.
//!
//! A role carries green/yellow/red signal thresholds. The red threshold is
//! the maximum allotted time and becomes the agenda row's duration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from timer and break-duration parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The threshold string was not `m:ss`.
    #[error("invalid timer threshold '{input}', expected m:ss (e.g. 5:30)")]
    InvalidThreshold { input: String },

    /// Seconds component must be below 60.
    #[error("seconds must be between 0 and 59, got {seconds}")]
    SecondsOutOfRange { seconds: u32 },

    /// Thresholds must not decrease from green to red.
    #[error("timer thresholds must satisfy green <= yellow <= red ({green}s, {yellow}s, {red}s)")]
    Unordered { green: u32, yellow: u32, red: u32 },
}

/// Green/yellow/red signal thresholds, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTimer {
    pub green_seconds: u32,
    pub yellow_seconds: u32,
    pub red_seconds: u32,
}

impl RoleTimer {
    /// Builds a timer after checking threshold order.
    pub const fn new(
        green_seconds: u32,
        yellow_seconds: u32,
        red_seconds: u32,
    ) -> Result<Self, TimerError> {
        if green_seconds > yellow_seconds || yellow_seconds > red_seconds {
            return Err(TimerError::Unordered {
                green: green_seconds,
                yellow: yellow_seconds,
                red: red_seconds,
            });
        }
        Ok(Self {
            green_seconds,
            yellow_seconds,
            red_seconds,
        })
    }

    /// A timer with only a red threshold; green and yellow collapse onto it.
    pub const fn red_only(red_seconds: u32) -> Self {
        Self {
            green_seconds: red_seconds,
            yellow_seconds: red_seconds,
            red_seconds,
        }
    }

    /// Builds a timer from `m:ss` threshold strings.
    pub fn from_thresholds(green: &str, yellow: &str, red: &str) -> Result<Self, TimerError> {
        Self::new(
            parse_threshold(green)?,
            parse_threshold(yellow)?,
            parse_threshold(red)?,
        )
    }

    /// Duration an agenda row should reserve for this role.
    pub const fn duration_seconds(&self) -> u32 {
        self.red_seconds
    }
}

/// Parses an `m:ss` threshold into seconds.
pub fn parse_threshold(input: &str) -> Result<u32, TimerError> {
    let invalid = || TimerError::InvalidThreshold {
        input: input.to_string(),
    };

    let (minutes, seconds) = input.trim().split_once(':').ok_or_else(invalid)?;
    if seconds.len() != 2 {
        return Err(invalid());
    }
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u32 = seconds.parse().map_err(|_| invalid())?;

    break_duration_seconds(minutes, seconds)
}

/// Converts a break entered as minutes + seconds into total seconds.
pub const fn break_duration_seconds(minutes: u32, seconds: u32) -> Result<u32, TimerError> {
    if seconds >= 60 {
        return Err(TimerError::SecondsOutOfRange { seconds });
    }
    Ok(minutes.saturating_mul(60).saturating_add(seconds))
}

/// Formats seconds as `m:ss`.
pub fn format_threshold(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
