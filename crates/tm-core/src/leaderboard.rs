//! "Gem of the Month" performance leaderboard.
//!
//! Each meeting produces one performance record per participating member.
//! A member's monthly score is the plain sum of every point component across
//! the month's records.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::MemberId;

/// Points earned by one member at one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub member_id: MemberId,
    pub member_name: String,
    pub meeting_date: NaiveDate,
    #[serde(default)]
    pub speech_points: u32,
    #[serde(default)]
    pub evaluation_points: u32,
    #[serde(default)]
    pub table_topics_points: u32,
    #[serde(default)]
    pub role_points: u32,
    #[serde(default)]
    pub attendance_points: u32,
}

impl PerformanceRecord {
    /// Sum of all point components.
    pub fn total_points(&self) -> u64 {
        [
            self.speech_points,
            self.evaluation_points,
            self.table_topics_points,
            self.role_points,
            self.attendance_points,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

/// One member's standing for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Competition rank: tied totals share a rank and the next rank skips.
    pub rank: usize,
    pub member_id: MemberId,
    pub member_name: String,
    /// Number of records counted for the month.
    pub meetings: usize,
    pub total_points: u64,
}

#[derive(Debug)]
struct Tally<'a> {
    member_id: &'a MemberId,
    latest: &'a PerformanceRecord,
    meetings: usize,
    total_points: u64,
}

/// Ranks members by summed points for the given calendar month.
///
/// Ordering is total descending, then member name, then member id.
pub fn monthly_leaderboard(
    records: &[PerformanceRecord],
    year: i32,
    month: u32,
) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<&MemberId, Tally<'_>> = HashMap::new();

    for record in records
        .iter()
        .filter(|r| r.meeting_date.year() == year && r.meeting_date.month() == month)
    {
        let tally = tallies.entry(&record.member_id).or_insert(Tally {
            member_id: &record.member_id,
            latest: record,
            meetings: 0,
            total_points: 0,
        });
        tally.meetings += 1;
        tally.total_points += record.total_points();
        if record.meeting_date >= tally.latest.meeting_date {
            tally.latest = record;
        }
    }

    let mut tallies: Vec<Tally<'_>> = tallies.into_values().collect();
    tallies.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.latest.member_name.cmp(&b.latest.member_name))
            .then_with(|| a.member_id.cmp(b.member_id))
    });

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(tallies.len());
    for (index, tally) in tallies.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.total_points == tally.total_points => prev.rank,
            _ => index + 1,
        };
        entries.push(LeaderboardEntry {
            rank,
            member_id: tally.member_id.clone(),
            member_name: tally.latest.member_name.clone(),
            meetings: tally.meetings,
            total_points: tally.total_points,
        });
    }

    tracing::debug!(year, month, members = entries.len(), "built leaderboard");
    entries
}

/// Members sharing first place with a non-zero score.
pub fn gems_of_the_month(leaderboard: &[LeaderboardEntry]) -> Vec<&LeaderboardEntry> {
    leaderboard
        .iter()
        .filter(|entry| entry.rank == 1 && entry.total_points > 0)
        .collect()
}
