//! Leaderboard command for the monthly "Gem of the Month" ranking.
//!
//! Reads a JSON array of performance records and ranks members by the sum of
//! their points for one calendar month.

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tm_core::{LeaderboardEntry, PerformanceRecord, gems_of_the_month, monthly_leaderboard};

use super::util::parse_month;

#[derive(Debug, Args)]
pub struct LeaderboardArgs {
    /// JSON file containing an array of performance records.
    pub file: PathBuf,

    /// Month to rank (YYYY-MM).
    #[arg(long)]
    pub month: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output shape.
#[derive(Debug, Serialize)]
struct LeaderboardJson<'a> {
    month: String,
    gems: Vec<&'a str>,
    entries: &'a [LeaderboardEntry],
}

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(|| format!("{year}-{month:02}"), |d| d.format("%B %Y").to_string())
}

/// Formats the leaderboard for terminal output.
pub fn format_leaderboard(entries: &[LeaderboardEntry], year: i32, month: u32) -> String {
    let mut output = String::new();
    let title = month_title(year, month);

    writeln!(output, "LEADERBOARD: {title}").unwrap();
    writeln!(output, "{}", "─".repeat(13 + title.chars().count())).unwrap();

    if entries.is_empty() {
        writeln!(output, "No performance records for {title}.").unwrap();
        return output;
    }

    for entry in entries {
        let noun = if entry.meetings == 1 {
            "meeting"
        } else {
            "meetings"
        };
        writeln!(
            output,
            "{:>2}. {:<20} {:>4} pts  ({} {noun})",
            entry.rank, entry.member_name, entry.total_points, entry.meetings
        )
        .unwrap();
    }

    let gems: Vec<&str> = gems_of_the_month(entries)
        .into_iter()
        .map(|e| e.member_name.as_str())
        .collect();
    writeln!(output).unwrap();
    if gems.is_empty() {
        writeln!(output, "No Gem of the Month yet.").unwrap();
    } else {
        writeln!(output, "Gem of the Month: {}", gems.join(", ")).unwrap();
    }

    output
}

pub fn run<W: Write>(writer: &mut W, args: &LeaderboardArgs) -> Result<()> {
    let (year, month) = parse_month(&args.month)?;

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let records: Vec<PerformanceRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse performance records {}", args.file.display()))?;
    tracing::debug!(records = records.len(), "loaded performance records");

    let entries = monthly_leaderboard(&records, year, month);

    if args.json {
        let gems = gems_of_the_month(&entries)
            .into_iter()
            .map(|e| e.member_id.as_str())
            .collect();
        let report = LeaderboardJson {
            month: format!("{year}-{month:02}"),
            gems,
            entries: &entries,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(writer, "{}", format_leaderboard(&entries, year, month))?;
    }
    Ok(())
}
