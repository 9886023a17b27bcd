//! End-to-end integration tests for the agenda editing flow.
//!
//! Tests the full pipeline: new → add/add-break/add-header → move/remove → times
//! against the built `tm` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tm_binary() -> String {
    env!("CARGO_BIN_EXE_tm").to_string()
}

/// Run `tm` with an isolated HOME so no user config leaks in.
fn tm(home: &Path, args: &[&str]) -> Output {
    Command::new(tm_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TM_DEFAULT_START_TIME")
        .env_remove("TM_BREAK_ACTIVITY")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run tm")
}

fn tm_ok(home: &Path, args: &[&str]) -> String {
    let output = tm(home, args);
    assert!(
        output.status.success(),
        "tm {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn row_times(agenda_path: &Path) -> Vec<(String, String)> {
    let content = std::fs::read_to_string(agenda_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    doc["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["activity"].as_str().unwrap().to_string(),
                row["time"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn row_id(agenda_path: &Path, activity: &str) -> String {
    let content = std::fs::read_to_string(agenda_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    doc["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["activity"] == activity)
        .and_then(|row| row["id"].as_str())
        .unwrap()
        .to_string()
}

fn pair(activity: &str, time: &str) -> (String, String) {
    (activity.to_string(), time.to_string())
}

/// Build a full meeting agenda and verify every edit recomputes all times.
#[test]
fn test_agenda_editing_flow() {
    let temp = TempDir::new().unwrap();
    let agenda = temp.path().join("agenda.json");
    let file = agenda.to_str().unwrap();

    tm_ok(
        temp.path(),
        &["new", file, "--start", "07:00 PM", "--meeting-id", "club-42"],
    );
    tm_ok(temp.path(), &["add-header", file, "--title", "Opening"]);
    tm_ok(
        temp.path(),
        &["add", file, "--activity", "Toastmaster", "--presenter", "Riley", "--red", "3:00"],
    );
    tm_ok(
        temp.path(),
        &["add", file, "--activity", "Ice Breaker", "--red", "6m", "--green", "4m"],
    );
    tm_ok(temp.path(), &["add-break", file, "--minutes", "1", "--seconds", "30"]);
    tm_ok(
        temp.path(),
        &["add", file, "--activity", "Table Topics", "--red", "10:00"],
    );

    assert_eq!(
        row_times(&agenda),
        [
            pair("Opening", "07:00 PM"),
            pair("Toastmaster", "07:00 PM"),
            pair("Ice Breaker", "07:03 PM"),
            pair("Break", "07:09 PM"),
            pair("Table Topics", "07:10 PM"),
        ]
    );

    // Move Table Topics ahead of the Ice Breaker
    let tt_id = row_id(&agenda, "Table Topics");
    tm_ok(temp.path(), &["move", file, &tt_id, "2"]);
    assert_eq!(
        row_times(&agenda),
        [
            pair("Opening", "07:00 PM"),
            pair("Toastmaster", "07:00 PM"),
            pair("Table Topics", "07:03 PM"),
            pair("Ice Breaker", "07:13 PM"),
            pair("Break", "07:19 PM"),
        ]
    );

    // Remove by short prefix
    let toastmaster_id = row_id(&agenda, "Toastmaster");
    tm_ok(temp.path(), &["remove", file, &toastmaster_id[..8]]);
    assert_eq!(
        row_times(&agenda),
        [
            pair("Opening", "07:00 PM"),
            pair("Table Topics", "07:00 PM"),
            pair("Ice Breaker", "07:10 PM"),
            pair("Break", "07:16 PM"),
        ]
    );

    // Shift the whole meeting
    tm_ok(temp.path(), &["times", file, "--start", "06:30 PM", "--write"]);
    assert_eq!(
        row_times(&agenda),
        [
            pair("Opening", "06:30 PM"),
            pair("Table Topics", "06:30 PM"),
            pair("Ice Breaker", "06:40 PM"),
            pair("Break", "06:46 PM"),
        ]
    );

    let shown = tm_ok(temp.path(), &["show", file]);
    assert!(shown.starts_with("AGENDA club-42\nStarts 06:30 PM, ends 06:47 PM (17 min)\n"));
}

/// An unparsable start time is a soft failure: exit 0, file untouched.
#[test]
fn test_times_with_bad_start_is_soft_failure() {
    let temp = TempDir::new().unwrap();
    let agenda = temp.path().join("agenda.json");
    let file = agenda.to_str().unwrap();

    tm_ok(temp.path(), &["new", file, "--start", "09:00 AM"]);
    tm_ok(temp.path(), &["add", file, "--activity", "Speech", "--red", "5:00"]);
    let before = std::fs::read_to_string(&agenda).unwrap();

    let output = tm(
        temp.path(),
        &["times", file, "--start", "not-a-time", "--write"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("agenda left unchanged"));
    assert_eq!(std::fs::read_to_string(&agenda).unwrap(), before);
}

/// Config file values feed `new` and `add-break` defaults.
#[test]
fn test_config_defaults_apply() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("tm.toml");
    std::fs::write(
        &config,
        "default_start_time = \"08:15 AM\"\nbreak_activity = \"Coffee\"\n",
    )
    .unwrap();
    let config = config.to_str().unwrap();
    let agenda = temp.path().join("agenda.json");
    let file = agenda.to_str().unwrap();

    tm_ok(temp.path(), &["--config", config, "new", file]);
    tm_ok(temp.path(), &["--config", config, "add-break", file, "--minutes", "5"]);

    assert_eq!(row_times(&agenda), [pair("Coffee", "08:15 AM")]);
}

/// Editing errors exit non-zero with a readable message.
#[test]
fn test_edit_errors_are_reported() {
    let temp = TempDir::new().unwrap();
    let agenda = temp.path().join("agenda.json");
    let file = agenda.to_str().unwrap();

    tm_ok(temp.path(), &["new", file]);

    let output = tm(temp.path(), &["remove", file, "ghost"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("row not found: ghost"));

    let output = tm(temp.path(), &["new", file]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

/// The leaderboard reads a records file and names the Gem of the Month.
#[test]
fn test_leaderboard_command() {
    let temp = TempDir::new().unwrap();
    let records = temp.path().join("records.json");
    std::fs::write(
        &records,
        r#"[
            {"memberId": "m1", "memberName": "Avery", "meetingDate": "2026-10-06", "speechPoints": 5},
            {"memberId": "m2", "memberName": "Blake", "meetingDate": "2026-10-06", "rolePoints": 3}
        ]"#,
    )
    .unwrap();

    let output = tm_ok(
        temp.path(),
        &["leaderboard", records.to_str().unwrap(), "--month", "2026-10"],
    );
    assert!(output.contains("Gem of the Month: Avery"));
}
