//! New command for creating an empty agenda document.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tm_core::{Agenda, MeetingId};
use uuid::Uuid;

use super::util::save_agenda;
use crate::Config;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Agenda file to create.
    pub file: PathBuf,

    /// Meeting start time (e.g., "07:00 PM"). Defaults to the configured start.
    #[arg(long)]
    pub start: Option<String>,

    /// Meeting identifier. Defaults to a random UUID.
    #[arg(long)]
    pub meeting_id: Option<String>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &NewArgs, config: &Config) -> Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        );
    }

    let meeting_id = match &args.meeting_id {
        Some(id) => MeetingId::new(id.as_str())?,
        None => MeetingId::new(Uuid::new_v4().to_string())?,
    };
    let start = args.start.as_deref().unwrap_or(&config.default_start_time);
    let agenda = Agenda::new(meeting_id, start).context("cannot create agenda")?;

    save_agenda(&args.file, &agenda)?;
    writeln!(
        writer,
        "Created agenda {} starting {}",
        agenda.meeting_id, agenda.start_time
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::util::load_agenda;

    fn args(file: PathBuf) -> NewArgs {
        NewArgs {
            file,
            start: None,
            meeting_id: Some("club-42".to_string()),
            force: false,
        }
    }

    #[test]
    fn new_uses_configured_start_time() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("agenda.json");
        let config = Config {
            default_start_time: "06:15 PM".to_string(),
            ..Config::default()
        };

        let mut output = Vec::new();
        run(&mut output, &args(path.clone()), &config).unwrap();

        let agenda = load_agenda(&path).unwrap();
        assert_eq!(agenda.start_time, "06:15 PM");
        assert!(agenda.rows.is_empty());
        assert_snapshot!(String::from_utf8(output).unwrap(), @"Created agenda club-42 starting 06:15 PM");
    }

    #[test]
    fn new_generates_meeting_id() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("agenda.json");
        let mut new_args = args(path.clone());
        new_args.meeting_id = None;
        new_args.start = Some("9:00 am".to_string());

        run(&mut Vec::new(), &new_args, &Config::default()).unwrap();

        let agenda = load_agenda(&path).unwrap();
        assert!(Uuid::parse_str(agenda.meeting_id.as_str()).is_ok());
        assert_eq!(agenda.start_time, "9:00 am");
    }

    #[test]
    fn new_refuses_to_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("agenda.json");
        std::fs::write(&path, "{}").unwrap();

        let err = run(&mut Vec::new(), &args(path.clone()), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let mut forced = args(path);
        forced.force = true;
        assert!(run(&mut Vec::new(), &forced, &Config::default()).is_ok());
    }

    #[test]
    fn new_rejects_bad_start_time() {
        let temp = tempfile::tempdir().unwrap();
        let mut new_args = args(temp.path().join("agenda.json"));
        new_args.start = Some("soon".to_string());

        let err = run(&mut Vec::new(), &new_args, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid clock time"));
        assert!(!temp.path().join("agenda.json").exists());
    }
}
