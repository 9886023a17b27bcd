use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use tm_cli::commands::{edit, leaderboard, new, show, times};
use tm_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; warnings show by default
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::New(args)) => new::run(&mut out, args, &config)?,
        Some(Commands::Show(args)) => show::run(&mut out, args)?,
        Some(Commands::Times(args)) => times::run(&mut out, args)?,
        Some(Commands::Add(args)) => edit::add(&mut out, args)?,
        Some(Commands::AddBreak(args)) => edit::add_break(&mut out, args, &config)?,
        Some(Commands::AddHeader(args)) => edit::add_header(&mut out, args)?,
        Some(Commands::Remove(args)) => edit::remove(&mut out, args)?,
        Some(Commands::Move(args)) => edit::move_row(&mut out, args)?,
        Some(Commands::Leaderboard(args)) => leaderboard::run(&mut out, args)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
