//! CLI subcommand implementations.

pub mod edit;
pub mod leaderboard;
pub mod new;
pub mod show;
pub mod times;
pub mod util;
