//! Club meeting agenda CLI library.
//!
//! This crate provides the CLI interface for agenda editing and leaderboards.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
