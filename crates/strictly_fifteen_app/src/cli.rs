//! Command-line interface for strictly_fifteen.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Fifteen - sliding 15-puzzle with a leaderboard
#[derive(Parser, Debug)]
#[command(name = "strictly_fifteen")]
#[command(about = "Sliding 15-puzzle with a persisted leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $STRICTLY_FIFTEEN_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game, reading tile numbers from stdin
    Play {
        /// Player name recorded on the leaderboard
        #[arg(short, long)]
        name: String,
    },

    /// Print the leaderboard
    Records,

    /// Delete every leaderboard entry
    ClearRecords,
}
