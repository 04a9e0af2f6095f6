//! Command-line interface for tui-bingo.
//!
//! Flags override the matching `BINGO_*` environment variables.

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Terminal bingo with incremental call reveal
#[derive(Parser, Debug)]
#[command(name = "tui-bingo")]
#[command(about = "Terminal bingo with incremental call reveal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Inclusive upper bound of the number pool (overrides BINGO_POOL_MAX)
    #[arg(long, global = true)]
    pub pool_max: Option<u32>,

    /// RNG seed (overrides BINGO_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Milliseconds between revealed calls (overrides BINGO_REVEAL_MS)
    #[arg(long, global = true)]
    pub reveal_ms: Option<u32>,

    /// Subcommand to run; plays in the terminal when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Buy in once and print the game state as JSON
    Snapshot,
}

impl Cli {
    /// The command to run, defaulting to [`Command::Play`].
    pub fn selected(&self) -> Command {
        self.command.unwrap_or(Command::Play)
    }

    /// Replace settings in `config` with any given on the command line.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(pool_max) = self.pool_max {
            config.pool_max = pool_max;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(reveal_ms) = self.reveal_ms {
            config.reveal_interval_ms = reveal_ms;
        }
    }
}
