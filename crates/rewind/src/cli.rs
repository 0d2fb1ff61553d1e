//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with a branching move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Board side length (overrides config and environment)
        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Apply a list of moves and print the resulting state as JSON
    Replay {
        /// Board side length (overrides config and environment)
        #[arg(short, long)]
        size: Option<usize>,

        /// Cell indices, comma separated (e.g. 0,4,8)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to move the cursor to after replaying
        #[arg(short, long)]
        jump: Option<usize>,
    },
}
