//! Rewind - command-line entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{RewindConfig, Session, StateReport};
use rewind_tictactoe::GameState;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = RewindConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { size } => run_play(config.with_size_flag(size)),
        Command::Replay { size, moves, jump } => {
            run_replay(config.with_size_flag(size), &moves, jump)
        }
    }
}

/// Logs go to stderr so stdout carries only game output.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rewind=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip_all, fields(board_size = config.board_size()))]
fn run_play(config: RewindConfig) -> Result<()> {
    let mut session = Session::new(&config).context("Failed to start session")?;
    info!("Type 'help' for commands");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

/// Replay moves and print a JSON report
#[instrument(
    skip(config, moves),
    fields(board_size = config.board_size(), move_count = moves.len())
)]
fn run_replay(config: RewindConfig, moves: &[usize], jump: Option<usize>) -> Result<()> {
    let mut game =
        GameState::replay(*config.board_size(), moves).context("Failed to replay moves")?;

    if let Some(step) = jump {
        game = game.jump_to(step).context("Failed to jump")?;
    }

    println!("{}", StateReport::new(&game, *config.sort_order()).to_json()?);
    Ok(())
}
