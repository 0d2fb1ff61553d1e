//! Terminal driver for the rewind tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML file, `REWIND_BOARD_SIZE`, then command-line flags
//! - **Session**: line-oriented play loop over one [`GameState`]
//! - **Report**: JSON summary for scripted replays
//!
//! [`GameState`]: rewind_tictactoe::GameState

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;
mod session;

pub use config::{BOARD_SIZE_ENV, ConfigError, RewindConfig};
pub use report::StateReport;
pub use session::{Command, CommandError, Session};
