//! Line-oriented play session.
//!
//! The session owns one [`GameState`] and replaces it after every command,
//! the way a front end re-renders from the state each call returns.

use crate::config::RewindConfig;
use derive_more::Display;
use rewind_tictactoe::{GameError, GameState, MoveList, SortOrder};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at a cell index.
    Move(usize),
    /// Move the cursor to a recorded step.
    Jump(usize),
    /// Toggle the move-list order and show the list.
    Sort,
    /// Show the move list.
    History,
    /// Show the board at the cursor.
    Board,
    /// Show the status line.
    Status,
    /// List the commands.
    Help,
    /// End the session.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Unrecognized command word.
    #[display("Unknown command {:?} (try 'help')", _0)]
    Unknown(String),

    /// Command needs a number that is missing.
    #[display("'{}' needs a number", _0)]
    MissingArgument(&'static str),

    /// Argument is not a non-negative integer.
    #[display("{:?} is not a valid number", _0)]
    InvalidNumber(String),
}

impl std::error::Error for CommandError {}

fn number(name: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(name))?;
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().unwrap_or_default().to_lowercase();
        match word.as_str() {
            "move" | "m" => Ok(Command::Move(number("move", words.next())?)),
            "jump" | "j" => Ok(Command::Jump(number("jump", words.next())?)),
            "sort" => Ok(Command::Sort),
            "history" | "h" => Ok(Command::History),
            "board" | "b" => Ok(Command::Board),
            "status" | "s" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

const HELP: &str = "\
Commands:
  move <cell>   place the next mark (cells are numbered row by row from 0)
  jump <step>   go back (or forward) to a recorded step
  sort          switch the move-list order
  history       show the move list
  board         show the board
  status        show whose turn it is or who won
  quit          leave";

/// Interactive game session.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    order: SortOrder,
}

impl Session {
    /// Starts a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] for an unusable board size.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn new(config: &RewindConfig) -> Result<Self, GameError> {
        let game = GameState::new(*config.board_size())?;
        info!("Session started");
        Ok(Self {
            game,
            order: *config.sort_order(),
        })
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Runs one command and returns the text to show.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] for a jump outside the history;
    /// the session is unchanged.
    #[instrument(skip(self), fields(step = self.game.step_number()))]
    pub fn execute(&mut self, command: Command) -> Result<String, GameError> {
        let text = match command {
            Command::Move(index) => {
                let ignored = self.game.check_move(index).err();
                self.game = self.game.apply_move(index);
                match ignored {
                    Some(rejection) => format!("Ignored: {}\n{}", rejection, self.game.status()),
                    None => self.render_board(),
                }
            }
            Command::Jump(step) => {
                self.game = self.game.jump_to(step)?;
                self.render_board()
            }
            Command::Sort => {
                self.order = self.order.toggle();
                debug!(order = %self.order, "Move list order toggled");
                self.render_history()
            }
            Command::History => self.render_history(),
            Command::Board => self.render_board(),
            Command::Status => self.game.status().to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => "Bye.".to_string(),
        };
        Ok(text)
    }

    /// Reads commands from `input` until `quit` or end of input, writing
    /// replies to `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "{}", self.render_board())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Unparsable input");
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(text) => writeln!(output, "{}", text)?,
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                    writeln!(output, "Error: {}", e)?;
                }
            }

            if command == Command::Quit {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }

    fn render_board(&self) -> String {
        let mut text = format!("{}\n", self.game.current_board());
        if let Some(winner) = self.game.winner() {
            let cells: Vec<String> = winner.line().iter().map(|i| i.to_string()).collect();
            text.push_str(&format!("Winning line: {}\n", cells.join(", ")));
        }
        text.push_str(&self.game.status().to_string());
        text
    }

    fn render_history(&self) -> String {
        let list = MoveList::new(&self.game, self.order);
        let mut lines = vec![format!("[{}]", self.order.toggle_label())];
        lines.extend(list.iter().map(|entry| {
            let marker = if *entry.is_current() { ">" } else { " " };
            format!("{} {}", marker, entry.description())
        }));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("move 4".parse::<Command>(), Ok(Command::Move(4)));
        assert_eq!("  J 2 ".parse::<Command>(), Ok(Command::Jump(2)));
        assert_eq!("sort".parse::<Command>(), Ok(Command::Sort));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("move".parse::<Command>(), Err(CommandError::MissingArgument("move")));
        assert_eq!(
            "jump -1".parse::<Command>(),
            Err(CommandError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_move_and_status() {
        let mut session = Session::new(&RewindConfig::default()).unwrap();
        let text = session.execute(Command::Move(4)).unwrap();
        assert_eq!(text, ". . .\n. X .\n. . .\nNext player: O");
    }

    #[test]
    fn test_ignored_move_reports_reason() {
        let mut session = Session::new(&RewindConfig::default()).unwrap();
        session.execute(Command::Move(4)).unwrap();
        let text = session.execute(Command::Move(4)).unwrap();
        assert_eq!(text, "Ignored: Cell 4 is already occupied\nNext player: O");
        assert_eq!(session.game().len(), 2);
    }

    #[test]
    fn test_invalid_jump_leaves_session() {
        let mut session = Session::new(&RewindConfig::default()).unwrap();
        session.execute(Command::Move(0)).unwrap();
        let err = session.execute(Command::Jump(5)).unwrap_err();
        assert_eq!(err, GameError::InvalidStep { step: 5, len: 2 });
        assert_eq!(session.game().step_number(), 1);
    }
}
