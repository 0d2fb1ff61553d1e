//! Branching move history with a time-travel cursor.
//!
//! A [`GameState`] holds every board snapshot of the game, starting with the
//! empty board, plus a cursor selecting the snapshot that is shown and that
//! the next move extends. All operations take `&self` and return a new state.

use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::error::{GameError, MoveRejection};
use crate::rules::{Winner, evaluate_winner, is_draw};
use crate::{Board, Move, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Current status of the snapshot at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", player)]
    Won {
        /// The winning player.
        player: Player,
    },
    /// Board is full and nobody completed a line.
    #[display("It is a draw!")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", next_player)]
    InProgress {
        /// Player who moves next.
        next_player: Player,
    },
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// One snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot (`None` for the empty
    /// starting board).
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Complete game: history of snapshots plus the cursor.
///
/// Invariants:
/// - `history[0]` is the empty board and has no move
/// - `step_number < history.len()`
/// - X moves from even steps, O from odd steps
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    size: usize,
    history: Vec<HistoryEntry>,
    step_number: usize,
}

impl GameState {
    /// Starts a new game on an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is zero or larger than
    /// [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        info!(size, "New game");
        Ok(Self {
            size,
            history: vec![HistoryEntry {
                board,
                last_move: None,
            }],
            step_number: 0,
        })
    }

    /// Rebuilds a game by applying `moves` in order from an empty board.
    ///
    /// Moves that would be ignored during play are ignored here too.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] for an invalid `size`.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(size: usize, moves: &[usize]) -> Result<Self, GameError> {
        let mut state = Self::new(size)?;
        for &index in moves {
            state = state.apply_move(index);
        }
        debug!(steps = state.step_number, "Replay complete");
        Ok(state)
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cursor position.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a game holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// Checks if the cursor is on the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.step_number + 1 == self.history.len()
    }

    /// Checks if X moves next from the cursor.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Returns the player who moves next from the cursor.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step_number)
    }

    /// Evaluates the board at the cursor for a completed line.
    pub fn winner(&self) -> Option<Winner> {
        evaluate_winner(self.current_board())
    }

    /// Returns the status of the snapshot at the cursor.
    ///
    /// A win takes precedence over a draw, so a winning move that fills the
    /// board reports `Won`. Fullness is read from the board itself.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won {
                player: winner.player(),
            }
        } else if is_draw(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next_player: self.next_player(),
            }
        }
    }

    /// Reports why a move at `index` would be ignored, if it would.
    pub fn check_move(&self, index: usize) -> Result<(), MoveRejection> {
        MoveContract::pre(self, &index)
    }

    /// Places the next player's mark at `index`.
    ///
    /// Illegal moves (occupied cell, off-board index, or a snapshot that
    /// already has a winner) return an unchanged copy of `self`. A legal move
    /// discards every snapshot after the cursor, appends the new snapshot and
    /// moves the cursor onto it.
    #[instrument(skip(self), fields(step = self.step_number, len = self.history.len()))]
    pub fn apply_move(&self, index: usize) -> GameState {
        if let Err(rejection) = LegalMove::check(self, index) {
            debug!(%rejection, "Move ignored");
            return self.clone();
        }

        let player = self.next_player();
        let board = self.current_board().with_mark(index, player);

        let discarded = self.history.len() - self.step_number - 1;
        if discarded > 0 {
            debug!(discarded, "Branching from earlier step");
        }

        let mut history = self.history[..=self.step_number].to_vec();
        history.push(HistoryEntry {
            board,
            last_move: Some(Move::new(index, self.size, player)),
        });

        let next = GameState {
            size: self.size,
            step_number: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(self, &next);
            debug_assert!(post.is_ok(), "Move postcondition failed: {:?}", post);
        }

        let status = next.status();
        if status.is_terminal() {
            info!(%status, step = next.step_number, "Game finished");
        }

        next
    }

    /// Moves the cursor to `step`, leaving history untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, GameError> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.step_number, to = step, "Jumping");
        Ok(GameState {
            size: self.size,
            history: self.history.clone(),
            step_number: step,
        })
    }

    /// Rewrites a snapshot in place, bypassing all checks.
    #[cfg(test)]
    pub(crate) fn corrupt_entry(&mut self, step: usize, board: Board) {
        self.history[step].board = board;
    }

    #[cfg(test)]
    pub(crate) fn corrupt_move(&mut self, step: usize, last_move: Option<Move>) {
        self.history[step].last_move = last_move;
    }
}
