//! JSON summary of a game for non-interactive use.

use rewind_tictactoe::{GameState, GameStatus, MoveList, Player, SortOrder};
use serde::Serialize;
use tracing::instrument;

/// Snapshot of a game at its cursor, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    /// Board side length.
    pub size: usize,
    /// Cursor position.
    pub step_number: usize,
    /// Number of recorded snapshots.
    pub history_len: usize,
    /// Status line text.
    pub status: String,
    /// Structured status.
    pub outcome: GameStatus,
    /// Cells of the winning line, if any.
    pub winning_line: Option<Vec<usize>>,
    /// Board at the cursor, row-major; `null` for empty cells.
    pub cells: Vec<Option<Player>>,
    /// Move list in the requested order.
    pub moves: MoveList,
}

impl StateReport {
    /// Summarizes `game` at its cursor.
    #[instrument(skip(game), fields(step = game.step_number()))]
    pub fn new(game: &GameState, order: SortOrder) -> Self {
        let status = game.status();
        Self {
            size: game.size(),
            step_number: game.step_number(),
            history_len: game.len(),
            status: status.to_string(),
            outcome: status,
            winning_line: game.winner().map(|w| w.line().to_vec()),
            cells: game
                .current_board()
                .cells()
                .iter()
                .map(|cell| cell.player())
                .collect(),
            moves: MoveList::new(game, order),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
