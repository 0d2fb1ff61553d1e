//! Draw detection logic for tic-tac-toe.

use super::win::evaluate_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks for a draw: a full board with no completed line.
///
/// The winner check comes first, so a board filled by a winning move is
/// never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    evaluate_winner(board).is_none() && is_full(board)
}
