//! History consistency invariant: history, cursor and moves agree.

use super::Invariant;
use crate::rules::evaluate_winner;
use crate::GameState;

/// Invariant: the history is well formed.
///
/// - The cursor addresses a recorded snapshot
/// - Every snapshot has the game's size
/// - Snapshot k holds exactly k marks and only snapshot 0 lacks a move
/// - Recorded row and column match the move's index
/// - No snapshot except the last one has a winner
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let size = game.size();

        if history.is_empty() || game.step_number() >= history.len() {
            return false;
        }

        let entries_agree = history.iter().enumerate().all(|(step, entry)| {
            let board = entry.board();
            let move_agrees = match entry.last_move() {
                None => step == 0,
                Some(mov) => {
                    step > 0 && mov.row() == mov.index() / size && mov.col() == mov.index() % size
                }
            };
            board.size() == size && board.occupied_count() == step && move_agrees
        });

        let only_last_terminal = history[..history.len() - 1]
            .iter()
            .all(|entry| evaluate_winner(entry.board()).is_none());

        entries_agree && only_last_terminal
    }

    fn description() -> &'static str {
        "History length, cursor and recorded moves agree with the boards"
    }
}
