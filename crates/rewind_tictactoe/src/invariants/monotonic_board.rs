//! Monotonic board invariant: each step adds exactly one mark.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: every snapshot extends the previous one by the recorded move.
///
/// The starting snapshot is empty. Snapshot k equals snapshot k-1 except at
/// the cell of move k, which was empty and now holds the mover's mark.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history[0].board().occupied_count() != 0 {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mov) = pair[1].last_move() else {
                return false;
            };

            before.cells().len() == after.cells().len()
                && before.is_empty_at(mov.index())
                && after.get(mov.index()) == Some(Cell::Occupied(mov.player()))
                && before
                    .cells()
                    .iter()
                    .zip(after.cells())
                    .enumerate()
                    .all(|(index, (b, a))| index == mov.index() || b == a)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the recorded mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new(3).unwrap()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = GameState::replay(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameState::replay(3, &[4]).unwrap();
        let board = Board::new(3)
            .unwrap()
            .with_mark(4, Player::X)
            .with_mark(0, Player::O);
        game.corrupt_entry(1, board);

        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut game = GameState::new(3).unwrap();
        game.corrupt_entry(0, Board::new(3).unwrap().with_mark(0, Player::X));

        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
