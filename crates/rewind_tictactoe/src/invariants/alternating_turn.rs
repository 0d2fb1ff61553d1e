//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the mark placed at step k is X for odd k and O for even k.
///
/// Step 0 is the empty board, so X's first mark produces step 1.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().skip(1).all(|(step, entry)| {
            entry
                .last_move()
                .is_some_and(|mov| mov.player() == Player::to_move_at(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
