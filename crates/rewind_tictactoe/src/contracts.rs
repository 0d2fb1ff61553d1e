//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move is applied or ignored. Postconditions
//! re-check the game invariants after a move has been applied.

use crate::error::MoveRejection;
use crate::history::GameState;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::evaluate_winner;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index addresses a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the index against the board's cell count.
    pub fn check(game: &GameState, index: usize) -> Result<(), MoveRejection> {
        let cells = game.current_board().cell_count();
        if index < cells {
            Ok(())
        } else {
            Err(MoveRejection::OutOfBounds { index, cells })
        }
    }
}

/// Precondition: the snapshot at the cursor has no winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks the board at the cursor for a completed line.
    pub fn check(game: &GameState) -> Result<(), MoveRejection> {
        match evaluate_winner(game.current_board()) {
            Some(winner) => Err(MoveRejection::GameOver(winner.player())),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the target cell on the board at the cursor.
    pub fn check(game: &GameState, index: usize) -> Result<(), MoveRejection> {
        if game.current_board().is_empty_at(index) {
            Ok(())
        } else {
            Err(MoveRejection::CellOccupied(index))
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(game), fields(step = game.step_number()))]
    pub fn check(game: &GameState, index: usize) -> Result<(), MoveRejection> {
        InBounds::check(game, index)?;
        NoWinnerYet::check(game)?;
        CellIsEmpty::check(game, index)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index is on the board
/// - No winner at the cursor
/// - Target cell is empty
///
/// Postconditions:
/// - History up to the old cursor is kept, exactly one entry follows it
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), MoveRejection> {
        LegalMove::check(game, *index)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let kept = before.step_number() + 1;
        if after.len() != kept + 1 || after.history()[..kept] != before.history()[..kept] {
            violations.push(InvariantViolation::new(
                "Move keeps history up to the cursor and appends one entry",
            ));
        }
        if !after.is_at_latest() {
            violations.push(InvariantViolation::new("Cursor follows the new entry"));
        }

        if let Err(found) = GameInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
