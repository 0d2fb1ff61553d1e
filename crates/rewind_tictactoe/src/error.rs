//! Error and rejection types for the game engine.

use super::Player;

/// Contract violation by the calling layer.
///
/// These are never patched up silently: the call fails and the caller's
/// state is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board size is zero or larger than [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    #[display("Invalid board size {}: must be between 1 and {}", _0, crate::MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// Cursor target outside the recorded history.
    #[display("Invalid step {}: history has {} entries", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

impl std::error::Error for GameError {}

/// Reason a move was ignored.
///
/// Ignored moves are not errors: `apply_move` returns the state unchanged
/// and the missing mutation is the signal. This type only explains why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Cell index is off the board.
    #[display("Cell {} is outside a board of {} cells", index, cells)]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The snapshot at the cursor already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidSize(0).to_string(),
            "Invalid board size 0: must be between 1 and 128"
        );
        assert_eq!(
            GameError::InvalidStep { step: 5, len: 3 }.to_string(),
            "Invalid step 5: history has 3 entries"
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::CellOccupied(4).to_string(), "Cell 4 is already occupied");
        assert_eq!(MoveRejection::GameOver(Player::O).to_string(), "Game is already won by O");
    }
}
