//! First-class move records.
//!
//! Every history entry after the first remembers the move that produced it,
//! so a move list can describe each step without diffing boards.

use super::Player;
use serde::Serialize;

/// A player placing their mark on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    index: usize,
    row: usize,
    col: usize,
    player: Player,
}

impl Move {
    /// Creates a move on a board with `size` columns, deriving row and column
    /// from the row-major `index`.
    pub fn new(index: usize, size: usize, player: Player) -> Self {
        Self {
            index,
            row: index / size,
            col: index % size,
            player,
        }
    }

    /// Returns the row-major cell index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the row of the cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ ({}, {})", self.player, self.col, self.row)
    }
}
