//! Win detection for N×N boards.

use crate::{Board, Cell, Player};
use serde::Serialize;
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Winner {
    player: Player,
    line: Vec<usize>,
}

impl Winner {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the N cell indices of the winning line, in line order.
    pub fn line(&self) -> &[usize] {
        &self.line
    }

    /// Checks if `index` belongs to the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Enumerates every candidate line of a `size`×`size` board.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti diagonal.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<usize>> {
    let rows = (0..size).map(move |row| Vec::from_iter((0..size).map(|col| row * size + col)));
    let cols = (0..size).map(move |col| Vec::from_iter((0..size).map(|row| row * size + col)));
    let main = std::iter::once(Vec::from_iter((0..size).map(|i| i * size + i)));
    let anti = std::iter::once(Vec::from_iter((0..size).map(|i| i * size + (size - 1 - i))));
    rows.chain(cols).chain(main).chain(anti)
}

/// Finds the first line whose cells all hold the same mark.
///
/// Returns `None` if no line is complete. When several lines qualify the
/// first in [`lines`] order is reported.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate_winner(board: &Board) -> Option<Winner> {
    lines(board.size()).find_map(|line| {
        let player = board.get(line[0])?.player()?;
        let complete = line
            .iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(player)));
        if complete { Some(Winner::new(player, line)) } else { None }
    })
}
