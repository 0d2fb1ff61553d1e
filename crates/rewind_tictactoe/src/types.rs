//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::Serialize;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who moves from the snapshot at `step`.
    ///
    /// Step 0 is the empty board and X moves first, so X moves from every
    /// even step.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square N×N board, cells stored in row-major order.
///
/// A board never changes size after construction. Placing a mark produces a
/// new board, so snapshots kept in history cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is zero, larger than
    /// [`MAX_BOARD_SIZE`], or its cells cannot be allocated.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let cell_count = validate_size(size)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|_| GameError::InvalidSize(size))?;
        cells.resize(cell_count, Cell::Empty);
        Ok(Self { size, cells })
    }

    /// Builds a board from row-major cells; the side length is derived from
    /// the cell count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] carrying the cell count if it is
    /// zero or not a perfect square.
    #[instrument(skip(cells), fields(cell_count = cells.len()))]
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, GameError> {
        let size = (1..=cells.len())
            .take_while(|side| side * side <= cells.len())
            .last()
            .unwrap_or(0);
        if size == 0 || size * size != cells.len() {
            return Err(GameError::InvalidSize(cells.len()));
        }
        Ok(Self { size, cells })
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at `index`, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// Callers check bounds first.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells.clone();
        cells[index] = Cell::Occupied(player);
        Self {
            size: self.size,
            cells,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Largest accepted board side length.
///
/// A full game keeps `N*N + 1` snapshots of `N*N` cells each.
pub const MAX_BOARD_SIZE: usize = 128;

/// Checks a board size and returns its cell count.
fn validate_size(size: usize) -> Result<usize, GameError> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(GameError::InvalidSize(size));
    }
    Ok(size * size)
}
