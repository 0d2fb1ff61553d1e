//! Presentation data for a move list and board highlights.
//!
//! Nothing here draws anything. A front end reads these values to label its
//! controls: one "jump" control per history entry, a toggle for the list
//! order, and a highlight for the cells of a winning line.

use crate::GameState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for a control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Switch to Desc ordering",
            SortOrder::Descending => "Switch to Asc ordering",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    description: String,
    /// Whether the cursor is on this step.
    is_current: bool,
}

/// The move list for a game, in the requested order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct MoveList {
    /// Presentation order.
    order: SortOrder,
    /// Entries in presentation order.
    entries: Vec<MoveListEntry>,
}

impl MoveList {
    /// Builds the move list for every recorded step of `game`.
    ///
    /// Reversing the order reverses the rows only; each entry keeps the
    /// step it jumps to.
    #[instrument(skip(game), fields(len = game.len()))]
    pub fn new(game: &GameState, order: SortOrder) -> Self {
        let mut entries: Vec<MoveListEntry> = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry {
                step,
                description: match entry.last_move() {
                    Some(mov) => format!("Go to move #{} @ ({}, {})", step, mov.col(), mov.row()),
                    None => "Go to game start".to_string(),
                },
                is_current: step == game.step_number(),
            })
            .collect();

        if order == SortOrder::Descending {
            entries.reverse();
        }

        Self { order, entries }
    }

    /// Iterates over the entries in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveListEntry> {
        self.entries.iter()
    }
}

/// Checks if `index` is part of the winning line at the cursor.
pub fn is_winning_cell(game: &GameState, index: usize) -> bool {
    game.winner().is_some_and(|winner| winner.contains(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Switch to Desc ordering");
        assert_eq!(SortOrder::Descending.toggle_label(), "Switch to Asc ordering");
    }

    #[test]
    fn test_ascending_descriptions() {
        let game = GameState::replay(3, &[4, 2]).unwrap();
        let list = MoveList::new(&game, SortOrder::Ascending);

        let descriptions: Vec<&str> = list.iter().map(|e| e.description().as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["Go to game start", "Go to move #1 @ (1, 1)", "Go to move #2 @ (2, 0)"]
        );
        assert!(*list.entries()[2].is_current());
    }

    #[test]
    fn test_descending_keeps_steps() {
        let game = GameState::replay(3, &[4, 2, 0]).unwrap().jump_to(1).unwrap();
        let list = MoveList::new(&game, SortOrder::Descending);

        let steps: Vec<usize> = list.iter().map(|e| *e.step()).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);

        let current: Vec<usize> = list
            .iter()
            .filter(|e| *e.is_current())
            .map(|e| *e.step())
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(list.entries()[0].description(), "Go to move #3 @ (0, 0)");
    }

    #[test]
    fn test_winning_cells() {
        let game = GameState::replay(3, &[0, 3, 4, 5, 8]).unwrap();
        let highlighted: Vec<usize> = (0..9).filter(|&i| is_winning_cell(&game, i)).collect();
        assert_eq!(highlighted, vec![0, 4, 8]);

        let before_win = game.jump_to(4).unwrap();
        assert!((0..9).all(|i| !is_winning_cell(&before_win, i)));
    }

    #[test]
    fn test_sort_order_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Descending).unwrap(), "\"descending\"");
        let parsed: SortOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(parsed, SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.to_string(), "descending");
    }
}
