//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot, kept apart from history
//! storage so that any snapshot in the history can be evaluated.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Winner, evaluate_winner, lines};
