//! Pure tic-tac-toe game logic with a branching, time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`] and the N×N [`Board`]
//! - **Rules**: win and draw detection over one snapshot
//! - **History**: [`GameState`] keeps every snapshot plus a cursor; moves
//!   made after rewinding discard the recorded future
//! - **Contracts / invariants**: move preconditions and history invariants
//! - **View**: move-list labels, ordering and winning-cell highlights
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let game = GameState::new(3)?
//!     .apply_move(0)
//!     .apply_move(3)
//!     .apply_move(1)
//!     .apply_move(4)
//!     .apply_move(2);
//! assert_eq!(game.status(), GameStatus::Won { player: Player::X });
//!
//! // Rewind two moves and branch.
//! let branched = game.jump_to(3)?.apply_move(8);
//! assert_eq!(branched.len(), 5);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod view;

pub use action::Move;
pub use error::{GameError, MoveRejection};
pub use history::{GameState, GameStatus, HistoryEntry};
pub use rules::{Winner, evaluate_winner};
pub use types::{Board, Cell, MAX_BOARD_SIZE, Player};
pub use view::{MoveList, MoveListEntry, SortOrder, is_winning_cell};
