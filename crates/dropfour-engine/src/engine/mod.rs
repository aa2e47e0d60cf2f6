//! Match logic on top of the board.
//!
//! This module drives repeated games between two players:
//!
//! - [`Player`] - Identity, avatar and running win/loss record
//! - [`MatchController`] - Turn order, game-over detection, scoring and reset
//! - [`Console`] - The I/O collaborator supplying names and moves and showing
//!   the board
//!
//! # Game Flow
//!
//! 1. Both players are created once, with names from the [`Console`]
//! 2. Player one asks the console for a column; the piece is dropped
//! 3. The turn passes to the other player until someone connects four or the
//!    board is full
//! 4. Scores are updated, the board is cleared and the console confirms the
//!    next game
//! 5. Repeat until the console's input is closed
//!
//! # Example
//!
//! ```
//! use dropfour_engine::{Avatar, Board, MatchController, Outcome, Player, PlayerId};
//!
//! let players = [
//!     Player::new(PlayerId::One, "Ada", Avatar::new('x')),
//!     Player::new(PlayerId::Two, "Brian", Avatar::new('o')),
//! ];
//! let mut controller = MatchController::new(Board::default(), players);
//!
//! assert!(!controller.is_game_over());
//! assert_eq!(controller.current_player().id(), PlayerId::One);
//!
//! controller.next_player();
//! assert_eq!(controller.current_player().id(), PlayerId::Two);
//!
//! // Nobody has four in a row yet.
//! assert_eq!(controller.settle_outcome(), Outcome::Draw);
//! ```

pub use self::{match_controller::*, player::*};

mod match_controller;
mod player;
