//! A computer opponent for the board game 'four in a row'
//!
//! The opponent picks its moves with a depth-limited game tree search over a
//! shared mutable board; a difficulty tier sets the search depth, with the
//! lowest tier playing randomly instead of searching.
//!
//! # Basic Usage
//!
//! ```
//! use four_in_row_ai::board::Board;
//! use four_in_row_ai::selector::{select_move, Difficulty};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! let difficulty = Difficulty::from_tier(2)?;
//! let ai_move = select_move(&mut board, difficulty)?;
//!
//! // every column of an empty board scores alike, so the centre wins the tie
//! assert_eq!(ai_move.column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod evaluator;

pub mod search;

pub mod selector;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the win scan needs a window of four to fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
