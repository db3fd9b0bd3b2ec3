//! Difficulty tiers and the move chooser built on them

use rand::Rng;

use crate::board::{Board, Move};
use crate::error::GameError;
use crate::search::Searcher;
use crate::WIDTH;

/// The five difficulty tiers offered to the player
///
/// Every tier above `SuperEasy` maps to a fixed search depth; `SuperEasy`
/// plays uniformly random legal moves and never touches the search.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    SuperEasy,
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    /// Parses a numeric tier between 1 and 5
    ///
    /// Tiers outside the range are rejected rather than clamped, so a
    /// configuration mistake surfaces instead of silently playing the
    /// hardest game.
    pub fn from_tier(tier: u8) -> Result<Self, GameError> {
        match tier {
            1 => Ok(Difficulty::SuperEasy),
            2 => Ok(Difficulty::Easy),
            3 => Ok(Difficulty::Medium),
            4 => Ok(Difficulty::Hard),
            5 => Ok(Difficulty::Impossible),
            _ => Err(GameError::InvalidDifficulty(tier)),
        }
    }

    /// The search depth for this tier, or `None` for random play
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::SuperEasy => None,
            Difficulty::Easy => Some(4),
            Difficulty::Medium => Some(6),
            Difficulty::Hard => Some(8),
            Difficulty::Impossible => Some(10),
        }
    }
}

/// Chooses the computer's next move without committing it
///
/// The board comes back in its pre-call state; the caller plays the move it
/// is handed. Fails with [`GameError::BoardFull`] when no column is open,
/// which a correctly sequenced game loop never allows: check the terminal
/// outcome before asking for a move.
pub fn select_move(board: &mut Board, difficulty: Difficulty) -> Result<Move, GameError> {
    if (0..WIDTH).all(|column| !board.is_column_open(column)) {
        return Err(GameError::BoardFull);
    }

    match difficulty.search_depth() {
        None => Ok(random_move(board)),
        Some(depth) => Searcher::new(board)
            .best_move(depth)
            .map(|(_, mv)| mv)
            .ok_or(GameError::BoardFull),
    }
}

// picks a uniformly random open column and returns its landing slot;
// the caller has already checked that at least one column is open
fn random_move(board: &Board) -> Move {
    let mut rng = rand::thread_rng();
    loop {
        let column = rng.gen_range(0..WIDTH);
        if let Some(row) = board.drop_row(column) {
            return Move { row, column };
        }
    }
}
