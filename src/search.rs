//! The game tree search that picks the computer's moves

use crate::board::{Board, Move, Side};
use crate::evaluator::evaluate;
use crate::WIDTH;

/// Returns the candidate column order, radiating out from the middle column,
/// as the middle columns are usually the stronger moves
///
/// Trying them first makes alpha-beta cutoffs fire earlier. The order is a
/// pruning heuristic and a tie-break rule only; it never changes which score
/// a position gets.
pub const fn column_order() -> [usize; WIDTH] {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = WIDTH / 2 - (i % 2) * (i / 2 + 1) + (1 - i % 2) * (i / 2);
        i += 1;
    }
    order
}

/// A depth-limited minimax search over one shared board
///
/// # Notes
/// The searcher explores candidate moves by mutating the board it borrows and
/// undoing every placement before trying the next, so a finished search
/// leaves the board exactly as it found it.
///
/// # Position Scoring
/// Only terminal positions carry a score: +100 when the computer has four in
/// a row, -100 when the player does, +1 for a full board. Running out of
/// depth in an undecided position scores a neutral 0. There is no heuristic
/// evaluation of open positions; search depth is the sole quality lever.
pub struct Searcher<'a> {
    board: &'a mut Board,

    /// The number of positions evaluated by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Searcher<'a> {
    /// Creates a new `Searcher` borrowing the board for one decision
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Finds the best computer move at the given search depth
    ///
    /// Returns the score of the move along with where it lands. Candidate
    /// columns are tried in [`column_order`] and only a strictly greater
    /// score displaces the running best, so ties resolve to the earliest
    /// candidate (on a symmetric board, the centre column). Returns `None`
    /// only when every column is full.
    pub fn best_move(&mut self, depth: u32) -> Option<(i32, Move)> {
        debug_assert!(
            !evaluate(self.board).is_terminal(),
            "searching a finished game"
        );

        let mut best: Option<(i32, Move)> = None;

        for &column in column_order().iter() {
            if let Ok(mv) = self.board.drop_piece(column, Side::Computer) {
                // the computer just moved, so the next ply minimizes
                let score =
                    self.alpha_beta(depth.saturating_sub(1), i32::MIN, i32::MAX, false);
                self.board.undo(mv);

                match best {
                    Some((best_score, _)) if score <= best_score => {}
                    _ => best = Some((score, mv)),
                }
            }
        }

        best
    }

    /// Performs the recursive alpha-beta game tree search
    ///
    /// `maximizing` levels place computer pieces and track the running
    /// maximum in `alpha`; minimizing levels place player pieces and track
    /// the running minimum in `beta`. Once the two bounds cross, the
    /// remaining sibling columns are pruned: a perfect opponent never lets
    /// play reach them.
    fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.node_count += 1;

        let outcome = evaluate(self.board);
        if outcome.is_terminal() || depth == 0 {
            return outcome.score();
        }

        let side = if maximizing { Side::Computer } else { Side::Player };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for &column in column_order().iter() {
            if let Ok(mv) = self.board.drop_piece(column, side) {
                let score = self.alpha_beta(depth - 1, alpha, beta, !maximizing);
                // restore the board before the next candidate, pruned or not
                self.board.undo(mv);

                if maximizing {
                    best = best.max(score);
                    alpha = alpha.max(best);
                } else {
                    best = best.min(score);
                    beta = beta.min(best);
                }
                if beta <= alpha {
                    break;
                }
            }
        }

        best
    }
}
