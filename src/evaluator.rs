//! Terminal detection: four-in-a-row and full-board scans

use crate::board::{Board, Cell, Side};
use crate::{HEIGHT, WIDTH};

/// The result of scanning a board for a finished game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// The game is still in progress
    Continue,
    /// The board is full with no four-in-a-row
    Draw,
    /// The given side has four in a row
    Win(Side),
}

impl Outcome {
    /// The signed score the search propagates for this outcome
    ///
    /// A computer win is +100, a player win -100 and a draw +1, so any decided
    /// line dominates the neutral 0 of an undecided one
    pub fn score(self) -> i32 {
        match self {
            Outcome::Continue => 0,
            Outcome::Draw => 1,
            Outcome::Win(Side::Computer) => 100,
            Outcome::Win(Side::Player) => -100,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

// the winner of a window of four cells, if all four hold the same piece
fn connects(a: Cell, b: Cell, c: Cell, d: Cell) -> Option<Side> {
    if a == b && b == c && c == d {
        a.side()
    } else {
        None
    }
}

/// Scans the whole board for a four-in-a-row or a full grid
///
/// Every window of four contiguous cells is checked in all four directions.
/// At most one side can hold a real four-in-a-row on a board reached by legal
/// play, so the first match found decides the outcome. Runs in time
/// proportional to the board area.
pub fn evaluate(board: &Board) -> Outcome {
    // horizontal alignments
    for row in 0..HEIGHT {
        for column in 0..WIDTH - 3 {
            if let Some(side) = connects(
                board.cell(row, column),
                board.cell(row, column + 1),
                board.cell(row, column + 2),
                board.cell(row, column + 3),
            ) {
                return Outcome::Win(side);
            }
        }
    }

    // vertical alignments
    for column in 0..WIDTH {
        for row in 0..HEIGHT - 3 {
            if let Some(side) = connects(
                board.cell(row, column),
                board.cell(row + 1, column),
                board.cell(row + 2, column),
                board.cell(row + 3, column),
            ) {
                return Outcome::Win(side);
            }
        }
    }

    // diagonal / alignments
    for row in 0..HEIGHT - 3 {
        for column in 0..WIDTH - 3 {
            if let Some(side) = connects(
                board.cell(row, column),
                board.cell(row + 1, column + 1),
                board.cell(row + 2, column + 2),
                board.cell(row + 3, column + 3),
            ) {
                return Outcome::Win(side);
            }
        }
    }

    // diagonal \ alignments
    for row in 3..HEIGHT {
        for column in 0..WIDTH - 3 {
            if let Some(side) = connects(
                board.cell(row, column),
                board.cell(row - 1, column + 1),
                board.cell(row - 2, column + 2),
                board.cell(row - 3, column + 3),
            ) {
                return Outcome::Win(side);
            }
        }
    }

    // no alignments, the game goes on while any cell is open
    if board.cells().iter().any(|cell| cell.is_empty()) {
        Outcome::Continue
    } else {
        Outcome::Draw
    }
}
