//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win conditions (three equal marks on a column, row or diagonal)
//! - Draw detection (full board, no line)
//! - Move validity

pub mod win;

use crate::board::{Board, Mark, Pos};

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, LINES};

/// Result of a position, layered on top of the winner check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No winner yet and at least one empty cell
    Ongoing,
    /// A line of three was completed by this mark
    Win(Mark),
    /// Full board without a winning line
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Score from Cross's point of view (+1 / -1 / 0), `None` while ongoing
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::Win(Mark::Cross) => Some(1),
            Outcome::Win(Mark::Circle) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Win(Mark::Empty) | Outcome::Ongoing => None,
        }
    }
}

/// A move is valid when the game is not over and the cell is empty
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    !board.is_terminal() && board.is_cell_empty(pos)
}
