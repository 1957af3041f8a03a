//! Win condition checking
//!
//! Lines are checked in a fixed order: the three columns top-to-bottom, the
//! three rows left-to-right, the main diagonal, then the anti-diagonal. The
//! first complete line decides the winner.

use crate::board::{Board, Mark, Pos};

/// All eight lines as (row, col) triples, in check order
pub const LINES: [[(u8, u8); 3]; 8] = [
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Main diagonal
    [(0, 0), (1, 1), (2, 2)],
    // Anti-diagonal
    [(2, 0), (1, 1), (0, 2)],
];

/// Winning mark if any line holds three equal non-empty marks
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|line| board.get(line[0]))
}

/// First complete line in check order
pub fn find_winning_line(board: &Board) -> Option<[Pos; 3]> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| Pos::new(row, col));
        let mark = board.get(a);
        if mark != Mark::Empty && board.get(b) == mark && board.get(c) == mark {
            Some([a, b, c])
        } else {
            None
        }
    })
}
