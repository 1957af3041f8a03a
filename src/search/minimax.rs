//! Exhaustive minimax search
//!
//! The tree is explored to full depth without pruning; a 3x3 board has at
//! most 549 946 nodes from the empty position.
//!
//! Roles are fixed rather than derived from the side to move: Cross is always
//! the maximizer, and the minimizing ply places the mark the AI is configured
//! to play. The search is entered at a minimizing ply, i.e. from the AI's
//! point of view. When the AI plays Cross both plies therefore place crosses.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new(Mark::Circle);
//! let result = searcher.search(&Board::new());
//! assert_eq!(result.score, 0);
//! ```

use crate::board::{Board, Mark, Pos};

/// Score of a Cross win
pub const WIN_SCORE: i32 = 1;
/// Score of a Circle win
pub const LOSS_SCORE: i32 = -1;
/// Score of a draw
pub const DRAW_SCORE: i32 = 0;

/// Search result containing the best move found and the node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` at a terminal position
    pub best_move: Option<Pos>,
    /// Evaluation from Cross's point of view: +1 win, -1 loss, 0 draw
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher bound to the mark the AI plays on minimizing plies.
pub struct Searcher {
    ai_mark: Mark,
    nodes: u64,
}

impl Searcher {
    pub fn new(ai_mark: Mark) -> Self {
        debug_assert!(ai_mark != Mark::Empty);
        Self { ai_mark, nodes: 0 }
    }

    /// Search from the AI's point of view (minimizing ply).
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, false);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Evaluate `board` with the given ply role.
    ///
    /// Ties keep the first move in row-major order.
    pub fn minimax(&mut self, board: &Board, maximizing: bool) -> (i32, Option<Pos>) {
        self.nodes += 1;

        match board.terminal_result() {
            Some(Mark::Cross) => return (WIN_SCORE, None),
            Some(Mark::Circle) => return (LOSS_SCORE, None),
            _ => {}
        }
        if board.is_full() {
            return (DRAW_SCORE, None);
        }

        let mut best_move = None;
        if maximizing {
            let mut max_eval = i32::MIN;
            for pos in board.legal_moves() {
                let child = board.with_mark(pos, Mark::Cross);
                let (eval, _) = self.minimax(&child, false);
                if eval > max_eval {
                    max_eval = eval;
                    best_move = Some(pos);
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = i32::MAX;
            for pos in board.legal_moves() {
                let child = board.with_mark(pos, self.ai_mark);
                let (eval, _) = self.minimax(&child, true);
                if eval < min_eval {
                    min_eval = eval;
                    best_move = Some(pos);
                }
            }
            (min_eval, best_move)
        }
    }
}
