//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Exhaustive minimax over the full game tree
//! - Uniform random move selection for the weak difficulty

pub mod minimax;
pub mod random;

pub use minimax::{SearchResult, Searcher};
pub use random::pick_random;
