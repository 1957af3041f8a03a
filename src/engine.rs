//! AI engine selecting moves for the automated side
//!
//! The engine owns the active [`AiConfig`] and dispatches to one of two
//! strategies:
//!
//! 1. **Random**: uniform choice among the empty cells
//! 2. **Minimax**: exhaustive search entered at a minimizing ply
//!
//! Every decision is reported through `tracing` at info level.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, AiConfig, Board, Evaluation};
//!
//! let mut engine = AIEngine::new(AiConfig::default());
//! let result = engine.evaluate(&Board::new()).unwrap();
//! assert_eq!(result.evaluation, Evaluation::Score(0));
//! ```

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::config::{AiConfig, Difficulty};
use crate::error::GameError;
use crate::search::{pick_random, Searcher};

/// Strategy that produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Random,
    Minimax,
}

/// Evaluation attached to a chosen move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Move picked at random, no score
    Random,
    /// Minimax score from Cross's point of view
    Score(i32),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Random => write!(f, "random"),
            Evaluation::Score(score) => write!(f, "{}", score),
        }
    }
}

/// Chosen move with search statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    pub evaluation: Evaluation,
    pub search_type: SearchType,
    /// Nodes visited (1 for the random strategy)
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Move selector for the automated side.
pub struct AIEngine {
    config: AiConfig,
    rng: ChaCha20Rng,
}

impl AIEngine {
    pub fn new(config: AiConfig) -> Self {
        Self {
            rng: Self::make_rng(config.seed),
            config,
        }
    }

    fn make_rng(seed: Option<u64>) -> ChaCha20Rng {
        match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Change the mark the AI plays. Rejects `Mark::Empty`.
    pub fn set_player(&mut self, player: Mark) -> Result<(), GameError> {
        if player == Mark::Empty {
            return Err(GameError::InvalidMark);
        }
        self.config.player = player;
        Ok(())
    }

    /// Choose a move for the configured side.
    ///
    /// The board must not be terminal; asking for a move on a finished game
    /// is rejected with `GameError::GameOver`.
    pub fn evaluate(&mut self, board: &Board) -> Result<MoveResult, GameError> {
        if board.is_terminal() {
            return Err(GameError::GameOver);
        }

        let start = Instant::now();
        let (best_move, evaluation, search_type, nodes) = match self.config.difficulty {
            Difficulty::Random => {
                let pos = pick_random(board, &mut self.rng)?;
                (pos, Evaluation::Random, SearchType::Random, 1)
            }
            Difficulty::Optimal => {
                let mut searcher = Searcher::new(self.config.player);
                let result = searcher.search(board);
                let pos = result.best_move.ok_or(GameError::NoLegalMoves)?;
                (pos, Evaluation::Score(result.score), SearchType::Minimax, result.nodes)
            }
        };
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            player = ?self.config.player,
            nodes,
            time_ms,
            "AI has chosen to mark the square at the pos {} with an eval of: {}",
            best_move,
            evaluation
        );
        debug!("board before AI move:\n{}", board);

        Ok(MoveResult {
            best_move,
            evaluation,
            search_type,
            nodes,
            time_ms,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in moves {
            board.mark(Pos::new(row, col), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(*engine.config(), AiConfig::default());
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::default();
        let result = engine.evaluate(&Board::new()).unwrap();

        assert_eq!(result.evaluation, Evaluation::Score(0));
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.best_move, Pos::new(0, 0));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = board_from(&[(0, 0, Mark::Cross), (1, 1, Mark::Circle), (0, 1, Mark::Cross)]);
        let mut engine = AIEngine::default();
        let result = engine.evaluate(&board).unwrap();

        assert_eq!(result.best_move, Pos::new(0, 2));
        assert_eq!(result.evaluation, Evaluation::Score(0));
    }

    #[test]
    fn test_engine_random_mode() {
        let config = AiConfig::new(Difficulty::Random, Mark::Circle).with_seed(5);
        let mut engine = AIEngine::new(config);
        let board = board_from(&[(1, 1, Mark::Cross)]);
        let result = engine.evaluate(&board).unwrap();

        assert_eq!(result.evaluation, Evaluation::Random);
        assert_eq!(result.search_type, SearchType::Random);
        assert!(board.is_cell_empty(result.best_move));
    }

    #[test]
    fn test_engine_seeded_random_is_reproducible() {
        let config = AiConfig::new(Difficulty::Random, Mark::Circle).with_seed(11);
        let board = Board::new();

        let mut first = AIEngine::new(config);
        let mut second = AIEngine::new(config);
        for _ in 0..5 {
            assert_eq!(
                first.evaluate(&board).unwrap().best_move,
                second.evaluate(&board).unwrap().best_move
            );
        }
    }

    #[test]
    fn test_engine_rejects_finished_game() {
        let won = board_from(&[(0, 0, Mark::Cross), (1, 1, Mark::Cross), (2, 2, Mark::Cross)]);
        let mut engine = AIEngine::default();
        assert_eq!(engine.evaluate(&won), Err(GameError::GameOver));

        engine.set_difficulty(Difficulty::Random);
        assert_eq!(engine.evaluate(&won), Err(GameError::GameOver));
    }

    #[test]
    fn test_engine_set_player() {
        let mut engine = AIEngine::default();
        assert_eq!(engine.set_player(Mark::Empty), Err(GameError::InvalidMark));
        assert_eq!(engine.config().player, Mark::Circle);

        engine.set_player(Mark::Cross).unwrap();
        assert_eq!(engine.config().player, Mark::Cross);
    }

    #[test]
    fn test_evaluation_display() {
        assert_eq!(Evaluation::Random.to_string(), "random");
        assert_eq!(Evaluation::Score(-1).to_string(), "-1");
    }
}
