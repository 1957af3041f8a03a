//! Tic-tac-toe with a minimax opponent
//!
//! A 3x3 game for two humans or a human against the computer:
//! - Cross moves first, players alternate
//! - Three equal marks on a column, row or diagonal win
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and marks
//! - [`rules`]: Win and draw detection
//! - [`search`]: Exhaustive minimax and random move selection
//! - [`engine`]: AI engine applying the configured difficulty
//! - [`game`]: Turn controller driving one match
//! - [`ui`]: egui window shell
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AiConfig, GameMode, Mark, TurnController};
//!
//! let mut game = TurnController::new(GameMode::PvE, AiConfig::default());
//!
//! // Human plays Cross in a corner
//! game.apply_move(0, 0).unwrap();
//!
//! // AI responds as Circle
//! if let Some(result) = game.play_ai_turn().unwrap() {
//!     println!("AI plays at {}", result.best_move);
//! }
//! assert_eq!(game.current_player(), Mark::Cross);
//! ```

pub mod board;
pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use command::Command;
pub use config::{AiConfig, Difficulty, GameMode};
pub use engine::{AIEngine, Evaluation, MoveResult, SearchType};
pub use error::GameError;
pub use game::{MatchStatus, TurnController};
pub use rules::Outcome;
