//! Error types for the game core

use thiserror::Error;

/// Rejected operations on the board, the search or the turn controller.
///
/// Every variant is a caller contract violation. The operation that returns
/// it leaves all state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("a cell can only be marked with a cross or a circle")]
    InvalidMark,

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("unrecognised command '{0}'")]
    InvalidCommand(String),
}
