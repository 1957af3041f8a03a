//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use theme::{MIN_WINDOW_SIZE, WINDOW_SIZE};
