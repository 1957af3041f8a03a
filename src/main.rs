//! Tic-tac-toe GUI
//!
//! A graphical interface for playing against the AI or another player.

use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::ui::{TicTacToeApp, MIN_WINDOW_SIZE, WINDOW_SIZE};
use tracing::info;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();
    cli.init_tracing();

    let config = cli.ai_config();
    let mode = cli.mode;
    info!(?mode, ?config, "starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title("TIC TAC TOE AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, mode, config)))),
    )
}
