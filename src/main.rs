//! Tic-tac-toe GUI
//!
//! Play against a minimax opponent that never loses. Press `R` after a game
//! ends to start a new one.

use clap::Parser;
use tictactoe::cli::{AppConfig, Cli, MIN_WINDOW_SIZE};
use tictactoe::ui::TicTacToeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from(Cli::parse());
    info!(human = %config.human, size = config.window_size, "Starting Tic Tac Toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(TicTacToeApp::window_size(config.window_size))
            .with_min_inner_size(TicTacToeApp::window_size(MIN_WINDOW_SIZE))
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
}
