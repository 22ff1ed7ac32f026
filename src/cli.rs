//! Command-line interface and app configuration

use crate::Mark;
use clap::{Parser, ValueEnum};

/// Smallest board area the window is allowed to open with
pub const MIN_WINDOW_SIZE: f32 = 150.0;

/// Tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark the human plays (X always moves first)
    #[arg(long, value_enum, default_value_t = Side::X)]
    pub human: Side,

    /// Initial width and height of the board area in pixels
    #[arg(long, default_value_t = 600.0, value_parser = parse_window_size)]
    pub window_size: f32,
}

/// Finite pixel size, raised to `MIN_WINDOW_SIZE`
fn parse_window_size(arg: &str) -> Result<f32, String> {
    let size: f32 = arg
        .parse()
        .map_err(|err| format!("`{arg}` is not a number: {err}"))?;
    if !size.is_finite() {
        return Err(format!("`{arg}` is not a finite size"));
    }
    Ok(size.max(MIN_WINDOW_SIZE))
}

/// Playable side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

/// Settings handed to the GUI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub human: Mark,
    pub window_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            window_size: 600.0,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            human: cli.human.into(),
            window_size: cli.window_size,
        }
    }
}
