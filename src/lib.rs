//! Tic-tac-toe against a perfect minimax opponent
//!
//! - Standard 3x3 board, X moves first
//! - Three in a row wins, a full board without a line is a draw
//! - The computer searches the whole game tree and never loses
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection, terminal test and utility
//! - [`search`]: Exhaustive minimax
//! - [`engine`]: AI engine reporting search statistics
//! - [`ui`]: eframe/egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::new();
//! let board = Board::new().result(Pos::new(1, 1)).unwrap();
//!
//! // The engine answers as O
//! if let Some(pos) = engine.get_move(&board) {
//!     let board = board.result(pos).unwrap();
//!     assert_eq!(board.get(pos), Mark::O);
//! }
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
