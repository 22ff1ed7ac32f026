//! Errors for rejected moves

use crate::board::Pos;

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell already holds a mark.
    #[display("Cell {pos} is already occupied")]
    CellOccupied { pos: Pos },

    /// The board is already won or full.
    #[display("Game is over")]
    GameOver,

    /// The human clicked while it was the computer's turn.
    #[display("Not your turn")]
    NotYourTurn,

    /// A search is still running on the worker thread.
    #[display("AI is thinking")]
    AiThinking,
}

impl std::error::Error for GameError {}
