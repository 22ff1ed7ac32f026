//! AI engine wrapping the minimax searcher
//!
//! The engine always plays the side to move on the board it is given and
//! reports timing and node statistics alongside the chosen move.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Pos};
//!
//! let mut engine = AIEngine::new();
//! let board = Board::new().result(Pos::new(0, 0)).unwrap();
//!
//! // Best reply for O
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms, {} nodes", result.time_ms, result.nodes);
//! ```

use crate::board::{Board, Pos};
use crate::search::{SearchResult, Searcher};
use std::time::Instant;
use tracing::{debug, instrument};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` if the game is already over
    pub best_move: Option<Pos>,
    /// Exact game value after the move (+1 X wins, -1 O wins, 0 draw)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Perfect-play opponent.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best move for the side to move, or `None` on a finished board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move with search statistics.
    #[must_use]
    #[instrument(skip(self, board), fields(to_move = %board.to_move()))]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "Search finished"
        );

        MoveResult::from_search(result, time_ms)
    }
}
