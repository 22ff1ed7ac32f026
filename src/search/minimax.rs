//! Exhaustive minimax search
//!
//! Expands the full game tree below the given position. X maximizes the
//! utility, O minimizes it. There is no pruning, no move ordering and no
//! cache: the tic-tac-toe tree is small enough that a full expansion from
//! the empty board visits 549,945 positions.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Pos};
//! use tictactoe::search::Searcher;
//!
//! let board = Board::new().result(Pos::new(1, 1)).unwrap();
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board);
//!
//! assert!(result.best_move.is_some());
//! assert_eq!(result.score, 0); // perfect play is a draw
//! ```

use crate::board::{Board, Mark, Pos};
use crate::rules::{is_terminal, utility};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move; `None` on a finished board
    pub best_move: Option<Pos>,
    /// Exact game value after `best_move`, from X's point of view
    pub score: i32,
    /// Positions visited below the root
    pub nodes: u64,
}

/// Plain minimax searcher
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last call to `search` / `minimax_value`
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the optimal move for the side to move.
    ///
    /// Moves are tried in row-major order and only a strictly better value
    /// replaces the current best, so ties go to the first cell.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;

        if is_terminal(board) {
            return SearchResult {
                best_move: None,
                score: utility(board),
                nodes: 0,
            };
        }

        let maximizing = board.to_move() == Mark::X;
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.actions() {
            let score = self.value(&board.result_unchecked(pos));
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Exact game value of `board` under perfect play by both sides
    pub fn minimax_value(&mut self, board: &Board) -> i32 {
        self.nodes = 0;
        self.value(board)
    }

    fn value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;

        if is_terminal(board) {
            return utility(board);
        }

        let children = board.actions().map(|pos| board.result_unchecked(pos));
        if board.to_move() == Mark::X {
            children.map(|child| self.value(&child)).max().unwrap_or(0)
        } else {
            children.map(|child| self.value(&child)).min().unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_layout("XXX OO. ...");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 1);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_layout("XOX XOO OXX");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut searcher = Searcher::new();
        assert_eq!(searcher.minimax_value(&Board::new()), 0);
    }

    #[test]
    fn test_full_expansion_node_count() {
        let mut searcher = Searcher::new();
        let result = searcher.search(&Board::new());

        // Every position of the game tree except the root
        assert_eq!(result.nodes, 549_945);
        assert_eq!(searcher.nodes(), 549_945);
        assert_eq!(result.score, 0);
        // All openings draw, the tie goes to the first cell
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // X to move, row 0 is open
        let board = Board::from_layout("XX. OO. ...");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move, prefers winning over blocking
        let board = Board::from_layout("XX. OO. X..");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_o_blocks_row() {
        // X threatens (0, 2); O has no win of its own
        let board = Board::from_layout("XX. .O. ...");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_x_blocks_diagonal() {
        // O threatens (2, 2) on the main diagonal
        let board = Board::from_layout("OX. .O. X..");
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_corner_reply_to_opposite_corners_loses() {
        // X on opposite corners, O in the center. An edge reply holds the
        // draw, a corner reply lets X fork.
        let board = Board::from_layout("X.. .O. ..X");
        assert_eq!(board.to_move(), Mark::O);

        let mut searcher = Searcher::new();
        let edge = board.result(Pos::new(0, 1)).unwrap();
        assert_eq!(searcher.minimax_value(&edge), 0);
        let corner = board.result(Pos::new(0, 2)).unwrap();
        assert_eq!(searcher.minimax_value(&corner), 1);
    }

    #[test]
    fn test_value_of_lost_position() {
        // O to move cannot stop both threats
        let board = Board::from_layout("XX. .O. X.O");
        let mut searcher = Searcher::new();
        assert_eq!(searcher.minimax_value(&board), 1);
        assert!(searcher.nodes() > 0);
    }
}
