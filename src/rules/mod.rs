//! Game rules for tic-tac-toe
//!
//! - Three in a row (any row, column or diagonal) wins
//! - A full board without a line is a draw
//! - A move is legal on any empty cell while the game is running

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, is_terminal, utility, WIN_LINES};

use crate::board::{Board, Pos};

/// Check if the side to move may play at `pos`
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos) && !is_terminal(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_move_on_empty_cell() {
        let board = Board::from_layout("X.. ... ...");
        assert!(is_valid_move(&board, Pos::new(1, 1)));
        assert!(!is_valid_move(&board, Pos::new(0, 0)));
    }

    #[test]
    fn test_no_valid_move_after_win() {
        let board = Board::from_layout("XXX OO. ...");
        assert!(!is_valid_move(&board, Pos::new(2, 2)));
    }
}
