//! Win condition checking
//!
//! A side wins by owning all three cells of a row, a column or a diagonal.
//! The game ends on a win or when the board is full.

use crate::board::{Bitboard, Board, Mark, Pos};

/// The eight winning lines as row-major cell indices:
/// columns, then rows, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[inline]
const fn line_mask(line: [usize; 3]) -> Bitboard {
    Bitboard::from_bits((1 << line[0]) | (1 << line[1]) | (1 << line[2]))
}

/// First full line for `mark`, as board positions
fn line_of(board: &Board, mark: Mark) -> Option<[Pos; 3]> {
    let marks = board.marks(mark)?;
    WIN_LINES
        .iter()
        .find(|line| marks.contains(line_mask(**line)))
        .map(|&line| line.map(Pos::from_index))
}

/// Winner of the position, if any
pub fn check_winner(board: &Board) -> Option<Mark> {
    if line_of(board, Mark::X).is_some() {
        Some(Mark::X)
    } else if line_of(board, Mark::O).is_some() {
        Some(Mark::O)
    } else {
        None
    }
}

/// Cells of the winning line, for highlighting
pub fn find_winning_line(board: &Board) -> Option<[Pos; 3]> {
    line_of(board, Mark::X).or_else(|| line_of(board, Mark::O))
}

/// Game over: somebody has a line, or no cell is left
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || board.is_full()
}

/// Score from X's point of view: +1 X won, -1 O won, 0 otherwise
#[inline]
pub fn utility(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}
