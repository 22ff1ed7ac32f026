//! Board state and move application

use super::bitboard::Bitboard;
use super::{Mark, Pos, BOARD_SIZE};
use crate::error::GameError;
use crate::rules;

/// Game board: one bitboard per mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks
    pub x: Bitboard,
    /// O marks
    pub o: Bitboard,
}

impl Board {
    /// Empty starting board
    pub const fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.x.get(pos) {
            Mark::X
        } else if self.o.get(pos) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a mark without checking turn order or occupancy.
    /// Use `result` for game moves
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        match mark {
            Mark::X => self.x.set(pos),
            Mark::O => self.o.set(pos),
            Mark::Empty => {}
        }
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks(&self, mark: Mark) -> Option<&Bitboard> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Empty => None,
        }
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (self.x | self.o) == !Bitboard::new()
    }

    /// Side to move. X always opens, so O is to move only while X is ahead.
    #[inline]
    pub fn to_move(&self) -> Mark {
        if self.x.count() > self.o.count() {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Empty cells in row-major order
    pub fn actions(&self) -> impl Iterator<Item = Pos> {
        (!(self.x | self.o)).iter_ones()
    }

    /// Board after the side to move plays `pos`. `self` is left untouched.
    pub fn result(&self, pos: Pos) -> Result<Board, GameError> {
        if rules::is_terminal(self) {
            return Err(GameError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied { pos });
        }
        Ok(self.result_unchecked(pos))
    }

    /// `result` without validation, for the search's inner loop
    #[inline]
    pub(crate) fn result_unchecked(&self, pos: Pos) -> Board {
        let mut next = *self;
        next.place(pos, self.to_move());
        next
    }

    /// Build a board from nine row-major cells: `X`, `O`, `.` for empty.
    /// Whitespace is ignored.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &str) -> Self {
        let mut board = Board::new();
        let cells = layout.chars().filter(|c| !c.is_whitespace());
        for (idx, c) in cells.take(super::TOTAL_CELLS).enumerate() {
            match c {
                'X' | 'x' => board.place(Pos::from_index(idx), Mark::X),
                'O' | 'o' => board.place(Pos::from_index(idx), Mark::O),
                _ => {}
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)))?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
