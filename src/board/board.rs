//! Board structure with occupancy tracking

use std::fmt;

use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;
use crate::rules::{check_winner, Outcome};

/// Game board: the 3x3 grid plus a cached count of marked cells.
///
/// `Board` is `Copy`, so exploring a hypothetical move is a plain value copy
/// of the grid and the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    /// Always equal to the number of non-empty cells
    marked: u8,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            marked: 0,
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_cell_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Mark an empty cell.
    ///
    /// Rejects off-board positions, `Mark::Empty` and occupied cells; the
    /// board is left unchanged on error.
    pub fn mark(&mut self, pos: Pos, mark: Mark) -> Result<(), GameError> {
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(GameError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if mark == Mark::Empty {
            return Err(GameError::InvalidMark);
        }
        if !self.is_cell_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place(pos, mark);
        Ok(())
    }

    /// Place a mark without validation.
    /// Use `mark` for moves coming from outside the search.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.is_cell_empty(pos) && mark != Mark::Empty);
        self.cells[pos.row as usize][pos.col as usize] = mark;
        self.marked += 1;
    }

    /// Copy of this board with one more mark on it
    #[inline]
    pub(crate) fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = *self;
        next.place(pos, mark);
        next
    }

    /// Winning mark if any line is complete.
    /// Draw vs. ongoing is decided by `outcome`.
    #[inline]
    pub fn terminal_result(&self) -> Option<Mark> {
        check_winner(self)
    }

    /// Win, draw or still ongoing
    pub fn outcome(&self) -> Outcome {
        match self.terminal_result() {
            Some(winner) => Outcome::Win(winner),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    /// True once a line is complete or no cell is left
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_over()
    }

    /// Empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.is_cell_empty(pos))
            .collect()
    }

    /// Number of marked cells
    #[inline]
    pub fn marked_count(&self) -> u8 {
        self.marked
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.marked as usize == TOTAL_CELLS
    }

    /// Check if no cell is marked
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, mark) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}
