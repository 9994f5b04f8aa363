//! Full-line win detection on an N x M grid.
//!
//! A player wins by owning every cell of a row, a column, or (on square
//! boards only) one of the two long diagonals.

use crate::core::{Cell, Player};

/// Read-only view over a row-major grid for line checks.
#[derive(Clone, Copy, Debug)]
pub struct LineChecker<'a> {
    cells: &'a [Cell],
    rows: usize,
    cols: usize,
}

impl<'a> LineChecker<'a> {
    /// Wrap a row-major grid of `rows * cols` cells.
    pub fn new(cells: &'a [Cell], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Whether diagonals count as lines on this grid.
    #[inline]
    #[must_use]
    pub fn has_diagonals(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether `player` owns every cell of `row`. Out-of-range rows never win.
    #[must_use]
    pub fn is_row_winner(&self, row: usize, player: Player) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|&c| c == Cell::Mark(player))
    }

    /// Whether `player` owns every cell of `col`. Out-of-range columns never win.
    #[must_use]
    pub fn is_col_winner(&self, col: usize, player: Player) -> bool {
        if col >= self.cols {
            return false;
        }
        (0..self.rows).all(|row| self.at(row, col) == Cell::Mark(player))
    }

    /// Top-left to bottom-right diagonal. Always false on non-square grids.
    #[must_use]
    pub fn is_diagonal_left_winner(&self, player: Player) -> bool {
        self.has_diagonals() && (0..self.rows).all(|i| self.at(i, i) == Cell::Mark(player))
    }

    /// Top-right to bottom-left diagonal. Always false on non-square grids.
    #[must_use]
    pub fn is_diagonal_right_winner(&self, player: Player) -> bool {
        self.has_diagonals()
            && (0..self.rows).all(|i| self.at(i, self.cols - 1 - i) == Cell::Mark(player))
    }

    /// Check rows, then columns, then diagonals for a completed line.
    #[must_use]
    pub fn has_won(&self, player: Player) -> bool {
        (0..self.rows).any(|row| self.is_row_winner(row, player))
            || (0..self.cols).any(|col| self.is_col_winner(col, player))
            || self.is_diagonal_left_winner(player)
            || self.is_diagonal_right_winner(player)
    }
}
