//! Board state: grid, turn, and outcome bookkeeping.
//!
//! ## BoardState
//!
//! A snapshot of one point in a game on a `rows` x `cols` grid:
//! - Row-major grid of cells, fixed size after construction
//! - Player to move
//! - Remaining-move counter (`rows * cols` on an empty board)
//! - Cached game-over flag and winner
//!
//! Status is re-evaluated after every applied move, so `is_game_over` and
//! `winner` are plain reads. Cloning is a deep copy; the tree engine clones
//! a state once per branch.

use log::debug;
use serde::{Deserialize, Serialize};

use super::lines::LineChecker;
use crate::core::{Cell, Error, Player, Result};
use crate::rules::{GameState, Outcome};

/// Complete state of a generalized tic-tac-toe game.
///
/// Deserialized boards are checked against the same invariants `new` and
/// `apply_move` maintain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    /// Row-major grid: cell `(r, c)` lives at `r * cols + c`.
    cells: Vec<Cell>,

    rows: usize,
    cols: usize,

    /// Cells still empty.
    remaining: usize,

    /// Player to move. Stays on the winner once the game is over.
    to_move: Player,

    game_over: bool,

    /// `Outcome::Tie` until a line is completed.
    winner: Outcome,
}

/// Unchecked wire form of `BoardState`.
#[derive(Deserialize)]
struct RawBoardState {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    remaining: usize,
    to_move: Player,
    game_over: bool,
    winner: Outcome,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = Error;

    fn try_from(raw: RawBoardState) -> Result<Self> {
        let RawBoardState {
            cells,
            rows,
            cols,
            remaining,
            to_move,
            game_over,
            winner,
        } = raw;

        let size = rows
            .checked_mul(cols)
            .filter(|&size| size > 0)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        if cells.len() != size {
            return Err(Error::InconsistentState("cell count does not match dimensions"));
        }
        if cells.iter().filter(|c| c.is_empty()).count() != remaining {
            return Err(Error::InconsistentState("remaining moves do not match empty cells"));
        }

        let lines = LineChecker::new(&cells, rows, cols);
        let a_won = lines.has_won(Player::A);
        let b_won = lines.has_won(Player::B);
        let status_ok = match (game_over, winner) {
            (false, Outcome::Tie) => remaining > 0 && !a_won && !b_won,
            (true, Outcome::Tie) => remaining == 0 && !a_won && !b_won,
            (true, Outcome::Win(player)) => player == to_move && lines.has_won(player),
            (false, Outcome::Win(_)) => false,
        };
        if !status_ok {
            return Err(Error::InconsistentState("game status does not match the grid"));
        }

        Ok(Self {
            cells,
            rows,
            cols,
            remaining,
            to_move,
            game_over,
            winner,
        })
    }
}

impl BoardState {
    /// Create an empty `rows` x `cols` board with player A to move.
    ///
    /// Fails with `Error::InvalidDimensions` if either dimension is zero
    /// or the cell count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size > 0)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        if rows != cols {
            debug!("{rows}x{cols} board is not square, diagonals do not count");
        }

        Ok(Self {
            cells: vec![Cell::Empty; size],
            rows,
            cols,
            remaining: size,
            to_move: Player::A,
            game_over: false,
            winner: Outcome::Tie,
        })
    }

    /// Clear the board back to its initial position, keeping dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.remaining = self.cells.len();
        self.to_move = Player::A;
        self.game_over = false;
        self.winner = Outcome::Tie;
    }

    /// Apply a sequence of moves in order, stopping at the first failure.
    pub fn play_all(&mut self, moves: &[(usize, usize)]) -> Result<()> {
        for &(row, col) in moves {
            self.apply_move(row, col)?;
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of the grid, or `None` if out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Player whose turn it is.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Total moves a game on this board can last.
    #[inline]
    #[must_use]
    pub fn max_moves(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_moves(&self) -> usize {
        self.remaining
    }

    /// Moves made so far; the depth of this state in a game tree.
    #[inline]
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.max_moves() - self.remaining
    }

    /// Whether `(row, col)` lies on the board.
    #[inline]
    #[must_use]
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at `(row, col)`, or `None` when the position is off the board.
    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.is_valid_position(row, col).then(|| self.cells[row * self.cols + col])
    }

    /// Whether `(row, col)` is on the board and empty.
    #[must_use]
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.value_at(row, col).is_some_and(Cell::is_empty)
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner of the game; `Outcome::Tie` while it is still running.
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Outcome {
        self.winner
    }

    /// Game is over and nobody completed a line.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.game_over && self.winner == Outcome::Tie
    }

    /// Play the current mover's mark at `(row, col)`.
    ///
    /// The turn passes to the opponent unless this move ended the game.
    /// On error the state is unchanged.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<()> {
        if self.game_over {
            return Err(Error::GameOver);
        }
        if self.remaining == 0 {
            return Err(Error::NoMovesRemaining);
        }
        if !self.is_valid_move(row, col) {
            return Err(Error::IllegalMove { row, col });
        }

        self.cells[row * self.cols + col] = Cell::Mark(self.to_move);
        self.remaining -= 1;
        self.refresh_status();

        if !self.game_over {
            self.to_move = self.to_move.opponent();
        }
        Ok(())
    }

    /// Re-derive game-over and winner after the mover's last placement.
    ///
    /// A completed line takes precedence over a full board, so the last
    /// cell can still win.
    fn refresh_status(&mut self) {
        if self.game_over {
            return;
        }

        let lines = LineChecker::new(&self.cells, self.rows, self.cols);
        if lines.has_won(self.to_move) {
            self.game_over = true;
            self.winner = Outcome::Win(self.to_move);
        } else if self.remaining == 0 {
            self.game_over = true;
            self.winner = Outcome::Tie;
        }
    }
}

impl GameState for BoardState {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn remaining_moves(&self) -> usize {
        self.remaining
    }

    fn is_valid_move(&self, row: usize, col: usize) -> bool {
        BoardState::is_valid_move(self, row, col)
    }

    fn apply_move(&mut self, row: usize, col: usize) -> Result<()> {
        BoardState::apply_move(self, row, col)
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn winner(&self) -> Outcome {
        self.winner
    }

    fn moves_played(&self) -> usize {
        BoardState::moves_played(self)
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
