//! Game state contract consumed by the tree engine.
//!
//! The engine only needs to:
//! - Clone a state to branch into a hypothetical move
//! - Ask which cells are legal moves
//! - Apply a move and read the resulting status
//!
//! Win conditions and move bookkeeping stay inside the implementation.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::player::Player;

/// Result value of a board position.
///
/// `Tie` doubles as the placeholder for positions that are not over yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Player),
    /// Board full without a line, or game still in progress.
    #[default]
    Tie,
}

impl Outcome {
    /// Numeric score: 0 for player A, 1 for player B, -1 for a tie.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Outcome::Win(Player::A) => 0,
            Outcome::Win(Player::B) => 1,
            Outcome::Tie => -1,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == Outcome::Win(player)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(Player::A) => write!(f, "A"),
            Outcome::Win(Player::B) => write!(f, "B"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Game state trait.
///
/// Anything implementing this can be expanded into a full game tree.
///
/// ## Implementation Notes
///
/// - `clone` must be a deep copy: the engine mutates the clone only
/// - `apply_move` must leave the state untouched when it fails
/// - `is_game_over` and `winner` must reflect the last applied move
/// - `moves_played` labels node depth, so it must grow by one per move
pub trait GameState: Clone {
    /// Number of grid rows.
    fn rows(&self) -> usize;

    /// Number of grid columns.
    fn cols(&self) -> usize;

    /// Moves left before the grid is full.
    fn remaining_moves(&self) -> usize;

    /// Whether `(row, col)` is in range and empty.
    fn is_valid_move(&self, row: usize, col: usize) -> bool;

    /// Play the current mover's mark at `(row, col)`.
    fn apply_move(&mut self, row: usize, col: usize) -> Result<()>;

    /// Whether the game has ended by a line or a full board.
    fn is_game_over(&self) -> bool;

    /// Result of the position. `Outcome::Tie` while the game is running.
    fn winner(&self) -> Outcome;

    /// Number of moves made since the empty board.
    fn moves_played(&self) -> usize;

    // === Convenience Methods ===

    /// Whether the engine should expand this state further.
    fn is_expandable(&self) -> bool {
        self.remaining_moves() > 0 && !self.is_game_over()
    }

    /// All legal moves in row-major order.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        if !self.is_expandable() {
            return Vec::new();
        }
        let cols = self.cols();
        (0..self.rows())
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_valid_move(row, col))
            .collect()
    }
}
