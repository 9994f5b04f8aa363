//! Player identification and cell contents.
//!
//! ## Player
//!
//! The two sides of the game. `Player::A` always moves first on a fresh
//! board.
//!
//! ## Cell
//!
//! The content of one grid square: empty or carrying one player's mark.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player to move.
    A,
    /// Second player to move.
    B,
}

impl Player {
    /// The player who moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The symbol this player writes on the board.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Content of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by a player.
    Mark(Player),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    /// Display symbol: `-` for empty, otherwise the owner's mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Mark(player) => player.mark(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Mark(player)
    }
}
