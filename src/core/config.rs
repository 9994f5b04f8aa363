//! Board and tree configuration types.
//!
//! Callers configure a run by providing:
//! - `BoardConfig`: grid dimensions of the initial position
//! - `TreeConfig`: resource limits for tree construction
//!
//! Both use the builder pattern and are serializable so a run can be
//! described in JSON.

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::board::BoardState;
use crate::tree::NodeId;

/// Grid dimensions for the initial board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (must be at least 1).
    pub rows: usize,

    /// Number of columns (must be at least 1).
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

impl BoardConfig {
    /// Create a config for a `rows` x `cols` board.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Set the number of rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Whether diagonal lines take part in win detection.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Total number of moves a game on this board can last, or `None` if
    /// the cell count overflows.
    #[must_use]
    pub const fn max_moves(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Create the empty initial board.
    ///
    /// Fails with `Error::InvalidDimensions` if either dimension is zero.
    pub fn build(&self) -> Result<BoardState> {
        BoardState::new(self.rows, self.cols)
    }
}

/// Resource limits for tree construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum nodes to create, excluding the root (0 = as many as the arena
    /// can address). Construction aborts with `Error::NodeLimitExceeded`
    /// past this point.
    pub max_nodes: usize,

    /// Nodes to reserve in the arena up front.
    pub initial_capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            // Full 3x3 tree is 549_945 nodes below the root.
            max_nodes: 1_000_000,
            initial_capacity: 1024,
        }
    }
}

impl TreeConfig {
    /// Config without a node budget.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_nodes: 0,
            ..Self::default()
        }
    }

    /// Set the node budget.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the initial arena capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Effective budget: `max_nodes`, capped by the arena's id space.
    #[must_use]
    pub fn node_limit(&self) -> usize {
        let arena = NodeId::MAX_INDEX as usize;
        match self.max_nodes {
            0 => arena,
            n => n.min(arena),
        }
    }

    /// Whether creating node number `created` (1-based, root excluded)
    /// would exceed the budget.
    #[inline]
    #[must_use]
    pub fn exceeds_budget(&self, created: usize) -> bool {
        created > self.node_limit()
    }
}
