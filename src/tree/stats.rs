//! Game tree statistics for diagnostics.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::arena::GameTree;
use crate::core::Player;
use crate::rules::Outcome;

/// Terminal results tallied over the leaves of a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub a_wins: usize,
    pub b_wins: usize,
    pub ties: usize,
}

impl OutcomeCounts {
    /// Count one more result.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::A) => self.a_wins += 1,
            Outcome::Win(Player::B) => self.b_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Tally for a single result.
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win(Player::A) => self.a_wins,
            Outcome::Win(Player::B) => self.b_wins,
            Outcome::Tie => self.ties,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.a_wins + self.b_wins + self.ties
    }
}

/// Statistics about a built game tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub node_count: usize,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Deepest cached depth.
    pub max_depth: usize,

    /// Node count at each depth, index = depth.
    pub nodes_per_depth: Vec<usize>,

    /// Results over the leaves.
    pub outcomes: OutcomeCounts,
}

impl TreeStats {
    /// Collect statistics from `tree`.
    pub fn collect<S>(tree: &GameTree<S>) -> Self {
        let mut stats = Self {
            node_count: tree.len(),
            ..Self::default()
        };

        for (_, node) in tree.iter() {
            let depth = node.depth();
            if stats.nodes_per_depth.len() <= depth {
                stats.nodes_per_depth.resize(depth + 1, 0);
            }
            stats.nodes_per_depth[depth] += 1;
            stats.max_depth = stats.max_depth.max(depth);

            if node.is_leaf() {
                stats.leaf_count += 1;
                stats.outcomes.record(node.data());
            }
        }
        stats
    }

    /// Average children per interior node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.leaf_count;
        if interior == 0 {
            0.0
        } else {
            // Every node but the root is some interior node's child.
            (self.node_count - 1) as f64 / interior as f64
        }
    }
}

impl<S> GameTree<S> {
    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(self)
    }

    /// Number of distinct positions among all nodes.
    ///
    /// Different move orders reaching the same grid count once.
    #[must_use]
    pub fn distinct_states(&self) -> usize
    where
        S: Hash + Eq,
    {
        let seen: FxHashSet<&S> = self.iter().map(|(_, node)| node.state()).collect();
        seen.len()
    }
}
