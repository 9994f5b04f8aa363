//! Breadth-first game tree construction.
//!
//! Starting from an initial state, every frontier node is expanded by trying
//! each cell in row-major order. Each legal move yields one child; children
//! whose state is over are never expanded, so construction ends once every
//! line of play has reached a win or a full board.

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, error, info, warn};

use super::arena::GameTree;
use crate::core::{Error, Result, TreeConfig};
use crate::rules::GameState;

/// Builds complete game trees under a node budget.
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    /// Create a builder with the given limits.
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Expand `initial` into the tree of every reachable position.
    ///
    /// The root wraps `initial` at depth 0. Fails with
    /// `Error::NodeLimitExceeded` when the budget runs out, or
    /// `Error::IllegalGeneratedMove` if the state rejects a move it reported
    /// as legal.
    pub fn build<S: GameState>(&self, initial: S) -> Result<GameTree<S>> {
        let start = Instant::now();
        let mut tree = GameTree::with_capacity(initial, self.config.initial_capacity);

        let mut frontier = VecDeque::new();
        frontier.push_back(tree.root());

        let mut created = 0usize;
        let mut level = 0usize;

        while let Some(node_id) = frontier.pop_front() {
            let node = tree.get(node_id);
            if node.depth() > level {
                level = node.depth();
                let pending = frontier.len() + 1;
                debug!("expanding depth {level}: {pending} frontier nodes, {created} created");
            }

            let state = node.state();
            if !state.is_expandable() {
                continue;
            }
            let (rows, cols) = (state.rows(), state.cols());

            for row in 0..rows {
                for col in 0..cols {
                    let parent_state = tree.get(node_id).state();
                    if !parent_state.is_valid_move(row, col) {
                        continue;
                    }

                    let mut child = parent_state.clone();
                    if let Err(source) = child.apply_move(row, col) {
                        error!("move ({row}, {col}) reported legal but rejected: {source}");
                        return Err(Error::IllegalGeneratedMove {
                            row,
                            col,
                            source: Box::new(source),
                        });
                    }

                    created += 1;
                    if self.config.exceeds_budget(created) {
                        let limit = self.config.node_limit();
                        warn!("aborting tree build: node budget of {limit} exhausted");
                        return Err(Error::NodeLimitExceeded { limit });
                    }

                    let terminal = child.is_game_over();
                    let child_id = tree.add_child(node_id, child)?;
                    if !terminal {
                        frontier.push_back(child_id);
                    }
                }
            }
        }

        info!(
            "generated game tree with {created} nodes in {:.3}s",
            start.elapsed().as_secs_f64()
        );
        Ok(tree)
    }
}

/// Build the full tree for `initial` with default limits.
pub fn build_tree<S: GameState>(initial: S) -> Result<GameTree<S>> {
    TreeBuilder::default().build(initial)
}
