//! # ttt-tree
//!
//! Exhaustive game-tree construction for generalized tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Any Board Size**: Boards are `rows` x `cols`. Rows and columns
//!    always count as lines; diagonals only on square boards.
//!
//! 2. **Narrow Contract**: The tree engine sees the board only through the
//!    `GameState` trait, so another grid game can be expanded the same way.
//!
//! 3. **Single Owner**: Every node owns its own cloned state; the tree owns
//!    every node in one arena.
//!
//! ## Modules
//!
//! - `core`: Players, cells, configuration, errors
//! - `board`: `BoardState` and line detection
//! - `rules`: The `GameState` contract and `Outcome`
//! - `tree`: Construction, traversal, release, statistics

pub mod core;
pub mod board;
pub mod rules;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Cell, Error, Player, Result, TreeConfig};

pub use crate::board::{BoardState, LineChecker};

pub use crate::rules::{GameState, Outcome};

pub use crate::tree::{
    build_tree, print_breadth_first, print_depth_first, release_breadth_first,
    traverse_depth_first, GameTree, NodeId, OutcomeCounts, PrintVisitor, TreeBuilder,
    TreeNode, TreeStats, TreeVisitor, ValueFormat,
};
