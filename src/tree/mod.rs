//! Exhaustive game tree engine.
//!
//! ## Overview
//!
//! Builds the tree of every position reachable from an initial state and
//! walks it:
//!
//! - **Construction**: breadth-first expansion, one child per legal move,
//!   terminal positions never expanded
//! - **Arena storage**: all nodes live in one `Vec`, addressed by `NodeId`
//! - **Traversals**: depth-first visitor, level-order printing, level-order
//!   release
//! - **Statistics**: node counts per depth, leaf outcome tallies
//!
//! ## Usage
//!
//! ```rust
//! use ttt_tree::board::BoardState;
//! use ttt_tree::tree::{build_tree, print_depth_first, ValueFormat};
//!
//! let tree = build_tree(BoardState::new(2, 2)?)?;
//! assert_eq!(tree.nodes_created(), 40);
//!
//! let out = print_depth_first(&tree, Vec::new(), ValueFormat::Label)?;
//! assert!(String::from_utf8_lossy(&out).starts_with("branch tie (4 children)"));
//! # Ok::<(), ttt_tree::Error>(())
//! ```
//!
//! Tree size grows combinatorially with the board: the full 3x3 tree has
//! about half a million nodes, 4x4 is out of reach. `TreeConfig::max_nodes`
//! turns a runaway build into an error.

pub mod arena;
pub mod builder;
pub mod node;
pub mod stats;
pub mod traverse;

// Re-export main types
pub use arena::GameTree;
pub use builder::{build_tree, TreeBuilder};
pub use node::{NodeId, TreeNode};
pub use stats::{OutcomeCounts, TreeStats};
pub use traverse::{
    print_breadth_first, print_depth_first, release_breadth_first, traverse_depth_first,
    PrintVisitor, TreeVisitor, ValueFormat,
};
