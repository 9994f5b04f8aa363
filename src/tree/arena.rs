//! Arena-based game tree.
//!
//! Uses a flat `Vec<TreeNode>` with index-based references, so ownership of
//! every node sits with the tree and dropping the tree frees all of them.

use serde::Serialize;

use super::node::{NodeId, TreeNode};
use crate::core::{Error, Result};
use crate::rules::GameState;

/// Arena-based game tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// The root is always `NodeId(0)`; children are allocated after their
/// parent, so ids grow in breadth-first discovery order.
#[derive(Clone, Debug, Serialize)]
pub struct GameTree<S> {
    /// All nodes in the tree.
    pub(crate) nodes: Vec<TreeNode<S>>,

    /// The root node ID (always 0).
    pub(crate) root: NodeId,
}

impl<S: GameState> GameTree<S> {
    /// Create a tree holding only a root for `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        let data = state.winner();
        nodes.push(TreeNode::root(state, data));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Attach `state` as the newest child of `parent`.
    ///
    /// Depth and data are read from the state itself. Fails with
    /// `Error::NodeLimitExceeded` once the arena runs out of ids.
    pub fn add_child(&mut self, parent: NodeId, state: S) -> Result<NodeId> {
        let depth = state.moves_played();
        let data = state.winner();
        let id = self.alloc(TreeNode::new(parent, state, data, depth))?;
        self.get_mut(parent).children.push(id);
        Ok(id)
    }
}

impl<S> GameTree<S> {
    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode<S> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut TreeNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub(crate) fn alloc(&mut self, node: TreeNode<S>) -> Result<NodeId> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(Error::NodeLimitExceeded {
            limit: NodeId::MAX_INDEX as usize,
        })?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Children of `id`, in insertion order.
    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    /// Number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty. A built tree always has its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes created by expansion, root excluded.
    #[must_use]
    pub fn nodes_created(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &TreeNode<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Iterate over nodes without children.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &TreeNode<S>)> {
        self.iter().filter(|(_, n)| n.is_leaf())
    }

    /// Node ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.get(id).parent();
        while !current.is_none() {
            path.push(current);
            current = self.get(current).parent();
        }
        path.reverse();
        path
    }
}
