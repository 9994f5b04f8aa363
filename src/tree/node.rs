//! Game tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId) so the whole
//! tree is owned by one `Vec` and freed in one drop.

use serde::Serialize;
use smallvec::SmallVec;

use crate::rules::Outcome;

/// Index into the GameTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Highest index an arena node can take; `NONE` sits just above it.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Id for arena slot `index`, or `None` past `MAX_INDEX`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&raw| raw <= Self::MAX_INDEX)
            .map(Self)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the game tree.
///
/// Owns exactly one game state plus the ids of its successors, in the order
/// they were discovered.
#[derive(Clone, Debug, Serialize)]
pub struct TreeNode<S> {
    /// Parent node (NONE for root).
    pub(crate) parent: NodeId,

    /// Position reached at this node.
    pub(crate) state: S,

    /// Successor positions, one per legal move, row-major move order.
    /// SmallVec keeps a 3x3 root's nine children inline.
    pub(crate) children: SmallVec<[NodeId; 9]>,

    /// Result of `state` when the node was created.
    pub(crate) data: Outcome,

    /// Moves played to reach `state` (root = 0).
    pub(crate) depth: usize,
}

impl<S> TreeNode<S> {
    /// Create a childless node.
    pub fn new(parent: NodeId, state: S, data: Outcome, depth: usize) -> Self {
        Self {
            parent,
            state,
            children: SmallVec::new(),
            data,
            depth,
        }
    }

    /// Create a root node at depth 0.
    pub fn root(state: S, data: Outcome) -> Self {
        Self::new(NodeId::NONE, state, data, 0)
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Cached result value.
    #[inline]
    #[must_use]
    pub fn data(&self) -> Outcome {
        self.data
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// No successors: either terminal, or never expanded.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_id_from_index_stops_below_none() {
        assert_eq!(NodeId::from_index(7), Some(NodeId::new(7)));

        let last = NodeId::from_index(NodeId::MAX_INDEX as usize).unwrap();
        assert!(!last.is_none());

        assert_eq!(NodeId::from_index(u32::MAX as usize), None);
        assert_eq!(NodeId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_node_root() {
        let node = TreeNode::root("start", Outcome::Tie);

        assert!(node.is_root());
        assert!(node.parent().is_none());
        assert_eq!(node.depth(), 0);
        assert_eq!(node.data(), Outcome::Tie);
        assert!(node.is_leaf());
        assert_eq!(*node.state(), "start");
    }

    #[test]
    fn test_node_children() {
        let mut node = TreeNode::new(NodeId::new(0), 7u8, Outcome::Win(Player::B), 3);
        assert!(!node.is_root());

        node.children.push(NodeId::new(4));
        node.children.push(NodeId::new(2));

        assert!(!node.is_leaf());
        assert_eq!(node.children(), &[NodeId::new(4), NodeId::new(2)]);
        assert_eq!(*node.state(), 7);
    }

    #[test]
    fn test_serialization() {
        let mut node = TreeNode::root(1u32, Outcome::Tie);
        node.children.push(NodeId::new(1));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["children"], serde_json::json!([1]));
        assert_eq!(json["data"], serde_json::json!("Tie"));
        assert_eq!(json["parent"], serde_json::json!(u32::MAX));
    }
}
