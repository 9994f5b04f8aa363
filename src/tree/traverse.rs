//! Whole-tree traversals: depth-first visit, breadth-first print, and
//! breadth-first release.

use std::collections::VecDeque;
use std::io::Write;

use log::debug;

use super::arena::GameTree;
use super::node::{NodeId, TreeNode};
use crate::core::Result;
use crate::rules::Outcome;

/// Callbacks for `traverse_depth_first`.
pub trait TreeVisitor<S> {
    /// Called for a node without children.
    fn visit_leaf(&mut self, node: &TreeNode<S>) -> Result<()>;

    /// Called for a node with children, before any of them is visited.
    fn visit_branch(&mut self, node: &TreeNode<S>, child_count: usize) -> Result<()>;
}

/// Visit every node depth-first, children in insertion order.
///
/// Uses an explicit stack, so tree depth is not limited by the call stack.
/// Stops at the first visitor error.
pub fn traverse_depth_first<S, V>(tree: &GameTree<S>, visitor: &mut V) -> Result<()>
where
    V: TreeVisitor<S> + ?Sized,
{
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let node = tree.get(id);
        if node.is_leaf() {
            visitor.visit_leaf(node)?;
        } else {
            visitor.visit_branch(node, node.children().len())?;
            stack.extend(node.children().iter().rev().copied());
        }
    }
    Ok(())
}

/// How result values are written by the printers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueFormat {
    /// `A`, `B`, `tie`.
    #[default]
    Label,
    /// `0`, `1`, `-1`.
    Code,
}

impl ValueFormat {
    fn write<W: Write + ?Sized>(self, out: &mut W, outcome: Outcome) -> std::io::Result<()> {
        match self {
            ValueFormat::Label => write!(out, "{outcome}"),
            ValueFormat::Code => write!(out, "{}", outcome.code()),
        }
    }
}

/// Depth-first printer: one line per node, indented by depth.
pub struct PrintVisitor<W> {
    out: W,
    format: ValueFormat,
}

impl<W: Write> PrintVisitor<W> {
    pub fn new(out: W, format: ValueFormat) -> Self {
        Self { out, format }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn indent(&mut self, depth: usize) -> std::io::Result<()> {
        write!(self.out, "{:width$}", "", width = depth * 2)
    }
}

impl<S, W: Write> TreeVisitor<S> for PrintVisitor<W> {
    fn visit_leaf(&mut self, node: &TreeNode<S>) -> Result<()> {
        self.indent(node.depth())?;
        write!(self.out, "leaf ")?;
        self.format.write(&mut self.out, node.data())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn visit_branch(&mut self, node: &TreeNode<S>, child_count: usize) -> Result<()> {
        self.indent(node.depth())?;
        write!(self.out, "branch ")?;
        self.format.write(&mut self.out, node.data())?;
        writeln!(self.out, " ({child_count} children)")?;
        Ok(())
    }
}

/// Print every node depth-first to `out`.
pub fn print_depth_first<S, W: Write>(
    tree: &GameTree<S>,
    out: W,
    format: ValueFormat,
) -> Result<W> {
    let mut printer = PrintVisitor::new(out, format);
    traverse_depth_first(tree, &mut printer)?;
    Ok(printer.into_inner())
}

/// Print result values level by level.
///
/// Values are space-separated; a line break is written whenever the cached
/// depth of the next node differs from the previous one.
pub fn print_breadth_first<S, W: Write>(
    tree: &GameTree<S>,
    mut out: W,
    format: ValueFormat,
) -> Result<W> {
    let mut queue = VecDeque::from([tree.root()]);
    let mut current_depth = tree.root_node().depth();
    let mut first_in_level = true;

    while let Some(id) = queue.pop_front() {
        let node = tree.get(id);
        queue.extend(node.children().iter().copied());

        if node.depth() != current_depth {
            writeln!(out)?;
            current_depth = node.depth();
            first_in_level = true;
        }
        if !first_in_level {
            write!(out, " ")?;
        }
        format.write(&mut out, node.data())?;
        first_in_level = false;
    }
    writeln!(out)?;
    Ok(out)
}

/// Release every node level by level, returning how many were released.
///
/// A node's children are queued before the node itself is dropped, so each
/// node is reached and released exactly once. Dropping a `GameTree` frees
/// the same memory; this form exists for callers that want the count.
pub fn release_breadth_first<S>(tree: GameTree<S>) -> usize {
    let GameTree { nodes, root } = tree;
    let total = nodes.len();
    let mut slots: Vec<Option<TreeNode<S>>> = nodes.into_iter().map(Some).collect();

    let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
    let mut released = 0usize;

    while let Some(id) = queue.pop_front() {
        let Some(node) = slots[id.index()].take() else {
            debug_assert!(false, "{id} reached twice during release");
            continue;
        };
        queue.extend(node.children().iter().copied());
        drop(node);
        released += 1;
    }

    debug_assert!(slots.iter().all(Option::is_none), "unreachable nodes left in arena");
    debug!("released {released} of {total} tree nodes");
    released
}
