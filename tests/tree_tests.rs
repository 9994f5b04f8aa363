//! Game tree integration tests: construction, invariants, traversals, release.

use std::sync::OnceLock;

use ttt_tree::{
    build_tree, print_breadth_first, print_depth_first, release_breadth_first,
    traverse_depth_first, BoardConfig, BoardState, Error, GameState, GameTree, NodeId, Outcome,
    Player, Result, TreeBuilder, TreeConfig, TreeNode, TreeVisitor, ValueFormat,
};

fn build(rows: usize, cols: usize) -> GameTree<BoardState> {
    build_tree(BoardConfig::new(rows, cols).build().unwrap()).unwrap()
}

/// The full 3x3 tree, built once and shared.
fn full_tree() -> &'static GameTree<BoardState> {
    static TREE: OnceLock<GameTree<BoardState>> = OnceLock::new();
    TREE.get_or_init(|| build(3, 3))
}

/// Check every structural invariant of a built tree.
fn assert_invariants(tree: &GameTree<BoardState>) {
    for (id, node) in tree.iter() {
        let state = node.state();
        assert_eq!(node.depth(), state.moves_played(), "{id} depth label");
        assert_eq!(node.data(), state.winner(), "{id} cached data");
        assert_eq!(
            node.is_leaf(),
            state.is_game_over(),
            "{id} has children iff not over"
        );

        for &child in node.children() {
            let child_node = tree.get(child);
            assert_eq!(child_node.parent(), id);
            assert_eq!(child_node.depth(), node.depth() + 1);
        }
    }
}

// =============================================================================
// Small Boards
// =============================================================================

#[test]
fn test_single_cell_tree() {
    let tree = build(1, 1);
    let root = tree.root_node();

    assert_eq!(root.depth(), 0);
    assert_eq!(root.children().len(), 1);

    let leaf = tree.get(root.children()[0]);
    assert!(leaf.is_leaf());
    assert_eq!(leaf.data(), Outcome::Win(Player::A));
    assert_invariants(&tree);
}

#[test]
fn test_rectangular_trees_are_transposes() {
    let wide = build(2, 3);
    let tall = build(3, 2);

    assert_eq!(wide.len(), 1141);
    assert_eq!(tall.len(), 1141);
    assert_eq!(wide.stats().nodes_per_depth, tall.stats().nodes_per_depth);
    assert_eq!(wide.stats().outcomes, tall.stats().outcomes);
    assert_invariants(&wide);
    assert_invariants(&tall);
}

#[test]
fn test_two_by_three_outcomes() {
    let stats = build(2, 3).stats();

    assert_eq!(stats.nodes_per_depth, vec![1, 6, 30, 120, 288, 480, 216]);
    assert_eq!(stats.outcomes.a_wins, 288);
    assert_eq!(stats.outcomes.b_wins, 48);
    assert_eq!(stats.outcomes.ties, 216);
}

#[test]
fn test_tree_from_opening_position() {
    let mut root = BoardState::new(3, 3).unwrap();
    root.play_all(&[(1, 1), (0, 0)]).unwrap();

    let tree = build_tree(root).unwrap();

    // Root keeps depth 0; children carry the board's move count.
    assert_eq!(tree.root_node().depth(), 0);
    assert_eq!(tree.children(tree.root()).len(), 7);
    for &child in tree.children(tree.root()) {
        assert_eq!(tree.get(child).depth(), 3);
    }
}

#[test]
fn test_paths_have_increasing_depth() {
    let tree = build(2, 3);

    for (id, _) in tree.leaves() {
        let depths: Vec<_> = tree
            .path_to(id)
            .into_iter()
            .map(|n| tree.get(n).depth())
            .collect();
        assert!(depths.windows(2).all(|w| w[0] < w[1]), "{depths:?}");
        assert_eq!(depths[0], 0);
    }
}

// =============================================================================
// Full 3x3 Tree
// =============================================================================

#[test]
fn test_full_tree_counts() {
    let tree = full_tree();
    let stats = tree.stats();

    assert_eq!(tree.nodes_created(), 549_945);
    assert_eq!(
        stats.nodes_per_depth,
        vec![1, 9, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872]
    );
    assert_eq!(stats.leaf_count, 255_168);
    assert_eq!(stats.outcomes.a_wins, 131_184);
    assert_eq!(stats.outcomes.b_wins, 77_904);
    assert_eq!(stats.outcomes.ties, 46_080);
    assert_eq!(tree.distinct_states(), 5478);
}

#[test]
fn test_full_tree_invariants() {
    assert_invariants(full_tree());
}

#[test]
fn test_full_tree_is_deterministic_and_fully_released() {
    let again = build(3, 3);
    let tree = full_tree();

    assert_eq!(again.len(), tree.len());
    for ((_, a), (_, b)) in again.iter().zip(tree.iter()) {
        assert_eq!(a.data(), b.data());
        assert_eq!(a.children(), b.children());
    }

    assert_eq!(release_breadth_first(again), tree.nodes_created() + 1);
}

#[test]
fn test_default_budget_fits_full_tree() {
    let budget = TreeConfig::default().max_nodes;
    assert!(budget >= full_tree().nodes_created());
}

// =============================================================================
// Budget And Errors
// =============================================================================

#[test]
fn test_four_by_four_hits_budget() {
    let builder = TreeBuilder::new(TreeConfig::default().with_max_nodes(50_000));
    let result = builder.build(BoardState::new(4, 4).unwrap());

    assert!(matches!(result, Err(Error::NodeLimitExceeded { limit: 50_000 })));
}

#[test]
fn test_unlimited_budget() {
    let builder = TreeBuilder::new(TreeConfig::unlimited());
    let tree = builder.build(BoardState::new(2, 2).unwrap()).unwrap();
    assert_eq!(tree.nodes_created(), 40);
}

// =============================================================================
// Traversals
// =============================================================================

#[derive(Default)]
struct Counter {
    leaves: usize,
    branches: usize,
    children_seen: usize,
}

impl<S> TreeVisitor<S> for Counter {
    fn visit_leaf(&mut self, _node: &TreeNode<S>) -> Result<()> {
        self.leaves += 1;
        Ok(())
    }

    fn visit_branch(&mut self, _node: &TreeNode<S>, child_count: usize) -> Result<()> {
        self.branches += 1;
        self.children_seen += child_count;
        Ok(())
    }
}

#[test]
fn test_depth_first_visits_every_node() {
    let tree = build(2, 3);
    let mut counter = Counter::default();
    traverse_depth_first(&tree, &mut counter).unwrap();

    assert_eq!(counter.leaves + counter.branches, tree.len());
    assert_eq!(counter.children_seen, tree.nodes_created());
    assert_eq!(counter.leaves, tree.leaves().count());
}

#[test]
fn test_depth_first_print_lines() {
    let tree = build(2, 2);
    let out = print_depth_first(&tree, Vec::new(), ValueFormat::Label).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), tree.len());
    assert_eq!(lines[0], "branch tie (4 children)");
    assert_eq!(lines[1], "  branch tie (3 children)");
    assert_eq!(lines[2], "    branch tie (2 children)");
    assert_eq!(lines[3], "      leaf A");
    assert_eq!(lines.iter().filter(|l| l.trim_start().starts_with("leaf")).count(), 24);
}

#[test]
fn test_breadth_first_print_groups() {
    let tree = build(2, 3);
    let out = print_breadth_first(&tree, Vec::new(), ValueFormat::Code).unwrap();
    let text = String::from_utf8(out).unwrap();

    let groups: Vec<usize> = text.lines().map(|l| l.split_whitespace().count()).collect();
    assert_eq!(groups, tree.stats().nodes_per_depth);
    assert_eq!(text.lines().next(), Some("-1"));
}

#[test]
fn test_release_small_trees() {
    for (rows, cols) in [(1, 1), (1, 4), (2, 2), (3, 2)] {
        let tree = build(rows, cols);
        let expected = tree.nodes_created() + 1;
        assert_eq!(release_breadth_first(tree), expected, "{rows}x{cols}");
    }
}

#[test]
fn test_root_is_node_zero() {
    let tree = build(2, 2);
    assert_eq!(tree.root(), NodeId::new(0));
    assert!(tree.root_node().is_root());
    assert!(tree.root_node().state().is_expandable());
}
