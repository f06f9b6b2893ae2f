//! End-to-end scenarios over the public API: build a hierarchy from a
//! graph, rework it, and query it back.

use canopy_core::{
    CanopyError, HorizontalCutExplorer, Inclusion, Tree, UndirectedGraph, bpt_canonical,
    quasi_flat_zone_hierarchy, saliency_map, simplify_tree, tree_to_binary_tree,
};

fn weighted_four_cycle() -> (UndirectedGraph, Vec<f32>) {
    let mut graph = UndirectedGraph::new(4);
    for (source, target) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        graph.add_edge(source, target).expect("valid endpoints");
    }
    (graph, vec![1.0, 3.0, 2.0, 4.0])
}

#[test]
fn partition_tree_of_a_four_cycle() {
    let (graph, weights) = weighted_four_cycle();
    let bpt = bpt_canonical(&graph, &weights).expect("the cycle is connected");
    assert_eq!(bpt.tree().parents(), &[4, 4, 5, 5, 6, 6, 6]);
    assert_eq!(bpt.altitudes(), &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
    assert_eq!(bpt.mst_edge_map(), &[0, 2, 1]);
}

#[test]
fn disconnected_graphs_are_reported() {
    let mut graph = UndirectedGraph::new(3);
    graph.add_edge(0, 1).expect("valid endpoints");
    let err = bpt_canonical(&graph, &[1.0]).expect_err("vertex 2 is unreachable");
    assert!(matches!(err, CanopyError::DisconnectedGraph { .. }));
}

#[test]
fn simplification_compacts_the_surviving_nodes() {
    let tree = Tree::from_parents(vec![3, 3, 4, 4, 4]).expect("valid parents");
    let simplified = simplify_tree(&tree, |node| node == 3, false).expect("valid result");
    assert_eq!(simplified.tree().parents(), &[3, 3, 3, 3]);
    assert_eq!(simplified.node_map(), &[0, 1, 2, 4]);
}

#[test]
fn branch_removal_keeps_the_surviving_sibling_subtree() {
    let tree = Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6]).expect("valid parents");
    let removed = [true, true, false, false, true, false, false];
    let simplified = simplify_tree(&tree, |node| removed[node], true).expect("valid result");
    // the branch under node 4 collapses into a leaf; leaves 2 and 3 stay
    // under their own interior node, attached to the root
    assert_eq!(simplified.tree().parents(), &[3, 3, 4, 4, 4]);
    assert_eq!(simplified.node_map(), &[2, 3, 4, 5, 6]);
}

#[test]
fn cut_exploration_of_the_four_cycle_hierarchy() {
    let (graph, weights) = weighted_four_cycle();
    let bpt = bpt_canonical(&graph, &weights).expect("the cycle is connected");
    let explorer =
        HorizontalCutExplorer::new(bpt.tree(), bpt.altitudes()).expect("valid altitudes");

    assert_eq!(explorer.num_cuts(), 3);
    assert_eq!(explorer.num_regions_cuts(), &[1, 2, 3]);
    assert_eq!(explorer.altitude_cuts(), &[3.0, 2.0, 1.0]);

    let cut = explorer.horizontal_cut_from_num_regions(2);
    assert_eq!(cut.altitude(), 2.0);
    assert_eq!(cut.nodes(), &[4, 5]);
}

#[test]
fn saliency_of_the_quasi_flat_zones_reproduces_mst_weights() {
    let (graph, weights) = weighted_four_cycle();
    let bpt = bpt_canonical(&graph, &weights).expect("the cycle is connected");
    let qfz = quasi_flat_zone_hierarchy(&graph, &weights).expect("the cycle is connected");
    let saliency = saliency_map(&graph, qfz.tree(), qfz.altitudes()).expect("matching shapes");

    for &edge in bpt.mst_edge_map() {
        assert_eq!(saliency[edge], weights[edge], "edge {edge}");
    }
}

#[test]
fn quasi_flat_zones_feed_the_binary_rewriter() {
    // a path with one plateau produces a three-way node, which the binary
    // rewriter folds back apart
    let mut graph = UndirectedGraph::new(4);
    for (source, target) in [(0, 1), (1, 2), (2, 3)] {
        graph.add_edge(source, target).expect("valid endpoints");
    }
    let qfz = quasi_flat_zone_hierarchy(&graph, &[1.0, 1.0, 2.0]).expect("connected path");
    assert_eq!(qfz.tree().num_children(4), 3);

    let binary = tree_to_binary_tree(qfz.tree()).expect("binarisable");
    let tree = binary.tree();
    assert_eq!(tree.num_vertices(), 2 * tree.num_leaves() - 1);
    for node in tree.leaves_to_root(Inclusion::Exclude, Inclusion::Include) {
        assert_eq!(tree.num_children(node), 2);
    }
}
