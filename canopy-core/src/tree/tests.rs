//! Unit tests for the parent-array tree and its reductions.

use rstest::rstest;

use crate::error::CanopyError;

use super::{
    Accumulator, Inclusion, Tree, accumulate_parallel, accumulate_sequential, propagate_parallel,
    propagate_sequential,
};

fn sample_tree() -> Tree {
    // leaves 0..4, interior 4 over {0, 1}, interior 5 over {2, 3}, root 6
    Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6]).expect("valid parent array")
}

#[test]
fn derives_children_and_leaf_count() {
    let tree = sample_tree();
    assert_eq!(tree.num_vertices(), 7);
    assert_eq!(tree.num_leaves(), 4);
    assert_eq!(tree.root(), 6);
    assert_eq!(tree.children(4), &[0, 1]);
    assert_eq!(tree.children(6), &[4, 5]);
    assert_eq!(tree.num_children(0), 0);
    assert!(tree.is_leaf(3));
    assert!(!tree.is_leaf(4));
    assert_eq!(tree.parent(6), 6);
}

#[test]
fn supports_single_node_trees() {
    let tree = Tree::from_parents(vec![0]).expect("valid parent array");
    assert_eq!(tree.num_leaves(), 1);
    assert_eq!(tree.root(), 0);
    assert!(tree.is_leaf(0));
    assert_eq!(
        tree.leaves_to_root(Inclusion::Exclude, Inclusion::Exclude)
            .count(),
        0
    );
}

#[rstest]
#[case::leaves_and_root(Inclusion::Include, Inclusion::Include, vec![0, 1, 2, 3, 4, 5, 6])]
#[case::interior_only(Inclusion::Exclude, Inclusion::Exclude, vec![4, 5])]
#[case::without_root(Inclusion::Include, Inclusion::Exclude, vec![0, 1, 2, 3, 4, 5])]
#[case::without_leaves(Inclusion::Exclude, Inclusion::Include, vec![4, 5, 6])]
fn traversals_follow_topological_order(
    #[case] leaves: Inclusion,
    #[case] root: Inclusion,
    #[case] expected: Vec<usize>,
) {
    let tree = sample_tree();
    let upward: Vec<usize> = tree.leaves_to_root(leaves, root).collect();
    assert_eq!(upward, expected);
    let downward: Vec<usize> = tree.root_to_leaves(leaves, root).collect();
    let mut reversed = expected;
    reversed.reverse();
    assert_eq!(downward, reversed);
}

#[test]
fn rejects_empty_parent_array() {
    let err = Tree::from_parents(Vec::new()).expect_err("empty arrays are invalid");
    assert_eq!(err, CanopyError::EmptyTree);
}

#[rstest]
#[case::self_parent_below_root(vec![0, 2, 2], 0, 0)]
#[case::parent_below_child(vec![2, 0, 2], 1, 0)]
#[case::root_not_self_parent(vec![1, 2, 1], 2, 1)]
fn rejects_non_topological_parents(
    #[case] parents: Vec<usize>,
    #[case] node: usize,
    #[case] parent: usize,
) {
    let err = Tree::from_parents(parents).expect_err("parent order is invalid");
    assert_eq!(err, CanopyError::InvalidParent { node, parent });
}

#[test]
fn rejects_childless_nodes_outside_the_leaf_prefix() {
    // node 1 is interior (parent of 0), node 2 is childless
    let err = Tree::from_parents(vec![1, 3, 3, 3]).expect_err("leaf ordering is invalid");
    assert_eq!(err, CanopyError::LeafOrdering { node: 2 });
}

#[rstest]
#[case::min(Accumulator::Min, vec![f32::INFINITY, f32::INFINITY, f32::INFINITY, f32::INFINITY, 1.0, 3.0, 5.0])]
#[case::max(Accumulator::Max, vec![f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY, 2.0, 4.0, 6.0])]
#[case::sum(Accumulator::Sum, vec![0.0, 0.0, 0.0, 0.0, 3.0, 7.0, 11.0])]
fn accumulates_children_in_parallel(#[case] accumulator: Accumulator, #[case] expected: Vec<f32>) {
    let tree = sample_tree();
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let out = accumulate_parallel(&tree, &values, accumulator).expect("matching shapes");
    assert_eq!(out, expected);
}

#[test]
fn accumulates_leaf_values_upward() {
    let tree = sample_tree();
    let out = accumulate_sequential(&tree, &[1.0, 2.0, 3.0, 4.0], Accumulator::Sum)
        .expect("matching shapes");
    assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 3.0, 7.0, 10.0]);
}

#[test]
fn propagates_parent_values() {
    let tree = sample_tree();
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let out = propagate_parallel(&tree, &values).expect("matching shapes");
    assert_eq!(out, vec![5.0, 5.0, 6.0, 6.0, 7.0, 7.0, 7.0]);
}

#[test]
fn propagates_downward_through_condition_chains() {
    let tree = sample_tree();
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    // nodes 1 and 4 inherit from above; 1 sees the value 4 received from 7
    let condition = [false, true, false, false, true, false, false];
    let out = propagate_sequential(&tree, &values, &condition).expect("matching shapes");
    assert_eq!(out, vec![1.0, 7.0, 3.0, 4.0, 7.0, 6.0, 7.0]);
}

#[test]
fn rejects_mismatched_value_shapes() {
    let tree = sample_tree();
    let err = accumulate_parallel(&tree, &[0.0; 3], Accumulator::Min)
        .expect_err("three values cannot weight seven nodes");
    assert_eq!(
        err,
        CanopyError::ShapeMismatch {
            what: "node values",
            expected: 7,
            actual: 3
        }
    );
    let err = accumulate_sequential(&tree, &[0.0; 7], Accumulator::Min)
        .expect_err("leaf values must match the leaf count");
    assert_eq!(
        err,
        CanopyError::ShapeMismatch {
            what: "leaf values",
            expected: 4,
            actual: 7
        }
    );
}
