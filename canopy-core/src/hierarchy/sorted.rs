//! Reordering interior nodes by altitude.

use crate::error::{CanopyError, Result};
use crate::tree::Tree;

use super::RemappedTree;

/// Reorders the interior nodes of `tree` into non-decreasing altitude
/// order, ties broken by original index.
///
/// Leaves keep their indices and the root stays last. The altitudes must be
/// non-decreasing along every leaf-to-root path (as produced by the
/// partition tree builders); under that precondition the reordering
/// preserves the topological order of the parent array. The returned map
/// sends sorted-tree indices to input-tree indices; gather any node values
/// through it to follow the new layout.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `altitudes` does not have
/// one entry per node, and [`CanopyError::InvalidParent`] when the
/// altitudes are not monotone and the reordered parent array is no longer
/// topologically sorted.
pub fn sort_hierarchy_with_altitudes(tree: &Tree, altitudes: &[f32]) -> Result<RemappedTree> {
    if altitudes.len() != tree.num_vertices() {
        return Err(CanopyError::ShapeMismatch {
            what: "altitudes",
            expected: tree.num_vertices(),
            actual: altitudes.len(),
        });
    }

    let leaf_count = tree.num_leaves();
    let mut node_map: Vec<usize> = (0..tree.num_vertices()).collect();
    node_map[leaf_count..].sort_by(|&left, &right| {
        altitudes[left]
            .total_cmp(&altitudes[right])
            .then_with(|| left.cmp(&right))
    });

    let mut new_index = vec![0usize; tree.num_vertices()];
    for (index, &node) in node_map.iter().enumerate() {
        new_index[node] = index;
    }
    let parents: Vec<usize> = node_map
        .iter()
        .map(|&node| new_index[tree.parent(node)])
        .collect();

    Ok(RemappedTree::new(Tree::from_parents(parents)?, node_map))
}
