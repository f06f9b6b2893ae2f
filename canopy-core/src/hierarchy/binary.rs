//! Rewriting a hierarchy into canonical binary form.

use crate::error::{CanopyError, Result};
use crate::tree::{Inclusion, Tree};

use super::RemappedTree;

/// Rewrites `tree` so that every interior node has exactly two children.
///
/// Children are folded left-associatively: an interior node with `k > 2`
/// children grows `k - 2` auxiliary nodes, each pairing the running partial
/// node with the next child, which makes the output canonical. For `L`
/// leaves the result has `2L - 1` nodes. The returned map sends every new
/// node back to the original node it derives from; auxiliary nodes map to
/// the interior node whose children they fold.
///
/// # Errors
/// Returns [`CanopyError::NotBinarizable`] when an interior node has fewer
/// than two children.
///
/// # Examples
/// ```
/// use canopy_core::{Tree, tree_to_binary_tree};
///
/// let tree = Tree::from_parents(vec![3, 3, 3, 3]).expect("valid parents");
/// let binary = tree_to_binary_tree(&tree).expect("binarisable");
/// assert_eq!(binary.tree().parents(), &[3, 3, 4, 4, 4]);
/// assert_eq!(binary.node_map(), &[0, 1, 2, 3, 3]);
/// ```
pub fn tree_to_binary_tree(tree: &Tree) -> Result<RemappedTree> {
    let leaf_count = tree.num_leaves();
    let result_count = 2 * leaf_count - 1;

    // current index of each original node in the rewritten tree
    let mut current = vec![0usize; tree.num_vertices()];
    let mut reverse_node_map = vec![0usize; result_count];
    for leaf in tree.leaves() {
        current[leaf] = leaf;
        reverse_node_map[leaf] = leaf;
    }

    let mut parents = vec![0usize; result_count];
    let mut cursor = leaf_count;
    for node in tree.leaves_to_root(Inclusion::Exclude, Inclusion::Include) {
        let children = tree.children(node);
        if children.len() < 2 {
            return Err(CanopyError::NotBinarizable {
                node,
                arity: children.len(),
            });
        }
        parents[current[children[0]]] = cursor;
        parents[current[children[1]]] = cursor;
        for &child in &children[2..] {
            parents[cursor] = cursor + 1;
            reverse_node_map[cursor] = node;
            cursor += 1;
            parents[current[child]] = cursor;
        }
        current[node] = cursor;
        reverse_node_map[cursor] = node;
        cursor += 1;
    }
    parents[result_count - 1] = result_count - 1;

    Ok(RemappedTree::new(
        Tree::from_parents(parents)?,
        reverse_node_map,
    ))
}
