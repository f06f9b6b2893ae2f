//! Predicate-driven removal of tree nodes.
//!
//! Simplification deletes every node the criterion selects and reattaches
//! its children to the nearest surviving ancestor. Two modes exist:
//!
//! - Leaves kept: leaves survive regardless of the criterion, so the leaf
//!   set (and the partition it represents) is preserved. Two linear passes
//!   rewire parents and compact the indices.
//! - Leaves processed: deleting leaves can make an interior node childless.
//!   A subtree whose nodes are all selected collapses into a single leaf at
//!   its top node, which stays in the output as the representative of the
//!   collapsed region; the remaining selected nodes disappear. A top-down
//!   traversal then renumbers the survivors so the result is topologically
//!   sorted with the new leaves first.

use std::collections::VecDeque;

use crate::error::Result;
use crate::tree::{Inclusion, Tree};

use super::RemappedTree;

/// Copies `tree` without the nodes the criterion selects.
///
/// `criterion(i)` returning `true` marks node `i` for deletion; its children
/// are reattached to its nearest surviving ancestor. The root is never
/// deleted. With `process_leaves` false, leaves are never deleted either.
/// The returned map gives, for every node of the simplified tree, its index
/// in the input tree.
///
/// # Errors
/// Never fails for a valid tree and total criterion; the `Result` carries
/// the re-validation of the rebuilt parent array.
///
/// # Examples
/// ```
/// use canopy_core::{Tree, simplify_tree};
///
/// let tree = Tree::from_parents(vec![3, 3, 4, 4, 4]).expect("valid parents");
/// let simplified = simplify_tree(&tree, |node| node == 3, false).expect("valid tree");
/// assert_eq!(simplified.tree().parents(), &[3, 3, 3, 3]);
/// assert_eq!(simplified.node_map(), &[0, 1, 2, 4]);
/// ```
pub fn simplify_tree<P>(tree: &Tree, criterion: P, process_leaves: bool) -> Result<RemappedTree>
where
    P: Fn(usize) -> bool,
{
    if process_leaves {
        simplify_processing_leaves(tree, &criterion)
    } else {
        simplify_keeping_leaves(tree, &criterion)
    }
}

fn simplify_keeping_leaves<P>(tree: &Tree, criterion: &P) -> Result<RemappedTree>
where
    P: Fn(usize) -> bool,
{
    let node_count = tree.num_vertices();

    // Top-down rewiring: children of a deleted node inherit its (already
    // rewired) parent, so chains of deletions are skipped in one pass.
    let mut rewired = tree.parents().to_vec();
    let mut removed_from = vec![0usize; node_count];
    let mut removed = 0usize;
    for node in tree.root_to_leaves(Inclusion::Exclude, Inclusion::Exclude) {
        if criterion(node) {
            let parent = rewired[node];
            for &child in tree.children(node) {
                rewired[child] = parent;
            }
            removed += 1;
        }
        removed_from[node] = removed;
    }
    // removed_from[i] now counts deletions at indices >= i; flip it into the
    // index shift each survivor's parent moves down by.
    let shift: Vec<usize> = removed_from.iter().map(|&count| removed - count).collect();

    let survivor_count = node_count - removed;
    let mut parents: Vec<usize> = (0..survivor_count).collect();
    let mut node_map: Vec<usize> = vec![0; survivor_count];
    let mut next = 0usize;
    for node in tree.leaves_to_root(Inclusion::Include, Inclusion::Exclude) {
        if tree.is_leaf(node) || !criterion(node) {
            let parent = rewired[node];
            parents[next] = parent - shift[parent];
            node_map[next] = node;
            next += 1;
        }
    }
    node_map[survivor_count - 1] = tree.root();

    Ok(RemappedTree::new(Tree::from_parents(parents)?, node_map))
}

fn simplify_processing_leaves<P>(tree: &Tree, criterion: &P) -> Result<RemappedTree>
where
    P: Fn(usize) -> bool,
{
    let node_count = tree.num_vertices();
    let root = tree.root();

    // A node heads a removed branch when its whole subtree is selected.
    let mut removed_branch = vec![false; node_count];
    for node in tree.leaves() {
        removed_branch[node] = criterion(node);
    }
    for node in tree.leaves_to_root(Inclusion::Exclude, Inclusion::Include) {
        removed_branch[node] = tree
            .children(node)
            .iter()
            .all(|&child| removed_branch[child] && criterion(child));
    }

    if removed_branch[root] {
        // Every node is selected: the hierarchy collapses to its root.
        return Ok(RemappedTree::new(Tree::from_parents(vec![0])?, vec![root]));
    }

    // Leaves of the simplified tree, in deterministic order: surviving
    // original leaves first, then the tops of removed branches.
    let mut new_leaves: Vec<usize> = tree.leaves().filter(|&leaf| !criterion(leaf)).collect();
    for node in tree.leaves_to_root(Inclusion::Exclude, Inclusion::Exclude) {
        if removed_branch[node] && !removed_branch[tree.parent(node)] {
            new_leaves.push(node);
        }
    }

    let mut is_new_leaf = vec![false; node_count];
    for &leaf in &new_leaves {
        is_new_leaf[leaf] = true;
    }
    let removed = (0..root)
        .filter(|&node| criterion(node) && !is_new_leaf[node])
        .count();
    let survivor_count = node_count - removed;

    const UNASSIGNED: usize = usize::MAX;
    let mut new_index = vec![UNASSIGNED; node_count];
    for (index, &leaf) in new_leaves.iter().enumerate() {
        new_index[leaf] = index;
    }

    let mut parents = vec![0usize; survivor_count];
    let mut node_map = vec![0usize; survivor_count];
    let mut next_interior = survivor_count - 1;

    // Top-down breadth-first renumbering: survivors take descending interior
    // indices, selected nodes forward their slot to the nearest surviving
    // ancestor. New leaves are never enqueued; their links land last.
    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        if node == root || !criterion(node) {
            new_index[node] = next_interior;
            parents[next_interior] = new_index[tree.parent(node)];
            node_map[next_interior] = node;
            next_interior = next_interior.saturating_sub(1);
        } else {
            new_index[node] = new_index[tree.parent(node)];
        }
        for &child in tree.children(node) {
            if new_index[child] == UNASSIGNED {
                queue.push_back(child);
            }
        }
    }

    for (index, &leaf) in new_leaves.iter().enumerate() {
        parents[index] = new_index[tree.parent(leaf)];
        node_map[index] = leaf;
    }

    Ok(RemappedTree::new(Tree::from_parents(parents)?, node_map))
}
