//! Hierarchy construction and rewriting.
//!
//! This module hosts the algorithmic kernels the crate is built around:
//!
//! - Canonical binary partition tree construction: a Kruskal-style fusion
//!   over the edges in weight order, jointly producing the tree, its node
//!   altitudes, the minimum spanning tree and the MST edge map.
//! - Predicate-driven tree simplification, including the harder mode where
//!   deleting leaves can turn interior nodes into leaves.
//! - Quasi-flat zone hierarchies: the partition tree with equal-altitude
//!   chains collapsed, so altitudes strictly increase towards the root.
//! - Rewriting an arbitrary hierarchy into canonical binary form.
//! - Reordering interior nodes by altitude, the layout the horizontal-cut
//!   explorer indexes against.
//! - Saliency maps: the hierarchy folded back onto the graph edges through
//!   lowest-common-ancestor altitudes.

mod binary;
mod bpt;
mod saliency;
mod simplify;
mod sorted;
mod union_find;

use crate::tree::Tree;

pub use self::binary::tree_to_binary_tree;
pub use self::bpt::{CanonicalBpt, bpt_canonical, quasi_flat_zone_hierarchy};
pub use self::saliency::saliency_map;
pub use self::simplify::simplify_tree;
pub use self::sorted::sort_hierarchy_with_altitudes;

/// A tree paired with a map from its node indices to the indices of the
/// tree it was derived from.
///
/// Returned by [`simplify_tree`], [`tree_to_binary_tree`] and
/// [`sort_hierarchy_with_altitudes`]; `node_map()[new]` is the originating
/// node of `new`. For the binary rewriting the map is a reverse node map:
/// auxiliary nodes map to the interior node whose children they fold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemappedTree {
    tree: Tree,
    node_map: Vec<usize>,
}

impl RemappedTree {
    fn new(tree: Tree, node_map: Vec<usize>) -> Self {
        debug_assert_eq!(tree.num_vertices(), node_map.len());
        Self { tree, node_map }
    }

    /// Returns the derived tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the map from derived-tree indices to original-tree indices.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_map(&self) -> &[usize] { &self.node_map }

    /// Consumes the pair.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<usize>) {
        (self.tree, self.node_map)
    }
}

/// A tree bundled with one altitude per node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeWeightedTree {
    tree: Tree,
    altitudes: Vec<f32>,
}

impl NodeWeightedTree {
    fn new(tree: Tree, altitudes: Vec<f32>) -> Self {
        debug_assert_eq!(tree.num_vertices(), altitudes.len());
        Self { tree, altitudes }
    }

    /// Returns the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the node altitudes.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitudes(&self) -> &[f32] { &self.altitudes }

    /// Consumes the pair.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f32>) {
        (self.tree, self.altitudes)
    }
}

#[cfg(test)]
mod property;
