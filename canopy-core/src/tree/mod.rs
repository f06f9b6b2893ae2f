//! Rooted trees stored as parent arrays.
//!
//! A hierarchy is a rooted tree over `V` nodes where the leaves are the
//! nodes `0..L` and the interior nodes `L..V` are in topological order:
//! every node's parent has a strictly greater index, and the root (index
//! `V - 1`) is its own parent. This module provides the immutable [`Tree`]
//! value holding the parent array together with a children index computed
//! once at construction, plus the upward and downward traversal orders the
//! hierarchy algorithms are written against.

mod accumulate;

use crate::error::{CanopyError, Result};

pub use self::accumulate::{
    Accumulator, accumulate_parallel, accumulate_sequential, propagate_parallel,
    propagate_sequential,
};

/// Whether a traversal covers the boundary nodes of its range.
///
/// Both tree traversal orders take one flag for the leaves and one for the
/// root, mirroring the four combinations the hierarchy algorithms need.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Inclusion {
    /// Visit the boundary nodes.
    Include,
    /// Skip the boundary nodes.
    Exclude,
}

/// An immutable rooted tree with a precomputed children index.
///
/// The tree owns its parent array and a CSR-style children layout built by a
/// two-pass counting sort, so `children(i)` is a slice lookup and shared
/// read access never mutates.
///
/// # Examples
/// ```
/// use canopy_core::Tree;
///
/// let tree = Tree::from_parents(vec![3, 3, 4, 4, 4]).expect("valid parent array");
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.root(), 4);
/// assert_eq!(tree.children(4), &[2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    parents: Vec<usize>,
    child_offsets: Vec<usize>,
    children: Vec<usize>,
    leaf_count: usize,
}

impl Tree {
    /// Builds a tree from a parent array.
    ///
    /// The array must be topologically ordered: `parents[i] > i` for every
    /// node except the last, which is the root and must be its own parent.
    /// Childless nodes must be exactly the prefix `0..num_leaves()`.
    ///
    /// # Errors
    /// Returns [`CanopyError::EmptyTree`] for an empty array,
    /// [`CanopyError::InvalidParent`] when a parent pointer breaks the
    /// topological order or points outside the array, and
    /// [`CanopyError::LeafOrdering`] when a childless node appears after an
    /// interior node.
    pub fn from_parents(parents: Vec<usize>) -> Result<Self> {
        let node_count = parents.len();
        if node_count == 0 {
            return Err(CanopyError::EmptyTree);
        }
        let root = node_count - 1;
        for (node, &parent) in parents.iter().enumerate() {
            let valid = if node == root {
                parent == root
            } else {
                parent > node && parent < node_count
            };
            if !valid {
                return Err(CanopyError::InvalidParent { node, parent });
            }
        }

        let mut child_offsets = vec![0usize; node_count + 1];
        for (node, &parent) in parents.iter().enumerate() {
            if node != root {
                child_offsets[parent + 1] += 1;
            }
        }
        for node in 0..node_count {
            child_offsets[node + 1] += child_offsets[node];
        }
        let mut cursor = child_offsets.clone();
        let mut children = vec![0usize; node_count - 1];
        for (node, &parent) in parents.iter().enumerate() {
            if node != root {
                children[cursor[parent]] = node;
                cursor[parent] += 1;
            }
        }

        let leaf_count = (0..node_count)
            .filter(|&node| child_offsets[node] == child_offsets[node + 1])
            .count();
        if let Some(node) =
            (leaf_count..node_count).find(|&node| child_offsets[node] == child_offsets[node + 1])
        {
            return Err(CanopyError::LeafOrdering { node });
        }

        Ok(Self {
            parents,
            child_offsets,
            children,
            leaf_count,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.parents.len() }

    /// Returns the number of leaves.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_leaves(&self) -> usize { self.leaf_count }

    /// Returns the root node, always the last index.
    #[must_use]
    pub fn root(&self) -> usize {
        self.parents.len() - 1
    }

    /// Returns the parent of `node`; the root is its own parent.
    ///
    /// # Panics
    /// Panics when `node >= num_vertices()`.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self, node: usize) -> usize { self.parents[node] }

    /// Returns the full parent array.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parents }

    /// Returns the children of `node` in ascending index order.
    ///
    /// # Panics
    /// Panics when `node >= num_vertices()`.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[self.child_offsets[node]..self.child_offsets[node + 1]]
    }

    /// Returns the number of children of `node`.
    ///
    /// # Panics
    /// Panics when `node >= num_vertices()`.
    #[must_use]
    pub fn num_children(&self, node: usize) -> usize {
        self.child_offsets[node + 1] - self.child_offsets[node]
    }

    /// Returns `true` when `node` is a leaf.
    #[must_use]
    pub fn is_leaf(&self, node: usize) -> bool {
        node < self.leaf_count
    }

    /// Iterates over the leaves in ascending order.
    pub fn leaves(&self) -> impl Iterator<Item = usize> {
        0..self.leaf_count
    }

    fn traversal_bounds(&self, leaves: Inclusion, root: Inclusion) -> (usize, usize) {
        let start = match leaves {
            Inclusion::Include => 0,
            Inclusion::Exclude => self.leaf_count,
        };
        let end = match root {
            Inclusion::Include => self.parents.len(),
            Inclusion::Exclude => self.parents.len() - 1,
        };
        (start, end.max(start))
    }

    /// Iterates upward in topological order, every node before its parent.
    pub fn leaves_to_root(
        &self,
        leaves: Inclusion,
        root: Inclusion,
    ) -> impl Iterator<Item = usize> {
        let (start, end) = self.traversal_bounds(leaves, root);
        start..end
    }

    /// Iterates downward in reverse topological order, every node before its
    /// children.
    pub fn root_to_leaves(
        &self,
        leaves: Inclusion,
        root: Inclusion,
    ) -> impl Iterator<Item = usize> {
        let (start, end) = self.traversal_bounds(leaves, root);
        (start..end).rev()
    }
}

#[cfg(test)]
mod tests;
