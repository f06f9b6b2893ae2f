//! Constant-time lowest-common-ancestor queries.
//!
//! The index records an Euler tour of the tree and a sparse table of
//! minimum-depth positions over it. Any `lca(a, b)` query then reduces to a
//! range-minimum over the tour between the first visits of `a` and `b`,
//! answered from two overlapping precomputed windows. Building costs
//! O(V log V) time and memory; queries are O(1).

use crate::tree::Tree;

/// A lowest-common-ancestor index over a borrowed tree.
///
/// # Examples
/// ```
/// use canopy_core::{LcaIndex, Tree};
///
/// let tree = Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6]).expect("valid parents");
/// let lca = LcaIndex::new(&tree);
/// assert_eq!(lca.lca(0, 1), 4);
/// assert_eq!(lca.lca(1, 3), 6);
/// assert_eq!(lca.lca(2, 2), 2);
/// ```
#[derive(Clone, Debug)]
pub struct LcaIndex<'t> {
    tree: &'t Tree,
    tour: Vec<usize>,
    depths: Vec<usize>,
    first_visit: Vec<usize>,
    // sparse[k][i]: tour position of the minimum depth in [i, i + 2^k)
    sparse: Vec<Vec<usize>>,
}

impl<'t> LcaIndex<'t> {
    /// Builds the index for `tree`.
    #[must_use]
    pub fn new(tree: &'t Tree) -> Self {
        let node_count = tree.num_vertices();
        let tour_length = 2 * node_count - 1;
        let mut tour = Vec::with_capacity(tour_length);
        let mut depths = Vec::with_capacity(tour_length);
        let mut first_visit = vec![0usize; node_count];

        // Iterative Euler tour: each node is appended on first visit and
        // again after each child returns.
        let root = tree.root();
        let mut stack: Vec<(usize, usize, usize)> = vec![(root, 0, 0)];
        tour.push(root);
        depths.push(0);
        while let Some(top) = stack.len().checked_sub(1) {
            let (node, cursor, depth) = stack[top];
            let children = tree.children(node);
            if cursor < children.len() {
                stack[top].1 += 1;
                let child = children[cursor];
                first_visit[child] = tour.len();
                tour.push(child);
                depths.push(depth + 1);
                stack.push((child, 0, depth + 1));
            } else {
                stack.pop();
                if let Some(&(parent, _, parent_depth)) = stack.last() {
                    tour.push(parent);
                    depths.push(parent_depth);
                }
            }
        }

        let mut sparse: Vec<Vec<usize>> = vec![(0..tour.len()).collect()];
        let mut span = 1usize;
        while 2 * span <= tour.len() {
            let previous = &sparse[sparse.len() - 1];
            let row: Vec<usize> = (0..=tour.len() - 2 * span)
                .map(|i| {
                    let left = previous[i];
                    let right = previous[i + span];
                    if depths[left] <= depths[right] { left } else { right }
                })
                .collect();
            sparse.push(row);
            span *= 2;
        }

        Self {
            tree,
            tour,
            depths,
            first_visit,
            sparse,
        }
    }

    /// Returns the tree the index was built for.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { self.tree }

    /// Returns the lowest common ancestor of `a` and `b`.
    ///
    /// # Panics
    /// Panics when `a` or `b` is not a node of the tree.
    #[must_use]
    pub fn lca(&self, a: usize, b: usize) -> usize {
        let (low, high) = {
            let first_a = self.first_visit[a];
            let first_b = self.first_visit[b];
            (first_a.min(first_b), first_a.max(first_b))
        };
        let length = high - low + 1;
        let level = length.ilog2() as usize;
        let span = 1usize << level;
        let row = &self.sparse[level];
        let left = row[low];
        let right = row[high + 1 - span];
        let position = if self.depths[left] <= self.depths[right] {
            left
        } else {
            right
        };
        self.tour[position]
    }
}
