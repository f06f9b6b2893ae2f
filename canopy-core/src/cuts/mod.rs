//! Horizontal-cut exploration of a node-weighted hierarchy.
//!
//! A hierarchy whose altitudes vanish on the leaves and never decrease
//! towards the root induces, for every threshold, a partition of the leaves:
//! the maximal subtrees rooted strictly below the threshold. The explorer
//! enumerates the distinct partitions once at construction and indexes them,
//! so the cut with at most `k` regions or the cut at a given altitude is a
//! binary search plus a bounded scan away.
//!
//! Construction sorts the interior nodes by altitude and walks a window of
//! interior indices downward from the root: each time the threshold drops
//! below another batch of node altitudes, the window widens and every node
//! entering it trades itself for its children in the region count. The cut
//! tables grow one row per distinct partition; zero-altitude cuts are never
//! materialised, so the finest recorded cut is the last one with a positive
//! threshold.

use crate::error::{CanopyError, Result};
use crate::hierarchy::sort_hierarchy_with_altitudes;
use crate::tree::{Accumulator, Tree, accumulate_parallel};


/// One partition of the leaves, as produced by a [`HorizontalCutExplorer`].
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalCut {
    nodes: Vec<usize>,
    altitude: f32,
}

impl HorizontalCut {
    /// Returns the cut nodes as indices into the explorer's source tree.
    /// Their subtrees' leaves partition the leaf set.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[usize] { &self.nodes }

    /// Returns the altitude of the cut.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitude(&self) -> f32 { self.altitude }
}

/// A precomputed index over all distinct horizontal cuts of a hierarchy.
///
/// The explorer borrows the source tree and owns everything it derives: the
/// altitude-sorted tree, the node map back to the source, and three parallel
/// cut tables (region counts, strictly ascending; altitudes, strictly
/// descending; interior-node windows). Queries never mutate.
///
/// # Examples
/// ```
/// use canopy_core::{HorizontalCutExplorer, Tree};
///
/// let tree = Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6]).expect("valid parents");
/// let altitudes = [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
/// let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");
/// assert_eq!(explorer.num_cuts(), 3);
/// let cut = explorer.horizontal_cut_from_num_regions(2);
/// assert_eq!(cut.altitude(), 2.0);
/// assert_eq!(cut.nodes(), &[4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct HorizontalCutExplorer<'t> {
    source_tree: &'t Tree,
    sorted_tree: Tree,
    node_map: Vec<usize>,
    altitudes: Vec<f32>,
    num_regions_cuts: Vec<usize>,
    altitude_cuts: Vec<f32>,
    window_cuts: Vec<Option<(usize, usize)>>,
}

impl<'t> HorizontalCutExplorer<'t> {
    /// Builds the cut index for `tree` weighted by `altitudes`.
    ///
    /// # Errors
    /// Returns [`CanopyError::ShapeMismatch`] when `altitudes` does not
    /// have one entry per node, and [`CanopyError::InvalidAltitudes`] when
    /// a leaf altitude is nonzero or any altitude is negative or
    /// non-finite.
    pub fn new(tree: &'t Tree, altitudes: &[f32]) -> Result<Self> {
        if altitudes.len() != tree.num_vertices() {
            return Err(CanopyError::ShapeMismatch {
                what: "altitudes",
                expected: tree.num_vertices(),
                actual: altitudes.len(),
            });
        }
        for (node, &altitude) in altitudes.iter().enumerate() {
            let valid = if tree.is_leaf(node) {
                altitude == 0.0
            } else {
                altitude.is_finite() && altitude >= 0.0
            };
            if !valid {
                return Err(CanopyError::InvalidAltitudes { node, altitude });
            }
        }

        let (sorted_tree, node_map) = sort_hierarchy_with_altitudes(tree, altitudes)?.into_parts();
        let sorted_altitudes: Vec<f32> = node_map.iter().map(|&node| altitudes[node]).collect();
        let min_child_altitudes =
            accumulate_parallel(&sorted_tree, &sorted_altitudes, Accumulator::Min)?;

        let root = sorted_tree.root();
        let leaf_count = sorted_tree.num_leaves();
        let mut num_regions_cuts = vec![1usize];
        let mut altitude_cuts = vec![sorted_altitudes[root]];
        let mut window_cuts: Vec<Option<(usize, usize)>> = vec![None];

        let mut window_start = root;
        let mut window_end = root;
        let mut num_regions = sorted_tree.num_children(root);
        let mut threshold = sorted_altitudes[window_start];

        while threshold != 0.0 && window_start >= leaf_count {
            while min_child_altitudes[window_end] >= threshold {
                window_end -= 1;
            }
            while sorted_altitudes[window_start - 1] >= threshold {
                window_start -= 1;
                num_regions += sorted_tree.num_children(window_start) - 1;
            }
            threshold = sorted_altitudes[window_start - 1];
            if threshold == 0.0 {
                break;
            }
            num_regions_cuts.push(num_regions);
            altitude_cuts.push(threshold);
            window_cuts.push(Some((window_start, window_end)));
        }

        tracing::debug!(
            nodes = tree.num_vertices(),
            cuts = num_regions_cuts.len(),
            "indexed horizontal cuts"
        );
        Ok(Self {
            source_tree: tree,
            sorted_tree,
            node_map,
            altitudes: sorted_altitudes,
            num_regions_cuts,
            altitude_cuts,
            window_cuts,
        })
    }

    /// Returns the tree the explorer was built for.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { self.source_tree }

    /// Returns the number of distinct cuts, the trivial single-region cut
    /// included.
    #[must_use]
    pub fn num_cuts(&self) -> usize {
        self.num_regions_cuts.len()
    }

    /// Returns the region count of cut `index`.
    ///
    /// # Panics
    /// Panics when `index >= num_cuts()`.
    #[must_use]
    pub fn num_regions_cut(&self, index: usize) -> usize {
        self.num_regions_cuts[index]
    }

    /// Returns the region counts of all cuts, strictly ascending.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_regions_cuts(&self) -> &[usize] { &self.num_regions_cuts }

    /// Returns the altitude of cut `index`.
    ///
    /// # Panics
    /// Panics when `index >= num_cuts()`.
    #[must_use]
    pub fn altitude_cut(&self, index: usize) -> f32 {
        self.altitude_cuts[index]
    }

    /// Returns the altitudes of all cuts, strictly descending.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitude_cuts(&self) -> &[f32] { &self.altitude_cuts }

    /// Materialises cut `index`.
    ///
    /// The cut nodes are the children below the cut altitude of the
    /// interior-node window recorded at construction, remapped to
    /// source-tree indices.
    ///
    /// # Panics
    /// Panics when `index >= num_cuts()`.
    #[must_use]
    pub fn horizontal_cut_from_index(&self, index: usize) -> HorizontalCut {
        let altitude = self.altitude_cuts[index];
        let mut nodes = Vec::with_capacity(self.num_regions_cuts[index]);
        match self.window_cuts[index] {
            None => nodes.push(self.node_map[self.sorted_tree.root()]),
            Some((start, end)) => {
                for node in start..=end {
                    for &child in self.sorted_tree.children(node) {
                        if self.altitudes[child] <= altitude {
                            nodes.push(self.node_map[child]);
                        }
                    }
                }
            }
        }
        HorizontalCut { nodes, altitude }
    }

    /// Returns the last cut whose altitude is at most `threshold`, or the
    /// finest cut when every altitude exceeds it.
    #[must_use]
    pub fn horizontal_cut_from_altitude(&self, threshold: f32) -> HorizontalCut {
        let above = self
            .altitude_cuts
            .partition_point(|&altitude| altitude > threshold);
        self.horizontal_cut_from_index(above.min(self.num_cuts() - 1))
    }

    /// Returns the first cut with at least `num_regions` regions, or the
    /// finest cut when no cut is that fine.
    #[must_use]
    pub fn horizontal_cut_from_num_regions(&self, num_regions: usize) -> HorizontalCut {
        let index = self
            .num_regions_cuts
            .partition_point(|&regions| regions < num_regions);
        self.horizontal_cut_from_index(index.min(self.num_cuts() - 1))
    }
}
