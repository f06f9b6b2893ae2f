//! Canopy core library.
//!
//! Builds and queries hierarchies of partitions over edge-weighted
//! undirected graphs:
//!
//! - [`bpt_canonical`] runs a Kruskal-style fusion producing the canonical
//!   binary partition tree, its node altitudes, the minimum spanning tree
//!   and the MST edge map in one pass.
//! - [`simplify_tree`] removes nodes by predicate while preserving the
//!   topological meaning of the hierarchy, optionally processing leaves.
//! - [`quasi_flat_zone_hierarchy`] collapses equal-altitude chains of the
//!   partition tree into a strictly monotone hierarchy.
//! - [`saliency_map`] folds a hierarchy back onto the graph edges through
//!   constant-time lowest-common-ancestor queries ([`LcaIndex`]).
//! - [`tree_to_binary_tree`] rewrites an arbitrary hierarchy in canonical
//!   binary form.
//! - [`HorizontalCutExplorer`] precomputes every distinct horizontal cut of
//!   a node-weighted hierarchy and answers altitude and region-count
//!   queries against the index.
//!
//! Hierarchies are immutable once built and constructions are
//! deterministic: stable sorts define all tie-breaking. Rayon parallelism
//! is used internally only where results are order-invariant.

#![forbid(unsafe_code)]

mod cuts;
mod error;
mod graph;
mod hierarchy;
mod lca;
mod tree;

pub use crate::{
    cuts::{HorizontalCut, HorizontalCutExplorer},
    error::{CanopyError, CanopyErrorCode, Result},
    graph::UndirectedGraph,
    hierarchy::{
        CanonicalBpt, NodeWeightedTree, RemappedTree, bpt_canonical, quasi_flat_zone_hierarchy,
        saliency_map, simplify_tree, sort_hierarchy_with_altitudes, tree_to_binary_tree,
    },
    lca::LcaIndex,
    tree::{
        Accumulator, Inclusion, Tree, accumulate_parallel, accumulate_sequential,
        propagate_parallel, propagate_sequential,
    },
};

#[cfg(test)]
pub(crate) mod test_utils;
