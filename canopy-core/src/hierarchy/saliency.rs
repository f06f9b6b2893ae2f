//! Saliency maps: a hierarchy folded back onto the graph edges.

use rayon::prelude::*;

use crate::error::{CanopyError, Result};
use crate::graph::UndirectedGraph;
use crate::lca::LcaIndex;
use crate::tree::Tree;

/// Weights every graph edge `{u, v}` with the altitude of the lowest common
/// ancestor of `u` and `v` in the hierarchy.
///
/// The leaves of `tree` must be the vertices of `graph`. The resulting edge
/// weighting characterises the hierarchy: rebuilding a quasi-flat zone
/// hierarchy from it recovers the input partitions.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `altitudes` does not have
/// one entry per tree node or the graph vertices do not match the tree
/// leaves.
pub fn saliency_map(
    graph: &UndirectedGraph,
    tree: &Tree,
    altitudes: &[f32],
) -> Result<Vec<f32>> {
    if altitudes.len() != tree.num_vertices() {
        return Err(CanopyError::ShapeMismatch {
            what: "altitudes",
            expected: tree.num_vertices(),
            actual: altitudes.len(),
        });
    }
    if graph.num_vertices() != tree.num_leaves() {
        return Err(CanopyError::ShapeMismatch {
            what: "graph vertices",
            expected: tree.num_leaves(),
            actual: graph.num_vertices(),
        });
    }

    let lca = LcaIndex::new(tree);
    Ok((0..graph.num_edges())
        .into_par_iter()
        .map(|edge| {
            let (source, target) = graph.edge(edge);
            altitudes[lca.lca(source, target)]
        })
        .collect())
}
