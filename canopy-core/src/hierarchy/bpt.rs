//! Canonical binary partition tree and quasi-flat zone construction.
//!
//! The fusion walks the graph edges in non-decreasing weight order and
//! merges components with a union-find, creating one interior tree node per
//! accepted edge. The accepted edges are the minimum spanning tree, the
//! creation weights are the node altitudes, and stability of the edge sort
//! defines all tie-breaking, so the output is reproducible.

use rayon::prelude::*;

use crate::error::{CanopyError, Result};
use crate::graph::UndirectedGraph;
use crate::tree::{Tree, propagate_parallel};

use super::union_find::DisjointSets;
use super::{NodeWeightedTree, simplify_tree};

/// The bundle produced by [`bpt_canonical`].
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalBpt {
    tree: Tree,
    altitudes: Vec<f32>,
    mst: UndirectedGraph,
    mst_edge_map: Vec<usize>,
}

impl CanonicalBpt {
    /// Returns the partition tree. Leaves are the graph vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the node altitudes, non-decreasing along parent links.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitudes(&self) -> &[f32] { &self.altitudes }

    /// Returns the minimum spanning tree over the graph vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst(&self) -> &UndirectedGraph { &self.mst }

    /// Returns, for each MST edge in fusion order, its index in the input
    /// graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edge_map(&self) -> &[usize] { &self.mst_edge_map }

    /// Consumes the bundle.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f32>, UndirectedGraph, Vec<usize>) {
        (self.tree, self.altitudes, self.mst, self.mst_edge_map)
    }
}

fn check_edge_weights(graph: &UndirectedGraph, edge_weights: &[f32]) -> Result<()> {
    if edge_weights.len() != graph.num_edges() {
        return Err(CanopyError::ShapeMismatch {
            what: "edge weights",
            expected: graph.num_edges(),
            actual: edge_weights.len(),
        });
    }
    if let Some(edge) = edge_weights.iter().position(|weight| !weight.is_finite()) {
        return Err(CanopyError::NonFiniteWeight { edge });
    }
    Ok(())
}

/// Computes the canonical binary partition tree of an edge-weighted graph.
///
/// The returned tree has `2n - 1` nodes for a graph with `n` vertices:
/// leaves `0..n` are the graph vertices and every interior node records the
/// fusion of its two children at the altitude of the accepting edge. Edges
/// are visited in weight order under a stable sort, so equal weights are
/// fused in insertion order.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when the weight array does not
/// match the edge count, [`CanopyError::EmptyGraph`] for a vertex-free
/// graph, [`CanopyError::NonFiniteWeight`] on NaN or infinite weights, and
/// [`CanopyError::DisconnectedGraph`] when the edges do not span the graph.
///
/// # Examples
/// ```
/// use canopy_core::{UndirectedGraph, bpt_canonical};
///
/// let mut graph = UndirectedGraph::new(4);
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     graph.add_edge(u, v).expect("valid endpoints");
/// }
/// let bpt = bpt_canonical(&graph, &[1.0, 3.0, 2.0, 4.0]).expect("connected");
/// assert_eq!(bpt.tree().num_vertices(), 7);
/// assert_eq!(bpt.mst_edge_map(), &[0, 2, 1]);
/// ```
pub fn bpt_canonical(graph: &UndirectedGraph, edge_weights: &[f32]) -> Result<CanonicalBpt> {
    check_edge_weights(graph, edge_weights)?;
    let vertex_count = graph.num_vertices();
    if vertex_count == 0 {
        return Err(CanopyError::EmptyGraph);
    }

    let mut order: Vec<usize> = (0..graph.num_edges()).collect();
    order.par_sort_by(|&left, &right| edge_weights[left].total_cmp(&edge_weights[right]));

    let node_count = 2 * vertex_count - 1;
    let required = vertex_count - 1;
    let mut parents: Vec<usize> = (0..node_count).collect();
    let mut altitudes = vec![0.0f32; node_count];
    // component root -> tree node currently representing the component
    let mut component_node: Vec<usize> = (0..vertex_count).collect();
    let mut sets = DisjointSets::new(vertex_count);
    let mut mst = UndirectedGraph::with_edge_capacity(vertex_count, required);
    let mut mst_edge_map = Vec::with_capacity(required);
    let mut next_node = vertex_count;

    for &edge in &order {
        if mst_edge_map.len() == required {
            break;
        }
        let (source, target) = graph.edge(edge);
        let left = sets.find(source);
        let right = sets.find(target);
        if left == right {
            continue;
        }
        parents[component_node[left]] = next_node;
        parents[component_node[right]] = next_node;
        altitudes[next_node] = edge_weights[edge];
        let merged = sets.link(left, right);
        component_node[merged] = next_node;
        mst.add_edge(source, target)?;
        mst_edge_map.push(edge);
        next_node += 1;
    }

    if mst_edge_map.len() != required {
        return Err(CanopyError::DisconnectedGraph {
            fused: mst_edge_map.len(),
            required,
        });
    }

    let tree = Tree::from_parents(parents)?;
    tracing::debug!(
        vertices = vertex_count,
        edges = graph.num_edges(),
        nodes = tree.num_vertices(),
        "built canonical binary partition tree"
    );
    Ok(CanonicalBpt {
        tree,
        altitudes,
        mst,
        mst_edge_map,
    })
}

/// Computes the quasi-flat zone hierarchy of an edge-weighted graph.
///
/// For a threshold `lambda`, the lambda-partition of the graph groups
/// vertices connected by paths of edges weighing at most `lambda`. The
/// quasi-flat zone hierarchy stacks the distinct lambda-partitions; it is
/// the canonical partition tree with every node collapsed into the parent it
/// shares an altitude with, so altitudes strictly increase along interior
/// parent chains.
///
/// # Errors
/// Propagates the errors of [`bpt_canonical`].
pub fn quasi_flat_zone_hierarchy(
    graph: &UndirectedGraph,
    edge_weights: &[f32],
) -> Result<NodeWeightedTree> {
    let bpt = bpt_canonical(graph, edge_weights)?;
    let (tree, altitudes, _, _) = bpt.into_parts();
    let parent_altitudes = propagate_parallel(&tree, &altitudes)?;

    let collapsed = simplify_tree(
        &tree,
        |node| altitudes[node] == parent_altitudes[node],
        false,
    )?;
    let (qfz_tree, node_map) = collapsed.into_parts();
    let qfz_altitudes = node_map.iter().map(|&node| altitudes[node]).collect();
    Ok(NodeWeightedTree::new(qfz_tree, qfz_altitudes))
}
