//! Edge-weighted undirected graph support.
//!
//! Hierarchies are built over a plain undirected graph: a vertex count and a
//! dense edge list. Edges are identified by their stable insertion index,
//! which is how weight arrays, MST edge maps and saliency maps line up with
//! the graph.

use crate::error::{CanopyError, Result};

/// An undirected graph with indexed edges.
///
/// Vertices are the integers `0..num_vertices()`. Each edge is stored once
/// and addressed by the index returned from [`Self::add_edge`]. Parallel
/// edges and self-loops are representable; algorithms that cannot use them
/// (such as the binary partition tree fusion) skip them instead of failing.
///
/// # Examples
/// ```
/// use canopy_core::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new(3);
/// let e = graph.add_edge(0, 2).expect("valid endpoints");
/// assert_eq!(e, 0);
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph.edge(0), (0, 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    vertex_count: usize,
    sources: Vec<usize>,
    targets: Vec<usize>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            sources: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Creates a graph with `vertex_count` vertices and room for
    /// `edge_capacity` edges.
    #[must_use]
    pub fn with_edge_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        Self {
            vertex_count,
            sources: Vec::with_capacity(edge_capacity),
            targets: Vec::with_capacity(edge_capacity),
        }
    }

    /// Adds the undirected edge `{source, target}` and returns its index.
    ///
    /// # Errors
    /// Returns [`CanopyError::InvalidVertex`] when an endpoint is out of
    /// range.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(CanopyError::InvalidVertex {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.sources.push(source);
        self.targets.push(target);
        Ok(self.sources.len() - 1)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_edges(&self) -> usize { self.sources.len() }

    /// Returns the endpoints of edge `index` as stored at insertion.
    ///
    /// # Panics
    /// Panics when `index >= num_edges()`.
    #[must_use]
    pub fn edge(&self, index: usize) -> (usize, usize) {
        (self.sources[index], self.targets[index])
    }

    /// Returns the first endpoint of edge `index`.
    ///
    /// # Panics
    /// Panics when `index >= num_edges()`.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self, index: usize) -> usize { self.sources[index] }

    /// Returns the second endpoint of edge `index`.
    ///
    /// # Panics
    /// Panics when `index >= num_edges()`.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self, index: usize) -> usize { self.targets[index] }

    /// Iterates over the edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sources
            .iter()
            .copied()
            .zip(self.targets.iter().copied())
    }
}
