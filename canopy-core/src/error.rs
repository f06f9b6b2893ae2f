//! Error types for the canopy core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes and a convenient result alias. All preconditions
//! are validated eagerly at the entry of public operations; errors are
//! surfaced, never silently corrected.

use std::fmt;

use thiserror::Error;

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, CanopyError>;

/// An error produced while building or querying a hierarchy.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CanopyError {
    /// A dense value array did not match the structure it annotates.
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        /// Description of the offending array.
        what: &'static str,
        /// Length required by the graph or tree.
        expected: usize,
        /// Length actually provided.
        actual: usize,
    },
    /// The operation requires a graph with at least one vertex.
    #[error("the graph has no vertices")]
    EmptyGraph,
    /// An edge endpoint referenced a vertex outside the graph.
    #[error("vertex {vertex} is out of range, the graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge {edge} has a non-finite weight")]
    NonFiniteWeight {
        /// Index of the offending edge.
        edge: usize,
    },
    /// The fusion loop exhausted the edges before spanning the graph.
    #[error("the graph is disconnected: {fused} fusions happened, {required} are required")]
    DisconnectedGraph {
        /// Number of fusions performed.
        fused: usize,
        /// Number of fusions a connected graph would produce.
        required: usize,
    },
    /// A tree was built from an empty parent array.
    #[error("a tree needs at least one node")]
    EmptyTree,
    /// A parent pointer violated the topological order of the parent array.
    #[error("node {node} has parent {parent}, which violates topological order")]
    InvalidParent {
        /// The offending node.
        node: usize,
        /// Its recorded parent.
        parent: usize,
    },
    /// A childless node appeared after the leaf prefix of the parent array.
    #[error("node {node} is childless but lies outside the leaf prefix")]
    LeafOrdering {
        /// The offending node.
        node: usize,
    },
    /// Node altitudes were unsuitable for horizontal-cut exploration.
    #[error("node {node} has altitude {altitude}, which is invalid for cut exploration")]
    InvalidAltitudes {
        /// The offending node.
        node: usize,
        /// Its altitude.
        altitude: f32,
    },
    /// An interior node had fewer than two children.
    #[error("node {node} has {arity} children and cannot be binarised")]
    NotBinarizable {
        /// The offending interior node.
        node: usize,
        /// Its number of children.
        arity: usize,
    },
}

impl CanopyError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> CanopyErrorCode {
        match self {
            Self::ShapeMismatch { .. } => CanopyErrorCode::ShapeMismatch,
            Self::EmptyGraph => CanopyErrorCode::EmptyGraph,
            Self::InvalidVertex { .. } => CanopyErrorCode::InvalidVertex,
            Self::NonFiniteWeight { .. } => CanopyErrorCode::NonFiniteWeight,
            Self::DisconnectedGraph { .. } => CanopyErrorCode::DisconnectedGraph,
            Self::EmptyTree => CanopyErrorCode::EmptyTree,
            Self::InvalidParent { .. } => CanopyErrorCode::InvalidParent,
            Self::LeafOrdering { .. } => CanopyErrorCode::LeafOrdering,
            Self::InvalidAltitudes { .. } => CanopyErrorCode::InvalidAltitudes,
            Self::NotBinarizable { .. } => CanopyErrorCode::NotBinarizable,
        }
    }
}

/// Machine-readable error codes for [`CanopyError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CanopyErrorCode {
    /// A dense value array did not match the structure it annotates.
    ShapeMismatch,
    /// The operation requires a graph with at least one vertex.
    EmptyGraph,
    /// An edge endpoint referenced a vertex outside the graph.
    InvalidVertex,
    /// An edge weight was NaN or infinite.
    NonFiniteWeight,
    /// The fusion loop exhausted the edges before spanning the graph.
    DisconnectedGraph,
    /// A tree was built from an empty parent array.
    EmptyTree,
    /// A parent pointer violated the topological order of the parent array.
    InvalidParent,
    /// A childless node appeared after the leaf prefix of the parent array.
    LeafOrdering,
    /// Node altitudes were unsuitable for horizontal-cut exploration.
    InvalidAltitudes,
    /// An interior node had fewer than two children.
    NotBinarizable,
}

impl CanopyErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::InvalidVertex => "INVALID_VERTEX",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::EmptyTree => "EMPTY_TREE",
            Self::InvalidParent => "INVALID_PARENT",
            Self::LeafOrdering => "LEAF_ORDERING",
            Self::InvalidAltitudes => "INVALID_ALTITUDES",
            Self::NotBinarizable => "NOT_BINARIZABLE",
        }
    }
}

impl fmt::Display for CanopyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
