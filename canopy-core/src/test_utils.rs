//! Shared helpers for the in-crate test suites.

use proptest::test_runner::Config;

use crate::UndirectedGraph;

/// Proptest configuration shared by the property suites.
///
/// Keeps the case count moderate so the suites stay fast under `cargo
/// test`; failures persist regression files as usual.
pub(crate) fn suite_proptest_config() -> Config {
    Config {
        cases: 64,
        ..Config::default()
    }
}

/// Builds a graph from `(source, target)` pairs.
///
/// # Panics
/// Panics when an endpoint is out of range; tests construct valid graphs.
pub(crate) fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(vertex_count);
    for &(source, target) in edges {
        graph.add_edge(source, target).expect("valid endpoints");
    }
    graph
}

/// The four-cycle fixture used across the suites: vertices `0..4`, edges
/// `(0,1) (1,2) (2,3) (3,0)` with weights `1, 3, 2, 4`.
pub(crate) fn four_cycle() -> (UndirectedGraph, Vec<f32>) {
    let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    (graph, vec![1.0, 3.0, 2.0, 4.0])
}
