//! Strategy builders for the hierarchy property tests.
//!
//! Every fixture is a connected graph: a random spanning tree guarantees
//! connectivity, extra random edges add cycles, and the weight distribution
//! controls how hard tie-breaking is exercised. Heavily tied and plateau
//! weights matter most: they stress the stable sort, the equal-altitude
//! collapse of the quasi-flat zones and the cut enumeration.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::UndirectedGraph;

/// Smallest generated vertex count.
const MIN_VERTICES: usize = 2;
/// Largest generated vertex count.
const MAX_VERTICES: usize = 48;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide continuous range; ties are unlikely.
    Spread,
    /// Weights drawn from a handful of integer levels; ties are common.
    Tied,
    /// Every weight equal: one big plateau.
    Plateau,
}

impl WeightDistribution {
    fn sample(self, rng: &mut SmallRng) -> f32 {
        match self {
            Self::Spread => rng.gen_range(0.0f32..100.0),
            Self::Tied => rng.gen_range(0u8..5) as f32,
            Self::Plateau => 1.0,
        }
    }
}

/// A connected edge-weighted graph for pipeline properties.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) graph: UndirectedGraph,
    pub(super) weights: Vec<f32>,
}

/// Generates a fixture for a specific distribution and seed.
pub(super) fn generate_fixture(distribution: WeightDistribution, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = UndirectedGraph::new(vertex_count);
    let mut weights = Vec::new();

    // spanning tree first, so the graph is connected by construction
    for vertex in 1..vertex_count {
        let anchor = rng.gen_range(0..vertex);
        graph.add_edge(anchor, vertex).expect("valid endpoints");
        weights.push(distribution.sample(&mut rng));
    }
    let extra = rng.gen_range(0..vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source == target {
            continue;
        }
        graph.add_edge(source, target).expect("valid endpoints");
        weights.push(distribution.sample(&mut rng));
    }

    GraphFixture { graph, weights }
}

/// Generates fixtures across all weight distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (
        prop_oneof![
            Just(WeightDistribution::Spread),
            Just(WeightDistribution::Tied),
            Just(WeightDistribution::Plateau),
        ],
        any::<u64>(),
    )
        .prop_map(|(distribution, seed)| generate_fixture(distribution, seed))
}

/// Generates a seeded node predicate for the simplification properties:
/// every node is selected independently with roughly one-in-three odds.
pub(super) fn predicate_from_seed(node_count: usize, seed: u64) -> Vec<bool> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..node_count).map(|_| rng.gen_range(0u8..3) == 0).collect()
}
