//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::graph::{GraphConfig, Vertex, WeightedGraph};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the MST constructors. Weights are
/// always integer-valued so totals compare exactly whatever the summation
/// order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with a random spanning tree plus roughly `0.5n` to `n`
    /// extra edges, parallel edges included.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, the generated undirected edges, and the
/// weight distribution used during generation, providing full context for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub card_v: usize,
    /// Generated `(u, v, weight)` rows in insertion order.
    pub edges: Vec<(Vertex, Vertex, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the undirected weighted graph described by the fixture.
    pub(super) fn graph(&self) -> WeightedGraph {
        crate::test_utils::graph_from_edges(self.card_v, GraphConfig::new(), &self.edges)
    }

    /// Renders the fixture context appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, card_v={}, edges={}",
            self.distribution,
            self.card_v,
            self.edges.len(),
        )
    }
}
