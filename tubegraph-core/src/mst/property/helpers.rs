//! Shared helper functions for MST property-based tests.

use crate::disjoint_set::DisjointSet;
use crate::graph::Vertex;

use super::types::MstFixture;

/// Returns the component label of every vertex in the fixture's input
/// graph, computed independently of the constructors under test.
pub(super) fn input_components(fixture: &MstFixture) -> Vec<Vertex> {
    let mut sets = DisjointSet::new(fixture.card_v);
    for &(u, v, _) in &fixture.edges {
        sets.union(u, v).expect("fixture edges stay in range");
    }
    (0..fixture.card_v)
        .map(|vertex| sets.find(vertex).expect("vertex is in range"))
        .collect()
}

/// Counts the connected components of the fixture's input graph.
pub(super) fn count_input_components(fixture: &MstFixture) -> usize {
    let mut labels = input_components(fixture);
    labels.sort_unstable();
    labels.dedup();
    labels.len()
}
