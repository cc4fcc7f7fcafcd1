//! Property 1: Equivalence with the dense-matrix oracle.
//!
//! Kruskal must match the oracle's total weight, edge count, and component
//! count on every input. Prim must match the oracle's total weight on
//! connected input and span exactly the root's component otherwise.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim};

use super::helpers::input_components;
use super::oracle::dense_prim;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = dense_prim(fixture.card_v, &fixture.edges);

    let forest = kruskal(&graph).map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.context()))
    })?;
    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight {}, oracle {} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.context(),
        )));
    }
    if forest.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal edge count {}, oracle {} ({})",
            forest.edge_count(),
            oracle.edge_count,
            fixture.context(),
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "kruskal component count {}, oracle {} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    let tree = prim(&graph, 0).map_err(|err| {
        TestCaseError::fail(format!("prim failed: {err} ({})", fixture.context()))
    })?;
    if oracle.component_count == 1 {
        if tree.total_weight() != oracle.total_weight || !tree.is_spanning_tree() {
            return Err(TestCaseError::fail(format!(
                "prim weight {} (spanning={}), oracle {} ({})",
                tree.total_weight(),
                tree.is_spanning_tree(),
                oracle.total_weight,
                fixture.context(),
            )));
        }
        return Ok(());
    }

    let labels = input_components(fixture);
    let root_size = labels.iter().filter(|&&label| label == labels[0]).count();
    if tree.edge_count() != root_size - 1 {
        return Err(TestCaseError::fail(format!(
            "prim kept {} edges, root component has {root_size} vertices ({})",
            tree.edge_count(),
            fixture.context(),
        )));
    }
    if let Some(stray) = tree
        .covered_vertices()
        .into_iter()
        .find(|&vertex| labels[vertex] != labels[0])
    {
        return Err(TestCaseError::fail(format!(
            "prim reached vertex {stray} outside the root component ({})",
            fixture.context(),
        )));
    }
    Ok(())
}
