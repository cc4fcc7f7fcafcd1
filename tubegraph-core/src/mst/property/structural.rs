//! Property 2: Structural invariant verification.
//!
//! For every forest returned by Prim or Kruskal, verifies:
//!
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` reported components.
//! - **Connectivity**: connected input yields a spanning tree from both
//!   constructors.
//! - **Provenance**: each selected edge exists in the input with the same
//!   weight, so the removable edges are exactly the rest of the input.
//! - **Undirected output**: the tree graph is undirected and weighted.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::disjoint_set::DisjointSet;
use crate::graph::WeightedGraph;
use crate::mst::{SpanningForest, kruskal, prim};

use super::helpers::count_input_components;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let input_components = count_input_components(fixture);

    let forests = [
        (
            "kruskal",
            kruskal(&graph).map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?,
        ),
        (
            "prim",
            prim(&graph, 0).map_err(|err| TestCaseError::fail(format!("prim failed: {err}")))?,
        ),
    ];

    for (name, forest) in &forests {
        validate_undirected(forest).map_err(|msg| fail(name, &msg, fixture))?;
        validate_acyclicity(forest).map_err(|msg| fail(name, &msg, fixture))?;
        validate_edge_count(forest).map_err(|msg| fail(name, &msg, fixture))?;
        validate_provenance(forest, &graph).map_err(|msg| fail(name, &msg, fixture))?;
        if input_components == 1 && !forest.is_spanning_tree() {
            return Err(fail(
                name,
                &format!(
                    "input is connected but output has {} components",
                    forest.component_count()
                ),
                fixture,
            ));
        }
    }
    Ok(())
}

fn fail(name: &str, msg: &str, fixture: &MstFixture) -> TestCaseError {
    TestCaseError::fail(format!("{name}: {msg} ({})", fixture.context()))
}

// ── Validation helpers ──────────────────────────────────────────────────

fn validate_undirected(forest: &SpanningForest) -> Result<(), String> {
    let tree = forest.tree();
    if tree.is_directed() || !tree.is_weighted() {
        return Err(format!("tree has config {:?}", tree.config()));
    }
    Ok(())
}

fn validate_acyclicity(forest: &SpanningForest) -> Result<(), String> {
    let mut sets = DisjointSet::new(forest.tree().card_v());
    for edge in forest.edges() {
        let merged = sets
            .union(edge.source(), edge.target())
            .map_err(|err| err.to_string())?;
        if !merged {
            return Err(format!(
                "edge ({}, {}) creates a cycle",
                edge.source(),
                edge.target()
            ));
        }
    }
    Ok(())
}

fn validate_edge_count(forest: &SpanningForest) -> Result<(), String> {
    let card_v = forest.tree().card_v();
    let expected = card_v - forest.component_count();
    if forest.edge_count() != expected {
        return Err(format!(
            "edge count {}, expected n - c = {expected} (n={card_v}, c={})",
            forest.edge_count(),
            forest.component_count(),
        ));
    }
    Ok(())
}

fn validate_provenance(forest: &SpanningForest, graph: &WeightedGraph) -> Result<(), String> {
    let removable = forest.removable_edges(graph);
    if removable.len() + forest.edge_count() != graph.edge_count() {
        return Err(format!(
            "{} removable + {} kept != {} input edges",
            removable.len(),
            forest.edge_count(),
            graph.edge_count(),
        ));
    }
    Ok(())
}
