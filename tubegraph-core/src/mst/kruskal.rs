//! Kruskal's algorithm over the disjoint-set structure.

use tracing::{debug, instrument, trace, warn};

use crate::{
    disjoint_set::DisjointSet,
    error::MstError,
    graph::{GraphConfig, WeightedGraph},
};

use super::SpanningForest;

/// Computes a minimum spanning forest by scanning edges in ascending weight
/// order.
///
/// Each undirected edge is considered once. The sort is stable, so among
/// equal-weight edges the one listed first wins and repeated runs on the
/// same input select the same edges. The scan stops once `card_v - 1`
/// edges are accepted.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when `card_v == 0` and
/// [`MstError::DirectedGraph`] for directed input. [`MstError::DisjointSet`]
/// and [`MstError::Graph`] only surface if an edge names a vertex outside
/// the graph.
///
/// # Examples
/// ```
/// use tubegraph_core::{GraphConfig, WeightedGraph, kruskal};
///
/// let mut graph = WeightedGraph::new(3, GraphConfig::new());
/// graph.insert_edge(0, 1, 1.0)?;
/// graph.insert_edge(1, 2, 2.0)?;
/// graph.insert_edge(0, 2, 5.0)?;
/// let forest = kruskal(&graph)?;
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(!forest.tree().has_edge(0, 2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(card_v = graph.card_v()),
)]
pub fn kruskal(graph: &WeightedGraph) -> Result<SpanningForest, MstError> {
    let card_v = graph.card_v();
    if card_v == 0 {
        return Err(MstError::EmptyGraph);
    }
    if graph.is_directed() {
        return Err(MstError::DirectedGraph);
    }

    let mut edges = graph.edge_list();
    edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut sets = DisjointSet::new(card_v);
    let mut tree = WeightedGraph::new(card_v, GraphConfig::new());
    let wanted = card_v - 1;
    let mut accepted = 0_usize;
    for edge in &edges {
        if accepted == wanted {
            break;
        }
        let (u, v) = (edge.source(), edge.target());
        if sets.same_set(u, v)? {
            trace!(u, v, weight = edge.weight(), "edge closes a cycle");
            continue;
        }
        sets.union(u, v)?;
        tree.insert_edge(u, v, edge.weight())?;
        accepted += 1;
    }

    #[cfg(feature = "metrics")]
    metrics::counter!("tubegraph_mst_runs", "algorithm" => "kruskal").increment(1);

    let component_count = sets.components();
    if component_count > 1 {
        warn!(
            component_count,
            edges = accepted,
            "graph is disconnected; kruskal returned a spanning forest"
        );
    } else {
        debug!(edges = accepted, "kruskal completed");
    }
    Ok(SpanningForest::new(tree, component_count))
}
