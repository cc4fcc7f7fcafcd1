//! Prim's algorithm over the decrease-key priority queue.

use tracing::{debug, instrument, warn};

use crate::{
    error::MstError,
    graph::{GraphConfig, Vertex, WeightedGraph},
    queue::MinHeapPriorityQueue,
};

use super::SpanningForest;

/// Grows a minimum spanning tree from `root`.
///
/// Every vertex is queued up front with an infinite key, the root with key
/// zero. Each extracted vertex joins the tree and lowers the keys of its
/// unvisited neighbours in place. Once the smallest remaining key is
/// infinite, nothing else is reachable from `root` and the loop stops, so
/// vertices outside the root's component keep no predecessor.
///
/// # Errors
///
/// Returns [`MstError::DirectedGraph`] for directed input,
/// [`MstError::InvalidRoot`] when `root` is outside the graph (including
/// the empty graph), and [`MstError::Queue`] if the queue reports a
/// contract violation.
///
/// # Examples
/// ```
/// use tubegraph_core::{GraphConfig, WeightedGraph, prim};
///
/// let mut graph = WeightedGraph::new(4, GraphConfig::new());
/// graph.insert_edge(0, 1, 4.0)?;
/// graph.insert_edge(0, 2, 2.0)?;
/// graph.insert_edge(0, 3, 9.0)?;
/// let forest = prim(&graph, 0)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 15.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(card_v = graph.card_v()),
)]
pub fn prim(graph: &WeightedGraph, root: Vertex) -> Result<SpanningForest, MstError> {
    if graph.is_directed() {
        return Err(MstError::DirectedGraph);
    }
    let card_v = graph.card_v();
    if root >= card_v {
        return Err(MstError::InvalidRoot { root, card_v });
    }

    let mut keys = vec![f64::INFINITY; card_v];
    keys[root] = 0.0;
    let mut queue = MinHeapPriorityQueue::with_keys(keys);
    for vertex in 0..card_v {
        queue.insert(vertex)?;
    }

    let mut predecessors: Vec<Option<Vertex>> = vec![None; card_v];
    let mut visited = vec![false; card_v];
    while !queue.is_empty() {
        let u = queue.extract_min()?;
        if queue.keys()[u].is_infinite() {
            break;
        }
        visited[u] = true;
        for edge in graph.neighbours(u) {
            let v = edge.v();
            if !visited[v] && edge.weight() < queue.keys()[v] {
                predecessors[v] = Some(u);
                queue.decrease_key(v, edge.weight())?;
            }
        }
    }

    let mut tree = WeightedGraph::new(card_v, GraphConfig::new());
    for (v, predecessor) in predecessors.iter().enumerate() {
        if let Some(u) = *predecessor {
            tree.insert_edge(u, v, queue.keys()[v])?;
        }
    }

    #[cfg(feature = "metrics")]
    metrics::counter!("tubegraph_mst_runs", "algorithm" => "prim").increment(1);

    let component_count = card_v - tree.edge_count();
    if component_count > 1 {
        warn!(
            component_count,
            "graph is disconnected; prim spans only the root's component"
        );
    } else {
        debug!(edges = tree.edge_count(), "prim completed");
    }
    Ok(SpanningForest::new(tree, component_count))
}
