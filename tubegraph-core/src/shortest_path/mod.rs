//! Single-source shortest paths (Dijkstra).
//!
//! Two queue strategies are available. [`HeapStrategy::Lazy`] pushes a fresh
//! entry every time a distance improves and discards stale entries on pop;
//! [`HeapStrategy::DecreaseKey`] keeps one entry per vertex in a
//! [`MinHeapPriorityQueue`] and lowers it in place. Both produce identical
//! distances.
//!
//! Every run owns its distance table, predecessor table, and queue, so
//! independent runs over one shared [`WeightedGraph`] may proceed in
//! parallel.

mod lazy;

use tracing::{debug, instrument};

use crate::{
    error::{PathError, QueueError, SearchError},
    graph::{Vertex, WeightedGraph},
    queue::MinHeapPriorityQueue,
};

use self::lazy::LazyHeap;

/// Queue strategy used by [`dijkstra_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HeapStrategy {
    /// Push duplicates and skip stale pops.
    #[default]
    Lazy,
    /// Keep one queue entry per vertex and lower its key in place.
    DecreaseKey,
}

/// Distances and predecessors produced by one Dijkstra run.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: Vertex,
    distances: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    /// Returns the vertex the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the number of vertices covered by the tables.
    #[must_use]
    pub fn card_v(&self) -> usize {
        self.distances.len()
    }

    /// Returns the distance table; unreachable vertices hold infinity.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Returns the predecessor table; the source and unreachable vertices
    /// hold `None`.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    /// Returns the distance to `vertex`, or infinity when it is unreachable
    /// or outside the graph.
    #[must_use]
    pub fn distance(&self, vertex: Vertex) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns the vertex preceding `vertex` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Returns `true` when a path from the source to `vertex` exists.
    #[must_use]
    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Returns the number of vertices reachable from the source, the source
    /// included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Reconstructs the shortest path from the source to `target` by walking
    /// predecessors backwards.
    ///
    /// The walk stops after `card_v` steps so that a cyclic predecessor table
    /// is reported instead of looping forever.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidVertex`] when `target` is outside the
    /// graph, [`PathError::Unreachable`] when no path exists, and
    /// [`PathError::CorruptPredecessors`] when the chain cycles or ends
    /// anywhere but the source.
    ///
    /// # Examples
    /// ```
    /// use tubegraph_core::{GraphConfig, WeightedGraph, dijkstra};
    ///
    /// let mut graph = WeightedGraph::new(3, GraphConfig::new());
    /// graph.insert_edge(0, 1, 1.0)?;
    /// graph.insert_edge(1, 2, 2.0)?;
    /// graph.insert_edge(0, 2, 5.0)?;
    /// let paths = dijkstra(&graph, 0)?;
    /// let path = paths.path_to(2)?;
    /// assert_eq!(path.vertices(), &[0, 1, 2]);
    /// assert_eq!(path.duration(), 3.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn path_to(&self, target: Vertex) -> Result<Path, PathError> {
        let card_v = self.card_v();
        if target >= card_v {
            return Err(PathError::InvalidVertex {
                vertex: target,
                card_v,
            });
        }
        if !self.is_reachable(target) {
            return Err(PathError::Unreachable {
                origin: self.source,
                target,
            });
        }

        let corrupt = PathError::CorruptPredecessors {
            target,
            limit: card_v,
        };
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            if vertices.len() >= card_v {
                return Err(corrupt);
            }
            vertices.push(previous);
            current = previous;
        }
        if current != self.source {
            return Err(corrupt);
        }

        vertices.reverse();
        Ok(Path {
            vertices,
            duration: self.distance(target),
        })
    }
}

/// A reconstructed shortest path.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
    duration: f64,
}

impl Path {
    /// Returns the vertices from source to target, inclusive.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the reported distance of the target.
    #[must_use]
    #[rustfmt::skip]
    pub const fn duration(&self) -> f64 { self.duration }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Runs Dijkstra from `source` with the default [`HeapStrategy`].
///
/// # Errors
///
/// See [`dijkstra_with`].
pub fn dijkstra(graph: &WeightedGraph, source: Vertex) -> Result<ShortestPaths, SearchError> {
    dijkstra_with(graph, source, HeapStrategy::default())
}

/// Runs Dijkstra from `source` using the requested queue strategy.
///
/// # Errors
///
/// Returns [`SearchError::InvalidSource`] when `source` is outside the
/// graph, [`SearchError::NegativeWeight`] when any edge weight is negative,
/// and [`SearchError::Queue`] if the priority queue reports a contract
/// violation.
#[instrument(
    name = "shortest_path.dijkstra",
    err,
    skip(graph),
    fields(card_v = graph.card_v()),
)]
pub fn dijkstra_with(
    graph: &WeightedGraph,
    source: Vertex,
    strategy: HeapStrategy,
) -> Result<ShortestPaths, SearchError> {
    let card_v = graph.card_v();
    if source >= card_v {
        return Err(SearchError::InvalidSource {
            vertex: source,
            card_v,
        });
    }
    if let Some((u, edge)) = graph.entries().find(|(_, edge)| edge.weight() < 0.0) {
        return Err(SearchError::NegativeWeight { u, v: edge.v() });
    }

    let mut search = Search::new(card_v, source);
    match strategy {
        HeapStrategy::Lazy => search.run_lazy(graph)?,
        HeapStrategy::DecreaseKey => search.run_decrease_key(graph)?,
    }

    let stale = search.stale;
    #[cfg(feature = "metrics")]
    {
        metrics::counter!("tubegraph_dijkstra_runs").increment(1);
        metrics::counter!("tubegraph_stale_heap_entries").increment(stale);
    }

    let paths = search.finish();
    debug!(reached = paths.reached(), stale, "dijkstra completed");
    Ok(paths)
}

struct Search {
    source: Vertex,
    distances: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
    finalized: Vec<bool>,
    stale: u64,
}

impl Search {
    fn new(card_v: usize, source: Vertex) -> Self {
        let mut distances = vec![f64::INFINITY; card_v];
        distances[source] = 0.0;
        Self {
            source,
            distances,
            predecessors: vec![None; card_v],
            finalized: vec![false; card_v],
            stale: 0,
        }
    }

    fn run_lazy(&mut self, graph: &WeightedGraph) -> Result<(), QueueError> {
        let mut heap = LazyHeap::default();
        heap.push(self.source, 0.0);
        while let Some((u, distance)) = heap.pop() {
            if self.finalized[u] || distance > self.distances[u] {
                self.stale += 1;
                continue;
            }
            self.finalized[u] = true;
            self.relax(graph, u, |v, candidate| {
                heap.push(v, candidate);
                Ok(())
            })?;
        }
        Ok(())
    }

    fn run_decrease_key(&mut self, graph: &WeightedGraph) -> Result<(), QueueError> {
        let mut queue = MinHeapPriorityQueue::new(self.distances.len());
        queue.insert_with_key(self.source, 0.0)?;
        while !queue.is_empty() {
            let u = queue.extract_min()?;
            self.finalized[u] = true;
            self.relax(graph, u, |v, candidate| {
                if queue.contains(v) {
                    queue.decrease_key(v, candidate)
                } else {
                    queue.insert_with_key(v, candidate)
                }
            })?;
        }
        Ok(())
    }

    /// Relaxes every edge leaving the finalised vertex `u`, reporting each
    /// improved vertex to `improve`.
    fn relax(
        &mut self,
        graph: &WeightedGraph,
        u: Vertex,
        mut improve: impl FnMut(Vertex, f64) -> Result<(), QueueError>,
    ) -> Result<(), QueueError> {
        let base = self.distances[u];
        for edge in graph.neighbours(u) {
            let v = edge.v();
            if self.finalized[v] {
                continue;
            }
            let candidate = base + edge.weight();
            if candidate < self.distances[v] {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
                improve(v, candidate)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> ShortestPaths {
        ShortestPaths {
            source: self.source,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}
