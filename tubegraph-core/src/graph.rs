//! Adjacency-list graph over the dense vertex range `0..card_v`.
//!
//! The graph is built once through [`WeightedGraph::insert_edge`] and then
//! only read by the algorithms. Undirected edges are mirrored: each endpoint
//! owns its own [`Edge`] value. Self-loops are not rejected here; filtering
//! them is the caller's concern. Parallel edges are kept as inserted.

use std::cmp::Ordering;

use crate::error::GraphError;

/// Dense vertex identifier in `0..card_v`.
pub type Vertex = usize;

/// Weight stored for every edge of an unweighted graph.
pub const UNIT_WEIGHT: f64 = 1.0;

/// One adjacency-list entry: the other endpoint and the edge weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    v: Vertex,
    weight: f64,
}

impl Edge {
    /// Creates an adjacency entry pointing at `v`.
    #[must_use]
    pub const fn new(v: Vertex, weight: f64) -> Self {
        Self { v, weight }
    }

    /// Returns the endpoint this entry leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> Vertex { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// An edge listed with both endpoints.
///
/// Edge lists of undirected graphs hold each edge once with
/// `source < target`; directed lists keep the stored orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
    source: Vertex,
    target: Vertex,
    weight: f64,
}

impl GraphEdge {
    /// Creates an edge record.
    #[must_use]
    pub const fn new(source: Vertex, target: Vertex, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> Vertex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Orders edges by `(source, target, weight)` using a total order on
    /// weights.
    #[must_use]
    pub fn cmp_endpoints(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.weight.total_cmp(&other.weight))
    }
}

/// Shape of a [`WeightedGraph`]: orientation, weighting, and how rows are
/// ingested by [`WeightedGraph::from_triples`].
///
/// # Examples
/// ```
/// use tubegraph_core::GraphConfig;
///
/// let config = GraphConfig::new().with_directed(true);
/// assert!(config.directed());
/// assert!(config.weighted());
/// assert!(!config.dedup_pairs());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphConfig {
    directed: bool,
    weighted: bool,
    dedup_pairs: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: true,
            dedup_pairs: false,
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration: undirected, weighted, keeping
    /// parallel rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether edges are directed.
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets whether weights are kept. Unweighted graphs store
    /// [`UNIT_WEIGHT`] on every edge.
    #[must_use]
    pub const fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Sets whether [`WeightedGraph::from_triples`] skips a row whose
    /// endpoints are already joined by an edge.
    #[must_use]
    pub const fn with_dedup_pairs(mut self, dedup_pairs: bool) -> Self {
        self.dedup_pairs = dedup_pairs;
        self
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn directed(&self) -> bool { self.directed }

    /// Returns `true` when weights are kept.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weighted(&self) -> bool { self.weighted }

    /// Returns `true` when duplicate endpoint pairs are skipped on ingest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dedup_pairs(&self) -> bool { self.dedup_pairs }
}

/// Adjacency-list graph with a fixed vertex count.
///
/// # Examples
/// ```
/// use tubegraph_core::{GraphConfig, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(3, GraphConfig::new());
/// graph.insert_edge(0, 1, 4.0)?;
/// graph.insert_edge(1, 2, 2.0)?;
/// assert!(graph.has_edge(1, 0));
/// assert_eq!(graph.edge_list().len(), 2);
/// # Ok::<(), tubegraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    card_v: usize,
    config: GraphConfig,
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    /// Creates a graph with `card_v` vertices and no edges.
    #[must_use]
    pub fn new(card_v: usize, config: GraphConfig) -> Self {
        Self {
            card_v,
            config,
            adjacency: vec![Vec::new(); card_v],
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn card_v(&self) -> usize { self.card_v }

    /// Returns the configuration the graph was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> GraphConfig { self.config }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns `true` when the graph keeps edge weights.
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Inserts an edge from `u` to `v`, mirrored to `v → u` when the graph
    /// is undirected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// `0..card_v`, and [`GraphError::NonFiniteWeight`] when a weighted graph
    /// receives a NaN or infinite weight.
    pub fn insert_edge(&mut self, u: Vertex, v: Vertex, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let weight = if self.config.weighted {
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { u, v });
            }
            weight
        } else {
            UNIT_WEIGHT
        };

        self.push(u, Edge::new(v, weight))?;
        if !self.config.directed {
            self.push(v, Edge::new(u, weight))?;
        }
        Ok(())
    }

    /// Returns the edges leaving `u` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] when `u` is outside the graph.
    pub fn adj_list(&self, u: Vertex) -> Result<&[Edge], GraphError> {
        self.adjacency
            .get(u)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidVertex {
                vertex: u,
                card_v: self.card_v,
            })
    }

    /// Returns the edges leaving `u`, or an empty slice when `u` is outside
    /// the graph. Algorithms validate their inputs up front and use this on
    /// their hot paths.
    pub(crate) fn neighbours(&self, u: Vertex) -> &[Edge] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` when `adj_list(u)` contains an entry for `v`.
    ///
    /// Runs in `O(degree(u))`.
    #[must_use]
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.neighbours(u).iter().any(|edge| edge.v == v)
    }

    /// Lists the graph's edges.
    ///
    /// Undirected graphs report each edge once, from the endpoint with the
    /// smaller id; a self-loop is reported once for its two mirrored
    /// entries. Directed graphs report every stored entry.
    #[must_use]
    pub fn edge_list(&self) -> Vec<GraphEdge> {
        let directed = self.config.directed;
        let mut listed = Vec::new();
        for (u, edges) in self.adjacency.iter().enumerate() {
            let mut loops = 0_usize;
            for edge in edges {
                let keep = if directed {
                    true
                } else if edge.v == u {
                    // Mirrored loop entries are pushed back to back.
                    loops += 1;
                    loops % 2 == 1
                } else {
                    u < edge.v
                };
                if keep {
                    listed.push(GraphEdge::new(u, edge.v, edge.weight));
                }
            }
        }
        listed
    }

    /// Returns the number of edges, counting each undirected edge once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.config.directed {
            return entries;
        }
        let loops = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(u, edges)| edges.iter().filter(|edge| edge.v == u).count())
            .sum::<usize>();
        // A self-loop is mirrored onto its own list, so it appears twice.
        (entries - loops) / 2 + loops / 2
    }

    /// Iterates over every edge weight, visiting mirrored entries of
    /// undirected graphs twice.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (Vertex, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |edge| (u, edge)))
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.card_v {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                card_v: self.card_v,
            })
        }
    }

    fn push(&mut self, u: Vertex, edge: Edge) -> Result<(), GraphError> {
        let card_v = self.card_v;
        self.adjacency
            .get_mut(u)
            .ok_or(GraphError::InvalidVertex { vertex: u, card_v })?
            .push(edge);
        Ok(())
    }
}
