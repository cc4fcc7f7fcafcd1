//! Mapping between external vertex labels and dense vertex ids.
//!
//! A loader hands the core a list of [`Triple`] rows. [`VertexAllocator`]
//! assigns ids in first-seen order and is frozen into an immutable
//! [`LabelIndex`] before the graph is built, so the bijection cannot change
//! while algorithms run.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, PathError},
    graph::{GraphConfig, Vertex, WeightedGraph},
    shortest_path::ShortestPaths,
};

/// One loader row: two vertex labels and the weight joining them.
#[derive(Clone, Debug, PartialEq)]
pub struct Triple {
    /// Label of the first endpoint.
    pub a: String,
    /// Label of the second endpoint.
    pub b: String,
    /// Edge weight, e.g. travel time in minutes.
    pub weight: f64,
}

impl Triple {
    /// Creates a row from anything convertible into labels.
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }
}

/// Deterministic, append-only id allocator for labels.
#[derive(Clone, Debug, Default)]
pub struct VertexAllocator {
    ids: HashMap<Arc<str>, Vertex>,
    labels: Vec<Arc<str>>,
}

impl VertexAllocator {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, allocating the next free id when the
    /// label has not been seen before.
    pub fn allocate(&mut self, label: &str) -> Vertex {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        let label: Arc<str> = Arc::from(label);
        self.ids.insert(Arc::clone(&label), id);
        self.labels.push(label);
        id
    }

    /// Returns the number of allocated ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no label has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Freezes the allocator into an immutable index.
    #[must_use]
    pub fn freeze(self) -> LabelIndex {
        LabelIndex {
            ids: self.ids,
            labels: self.labels,
        }
    }
}

/// Immutable bijection between labels and vertex ids.
///
/// # Examples
/// ```
/// use tubegraph_core::VertexAllocator;
///
/// let mut allocator = VertexAllocator::new();
/// allocator.allocate("Bank");
/// allocator.allocate("Angel");
/// let index = allocator.freeze();
/// assert_eq!(index.index_of("Angel"), Some(1));
/// assert_eq!(index.label_of(0), Some("Bank"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    ids: HashMap<Arc<str>, Vertex>,
    labels: Vec<Arc<str>>,
}

impl LabelIndex {
    /// Returns the id assigned to `label`.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<Vertex> {
        self.ids.get(label).copied()
    }

    /// Returns the label assigned to `vertex`.
    #[must_use]
    pub fn label_of(&self, vertex: Vertex) -> Option<&str> {
        self.labels.get(vertex).map(AsRef::as_ref)
    }

    /// Returns the number of labels, which is the graph's `card_v`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the index holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over `(vertex, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(vertex, label)| (vertex, label.as_ref()))
    }

    /// Resolves a triple into `(a, b, weight)` vertex ids.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownLabel`] when either label is missing.
    pub fn resolve(&self, triple: &Triple) -> Result<(Vertex, Vertex, f64), GraphError> {
        let lookup = |label: &str| {
            self.index_of(label).ok_or_else(|| GraphError::UnknownLabel {
                label: label.to_owned(),
            })
        };
        Ok((lookup(&triple.a)?, lookup(&triple.b)?, triple.weight))
    }

    /// Reconstructs the labelled journey from the search source to `target`.
    ///
    /// # Errors
    ///
    /// Propagates [`PathError`] from [`ShortestPaths::path_to`], including
    /// [`PathError::Unreachable`] when no path exists.
    pub fn journey(&self, paths: &ShortestPaths, target: Vertex) -> Result<Journey, PathError> {
        let path = paths.path_to(target)?;
        let stations = path
            .vertices()
            .iter()
            .map(|&vertex| {
                self.label_of(vertex)
                    .map(str::to_owned)
                    .ok_or(PathError::InvalidVertex {
                        vertex,
                        card_v: self.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Journey {
            stations,
            duration: path.duration(),
        })
    }
}

/// A shortest path expressed in labels, ready for presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Journey {
    stations: Vec<String>,
    duration: f64,
}

impl Journey {
    /// Returns the labels from start to end, inclusive.
    #[must_use]
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Returns the total weight of the journey.
    #[must_use]
    #[rustfmt::skip]
    pub const fn duration(&self) -> f64 { self.duration }
}

impl WeightedGraph {
    /// Builds a graph from loader rows, allocating vertex ids in first-seen
    /// order.
    ///
    /// Rows whose endpoints share a label are skipped. When
    /// [`GraphConfig::dedup_pairs`] is set, a row is also skipped if its
    /// endpoints are already joined.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonFiniteWeight`] for a NaN or infinite weight
    /// on a weighted graph.
    ///
    /// # Examples
    /// ```
    /// use tubegraph_core::{GraphConfig, Triple, WeightedGraph};
    ///
    /// let rows = [Triple::new("A", "B", 1.0), Triple::new("B", "C", 2.0)];
    /// let (graph, labels) = WeightedGraph::from_triples(&rows, GraphConfig::new())?;
    /// assert_eq!(graph.card_v(), 3);
    /// assert_eq!(labels.index_of("C"), Some(2));
    /// # Ok::<(), tubegraph_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.from_triples",
        err,
        skip(triples),
        fields(rows = triples.len(), directed = config.directed()),
    )]
    pub fn from_triples(
        triples: &[Triple],
        config: GraphConfig,
    ) -> Result<(Self, LabelIndex), GraphError> {
        let mut allocator = VertexAllocator::new();
        for triple in triples {
            allocator.allocate(&triple.a);
            allocator.allocate(&triple.b);
        }
        let labels = allocator.freeze();

        let mut graph = Self::new(labels.len(), config);
        let mut skipped = 0_usize;
        for triple in triples {
            let (u, v, weight) = labels.resolve(triple)?;
            if u == v || (config.dedup_pairs() && graph.has_edge(u, v)) {
                skipped += 1;
                continue;
            }
            graph.insert_edge(u, v, weight)?;
        }

        debug!(
            card_v = graph.card_v(),
            edges = graph.edge_count(),
            skipped,
            "graph built from triples"
        );
        Ok((graph, labels))
    }
}
