//! Minimum spanning tree (MST) construction.
//!
//! Two independent constructors are provided: [`prim`], driven by the
//! decrease-key [`crate::MinHeapPriorityQueue`], and [`kruskal`], driven by
//! the [`crate::DisjointSet`]. Both return a [`SpanningForest`] whose tree is
//! a new undirected, weighted [`WeightedGraph`] holding only the selected
//! edges.
//!
//! Disconnected input is not an error. The result reports how many
//! components it spans, and [`SpanningForest::is_spanning_tree`] is `false`
//! unless every vertex ended up in one tree.

mod kruskal;
mod prim;

use std::cmp::Ordering;

use crate::graph::{GraphEdge, Vertex, WeightedGraph};

pub use self::{kruskal::kruskal, prim::prim};

/// The output of an MST construction.
///
/// When the input graph is connected the forest is a minimum spanning tree.
/// Otherwise Kruskal yields a minimum spanning forest over every component,
/// while Prim only spans the root's component and leaves the remaining
/// vertices isolated.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    tree: WeightedGraph,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(tree: WeightedGraph, component_count: usize) -> Self {
        Self {
            tree,
            component_count,
        }
    }

    /// Returns the graph restricted to the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree(&self) -> &WeightedGraph { &self.tree }

    /// Consumes the forest and returns its graph.
    #[must_use]
    pub fn into_tree(self) -> WeightedGraph {
        self.tree
    }

    /// Returns the selected edges, each once with `source < target`.
    #[must_use]
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.tree.edge_list()
    }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// Returns the number of components in the resulting forest, isolated
    /// vertices included.
    ///
    /// For [`kruskal`] this matches the input graph's component count. A
    /// [`prim`] forest only grows the root's component, so every vertex it
    /// never reaches counts as a singleton and the value is
    /// `card_v - edge_count`: splitting four vertices into `{0, 1}` and
    /// `{2, 3}` gives 3 from Prim but 2 from Kruskal.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component,
    /// i.e. it has exactly `card_v - 1` edges.
    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the selected edge weights, counting each
    /// undirected edge once.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(GraphEdge::weight).sum()
    }

    /// Returns the vertices incident to at least one selected edge, in
    /// ascending order.
    #[must_use]
    pub fn covered_vertices(&self) -> Vec<Vertex> {
        (0..self.tree.card_v())
            .filter(|&vertex| !self.tree.neighbours(vertex).is_empty())
            .collect()
    }

    /// Returns the edges of `original` that the forest does not use,
    /// sorted by `(source, target, weight)`.
    ///
    /// `original` must be the undirected graph the forest was built from.
    /// Parallel edges are matched one for one, so a cheaper parallel edge
    /// kept in the tree leaves its costlier twin removable.
    #[must_use]
    pub fn removable_edges(&self, original: &WeightedGraph) -> Vec<GraphEdge> {
        let mut kept = self.edges();
        kept.sort_by(GraphEdge::cmp_endpoints);
        let mut all = original.edge_list();
        all.sort_by(GraphEdge::cmp_endpoints);

        let mut kept = kept.into_iter().peekable();
        all.into_iter()
            .filter(|edge| {
                while kept
                    .peek()
                    .is_some_and(|tree_edge| tree_edge.cmp_endpoints(edge) == Ordering::Less)
                {
                    kept.next();
                }
                if kept
                    .peek()
                    .is_some_and(|tree_edge| tree_edge.cmp_endpoints(edge) == Ordering::Equal)
                {
                    kept.next();
                    return false;
                }
                true
            })
            .collect()
    }
}
