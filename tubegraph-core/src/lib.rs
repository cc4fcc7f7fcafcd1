//! Tubegraph core library.
//!
//! Weighted graphs over dense `usize` vertex ids, plus the algorithms that
//! run on them: Dijkstra shortest paths (lazy or decrease-key), Prim and
//! Kruskal minimum spanning trees, and all-pairs journey statistics. Graphs
//! built from labelled rows carry a [`LabelIndex`] for mapping results back
//! to station names.
//!
//! # Examples
//! ```
//! use tubegraph_core::{GraphConfig, Triple, WeightedGraph, dijkstra, kruskal};
//!
//! let rows = [
//!     Triple::new("A", "B", 1.0),
//!     Triple::new("B", "C", 2.0),
//!     Triple::new("A", "C", 5.0),
//! ];
//! let (graph, labels) = WeightedGraph::from_triples(&rows, GraphConfig::new())?;
//!
//! let a = labels.index_of("A").expect("A was loaded");
//! let c = labels.index_of("C").expect("C was loaded");
//! let journey = labels.journey(&dijkstra(&graph, a)?, c)?;
//! assert_eq!(journey.stations(), ["A", "B", "C"]);
//! assert_eq!(journey.duration(), 3.0);
//!
//! let forest = kruskal(&graph)?;
//! assert_eq!(forest.total_weight(), 3.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod journeys;
mod labels;
mod mst;
mod queue;
mod shortest_path;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, MstError, MstErrorCode,
        PathError, PathErrorCode, QueueError, QueueErrorCode, SearchError, SearchErrorCode,
    },
    graph::{Edge, GraphConfig, GraphEdge, UNIT_WEIGHT, Vertex, WeightedGraph},
    journeys::{JourneyStatistics, LongestJourney, journey_statistics},
    labels::{Journey, LabelIndex, Triple, VertexAllocator},
    mst::{SpanningForest, kruskal, prim},
    queue::MinHeapPriorityQueue,
    shortest_path::{HeapStrategy, Path, ShortestPaths, dijkstra, dijkstra_with},
};
