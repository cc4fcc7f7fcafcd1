//! Lazy priority queue for Dijkstra.
//!
//! Entries are never updated in place. A vertex may be queued several times
//! with decreasing distances; the caller compares each popped distance with
//! its best-known distance and drops stale entries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Vertex;

#[derive(Clone, Copy, Debug)]
struct Tentative {
    distance: f64,
    vertex: Vertex,
}

impl Ord for Tentative {
    // Reversed so that `BinaryHeap` pops the smallest distance first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Tentative {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tentative {}

#[derive(Debug, Default)]
pub(super) struct LazyHeap {
    entries: BinaryHeap<Tentative>,
}

impl LazyHeap {
    pub(super) fn push(&mut self, vertex: Vertex, distance: f64) {
        self.entries.push(Tentative { distance, vertex });
    }

    pub(super) fn pop(&mut self) -> Option<(Vertex, f64)> {
        self.entries
            .pop()
            .map(|entry| (entry.vertex, entry.distance))
    }
}
