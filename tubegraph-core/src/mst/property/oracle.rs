//! Dense-matrix oracle for MST property verification.
//!
//! Computes the minimum spanning forest weight with the textbook `O(V^2)`
//! array-scan variant of Prim's algorithm over an adjacency matrix that
//! keeps only the cheapest parallel edge. It shares no code with the heap
//! or disjoint-set constructors, which makes it a useful cross-check.

use crate::graph::Vertex;

/// Result of the oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components, isolated vertices included.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over every component.
pub(super) fn dense_prim(card_v: usize, edges: &[(Vertex, Vertex, f64)]) -> OracleForest {
    let mut matrix = vec![vec![f64::INFINITY; card_v]; card_v];
    for &(u, v, weight) in edges {
        if u == v {
            continue;
        }
        if weight < matrix[u][v] {
            matrix[u][v] = weight;
            matrix[v][u] = weight;
        }
    }

    let mut in_tree = vec![false; card_v];
    let mut best = vec![f64::INFINITY; card_v];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..card_v {
        let next = (0..card_v)
            .filter(|&vertex| !in_tree[vertex])
            .min_by(|&a, &b| best[a].total_cmp(&best[b]));
        let Some(u) = next else { break };
        if best[u].is_infinite() {
            component_count += 1;
        } else {
            total_weight += best[u];
            edge_count += 1;
        }
        in_tree[u] = true;
        for v in 0..card_v {
            if !in_tree[v] && matrix[u][v] < best[v] {
                best[v] = matrix[u][v];
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}
