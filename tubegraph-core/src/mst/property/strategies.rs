//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator emits `(u, v, weight)` rows
//! with `u != v` and integer-valued weights.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Vertex;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 4;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs, kept smaller to bound the
/// quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates MST fixtures covering all five weight distributions.
///
/// Uses `prop_oneof!` with weighting that biases towards the
/// `ManyIdentical` distribution, the main stress case for tie-breaking.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Parameters that vary between the probabilistic generators.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Generates a graph by probabilistically adding edges between all unique
/// vertex pairs, using a caller-supplied weight generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let card_v = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for (u, v) in all_pairs(0, card_v) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            edges.push(oriented(u, v, weight, rng));
        }
    }

    if edges.is_empty() {
        edges.push((0, 1, random_weight(rng)));
    }

    MstFixture {
        card_v,
        edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph whose edges carry pairwise distinct weights, drawn
/// from a shuffled pool so the MST is unique.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let mut pool: Vec<u32> = (1..=2_000).collect();
    shuffle(&mut pool, rng);
    let mut next = pool.into_iter();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        move |_| next.next().map_or(1.0, f64::from),
    )
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f64> = (0..weight_pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph by first building a random spanning tree
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges, which may duplicate existing pairs.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let card_v = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<Vertex> = (0..card_v).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = random_weight(rng);
        edges.push((pair[0], pair[1], weight));
    }

    let extra_count = rng.gen_range(card_v / 2..=card_v);
    for _ in 0..extra_count {
        let u = rng.gen_range(0..card_v);
        let v = rng.gen_range(0..card_v);
        if u != v {
            let weight = random_weight(rng);
            edges.push((u, v, weight));
        }
    }

    MstFixture {
        card_v,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph.
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        random_weight,
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each having random internal
/// structure. No cross-component edges are created.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let card_v: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for (u, v) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                let weight = random_weight(rng);
                edges.push(oriented(u, v, weight, rng));
            }
        }
        if size >= 2 && edges.len() == start_len {
            edges.push((offset, offset + 1, random_weight(rng)));
        }
        offset += size;
    }

    MstFixture {
        card_v,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn random_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(1_u32..100))
}

/// Randomly flips the endpoints so inputs are not always listed low to high.
fn oriented(u: Vertex, v: Vertex, weight: f64, rng: &mut SmallRng) -> (Vertex, Vertex, f64) {
    if rng.gen_bool(0.5) {
        (u, v, weight)
    } else {
        (v, u, weight)
    }
}

/// Returns all unique pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(Vertex, Vertex)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Implemented by hand to bias the weighting towards ManyIdentical.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
