//! All-pairs journey statistics.
//!
//! One Dijkstra run per source, each owning its own tables and queue, over a
//! shared read-only graph. With the `parallel` feature the runs are spread
//! across the rayon thread pool.
//!
//! Pairs are canonicalised by vertex id rather than by label: an undirected
//! graph contributes each unordered pair `{u, v}` once as `u < v`, a directed
//! graph contributes every ordered pair `u != v`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument};

use crate::{
    error::SearchError,
    graph::{Vertex, WeightedGraph},
    shortest_path::{Path, dijkstra},
};

/// The longest shortest-path journey in a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct LongestJourney {
    start: Vertex,
    end: Vertex,
    path: Path,
}

impl LongestJourney {
    /// Returns the first vertex of the journey.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> Vertex { self.start }

    /// Returns the last vertex of the journey.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> Vertex { self.end }

    /// Returns the journey duration.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.path.duration()
    }

    /// Returns the full path from `start` to `end`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn path(&self) -> &Path { &self.path }
}

/// Durations of every reachable journey plus the longest one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JourneyStatistics {
    durations: Vec<f64>,
    longest: Option<LongestJourney>,
}

impl JourneyStatistics {
    /// Returns the journey durations ordered by `(start, end)`.
    #[must_use]
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Returns the number of reachable journeys.
    #[must_use]
    pub fn journey_count(&self) -> usize {
        self.durations.len()
    }

    /// Returns the mean journey duration, or `None` when there are no
    /// journeys or their count does not fit in a `u32`.
    #[must_use]
    pub fn mean_duration(&self) -> Option<f64> {
        if self.durations.is_empty() {
            return None;
        }
        let count = u32::try_from(self.durations.len()).ok().map(f64::from)?;
        let total: f64 = self.durations.iter().sum();
        Some(total / count)
    }

    /// Returns the longest journey. Ties go to the first pair in
    /// `(start, end)` order.
    #[must_use]
    pub fn longest(&self) -> Option<&LongestJourney> {
        self.longest.as_ref()
    }
}

struct SourceJourneys {
    durations: Vec<f64>,
    longest: Option<LongestJourney>,
}

/// Computes journey statistics over every canonical vertex pair.
///
/// # Errors
///
/// Propagates [`SearchError`] from the per-source Dijkstra runs, e.g.
/// [`SearchError::NegativeWeight`].
///
/// # Examples
/// ```
/// use tubegraph_core::{GraphConfig, WeightedGraph, journey_statistics};
///
/// let mut graph = WeightedGraph::new(3, GraphConfig::new());
/// graph.insert_edge(0, 1, 2.0)?;
/// graph.insert_edge(1, 2, 4.0)?;
/// let stats = journey_statistics(&graph)?;
/// assert_eq!(stats.durations(), &[2.0, 6.0, 4.0]);
/// assert_eq!(stats.mean_duration(), Some(4.0));
/// let longest = stats.longest().expect("graph has journeys");
/// assert_eq!((longest.start(), longest.end()), (0, 2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "journeys.statistics",
    err,
    skip(graph),
    fields(card_v = graph.card_v(), directed = graph.is_directed()),
)]
pub fn journey_statistics(graph: &WeightedGraph) -> Result<JourneyStatistics, SearchError> {
    let sources = 0..graph.card_v();
    #[cfg(feature = "parallel")]
    let per_source = sources
        .into_par_iter()
        .map(|source| journeys_from(graph, source))
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let per_source = sources
        .map(|source| journeys_from(graph, source))
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = JourneyStatistics::default();
    for journeys in per_source {
        stats.durations.extend(journeys.durations);
        if let Some(candidate) = journeys.longest {
            if stats
                .longest
                .as_ref()
                .is_none_or(|best| candidate.duration() > best.duration())
            {
                stats.longest = Some(candidate);
            }
        }
    }

    info!(
        journeys = stats.journey_count(),
        longest = stats.longest.as_ref().map(LongestJourney::duration),
        "journey statistics computed"
    );
    Ok(stats)
}

fn journeys_from(graph: &WeightedGraph, source: Vertex) -> Result<SourceJourneys, SearchError> {
    let paths = dijkstra(graph, source)?;
    let directed = graph.is_directed();

    let mut durations = Vec::new();
    let mut best: Option<(Vertex, f64)> = None;
    for target in 0..graph.card_v() {
        let counted = if directed {
            target != source
        } else {
            target > source
        };
        if !counted || !paths.is_reachable(target) {
            continue;
        }
        let duration = paths.distance(target);
        durations.push(duration);
        if best.is_none_or(|(_, longest)| duration > longest) {
            best = Some((target, duration));
        }
    }

    let longest = best
        .map(|(end, _)| {
            paths.path_to(end).map(|path| LongestJourney {
                start: source,
                end,
                path,
            })
        })
        .transpose()?;
    Ok(SourceJourneys { durations, longest })
}
