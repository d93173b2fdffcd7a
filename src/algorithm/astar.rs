use log::{debug, trace, warn};
use num_traits::{Float, NumCast, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use crate::algorithm::heuristic::DistanceMetric;
use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{SearchOutcome, ShortestPathAlgorithm};
use crate::data_structures::{HeapOrder, PriorityQueue};
use crate::graph::{KeyedGraph, VertexId};
use crate::{describe_key, Error, Result};

/// Where A* takes the estimate `h(v)` of the remaining cost from `v` to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicSource {
    /// The vertex's preloaded heuristic if set, otherwise the metric between
    /// its location and the target's, otherwise 0
    #[default]
    Auto,
    /// Only preloaded heuristics; a vertex without one is an error
    Preloaded,
    /// Only locations; a vertex (or target) without one is an error
    Locations,
    /// Always 0, which turns A* into a lazily seeded Dijkstra
    Zero,
}

impl HeuristicSource {
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicSource::Auto => "auto",
            HeuristicSource::Preloaded => "preloaded",
            HeuristicSource::Locations => "locations",
            HeuristicSource::Zero => "zero",
        }
    }
}

impl FromStr for HeuristicSource {
    type Err = Error;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        [
            HeuristicSource::Auto,
            HeuristicSource::Preloaded,
            HeuristicSource::Locations,
            HeuristicSource::Zero,
        ]
        .into_iter()
        .find(|source| source.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownName {
            kind: "heuristic source",
            name: name.to_string(),
        })
    }
}

impl fmt::Display for HeuristicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A* search with a lazily populated frontier.
///
/// Only the source is queued at first; a vertex enters the queue the first
/// time it is discovered and later improvements go through decrease-key. The
/// queue priority is `f = g + h`.
///
/// The result is optimal only if the heuristic is admissible (never
/// overestimates the remaining cost) and consistent (`h(u) <= w(u, v) + h(v)`
/// for every edge). This is not checked: with a bad heuristic the search
/// still terminates but may return a longer path.
///
/// Settled vertices are never re-opened. Under a consistent heuristic they
/// cannot improve anyway; under an inconsistent one this trades optimality
/// for a bound of one expansion per vertex.
#[derive(Debug, Clone)]
pub struct AStar {
    metric: DistanceMetric,
    source: HeuristicSource,
}

impl AStar {
    /// Creates A* with Manhattan distance and automatic heuristic selection
    pub fn new() -> Self {
        AStar {
            metric: DistanceMetric::default(),
            source: HeuristicSource::default(),
        }
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_heuristic_source(mut self, source: HeuristicSource) -> Self {
        self.source = source;
        self
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn heuristic_source(&self) -> HeuristicSource {
        self.source
    }

    /// Estimate of the remaining cost from `vertex` to `end`
    pub fn estimate<K, W>(&self, graph: &KeyedGraph<K, W>, vertex: VertexId, end: VertexId) -> Result<W>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
    {
        let v = graph.vertex_at(vertex);
        let target = graph.vertex_at(end);

        match self.source {
            HeuristicSource::Zero => Ok(W::zero()),
            HeuristicSource::Preloaded => v
                .heuristic()
                .ok_or_else(|| Error::MissingHeuristic(describe_key(v.key()))),
            HeuristicSource::Locations => {
                let from = v
                    .location()
                    .ok_or_else(|| Error::MissingLocation(describe_key(v.key())))?;
                let to = target
                    .location()
                    .ok_or_else(|| Error::MissingLocation(describe_key(target.key())))?;
                Ok(self.to_weight(self.metric.distance(&from, &to)))
            }
            HeuristicSource::Auto => {
                if let Some(h) = v.heuristic() {
                    return Ok(h);
                }
                match (v.location(), target.location()) {
                    (Some(from), Some(to)) => Ok(self.to_weight(self.metric.distance(&from, &to))),
                    _ => Ok(W::zero()),
                }
            }
        }
    }

    /// Converts a metric distance into the weight type, falling back to 0
    fn to_weight<W: Float>(&self, distance: f64) -> W {
        <W as NumCast>::from(distance).unwrap_or_else(W::zero)
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for AStar
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, graph: &mut KeyedGraph<K, W>, start: &K, end: &K) -> Result<SearchOutcome<W>> {
        let (start, end) = resolve_endpoints(graph, start, end)?;
        let n = graph.vertex_count();

        graph.reset_search_state();
        graph.vertex_mut(start).distance = W::zero();

        // discovered: ever inserted into the queue; settled: extracted from it
        let mut discovered = vec![false; n];
        let mut settled_flags = vec![false; n];
        let mut estimates = vec![W::zero(); n];

        let mut queue = PriorityQueue::new(HeapOrder::Ascending);
        estimates[start] = self.estimate(graph, start, end)?;
        queue.insert(estimates[start], start);
        discovered[start] = true;

        let mut max_queue_len = queue.len();
        let mut settled = 0;
        let mut relaxations = 0;

        while let Some((current, _)) = queue.pop() {
            settled += 1;
            settled_flags[current] = true;

            if current == end {
                break;
            }

            let g = graph.vertex_at(current).distance();
            for i in 0..graph.vertex_at(current).degree() {
                let (next, weight) = graph.vertex_at(current).edges[i];
                if settled_flags[next] {
                    continue;
                }

                let candidate = g + weight;
                if candidate >= graph.vertex_at(next).distance() {
                    continue;
                }

                let vertex = graph.vertex_mut(next);
                vertex.distance = candidate;
                vertex.predecessor = Some(current);
                relaxations += 1;

                if discovered[next] {
                    queue.decrease_key(&next, candidate + estimates[next]);
                } else {
                    estimates[next] = self.estimate(graph, next, end)?;
                    discovered[next] = true;
                    queue.insert(candidate + estimates[next], next);
                }

                trace!(
                    "Relaxed {:?} -> {:?}: g = {:?}, f = {:?}",
                    current,
                    next,
                    candidate,
                    candidate + estimates[next]
                );
            }

            max_queue_len = max_queue_len.max(queue.len());
        }

        let distance = graph.vertex_at(end).distance();
        debug!(
            "A* from {} to {}: settled {} of {} vertices with {} relaxations, distance {:?}",
            describe_key(graph.vertex_at(start).key()),
            describe_key(graph.vertex_at(end).key()),
            settled,
            n,
            relaxations,
            distance
        );
        if !distance.is_finite() {
            warn!("A*: target {} is unreachable", describe_key(graph.vertex_at(end).key()));
        }

        Ok(SearchOutcome {
            distance,
            reached: distance.is_finite(),
            settled,
            relaxations,
            max_queue_len,
        })
    }
}
