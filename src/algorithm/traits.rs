use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{KeyedGraph, VertexId};
use crate::{describe_key, Error, Result};

/// Summary of a single search run.
///
/// Per-vertex results (distances, predecessors) stay on the graph; read them
/// with [`KeyedGraph::distance`], [`KeyedGraph::predecessor`] and
/// [`get_path`](crate::algorithm::path::get_path).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance of the target, +inf if it was not reached
    pub distance: W,

    /// Whether the target received a finite distance
    pub reached: bool,

    /// Number of vertices extracted from the queue
    pub settled: usize,

    /// Number of successful edge relaxations
    pub relaxations: usize,

    /// Largest number of entries the queue held at once
    pub max_queue_len: usize,
}

/// Trait for shortest path algorithms
///
/// A search mutates the per-vertex state of `graph`: every vertex is reset to
/// distance +inf with no predecessor before the source is seeded, so repeated
/// runs on the same graph never see each other's state. A graph must not be
/// searched from two threads at once.
pub trait ShortestPathAlgorithm<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Searches from `start` towards `end`.
    ///
    /// Fails fast with [`Error::SourceNotFound`] / [`Error::TargetNotFound`]
    /// when an endpoint is not in the graph. An unreachable target is not an
    /// error: the outcome reports `reached == false` and distance +inf.
    fn search(&self, graph: &mut KeyedGraph<K, W>, start: &K, end: &K) -> Result<SearchOutcome<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Looks up both endpoints of a search
pub(crate) fn resolve_endpoints<K, W>(
    graph: &KeyedGraph<K, W>,
    start: &K,
    end: &K,
) -> Result<(VertexId, VertexId)>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    let start = graph
        .index_of(start)
        .ok_or_else(|| Error::SourceNotFound(describe_key(start)))?;
    let end = graph
        .index_of(end)
        .ok_or_else(|| Error::TargetNotFound(describe_key(end)))?;
    Ok((start, end))
}
