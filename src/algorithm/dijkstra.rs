use log::{debug, trace, warn};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{SearchOutcome, ShortestPathAlgorithm};
use crate::data_structures::{HeapOrder, PriorityQueue};
use crate::graph::{KeyedGraph, VertexId};
use crate::{describe_key, Error, Result};

/// Classic Dijkstra's algorithm with an eagerly seeded queue.
///
/// Every vertex enters the queue at the start of the run (the source at 0,
/// everything else at +inf) and improvements are applied with decrease-key.
/// Distances are minimal for every settled vertex as long as no edge weight
/// is negative, which [`KeyedGraph::add_edge`] enforces.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Stop as soon as the target is extracted
    early_exit: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { early_exit: true }
    }

    /// Keep settling vertices after the target has been extracted
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Settles every vertex reachable from `start`.
    ///
    /// The returned outcome describes the run as a whole: `distance` is the
    /// largest finite distance found and `reached` is always true.
    pub fn settle_all<K, W>(&self, graph: &mut KeyedGraph<K, W>, start: &K) -> Result<SearchOutcome<W>>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
    {
        let start_id = graph
            .index_of(start)
            .ok_or_else(|| Error::SourceNotFound(describe_key(start)))?;

        let mut outcome = self.run(graph, start_id, None);
        outcome.distance = graph
            .iter()
            .map(|vertex| vertex.distance())
            .filter(|d| d.is_finite())
            .max()
            .unwrap_or_else(W::zero);
        outcome.reached = true;
        Ok(outcome)
    }

    fn run<K, W>(&self, graph: &mut KeyedGraph<K, W>, start: VertexId, end: Option<VertexId>) -> SearchOutcome<W>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
    {
        graph.reset_search_state();
        graph.vertex_mut(start).distance = W::zero();

        let mut queue = PriorityQueue::with_capacity(HeapOrder::Ascending, graph.vertex_count());
        queue.build_heap(
            graph
                .iter()
                .enumerate()
                .map(|(id, vertex)| (vertex.distance(), id)),
        );

        let max_queue_len = queue.len();
        let mut settled = 0;
        let mut relaxations = 0;

        while let Some((current, dist)) = queue.pop() {
            settled += 1;

            if self.early_exit && Some(current) == end {
                break;
            }

            // Only unreachable vertices are left
            if dist.is_infinite() {
                break;
            }

            for i in 0..graph.vertex_at(current).degree() {
                let (next, weight) = graph.vertex_at(current).edges[i];
                let candidate = dist + weight;

                if candidate < graph.vertex_at(next).distance() {
                    let vertex = graph.vertex_mut(next);
                    vertex.distance = candidate;
                    vertex.predecessor = Some(current);
                    queue.decrease_key(&next, candidate);
                    relaxations += 1;

                    trace!("Relaxed {:?} -> {:?} to {:?}", current, next, candidate);
                }
            }
        }

        let distance = end.map_or_else(W::infinity, |end| graph.vertex_at(end).distance());
        debug!(
            "Dijkstra from {}: settled {} of {} vertices with {} relaxations, target distance {:?}",
            describe_key(graph.vertex_at(start).key()),
            settled,
            graph.vertex_count(),
            relaxations,
            distance
        );

        SearchOutcome {
            distance,
            reached: distance.is_finite(),
            settled,
            relaxations,
            max_queue_len,
        }
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for Dijkstra
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, graph: &mut KeyedGraph<K, W>, start: &K, end: &K) -> Result<SearchOutcome<W>> {
        let (start, end) = resolve_endpoints(graph, start, end)?;
        let outcome = self.run(graph, start, Some(end));
        if !outcome.reached {
            warn!("Dijkstra: target {} is unreachable", describe_key(graph.vertex_at(end).key()));
        }
        Ok(outcome)
    }
}
