use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::KeyedGraph;
use crate::{describe_key, Error, Result};

/// Walks the predecessor links from `to` back to the source of the last
/// search and returns the keys in source-to-target order.
///
/// Only meaningful for a target the last search reached: check
/// [`KeyedGraph::is_reachable`] first. For an unreached target the chain is
/// empty and the result is just `[to]`, which is not a path from the source.
///
/// Fails with [`Error::VertexNotFound`] for an unknown key and with
/// [`Error::BrokenPath`] if the chain is longer than the graph, which only
/// happens when predecessor state was corrupted.
pub fn get_path<K, W>(graph: &KeyedGraph<K, W>, to: &K) -> Result<Vec<K>>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    let mut current = graph
        .index_of(to)
        .ok_or_else(|| Error::VertexNotFound(describe_key(to)))?;

    let mut path = vec![to.clone()];
    while let Some(pred) = graph.vertex_at(current).predecessor() {
        if path.len() >= graph.vertex_count() {
            return Err(Error::BrokenPath(describe_key(to)));
        }
        path.push(graph.vertex_at(pred).key().clone());
        current = pred;
    }

    path.reverse();
    Ok(path)
}
