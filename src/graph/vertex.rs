use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{describe_key, Error, Result};

/// Position of a vertex inside its graph's vertex store
pub type VertexId = usize;

/// Planar coordinate attached to a vertex, used to estimate remaining cost
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Location { x, y }
    }

    /// True if both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise difference `self - other`
    pub fn delta(&self, other: &Location) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Location { x, y }
    }
}

/// A vertex together with its outgoing edges and per-search state
#[derive(Debug, Clone)]
pub struct Vertex<K, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Caller-supplied key
    pub(crate) key: K,

    /// Outgoing edges: (target vertex, weight), in insertion order
    pub(crate) edges: Vec<(VertexId, W)>,

    /// Tentative distance from the source of the last search
    pub(crate) distance: W,

    /// Back-reference to the vertex this one was reached from
    pub(crate) predecessor: Option<VertexId>,

    /// Preloaded estimate of the remaining cost to the target
    pub(crate) heuristic: Option<W>,

    pub(crate) location: Option<Location>,
}

impl<K, W> Vertex<K, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a vertex with no edges, distance 0 and no predecessor
    pub fn new(key: K) -> Self {
        Vertex {
            key,
            edges: Vec::new(),
            distance: W::zero(),
            predecessor: None,
            heuristic: None,
            location: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns an iterator over the outgoing edges
    pub fn connections(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Gets the weight of the edge to `neighbor` if it exists
    pub fn weight_to(&self, neighbor: VertexId) -> Option<W> {
        self.edges
            .iter()
            .find(|(target, _)| *target == neighbor)
            .map(|(_, weight)| *weight)
    }

    pub fn distance(&self) -> W {
        self.distance
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn heuristic(&self) -> Option<W> {
        self.heuristic
    }

    /// Stores a precomputed estimate of the remaining cost.
    ///
    /// NaN is rejected: it would order after every real estimate and silently
    /// steer A* away from this vertex.
    pub fn set_heuristic(&mut self, heuristic: W) -> Result<()>
    where
        K: Debug,
    {
        if heuristic.is_nan() {
            return Err(Error::InvalidHeuristic(describe_key(&self.key)));
        }
        self.heuristic = Some(heuristic);
        Ok(())
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Stores a location; both coordinates must be finite
    pub fn set_location(&mut self, location: Location) -> Result<()>
    where
        K: Debug,
    {
        if !location.is_finite() {
            return Err(Error::InvalidLocation(describe_key(&self.key)));
        }
        self.location = Some(location);
        Ok(())
    }

    /// Records the edge to `neighbor`, overwriting the weight of an existing one
    pub(crate) fn add_neighbor(&mut self, neighbor: VertexId, weight: W) {
        if let Some(edge) = self.edges.iter_mut().find(|(target, _)| *target == neighbor) {
            edge.1 = weight;
        } else {
            self.edges.push((neighbor, weight));
        }
    }

    pub(crate) fn remove_neighbor(&mut self, neighbor: VertexId) -> bool {
        let len_before = self.edges.len();
        self.edges.retain(|(target, _)| *target != neighbor);
        len_before > self.edges.len()
    }

    /// Forgets the previous search: distance back to +inf, no predecessor
    pub(crate) fn reset_search_state(&mut self) {
        self.distance = W::infinity();
        self.predecessor = None;
    }
}
