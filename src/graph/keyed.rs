use log::warn;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::vertex::{Location, Vertex, VertexId};
use crate::{describe_key, Error, Result};

/// A directed weighted graph whose vertices are addressed by caller keys.
///
/// Vertices live in a `Vec` in insertion order and a `HashMap` maps keys to
/// their [`VertexId`]. Edges and predecessor links refer to vertices by id, so
/// cycles in the graph never turn into ownership cycles.
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Vertex store, indexed by VertexId
    vertices: Vec<Vertex<K, W>>,

    /// Key -> VertexId
    index: HashMap<K, VertexId>,
}

impl<K, W> KeyedGraph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        KeyedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        KeyedGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut graph = KeyedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex with default state and returns it.
    ///
    /// If the key is already present its vertex is replaced in place: outgoing
    /// edges and attributes are dropped, while edges pointing at it from other
    /// vertices keep pointing at the new vertex.
    pub fn add_vertex(&mut self, key: K) -> &mut Vertex<K, W> {
        let id = match self.index.get(&key) {
            Some(&id) => {
                warn!("Replacing existing vertex {:?}", key);
                self.vertices[id] = Vertex::new(key);
                id
            }
            None => {
                let id = self.vertices.len();
                self.index.insert(key.clone(), id);
                self.vertices.push(Vertex::new(key));
                id
            }
        };
        &mut self.vertices[id]
    }

    /// Returns the id of the vertex for `key`, creating it if absent
    fn ensure_vertex(&mut self, key: K) -> VertexId {
        match self.index.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.vertices.len();
                self.index.insert(key.clone(), id);
                self.vertices.push(Vertex::new(key));
                id
            }
        }
    }

    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K, W>> {
        self.index.get(key).map(|&id| &self.vertices[id])
    }

    pub fn get_vertex_mut(&mut self, key: &K) -> Option<&mut Vertex<K, W>> {
        match self.index.get(key) {
            Some(&id) => Some(&mut self.vertices[id]),
            None => None,
        }
    }

    /// Id of the vertex stored under `key`
    pub fn index_of(&self, key: &K) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    /// Vertex stored at `id`
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<K, W>> {
        self.vertices.get(id)
    }

    pub(crate) fn vertex_at(&self, id: VertexId) -> &Vertex<K, W> {
        &self.vertices[id]
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<K, W> {
        &mut self.vertices[id]
    }

    /// Key of the vertex stored at `id`
    pub fn key_of(&self, id: VertexId) -> Option<&K> {
        self.vertices.get(id).map(|vertex| &vertex.key)
    }

    /// Returns true if the key has a vertex in the graph
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.degree()).sum()
    }

    /// Iterates over the vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<K, W>> + '_ {
        self.vertices.iter()
    }

    /// Iterates over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(|vertex| &vertex.key)
    }

    /// Adds the directed edge `from -> to`, creating missing endpoints.
    ///
    /// An existing edge between the same pair gets its weight overwritten.
    /// Negative and NaN weights are rejected and leave the graph unchanged.
    pub fn add_edge(&mut self, from: K, to: K, weight: W) -> Result<()> {
        validate_weight(weight)?;

        let from = self.ensure_vertex(from);
        let to = self.ensure_vertex(to);
        self.vertices[from].add_neighbor(to, weight);
        Ok(())
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: K, b: K, weight: W) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Removes the edge `from -> to`, returning whether it existed
    pub fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.vertices[from].remove_neighbor(to),
            _ => false,
        }
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    pub fn get_edge_weight(&self, from: &K, to: &K) -> Option<W> {
        let to = self.index_of(to)?;
        self.get_vertex(from)?.weight_to(to)
    }

    /// Stores a precomputed heuristic on an existing vertex.
    ///
    /// Fails with [`Error::InvalidHeuristic`] for NaN, leaving the vertex as it was.
    pub fn set_heuristic(&mut self, key: &K, heuristic: W) -> Result<()> {
        self.existing_mut(key)?.set_heuristic(heuristic)
    }

    /// Stores a location on an existing vertex.
    ///
    /// Fails with [`Error::InvalidLocation`] unless both coordinates are finite.
    pub fn set_location(&mut self, key: &K, location: Location) -> Result<()> {
        self.existing_mut(key)?.set_location(location)
    }

    fn existing_mut(&mut self, key: &K) -> Result<&mut Vertex<K, W>> {
        let id = self
            .index_of(key)
            .ok_or_else(|| Error::VertexNotFound(describe_key(key)))?;
        Ok(&mut self.vertices[id])
    }

    /// Distance left on `key` by the last search (+inf if unreached)
    pub fn distance(&self, key: &K) -> Option<W> {
        self.get_vertex(key).map(|vertex| vertex.distance)
    }

    /// Key of the vertex `key` was reached from in the last search
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        let pred = self.get_vertex(key)?.predecessor?;
        self.key_of(pred)
    }

    /// True if the last search assigned `key` a finite distance
    pub fn is_reachable(&self, key: &K) -> bool {
        self.distance(key).map_or(false, |d| d.is_finite())
    }

    /// Sum of the edge weights along `path`, or `None` if an edge is missing
    pub fn path_cost(&self, path: &[K]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, pair| {
            self.get_edge_weight(&pair[0], &pair[1]).map(|w| total + w)
        })
    }

    /// Resets every vertex to distance +inf with no predecessor
    pub fn reset_search_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset_search_state();
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.edges.iter())
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<K, W> Default for KeyedGraph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

fn validate_weight<W: Float>(weight: W) -> Result<()> {
    if weight.is_nan() {
        return Err(Error::InvalidWeight);
    }
    if weight < W::zero() {
        return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NEG_INFINITY)));
    }
    Ok(())
}
