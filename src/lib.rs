//! Keyed Paths - Dijkstra and A* over key-addressed weighted graphs
//!
//! The graph stores vertices under arbitrary hashable keys, each vertex owning
//! its outgoing edges and the mutable state of the current search (tentative
//! distance, predecessor, heuristic). Both searches are driven by an indexed
//! binary heap that supports decrease-key: Dijkstra seeds it with every vertex
//! up front, A* inserts vertices as they are discovered.
//!
//! All edge weights must be non-negative; negative and NaN weights are
//! rejected when the edge is added.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    astar::{AStar, HeuristicSource},
    dijkstra::Dijkstra,
    heuristic::DistanceMetric,
    path::get_path,
    SearchOutcome, ShortestPathAlgorithm,
};
pub use data_structures::{HeapOrder, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::{KeyedGraph, Location, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Target vertex not found in graph: {0}")]
    TargetNotFound(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a number")]
    InvalidWeight,

    #[error("Heuristic of vertex {0} is not a number")]
    InvalidHeuristic(String),

    #[error("Location of vertex {0} has a non-finite coordinate")]
    InvalidLocation(String),

    #[error("Unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    #[error("Cannot extract from an empty priority queue")]
    EmptyQueue,

    #[error("No preloaded heuristic for vertex {0}")]
    MissingHeuristic(String),

    #[error("No location for vertex {0}")]
    MissingLocation(String),

    #[error("Predecessor chain of {0} does not lead back to a source")]
    BrokenPath(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Renders a key the way errors and logs show it
pub(crate) fn describe_key<K: std::fmt::Debug>(key: &K) -> String {
    format!("{:?}", key)
}
