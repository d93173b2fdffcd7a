pub mod astar;
pub mod dijkstra;
pub mod heuristic;
pub mod path;
pub mod traits;

pub use traits::{SearchOutcome, ShortestPathAlgorithm};
