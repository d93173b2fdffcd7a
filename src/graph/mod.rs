pub mod generators;
pub mod keyed;
pub mod vertex;

pub use keyed::KeyedGraph;
pub use vertex::{Location, Vertex, VertexId};
