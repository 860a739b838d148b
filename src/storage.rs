//! Storage of the graph structure.

pub mod adjacency;

pub use adjacency::{AdjVertex, AdjacencyMap, EdgeRecord, VertexIds};
