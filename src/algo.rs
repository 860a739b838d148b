//! Algorithms running on top of [`Graph`](crate::Graph).
//!
//! Each algorithm checks the configuration of the graph first and returns
//! [`Error::Unsupported`](crate::core::Error::Unsupported) if it is not
//! defined for it.

pub mod all_paths;
pub mod bipartite;
pub mod cycle;
pub mod shortest_paths;

#[doc(inline)]
pub use self::{
    all_paths::{all_paths, write_all_paths},
    bipartite::{is_bipartite, two_coloring, Bipartition},
    cycle::has_cycle,
    shortest_paths::{dijkstra, PathReconstruction, ShortestPaths},
};
