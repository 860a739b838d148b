//! Configurable adjacency-list graph with traversals and classic algorithms.
//!
//! A [`Graph`] is parametrized at runtime by a
//! [`GraphConfig`](core::GraphConfig) choosing between simple and multi
//! graphs, undirected and directed edges, forbidden and allowed self-loops,
//! and unweighted and weighted edges. The configuration is fixed for the
//! lifetime of the graph and every mutation is validated against it.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new().directed().weighted());
//!
//! graph.add_edge('A', 'B', 5u32).unwrap();
//! graph.add_edge('A', 'C', 3).unwrap();
//! graph.add_edge('B', 'D', 2).unwrap();
//! graph.add_edge('B', 'E', 6).unwrap();
//! graph.add_edge('C', 'E', 1).unwrap();
//!
//! let shortest_paths = graph.dijkstra(&'A').unwrap();
//!
//! assert_eq!(shortest_paths.dist(&'E'), Some(&4));
//! assert_eq!(shortest_paths.path_to(&'D'), vec!['A', 'B', 'D']);
//! assert!(!graph.has_cycle());
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        core::{EdgeWeight, GraphConfig, Labeled, Weight},
        graph::Graph,
        visit::VisitSet,
    };
}
