//! Find shortest paths from a single source.
//!
//! The shortest paths are computed by [Dijkstra's algorithm], which requires
//! a weighted simple graph with non-negative weights. A negative weight is
//! detected only when the search relaxes the edge carrying it, so negative
//! edges unreachable from the source go unnoticed.
//!
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use adjgraph::{core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new().directed().weighted());
//!
//! graph.add_edge("Prague", "Bratislava", 400u32).unwrap();
//! graph.add_edge("Prague", "Nuremberg", 297).unwrap();
//! graph.add_edge("Prague", "Vienna", 293).unwrap();
//! graph.add_edge("Bratislava", "Vienna", 79).unwrap();
//! graph.add_edge("Nuremberg", "Munich", 170).unwrap();
//! graph.add_edge("Vienna", "Munich", 402).unwrap();
//! graph.add_edge("Vienna", "Florence", 863).unwrap();
//! graph.add_edge("Munich", "Florence", 638).unwrap();
//!
//! let shortest_paths = graph.dijkstra(&"Prague").unwrap();
//!
//! assert_eq!(shortest_paths.dist(&"Florence"), Some(&1105));
//! assert_eq!(
//!     shortest_paths.path_to(&"Florence"),
//!     vec!["Prague", "Nuremberg", "Munich", "Florence"]
//! );
//! ```

use std::{fmt, hash::Hash};

use rustc_hash::FxHashMap;

use crate::core::weight::Weight;

mod dijkstra;

pub use dijkstra::dijkstra;

/// Distances and predecessors computed by a single-source shortest paths
/// algorithm.
///
/// Every vertex of the graph has a distance. Vertices unreachable from the
/// source keep the [infinity](Weight::inf) of the weight type.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    dist: FxHashMap<V, W>,
    pred: FxHashMap<V, V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub(crate) fn new(source: V, dist: FxHashMap<V, W>, pred: FxHashMap<V, V>) -> Self {
        Self { source, dist, pred }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance from the source to the vertex, or `None` if the
    /// vertex was not in the graph.
    pub fn dist(&self, to: &V) -> Option<&W> {
        self.dist.get(to)
    }

    /// Iterates over all vertices with their distances, in unspecified order.
    pub fn distances(&self) -> impl Iterator<Item = (&V, &W)> {
        self.dist.iter()
    }

    pub fn is_reachable(&self, to: &V) -> bool {
        *to == self.source || self.pred.contains_key(to)
    }

    /// Returns the vertices on the shortest path from the source to the
    /// vertex, both ends included.
    ///
    /// The path is empty if the vertex is not reachable from the source.
    pub fn path_to(&self, to: &V) -> Vec<V> {
        if !self.is_reachable(to) {
            return Vec::new();
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to).cloned());
        path.reverse();
        path
    }

    /// Walks the shortest path backwards, yielding the predecessors of the
    /// vertex up to and including the source.
    ///
    /// Nothing is yielded for the source or for an unreachable vertex.
    pub fn reconstruct<'a>(&'a self, to: &'a V) -> PathReconstruction<'a, V> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }
}

pub struct PathReconstruction<'a, V> {
    curr: &'a V,
    pred: &'a FxHashMap<V, V>,
}

impl<'a, V> Iterator for PathReconstruction<'a, V>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(self.curr)?;
        Some(self.curr)
    }
}

/// Writes one line per vertex with its distance (or `INF`) and the shortest
/// path, such as `7: [A, B, D]`.
impl<V, W> fmt::Display for ShortestPaths<V, W>
where
    V: Eq + Hash + Clone + fmt::Display,
    W: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, dist) in self.distances() {
            if *dist == W::inf() {
                f.write_str("INF: [")?;
            } else {
                write!(f, "{dist}: [")?;
            }

            for (i, step) in self.path_to(vertex).iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{step}")?;
            }

            f.write_str("]\n")?;
        }

        Ok(())
    }
}
