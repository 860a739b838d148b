//! Detect a [cycle] in a graph.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! In directed graphs, a cycle is detected as a back edge of depth-first
//! search, that is, an edge to a vertex on the current search path. A
//! self-loop is therefore always a cycle.
//!
//! In undirected graphs, every edge is stored in both directions, so the
//! search must not consider the way back to the vertex it came from. Any other
//! edge to an already discovered vertex closes a cycle. Two parallel edges
//! form a cycle of length two, found once the search backtracks to the
//! endpoint where it started traversing them.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::has_cycle, core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new());
//!
//! graph.add_edge('a', 'b', ()).unwrap();
//! graph.add_edge('b', 'c', ()).unwrap();
//! graph.add_edge('c', 'd', ()).unwrap();
//!
//! assert!(!has_cycle(&graph));
//!
//! graph.add_edge('d', 'a', ()).unwrap();
//!
//! assert!(has_cycle(&graph));
//! ```

use std::hash::Hash;

use tracing::debug;

use crate::{
    core::id::VertexId,
    graph::Graph,
    storage::AdjacencyMap,
    visit::{VertexBitSet, VisitSet},
};

/// Returns `true` if the graph contains a cycle.
///
/// Every vertex is tried as a root of the search, so all components of the
/// graph are checked. An empty graph has no cycle.
pub fn has_cycle<V, E>(graph: &Graph<V, E>) -> bool
where
    V: Eq + Hash + Clone,
{
    let storage = graph.storage();

    debug!(
        vertices = storage.vertex_count(),
        directed = graph.config().is_directed(),
        "searching for a cycle"
    );

    if graph.config().is_directed() {
        has_directed_cycle(storage)
    } else {
        has_undirected_cycle(storage)
    }
}

struct Frame {
    vertex: VertexId,
    parent: Option<VertexId>,
    next_edge: usize,
}

impl Frame {
    fn new(vertex: VertexId, parent: Option<VertexId>) -> Self {
        Self {
            vertex,
            parent,
            next_edge: 0,
        }
    }
}

fn has_directed_cycle<V, E>(storage: &AdjacencyMap<V, E>) -> bool {
    let mut visited = VertexBitSet::with_capacity(storage.vertex_count());
    // Vertices on the current search path.
    let mut on_path = VertexBitSet::with_capacity(storage.vertex_count());
    let mut stack = Vec::new();

    for root in storage.vertex_ids() {
        if visited.is_visited(root) {
            continue;
        }

        visited.visit(root);
        on_path.visit(root);
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let edges = storage.edges(frame.vertex);

            match edges.get(frame.next_edge) {
                Some(record) => {
                    frame.next_edge += 1;
                    let next = record.target();

                    if on_path.is_visited(next) {
                        return true;
                    }

                    if visited.visit(next) {
                        on_path.visit(next);
                        stack.push(Frame::new(next, None));
                    }
                }
                None => {
                    // Backtrack. The vertex stays visited.
                    on_path.unvisit(frame.vertex);
                    stack.pop();
                }
            }
        }
    }

    false
}

fn has_undirected_cycle<V, E>(storage: &AdjacencyMap<V, E>) -> bool {
    let mut visited = VertexBitSet::with_capacity(storage.vertex_count());
    let mut stack = Vec::new();

    for root in storage.vertex_ids() {
        if visited.is_visited(root) {
            continue;
        }

        visited.visit(root);
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let edges = storage.edges(frame.vertex);

            match edges.get(frame.next_edge) {
                Some(record) => {
                    frame.next_edge += 1;
                    let next = record.target();

                    if Some(next) == frame.parent {
                        continue;
                    }

                    if !visited.visit(next) {
                        return true;
                    }

                    let parent = frame.vertex;
                    stack.push(Frame::new(next, Some(parent)));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    false
}
