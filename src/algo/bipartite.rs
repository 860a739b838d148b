//! Test whether a graph is [bipartite].
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! The vertices are two-colored by breadth-first search, one connected
//! component at a time. The graph is bipartite if no edge connects two
//! vertices of the same color. Edge direction does not matter for
//! bipartiteness, so in directed graphs the search follows edges both ways.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::is_bipartite, core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new());
//!
//! for leaf in ['B', 'C', 'D', 'E'] {
//!     graph.add_edge('A', leaf, ()).unwrap();
//! }
//!
//! assert!(is_bipartite(&graph));
//!
//! graph.add_edge('B', 'C', ()).unwrap();
//!
//! assert!(!is_bipartite(&graph));
//! ```

use std::{collections::VecDeque, hash::Hash};

use tracing::debug;

use crate::{core::id::VertexId, graph::Graph, storage::AdjacencyMap};

/// Partition of the vertices of a bipartite graph into two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition<'a, V> {
    pub left: Vec<&'a V>,
    pub right: Vec<&'a V>,
}

/// Returns `true` if the vertices of the graph can be colored with two colors
/// so that no edge connects two vertices of the same color.
///
/// An empty graph is bipartite. A self-loop makes the graph not bipartite.
pub fn is_bipartite<V, E>(graph: &Graph<V, E>) -> bool
where
    V: Eq + Hash + Clone,
{
    two_coloring(graph).is_some()
}

/// Returns the two sides of the graph if it is bipartite.
///
/// In every connected component, the vertex first reached by the search is
/// put to the left side.
pub fn two_coloring<V, E>(graph: &Graph<V, E>) -> Option<Bipartition<'_, V>>
where
    V: Eq + Hash + Clone,
{
    let storage = graph.storage();

    debug!(
        vertices = storage.vertex_count(),
        "checking bipartiteness"
    );

    let incoming = if graph.config().is_directed() {
        Some(collect_incoming(storage))
    } else {
        None
    };

    let mut colors: Vec<Option<Color>> = vec![None; storage.vertex_count()];
    let mut queue = VecDeque::new();

    for root in storage.vertex_ids() {
        if colors[root.as_usize()].is_some() {
            continue;
        }

        colors[root.as_usize()] = Some(Color::Left);
        queue.push_back(root);

        while let Some(vertex) = queue.pop_front() {
            let color = colors[vertex.as_usize()]?;

            let outgoing = storage.edges(vertex).iter().map(|record| record.target());
            let incoming = incoming
                .iter()
                .flat_map(|incoming| incoming[vertex.as_usize()].iter().copied());

            for neighbor in outgoing.chain(incoming) {
                match colors[neighbor.as_usize()] {
                    None => {
                        colors[neighbor.as_usize()] = Some(color.opposite());
                        queue.push_back(neighbor);
                    }
                    Some(other) if other == color => return None,
                    Some(_) => {}
                }
            }
        }
    }

    let mut partition = Bipartition {
        left: Vec::new(),
        right: Vec::new(),
    };

    for (id, color) in storage.vertex_ids().zip(colors) {
        let side = match color? {
            Color::Left => &mut partition.left,
            Color::Right => &mut partition.right,
        };
        side.push(storage.vertex(id));
    }

    Some(partition)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Left,
    Right,
}

impl Color {
    fn opposite(&self) -> Self {
        match self {
            Color::Left => Color::Right,
            Color::Right => Color::Left,
        }
    }
}

fn collect_incoming<V, E>(storage: &AdjacencyMap<V, E>) -> Vec<Vec<VertexId>> {
    let mut incoming = vec![Vec::new(); storage.vertex_count()];

    for vertex in storage.vertex_ids() {
        for record in storage.edges(vertex) {
            incoming[record.target().as_usize()].push(vertex);
        }
    }

    incoming
}
