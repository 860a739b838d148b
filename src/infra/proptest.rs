use std::fmt;

use proptest::{
    collection::vec,
    prelude::any,
    strategy::{Just, Strategy},
};

use crate::{
    core::{EdgeWeight, GraphConfig},
    graph::Graph,
};

/// Strategy generating graphs of the given configuration with vertices from
/// `0..vertex_bound` and at most `max_edges` edges.
///
/// Edges are generated independently of the configuration, those rejected by
/// the graph are skipped.
pub fn graph(
    config: GraphConfig,
    vertex_bound: u8,
    max_edges: usize,
) -> impl Strategy<Value = Graph<u8, u8>> {
    graph_with(config, vertex_bound, max_edges, any::<u8>())
}

/// Same as [`graph`], with edge payloads generated by the given strategy.
pub fn graph_with<E, S>(
    config: GraphConfig,
    vertex_bound: u8,
    max_edges: usize,
    edge: S,
) -> impl Strategy<Value = Graph<u8, E>>
where
    E: Clone + EdgeWeight + fmt::Debug,
    S: Strategy<Value = E>,
{
    let vertex_bound = vertex_bound.max(1);

    (
        Just(config),
        vec(0..vertex_bound, 0..=vertex_bound as usize),
        vec((0..vertex_bound, 0..vertex_bound, edge), 0..=max_edges),
    )
        .prop_map(|(config, vertices, edges)| {
            let mut graph = Graph::new(config);

            for vertex in vertices {
                graph.add_vertex(vertex);
            }

            for (from, to, attr) in edges {
                let _ = graph.add_edge(from, to, attr);
            }

            graph
        })
}
