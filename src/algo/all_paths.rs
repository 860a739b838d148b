//! Enumerate all simple paths between two vertices.
//!
//! A simple path visits every vertex at most once. The enumeration is an
//! exhaustive depth-first search with backtracking, so its running time is
//! exponential in the worst case. It is only defined for simple graphs
//! without self-loops.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::all_paths, core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new().directed());
//!
//! graph.add_edge('A', 'B', ()).unwrap();
//! graph.add_edge('A', 'C', ()).unwrap();
//! graph.add_edge('B', 'D', ()).unwrap();
//! graph.add_edge('C', 'D', ()).unwrap();
//!
//! let paths = all_paths(&graph, &'A', &'D').unwrap();
//!
//! assert_eq!(paths, vec![vec!['A', 'B', 'D'], vec!['A', 'C', 'D']]);
//! ```

use std::{fmt::Display, hash::Hash, io::Write};

use tracing::debug;

use crate::{
    core::{
        error::{Error, Requirement, WriteError},
        id::VertexId,
    },
    graph::Graph,
    visit::{VertexBitSet, VisitSet},
};

/// Returns all simple paths from `start` to `end`, both ends included, in the
/// order in which the depth-first search discovers them.
///
/// A path from a vertex to itself consists of the vertex alone. When `end` is
/// reached, the search records the path and backtracks without exploring the
/// edges of `end`.
pub fn all_paths<V, E>(graph: &Graph<V, E>, start: &V, end: &V) -> Result<Vec<Vec<V>>, Error>
where
    V: Eq + Hash + Clone,
{
    if !graph.config().is_simple() {
        return Err(Error::Unsupported(Requirement::SimpleGraph));
    }

    let start = graph.id(start)?;
    let end = graph.id(end)?;

    if graph.config().allows_self_loops() {
        return Err(Error::Unsupported(Requirement::NoSelfLoops));
    }

    let storage = graph.storage();

    debug!(
        vertices = storage.vertex_count(),
        "enumerating all simple paths"
    );

    let mut paths = Vec::new();
    let mut on_path = VertexBitSet::with_capacity(storage.vertex_count());
    // Current path with the index of the next edge to explore for each of
    // its vertices.
    let mut path: Vec<(VertexId, usize)> = vec![(start, 0)];
    on_path.visit(start);

    while let Some((vertex, next_edge)) = path.last_mut() {
        let vertex = *vertex;

        if vertex == end {
            paths.push(
                path.iter()
                    .map(|(id, _)| storage.vertex(*id).clone())
                    .collect(),
            );
            on_path.unvisit(vertex);
            path.pop();
            continue;
        }

        match storage.edges(vertex).get(*next_edge) {
            Some(record) => {
                *next_edge += 1;
                let next = record.target();

                if on_path.visit(next) {
                    path.push((next, 0));
                }
            }
            None => {
                on_path.unvisit(vertex);
                path.pop();
            }
        }
    }

    Ok(paths)
}

/// Writes all simple paths from `start` to `end` in a human-readable form.
///
/// ```text
/// All paths from A to D:
/// Path 1: A -> B -> D
/// Path 2: A -> C -> D
/// Total paths found: 2
/// ```
///
/// If there is no path, the output is `No paths found from A to D`.
pub fn write_all_paths<V, E, W>(
    graph: &Graph<V, E>,
    start: &V,
    end: &V,
    out: &mut W,
) -> Result<(), WriteError>
where
    V: Eq + Hash + Clone + Display,
    W: Write,
{
    let paths = all_paths(graph, start, end)?;

    if paths.is_empty() {
        writeln!(out, "No paths found from {start} to {end}")?;
        return Ok(());
    }

    writeln!(out, "All paths from {start} to {end}:")?;

    for (i, path) in paths.iter().enumerate() {
        write!(out, "Path {}: ", i + 1)?;

        for (j, vertex) in path.iter().enumerate() {
            if j > 0 {
                write!(out, " -> ")?;
            }
            write!(out, "{vertex}")?;
        }

        writeln!(out)?;
    }

    writeln!(out, "Total paths found: {}", paths.len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{core::GraphConfig, infra::proptest::graph};

    use super::*;

    fn diamond(config: GraphConfig) -> Graph<char, ()> {
        let mut graph = Graph::new(config);

        graph
            .extend_with_edges([('A', 'B', ()), ('A', 'C', ()), ('B', 'D', ()), ('C', 'D', ())])
            .unwrap();

        graph
    }

    #[test]
    fn directed_diamond() {
        let graph = diamond(GraphConfig::new().directed());

        assert_eq!(
            all_paths(&graph, &'A', &'D').unwrap(),
            vec![vec!['A', 'B', 'D'], vec!['A', 'C', 'D']]
        );
        assert!(all_paths(&graph, &'D', &'A').unwrap().is_empty());
    }

    #[test]
    fn undirected_diamond() {
        let graph = diamond(GraphConfig::new());

        assert_eq!(
            all_paths(&graph, &'B', &'C').unwrap(),
            vec![vec!['B', 'A', 'C'], vec!['B', 'D', 'C']]
        );
    }

    #[test]
    fn end_is_not_explored() {
        let mut graph = Graph::new(GraphConfig::new().directed());

        graph
            .extend_with_edges([('A', 'B', ()), ('B', 'C', ()), ('C', 'B', ())])
            .unwrap();

        assert_eq!(all_paths(&graph, &'A', &'B').unwrap(), vec![vec!['A', 'B']]);
    }

    #[test]
    fn same_start_and_end() {
        let graph = diamond(GraphConfig::new().directed());

        assert_eq!(all_paths(&graph, &'A', &'A').unwrap(), vec![vec!['A']]);
    }

    #[test]
    fn disconnected() {
        let mut graph = diamond(GraphConfig::new().directed());
        graph.add_vertex('E');

        assert!(all_paths(&graph, &'A', &'E').unwrap().is_empty());
    }

    #[test]
    fn complete_graph() {
        let mut graph = Graph::new(GraphConfig::new());

        for from in 0..5 {
            for to in (from + 1)..5 {
                graph.add_edge(from, to, ()).unwrap();
            }
        }

        // Paths visit any ordered subset of the three inner vertices.
        assert_eq!(all_paths(&graph, &0, &4).unwrap().len(), 1 + 3 + 6 + 6);
    }

    #[test]
    fn absent_endpoints() {
        let graph = diamond(GraphConfig::new().directed());

        assert_matches!(all_paths(&graph, &'Z', &'B'), Err(Error::VertexAbsent));
        assert_matches!(all_paths(&graph, &'A', &'Z'), Err(Error::VertexAbsent));
    }

    #[test]
    fn unsupported_config() {
        let graph = diamond(GraphConfig::new().directed().multi());
        assert_matches!(
            all_paths(&graph, &'A', &'D'),
            Err(Error::Unsupported(Requirement::SimpleGraph))
        );

        let graph = diamond(GraphConfig::new().directed().self_loops());
        assert_matches!(
            all_paths(&graph, &'A', &'D'),
            Err(Error::Unsupported(Requirement::NoSelfLoops))
        );
    }

    #[test]
    fn write_paths() {
        let graph = diamond(GraphConfig::new().directed());

        let mut out = Vec::new();
        write_all_paths(&graph, &'A', &'D', &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All paths from A to D:\nPath 1: A -> B -> D\nPath 2: A -> C -> D\nTotal paths found: 2\n"
        );
    }

    #[test]
    fn write_no_paths() {
        let graph = diamond(GraphConfig::new().directed());

        let mut out = Vec::new();
        write_all_paths(&graph, &'D', &'A', &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No paths found from D to A\n");
    }

    proptest! {
        #[test]
        fn paths_are_simple_and_valid(
            graph in graph(GraphConfig::new().directed(), 7, 14),
            start in 0u8..7,
            end in 0u8..7,
        ) {
            prop_assume!(graph.contains_vertex(&start) && graph.contains_vertex(&end));

            for path in all_paths(&graph, &start, &end).unwrap() {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&end));

                let mut seen = path.clone();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), path.len());

                for pair in path.windows(2) {
                    prop_assert!(graph.edges_between(&pair[0], &pair[1]).next().is_some());
                }
            }
        }
    }
}
