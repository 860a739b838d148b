//! Graph traversals.
//!
//! Traversals come in two flavors. The lazy flavor ([`Bfs`], [`Dfs`]) is an
//! iterator over the vertices reachable from a start vertex that advances
//! its frontier only when asked for the next vertex. The eager flavor
//! ([`write_bfs`], [`write_dfs`]) runs the whole traversal at once and writes
//! the visited vertices into an output sink.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion and are not limited by the size of the program
//! stack.
//!
//! The order in which the neighbors of a vertex are discovered follows the
//! order of its edges, which is not a contract of the graph and should not be
//! relied upon.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new().directed());
//!
//! graph.add_edge(1, 2, ()).unwrap();
//! graph.add_edge(1, 3, ()).unwrap();
//! graph.add_edge(4, 1, ()).unwrap();
//!
//! let mut reachable = graph.bfs(&1).unwrap().copied().collect::<Vec<_>>();
//! reachable.sort();
//!
//! assert_eq!(reachable, vec![1, 2, 3]);
//! ```

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::Dfs,
    visit_set::{VertexBitSet, VisitSet},
};

use std::{
    fmt::Display,
    hash::Hash,
    io::Write,
    iter::FusedIterator,
};

use tracing::debug;

use raw::*;

use crate::{
    core::error::{Error, WriteError},
    graph::Graph,
};

/// Writes the vertices in breadth-first order from the start vertex, in the
/// form `BFS from A: A B C ` followed by a newline.
pub fn write_bfs<V, E, W>(graph: &Graph<V, E>, start: &V, out: &mut W) -> Result<(), WriteError>
where
    V: Eq + Hash + Clone + Display,
    W: Write,
{
    let visit = graph.bfs(start)?;
    debug!(vertices = graph.vertex_count(), "running breadth-first traversal");
    write_visit("BFS", start, visit, out)
}

/// Writes the vertices in depth-first order from the start vertex, in the
/// form `DFS from A: A B C ` followed by a newline.
pub fn write_dfs<V, E, W>(graph: &Graph<V, E>, start: &V, out: &mut W) -> Result<(), WriteError>
where
    V: Eq + Hash + Clone + Display,
    W: Write,
{
    let visit = graph.dfs(start)?;
    debug!(vertices = graph.vertex_count(), "running depth-first traversal");
    write_visit("DFS", start, visit, out)
}

fn write_visit<'a, V, I, W>(name: &str, start: &V, visit: I, out: &mut W) -> Result<(), WriteError>
where
    V: Display + 'a,
    I: Iterator<Item = &'a V>,
    W: Write,
{
    write!(out, "{name} from {start}: ")?;

    for vertex in visit {
        write!(out, "{vertex} ")?;
    }

    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::{core::GraphConfig, infra::proptest::graph};

    use super::*;

    fn create_tree() -> Graph<u32, ()> {
        let mut graph = Graph::new(GraphConfig::new());

        graph
            .extend_with_edges([
                (0, 1, ()),
                (1, 2, ()),
                (1, 3, ()),
                (1, 4, ()),
                (2, 5, ()),
                (5, 4, ()),
            ])
            .unwrap();

        graph
    }

    #[test]
    fn bfs_connected() {
        let graph = create_tree();

        let vertices = graph.bfs(&0).unwrap().copied().collect::<Vec<_>>();

        assert_eq!(vertices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn dfs_connected() {
        let graph = create_tree();

        let vertices = graph.dfs(&0).unwrap().copied().collect::<Vec<_>>();

        assert_eq!(vertices, vec![0, 1, 2, 5, 4, 3]);
    }

    #[test]
    fn dfs_matches_recursive_order() {
        let mut graph = Graph::new(GraphConfig::new().directed());

        graph
            .extend_with_edges([('A', 'B', ()), ('A', 'C', ()), ('B', 'C', ()), ('C', 'D', ())])
            .unwrap();

        let vertices = graph.dfs(&'A').unwrap().copied().collect::<String>();

        assert_eq!(vertices, "ABCD");
    }

    #[test]
    fn bfs_disconnected() {
        let mut graph = create_tree();
        graph.add_edge(6, 7, ()).unwrap();

        let vertices = graph.bfs(&6).unwrap().copied().collect::<Vec<_>>();

        assert_eq!(vertices, vec![6, 7]);
    }

    #[test]
    fn directed_follows_direction() {
        let mut graph = Graph::new(GraphConfig::new().directed());

        graph
            .extend_with_edges([('A', 'B', ()), ('C', 'A', ()), ('B', 'D', ())])
            .unwrap();

        let vertices = graph.dfs(&'B').unwrap().copied().collect::<String>();

        assert_eq!(vertices, "BD");
    }

    #[test]
    fn self_loop_visited_once() {
        let mut graph = Graph::new(GraphConfig::new().self_loops());

        graph
            .extend_with_edges([('A', 'A', ()), ('A', 'B', ())])
            .unwrap();

        assert_eq!(graph.bfs(&'A').unwrap().count(), 2);
        assert_eq!(graph.dfs(&'A').unwrap().count(), 2);
    }

    #[test]
    fn absent_start() {
        let graph = create_tree();

        assert_matches!(graph.bfs(&42).err(), Some(Error::VertexAbsent));
        assert_matches!(graph.dfs(&42).err(), Some(Error::VertexAbsent));
    }

    #[test]
    fn lazy_is_single_pass() {
        let graph = create_tree();

        let mut bfs = graph.bfs(&0).unwrap();

        assert_eq!(bfs.next(), Some(&0));
        assert_eq!(bfs.discovered_count(), 2);
        assert_eq!(bfs.by_ref().count(), 5);
        assert_eq!(bfs.next(), None);

        // A new call starts over.
        assert_eq!(graph.bfs(&0).unwrap().count(), 6);
    }

    #[test]
    fn write_bfs_format() {
        let mut graph = Graph::new(GraphConfig::new().directed());

        graph
            .extend_with_edges([('A', 'B', ()), ('A', 'C', ()), ('B', 'D', ())])
            .unwrap();

        let mut out = Vec::new();
        write_bfs(&graph, &'A', &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "BFS from A: A B C D \n");
    }

    #[test]
    fn write_dfs_format() {
        let mut graph = Graph::new(GraphConfig::new().directed());

        graph
            .extend_with_edges([('A', 'B', ()), ('A', 'C', ()), ('B', 'D', ())])
            .unwrap();

        let mut out = Vec::new();
        write_dfs(&graph, &'A', &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "DFS from A: A B D C \n");
    }

    #[test]
    fn write_absent_start() {
        let graph = create_tree();

        let mut out = Vec::new();

        assert_matches!(
            write_dfs(&graph, &42, &mut out),
            Err(WriteError::Graph(Error::VertexAbsent))
        );
        assert!(out.is_empty());
    }

    fn reachable(graph: &Graph<u8, u8>, start: u8) -> FxHashSet<u8> {
        let mut reachable = FxHashSet::default();
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if reachable.insert(vertex) {
                stack.extend(graph.neighbors(&vertex).unwrap().map(|(v, _)| *v));
            }
        }

        reachable
    }

    proptest! {
        #[test]
        fn traversals_visit_reachable(
            graph in graph(GraphConfig::new().directed().self_loops().multi(), 10, 30),
            start in 0u8..10,
        ) {
            prop_assume!(graph.contains_vertex(&start));

            let expected = reachable(&graph, start);

            let bfs = graph.bfs(&start).unwrap().copied().collect::<Vec<_>>();
            let dfs = graph.dfs(&start).unwrap().copied().collect::<Vec<_>>();

            prop_assert_eq!(bfs[0], start);
            prop_assert_eq!(dfs[0], start);
            prop_assert_eq!(bfs.len(), expected.len());
            prop_assert_eq!(dfs.len(), expected.len());
            prop_assert_eq!(bfs.into_iter().collect::<FxHashSet<_>>(), expected.clone());
            prop_assert_eq!(dfs.into_iter().collect::<FxHashSet<_>>(), expected);
        }
    }
}
