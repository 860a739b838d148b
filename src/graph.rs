//! The configurable adjacency-list graph.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{core::GraphConfig, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new());
//!
//! graph.add_edge('A', 'B', ()).unwrap();
//! graph.add_edge('B', 'C', ()).unwrap();
//! graph.add_edge('C', 'A', ()).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.degree(&'A'), Ok(2));
//! assert!(graph.has_cycle());
//!
//! graph.remove_edge(&'C', &'A');
//!
//! assert!(!graph.has_cycle());
//! ```

use std::{
    fmt,
    hash::Hash,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    algo::{self, ShortestPaths},
    core::{
        config::GraphConfig,
        error::{AddEdgeError, AddEdgeErrorKind, Error, Requirement},
        id::VertexId,
        weight::EdgeWeight,
    },
    storage::{AdjacencyMap, EdgeRecord},
    visit::{Bfs, Dfs},
};

/// Adjacency-list graph whose behavior is given by a [`GraphConfig`].
///
/// Vertices are caller-supplied values identified by equality and hash. A
/// vertex comes into existence the first time it is passed to
/// [`add_vertex`](Graph::add_vertex) or [`add_edge`](Graph::add_edge).
///
/// In undirected graphs, an edge between two distinct vertices is stored as a
/// pair of mirrored records carrying the same payload, and the two are always
/// inserted and removed together. A self-loop is stored only once.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    config: GraphConfig,
    storage: AdjacencyMap<V, E>,
}

impl<V, E> Graph<V, E> {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            storage: AdjacencyMap::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns human-readable description of the graph configuration, e.g.,
    /// "Multi Non-Weighted DiGraph with SelfLoop".
    pub fn description(&self) -> String {
        self.config.to_string()
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    /// Returns the number of edges in the graph.
    ///
    /// In undirected graphs, a pair of mirrored records counts as one edge.
    pub fn edge_count(&self) -> usize {
        let total = self.storage.record_count();

        if self.config.is_directed() {
            return total;
        }

        let self_loops = self
            .storage
            .vertex_ids()
            .map(|id| {
                self.storage
                    .edges(id)
                    .iter()
                    .filter(|record| record.target() == id)
                    .count()
            })
            .sum::<usize>();

        (total - self_loops) / 2 + self_loops
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.storage.vertices()
    }

    /// Removes all vertices and edges, keeping the configuration.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub(crate) fn storage(&self) -> &AdjacencyMap<V, E> {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn from_storage(config: GraphConfig, storage: AdjacencyMap<V, E>) -> Self {
        Self { config, storage }
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.storage.contains(vertex)
    }

    /// Adds the vertex if it is not in the graph yet.
    ///
    /// Returns `true` if the vertex was added by this call.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let (id, added) = self.storage.insert_vertex(vertex);

        if added {
            debug!(vertex = ?id, "added vertex");
        }

        added
    }

    /// Adds an edge from `from` to `to`, creating the endpoints if needed.
    ///
    /// The edge is rejected, and the graph left untouched, if
    ///
    /// * the graph is weighted and the payload does not carry a weight,
    /// * the edge is a self-loop and the graph does not allow them, or
    /// * the graph is simple and there already is an edge from `from` to
    ///   `to`, regardless of its payload.
    ///
    /// The rejected payload is given back in the error.
    pub fn add_edge(&mut self, from: V, to: V, attr: E) -> Result<(), AddEdgeError<E>>
    where
        E: Clone + EdgeWeight,
    {
        if self.config.is_weighted() && attr.weight().is_none() {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::MissingWeight));
        }

        let is_loop = from == to;

        if is_loop && !self.config.allows_self_loops() {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::SelfLoop));
        }

        let has_parallel = match (self.storage.id(&from), self.storage.id(&to)) {
            (Some(src), Some(dst)) => self
                .storage
                .edges(src)
                .iter()
                .any(|record| record.target() == dst),
            _ => false,
        };

        if !self.config.multiplicity().admits(has_parallel) {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::MultiEdge));
        }

        let src = self.storage.insert_vertex(from).0;
        let dst = if is_loop {
            src
        } else {
            self.storage.insert_vertex(to).0
        };

        if !self.config.is_directed() && !is_loop {
            self.storage.push_edge(dst, EdgeRecord::new(src, attr.clone()));
        }

        self.storage.push_edge(src, EdgeRecord::new(dst, attr));

        debug!(from = ?src, to = ?dst, "added edge");

        Ok(())
    }

    /// Adds all edges from the iterator, stopping at the first rejected one.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<E>>
    where
        I: IntoIterator<Item = (V, V, E)>,
        E: Clone + EdgeWeight,
    {
        for (from, to, attr) in iter {
            self.add_edge(from, to, attr)?;
        }

        Ok(())
    }

    /// Removes the vertex and every edge incident to it.
    ///
    /// Returns `false` if the vertex is not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let id = match self.storage.id(vertex) {
            Some(id) => id,
            None => return false,
        };

        self.storage.remove_vertex(id);

        debug!(vertex = ?id, "removed vertex");

        true
    }

    /// Removes one edge from `from` to `to`, whatever its payload.
    ///
    /// In undirected graphs, the mirrored record with the same payload is
    /// removed too. Returns `false` if either vertex is absent or there is no
    /// such edge.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool
    where
        E: PartialEq,
    {
        self.remove_edge_matching(from, to, |_| true)
    }

    /// Removes one edge from `from` to `to` with payload equal to `attr`.
    ///
    /// In undirected graphs, the mirrored record is removed too. Returns
    /// `false` if either vertex is absent or there is no such edge.
    pub fn remove_edge_with(&mut self, from: &V, to: &V, attr: &E) -> bool
    where
        E: PartialEq,
    {
        self.remove_edge_matching(from, to, |other| other == attr)
    }

    fn remove_edge_matching<F>(&mut self, from: &V, to: &V, mut matches: F) -> bool
    where
        E: PartialEq,
        F: FnMut(&E) -> bool,
    {
        let (src, dst) = match (self.storage.id(from), self.storage.id(to)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return false,
        };

        let position = match self
            .storage
            .position(src, |record| record.target() == dst && matches(record.attr()))
        {
            Some(position) => position,
            None => return false,
        };

        let removed = self.storage.remove_edge_at(src, position);

        if !self.config.is_directed() && src != dst {
            // Payloads that are not equal to themselves (NaN) fall back to
            // the first record pointing back.
            let mirror = self
                .storage
                .position(dst, |record| {
                    record.target() == src && record.attr() == removed.attr()
                })
                .or_else(|| self.storage.position(dst, |record| record.target() == src));

            debug_assert!(mirror.is_some(), "undirected edge without mirror");

            if let Some(mirror) = mirror {
                self.storage.remove_edge_at(dst, mirror);
            }
        }

        debug!(from = ?src, to = ?dst, "removed edge");

        true
    }

    /// Returns the number of edges incident to the vertex in an undirected
    /// graph. A self-loop counts twice.
    pub fn degree(&self, vertex: &V) -> Result<usize, Error> {
        if self.config.is_directed() {
            return Err(Error::Unsupported(Requirement::Undirected));
        }

        let id = self.id(vertex)?;

        Ok(self
            .storage
            .edges(id)
            .iter()
            .map(|record| if record.target() == id { 2 } else { 1 })
            .sum())
    }

    /// Returns the number of edges entering the vertex in a directed graph. A
    /// self-loop counts once.
    pub fn in_degree(&self, vertex: &V) -> Result<usize, Error> {
        if !self.config.is_directed() {
            return Err(Error::Unsupported(Requirement::Directed));
        }

        let id = self.id(vertex)?;

        Ok(self
            .storage
            .vertex_ids()
            .flat_map(|other| self.storage.edges(other))
            .filter(|record| record.target() == id)
            .count())
    }

    /// Returns the number of edges leaving the vertex in a directed graph. A
    /// self-loop counts once.
    pub fn out_degree(&self, vertex: &V) -> Result<usize, Error> {
        if !self.config.is_directed() {
            return Err(Error::Unsupported(Requirement::Directed));
        }

        let id = self.id(vertex)?;

        Ok(self.storage.edges(id).len())
    }

    /// Iterates over the outgoing edges of the vertex as pairs of the neighbor
    /// and the edge payload, or returns `None` if the vertex is absent.
    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = (&V, &E)>> {
        let id = self.storage.id(vertex)?;

        Some(
            self.storage
                .edges(id)
                .iter()
                .map(|record| (self.storage.vertex(record.target()), record.attr())),
        )
    }

    /// Iterates over the payloads of all edges from `from` to `to`.
    pub fn edges_between(&self, from: &V, to: &V) -> impl Iterator<Item = &E> {
        let records = match (self.storage.id(from), self.storage.id(to)) {
            (Some(src), Some(dst)) => Some((self.storage.edges(src), dst)),
            _ => None,
        };

        records.into_iter().flat_map(|(records, dst)| {
            records
                .iter()
                .filter(move |record| record.target() == dst)
                .map(EdgeRecord::attr)
        })
    }

    /// Returns the lazy breadth-first traversal from the vertex.
    pub fn bfs(&self, start: &V) -> Result<Bfs<'_, V, E>, Error> {
        Bfs::new(self, start)
    }

    /// Returns the lazy depth-first traversal from the vertex.
    pub fn dfs(&self, start: &V) -> Result<Dfs<'_, V, E>, Error> {
        Dfs::new(self, start)
    }

    /// See [`algo::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        algo::has_cycle(self)
    }

    /// See [`algo::is_bipartite`].
    pub fn is_bipartite(&self) -> bool {
        algo::is_bipartite(self)
    }

    /// See [`algo::all_paths`].
    pub fn all_paths(&self, start: &V, end: &V) -> Result<Vec<Vec<V>>, Error> {
        algo::all_paths(self, start, end)
    }

    /// See [`algo::dijkstra`].
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPaths<V, E::Weight>, Error>
    where
        E: EdgeWeight,
    {
        algo::dijkstra(self, source)
    }

    pub(crate) fn id(&self, vertex: &V) -> Result<VertexId, Error> {
        self.storage.id(vertex).ok_or(Error::VertexAbsent)
    }
}

impl<V, E> Graph<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    /// Writes the configuration followed by every vertex and its outgoing
    /// edges, one vertex per line, in unspecified order.
    ///
    /// ```text
    /// Simple Non-Weighted DiGraph with No SelfLoop
    /// A: -[x]-(B) -[y]-(C)
    /// B:
    /// ```
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.config)?;

        for id in self.storage.vertex_ids() {
            write!(out, "{}:", self.storage.vertex(id))?;

            for record in self.storage.edges(id) {
                write!(
                    out,
                    " -[{}]-({})",
                    record.attr(),
                    self.storage.vertex(record.target())
                )?;
            }

            writeln!(out)?;
        }

        Ok(())
    }
}
