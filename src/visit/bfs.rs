use super::*;

/// Lazy breadth-first traversal of the vertices reachable from a start
/// vertex.
///
/// The traversal borrows the graph, so the graph cannot be mutated while it
/// is in progress. It is single-pass: a new traversal is obtained by calling
/// [`Graph::bfs`] again.
pub struct Bfs<'a, V, E> {
    graph: &'a Graph<V, E>,
    raw: RawVisit<RawBfs>,
}

impl<'a, V, E> Bfs<'a, V, E>
where
    V: Eq + Hash + Clone,
{
    pub fn new(graph: &'a Graph<V, E>, start: &V) -> Result<Self, Error> {
        let root = graph.id(start)?;

        let mut raw = RawVisit::new(graph.vertex_count());
        raw.start(root);

        Ok(Self { graph, raw })
    }
}

impl<'a, V, E> Bfs<'a, V, E> {
    /// Returns the number of vertices discovered so far, including those that
    /// are still waiting in the frontier.
    pub fn discovered_count(&self) -> usize {
        self.raw.visited.visited_count()
    }
}

impl<'a, V, E> Iterator for Bfs<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let storage = self.graph.storage();
        self.raw.next(storage).map(|id| storage.vertex(id))
    }
}

impl<'a, V, E> FusedIterator for Bfs<'a, V, E> {}
