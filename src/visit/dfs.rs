use super::*;

/// Lazy depth-first traversal of the vertices reachable from a start vertex.
///
/// Neighbors are visited in the order of the edges of their predecessor, as
/// in the recursive formulation of the algorithm. The traversal borrows the
/// graph and is single-pass, the same as [`Bfs`].
pub struct Dfs<'a, V, E> {
    graph: &'a Graph<V, E>,
    raw: RawVisit<RawDfs>,
}

impl<'a, V, E> Dfs<'a, V, E>
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

impl<'a, V, E> Iterator for Dfs<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let storage = self.graph.storage();
        self.raw.next(storage).map(|id| storage.vertex(id))
    }
}

impl<'a, V, E> FusedIterator for Dfs<'a, V, E> {}
