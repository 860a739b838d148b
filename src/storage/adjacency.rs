use std::{hash::Hash, ops::Range};

use rustc_hash::FxHashMap;

use crate::core::id::VertexId;

/// One directed arc stored in the edge list of its tail vertex.
///
/// Two records are equal if they have the same target and equal payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRecord<E> {
    target: VertexId,
    attr: E,
}

impl<E> EdgeRecord<E> {
    pub fn new(target: VertexId, attr: E) -> Self {
        Self { target, attr }
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn attr(&self) -> &E {
        &self.attr
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjVertex<V, E> {
    pub attr: V,
    pub edges: Vec<EdgeRecord<E>>,
}

impl<V, E> AdjVertex<V, E> {
    pub fn new(attr: V) -> Self {
        Self {
            attr,
            edges: Vec::new(),
        }
    }
}

/// Arena of vertices and their outgoing edge records.
///
/// The vertex values are mapped to dense [`VertexId`]s, which index into the
/// vector of vertex slots. The map knows nothing about edge direction or
/// mirroring; that bookkeeping is done by [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone)]
pub struct AdjacencyMap<V, E> {
    ids: FxHashMap<V, VertexId>,
    vertices: Vec<AdjVertex<V, E>>,
}

impl<V, E> AdjacencyMap<V, E> {
    pub fn new() -> Self {
        Self {
            ids: FxHashMap::default(),
            vertices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edge records in all edge lists.
    pub fn record_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_ids(&self) -> VertexIds {
        VertexIds(0..self.vertices.len())
    }

    /// Returns the vertex value stored in the slot.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of bounds.
    pub fn vertex(&self, id: VertexId) -> &V {
        &self.vertices[id.as_usize()].attr
    }

    /// Returns the outgoing edge records of the vertex.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of bounds.
    pub fn edges(&self, id: VertexId) -> &[EdgeRecord<E>] {
        &self.vertices[id.as_usize()].edges
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter().map(|vertex| &vertex.attr)
    }

    pub fn push_edge(&mut self, from: VertexId, record: EdgeRecord<E>) {
        self.vertices[from.as_usize()].edges.push(record);
    }

    /// Finds the position of the first record in the edge list of `from` that
    /// satisfies the predicate.
    pub fn position<F>(&self, from: VertexId, predicate: F) -> Option<usize>
    where
        F: FnMut(&EdgeRecord<E>) -> bool,
    {
        self.vertices[from.as_usize()].edges.iter().position(predicate)
    }

    /// Removes the record at given position, preserving the order of the
    /// remaining records.
    pub fn remove_edge_at(&mut self, from: VertexId, position: usize) -> EdgeRecord<E> {
        self.vertices[from.as_usize()].edges.remove(position)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.vertices.clear();
    }
}

impl<V, E> AdjacencyMap<V, E>
where
    V: Eq + Hash + Clone,
{
    pub fn id(&self, vertex: &V) -> Option<VertexId> {
        self.ids.get(vertex).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.ids.contains_key(vertex)
    }

    /// Ensures that the vertex has a slot. Returns its id and `true` if the
    /// slot was created by this call.
    pub fn insert_vertex(&mut self, vertex: V) -> (VertexId, bool) {
        if let Some(id) = self.id(&vertex) {
            return (id, false);
        }

        let id = VertexId::from_usize(self.vertices.len());
        self.ids.insert(vertex.clone(), id);
        self.vertices.push(AdjVertex::new(vertex));

        (id, true)
    }

    /// Removes the vertex together with all records that refer to it.
    ///
    /// This is done in two steps. First, records targeting the vertex are
    /// purged from all other edge lists. Then the slot is swap-removed, and if
    /// that moved the last vertex into the freed slot, every record pointing
    /// to the moved vertex is relocated to its new id.
    pub fn remove_vertex(&mut self, id: VertexId) -> AdjVertex<V, E> {
        let purged = self.purge_targeting(id);

        let removed = self.vertices.swap_remove(id.as_usize());
        self.ids.remove(&removed.attr);

        if id.as_usize() < self.vertices.len() {
            self.relocate_vertex(VertexId::from_usize(self.vertices.len()), id);
        }

        tracing::trace!(
            vertex = ?id,
            purged,
            own = removed.edges.len(),
            "removed vertex slot"
        );

        removed
    }

    fn purge_targeting(&mut self, id: VertexId) -> usize {
        let mut purged = 0;

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            // Own records disappear together with the slot.
            if i == id.as_usize() {
                continue;
            }

            let before = vertex.edges.len();
            vertex.edges.retain(|record| record.target != id);
            purged += before - vertex.edges.len();
        }

        purged
    }

    fn relocate_vertex(&mut self, old_id: VertexId, new_id: VertexId) {
        if let Some(id) = self.ids.get_mut(&self.vertices[new_id.as_usize()].attr) {
            *id = new_id;
        }

        // Fix the id of the moved vertex in all records pointing to it,
        // including its own self-loops.
        for vertex in self.vertices.iter_mut() {
            for record in vertex.edges.iter_mut() {
                if record.target == old_id {
                    record.target = new_id;
                }
            }
        }
    }
}

impl<V, E> Default for AdjacencyMap<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct VertexIds(Range<usize>);

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(VertexId::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn insert_vertex_idempotent() {
        let mut map = AdjacencyMap::<_, ()>::new();

        assert_eq!(map.insert_vertex('a'), (v(0), true));
        assert_eq!(map.insert_vertex('b'), (v(1), true));
        assert_eq!(map.insert_vertex('a'), (v(0), false));
        assert_eq!(map.vertex_count(), 2);
    }

    #[test]
    fn remove_vertex_purges_records() {
        let mut map = AdjacencyMap::new();

        let a = map.insert_vertex('a').0;
        let b = map.insert_vertex('b').0;
        let c = map.insert_vertex('c').0;

        map.push_edge(a, EdgeRecord::new(b, 1));
        map.push_edge(c, EdgeRecord::new(b, 2));
        map.push_edge(b, EdgeRecord::new(a, 3));

        let removed = map.remove_vertex(b);

        assert_eq!(removed.attr, 'b');
        assert_eq!(removed.edges, vec![EdgeRecord::new(a, 3)]);
        assert_eq!(map.record_count(), 0);
        assert!(!map.contains(&'b'));
    }

    #[test]
    fn remove_vertex_relocates_last() {
        let mut map = AdjacencyMap::new();

        let a = map.insert_vertex('a').0;
        let b = map.insert_vertex('b').0;
        let c = map.insert_vertex('c').0;

        map.push_edge(a, EdgeRecord::new(c, 1));
        map.push_edge(c, EdgeRecord::new(c, 2));
        map.push_edge(c, EdgeRecord::new(a, 3));

        map.remove_vertex(b);

        // `c` took over the slot of `b`.
        let c = map.id(&'c').unwrap();
        assert_eq!(c, v(1));
        assert_eq!(map.vertex(c), &'c');
        assert_eq!(map.edges(a), &[EdgeRecord::new(c, 1)]);
        assert_eq!(
            map.edges(c),
            &[EdgeRecord::new(c, 2), EdgeRecord::new(a, 3)]
        );
    }

    #[test]
    fn remove_edge_preserves_order() {
        let mut map = AdjacencyMap::new();

        let a = map.insert_vertex('a').0;
        let b = map.insert_vertex('b').0;

        map.push_edge(a, EdgeRecord::new(b, 1));
        map.push_edge(a, EdgeRecord::new(a, 2));
        map.push_edge(a, EdgeRecord::new(b, 3));

        let position = map.position(a, |record| record.target() == b).unwrap();
        assert_eq!(map.remove_edge_at(a, position), EdgeRecord::new(b, 1));
        assert_eq!(
            map.edges(a),
            &[EdgeRecord::new(a, 2), EdgeRecord::new(b, 3)]
        );
    }
}
