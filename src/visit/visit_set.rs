use fixedbitset::FixedBitSet;

use crate::core::id::VertexId;

/// A set of visited vertices.
pub trait VisitSet {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, id: VertexId) -> bool;

    /// Marks the vertex as not visited.
    fn unvisit(&mut self, id: VertexId);

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, id: VertexId) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;
}

/// [`FixedBitSet`] indexed by [`VertexId`].
///
/// Vertex ids are dense, so a bit set sized by the vertex count of the graph
/// never needs to grow while the graph is not mutated.
#[derive(Debug, Clone, Default)]
pub struct VertexBitSet {
    inner: FixedBitSet,
}

impl VertexBitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
        }
    }
}

impl VisitSet for VertexBitSet {
    fn visit(&mut self, id: VertexId) -> bool {
        let index = id.as_usize();
        if self.inner.len() <= index {
            self.inner.grow(index + 1);
        }
        !self.inner.put(index)
    }

    fn unvisit(&mut self, id: VertexId) {
        if id.as_usize() < self.inner.len() {
            self.inner.set(id.as_usize(), false);
        }
    }

    fn is_visited(&self, id: VertexId) -> bool {
        self.inner.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.inner.count_ones(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_grows() {
        let mut set = VertexBitSet::new();

        assert!(set.visit(VertexId::from_usize(3)));
        assert!(!set.visit(VertexId::from_usize(3)));
        assert!(set.is_visited(VertexId::from_usize(3)));
        assert!(!set.is_visited(VertexId::from_usize(10)));
        assert_eq!(set.visited_count(), 1);

        set.unvisit(VertexId::from_usize(3));
        assert_eq!(set.visited_count(), 0);
    }
}
