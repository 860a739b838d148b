//! Identification of vertices inside the adjacency storage.
//!
//! Vertices are identified by the caller-supplied values in the public API.
//! Internally, every vertex occupies a slot in a contiguous arena and
//! [`VertexId`] is the index of that slot. Ids are dense: removing a vertex
//! moves the last vertex into the freed slot, so an id is only meaningful
//! until the next vertex removal.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_usize(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "vertex id overflow");
        Self(index as u32)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self::from_usize(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
