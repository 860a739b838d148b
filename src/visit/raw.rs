use std::collections::VecDeque;

use crate::{core::id::VertexId, storage::AdjacencyMap};

use super::visit_set::{VertexBitSet, VisitSet};

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo {
    type Collection: TraversalCollection<VertexId>;

    /// Whether vertices are marked as visited when they are pushed to the
    /// frontier (breadth-first) or when they are popped (depth-first).
    fn visit_on_push() -> bool;
}

pub(crate) enum RawBfs {}

impl RawAlgo for RawBfs {
    type Collection = Queue<VertexId>;

    fn visit_on_push() -> bool {
        true
    }
}

pub(crate) enum RawDfs {}

impl RawAlgo for RawDfs {
    type Collection = Stack<VertexId>;

    fn visit_on_push() -> bool {
        false
    }
}

pub(crate) struct RawVisit<A: RawAlgo> {
    pub collection: A::Collection,
    pub visited: VertexBitSet,
}

impl<A: RawAlgo> RawVisit<A> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            collection: A::Collection::default(),
            visited: VertexBitSet::with_capacity(vertex_count),
        }
    }

    pub fn start(&mut self, root: VertexId) {
        if A::visit_on_push() {
            self.visited.visit(root);
        }

        self.collection.clear();
        self.collection.push(root);
    }

    pub fn next<V, E>(&mut self, storage: &AdjacencyMap<V, E>) -> Option<VertexId> {
        if A::visit_on_push() {
            let vertex = self.collection.pop()?;

            for record in storage.edges(vertex) {
                if self.visited.visit(record.target()) {
                    self.collection.push(record.target());
                }
            }

            return Some(vertex);
        }

        loop {
            let vertex = self.collection.pop()?;

            // A vertex can be on the stack multiple times if it was reached
            // from several vertices before being popped.
            if !self.visited.visit(vertex) {
                continue;
            }

            // Push in reverse so that the first neighbor is popped first,
            // which matches the order of the recursive formulation.
            for record in storage.edges(vertex).iter().rev() {
                if !self.visited.is_visited(record.target()) {
                    self.collection.push(record.target());
                }
            }

            return Some(vertex);
        }
    }
}
