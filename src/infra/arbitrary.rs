use std::{fmt, hash::Hash};

use arbitrary::Arbitrary;

use crate::{
    core::{error::AddEdgeError, weight::EdgeWeight},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, E> {
    AddVertex(V),
    RemoveVertex(V),
    AddEdge(V, V, E),
    RemoveEdge(V, V),
    Clear,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<E> {
    AddVertex(bool),
    RemoveVertex(bool),
    AddEdge(Result<(), AddEdgeError<E>>),
    RemoveEdge(bool),
    Clear,
}

impl<V, E> MutOp<V, E>
where
    V: Eq + Hash + Clone,
    E: Clone + PartialEq + EdgeWeight,
{
    pub fn apply(self, graph: &mut Graph<V, E>) -> MutOpResult<E> {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(vertex) => MutOpResult::RemoveVertex(graph.remove_vertex(&vertex)),
            MutOp::AddEdge(from, to, attr) => MutOpResult::AddEdge(graph.add_edge(from, to, attr)),
            MutOp::RemoveEdge(from, to) => MutOpResult::RemoveEdge(graph.remove_edge(&from, &to)),
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
        }
    }
}

#[derive(Arbitrary, Clone)]
pub struct MutOpsSeq<V, E>(pub Vec<MutOp<V, E>>);

impl<V, E> IntoIterator for MutOpsSeq<V, E> {
    type Item = MutOp<V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use crate::{core::GraphConfig, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn is_arbitrary() {
        fn assert_arbitrary<'a, T: Arbitrary<'a>>() {}

        assert_arbitrary::<MutOpsSeq<u8, u8>>();
    }

    #[test]
    fn replay_keeps_consistency() {
        let ops = MutOpsSeq(vec![
            MutOp::AddEdge(0u8, 1u8, 7u8),
            MutOp::AddEdge(1, 2, 3),
            MutOp::AddEdge(1, 0, 7),
            MutOp::RemoveVertex(0),
            MutOp::AddEdge(2, 2, 1),
            MutOp::RemoveEdge(2, 1),
            MutOp::Clear,
            MutOp::AddVertex(5),
        ]);

        let mut graph = Graph::new(GraphConfig::new().multi());
        let mut results = Vec::new();

        for op in ops {
            results.push(op.apply(&mut graph));
            check_consistency(&graph).unwrap();
        }

        assert_eq!(results[3], MutOpResult::RemoveVertex(true));
        assert!(matches!(results[4], MutOpResult::AddEdge(Err(_))));
        assert_eq!(results[5], MutOpResult::RemoveEdge(true));
        assert_eq!(graph.vertex_count(), 1);
    }
}
