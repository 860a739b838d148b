use std::{fmt, hash::Hash};

use thiserror::Error;

use crate::{
    core::{id::VertexId, weight::EdgeWeight},
    graph::Graph,
    storage::EdgeRecord,
};

use super::export::Dot;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex {0} is not found under its own id")]
    IdMapMismatch(usize),
    #[error("edge record of vertex {0} points to {1} which is out of bounds")]
    TargetOutOfBounds(usize, usize),
    #[error("simple graph contains parallel edges from {0} to {1}")]
    ParallelEdges(usize, usize),
    #[error("self-loop on vertex {0} in graph that forbids them")]
    SelfLoopForbidden(usize),
    #[error("edge from {0} to {1} has no weight in weighted graph")]
    MissingWeight(usize, usize),
    #[error("undirected edge from {0} to {1} has {2} records but {3} mirrored records")]
    MirrorMismatch(usize, usize, usize, usize),
}

/// Checks the structural invariants of the graph storage.
pub fn check_consistency<V, E>(graph: &Graph<V, E>) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone,
    E: PartialEq + EdgeWeight,
{
    let storage = graph.storage();
    let config = graph.config();
    let vertex_count = storage.vertex_count();

    for id in storage.vertex_ids() {
        if storage.id(storage.vertex(id)) != Some(id) {
            return Err(ConsistencyCheckError::IdMapMismatch(id.as_usize()));
        }
    }

    for from in storage.vertex_ids() {
        let edges = storage.edges(from);

        for (i, record) in edges.iter().enumerate() {
            let to = record.target();
            let pair = (from.as_usize(), to.as_usize());

            if to.as_usize() >= vertex_count {
                return Err(ConsistencyCheckError::TargetOutOfBounds(pair.0, pair.1));
            }

            if from == to && !config.allows_self_loops() {
                return Err(ConsistencyCheckError::SelfLoopForbidden(pair.0));
            }

            if config.is_weighted() && record.attr().weight().is_none() {
                return Err(ConsistencyCheckError::MissingWeight(pair.0, pair.1));
            }

            if config.is_simple() && edges[..i].iter().any(|other| other.target() == to) {
                return Err(ConsistencyCheckError::ParallelEdges(pair.0, pair.1));
            }

            if !config.is_directed() && from != to {
                let count = count_records(edges, to, record.attr());
                let mirrored = count_records(storage.edges(to), from, record.attr());

                if count != mirrored {
                    return Err(ConsistencyCheckError::MirrorMismatch(
                        pair.0, pair.1, count, mirrored,
                    ));
                }
            }
        }
    }

    Ok(())
}

fn count_records<E: PartialEq>(edges: &[EdgeRecord<E>], target: VertexId, attr: &E) -> usize {
    edges
        .iter()
        .filter(|record| record.target() == target && record.attr() == attr)
        .count()
}

/// Graphviz rendering of the graph for debugging failed tests.
pub trait AsDot {
    fn as_dot(&self) -> String;
}

impl<V, E> AsDot for Graph<V, E>
where
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn as_dot(&self) -> String {
        Dot::new(None, |v: &V| format!("{v:?}"), |e: &E| format!("{e:?}")).to_string(self)
    }
}
