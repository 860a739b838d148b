use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SelfLoop,
    MultiEdge,
    MissingWeight,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SelfLoop => "the graph does not accept self-loops",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
            AddEdgeErrorKind::MissingWeight => "the graph is weighted but the edge has no weight",
        };
        f.write_str(reason)
    }
}

/// A property of the graph configuration that an operation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Directed,
    Undirected,
    Weighted,
    SimpleGraph,
    NoSelfLoops,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = match self {
            Requirement::Directed => "a directed graph",
            Requirement::Undirected => "an undirected graph",
            Requirement::Weighted => "a weighted graph",
            Requirement::SimpleGraph => "a simple graph",
            Requirement::NoSelfLoops => "a graph without self-loops",
        };
        f.write_str(requirement)
    }
}

/// The error encountered when querying the graph or running an algorithm on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex which must exist for the operation is not in the graph.
    #[error("vertex does not exist")]
    VertexAbsent,

    /// The graph configuration does not allow the operation.
    #[error("operation requires {0}")]
    Unsupported(Requirement),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// An edge without weight encountered in a weighted graph.
    ///
    /// This error should not happen in normal circumstances, because weights
    /// are checked when edges are added.
    #[error("edge without weight encountered")]
    MissingWeight,
}

/// The error encountered by the operations that write their result into an
/// output sink.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{0}")]
    Graph(#[from] Error),
    #[error("writing output failed: {0}")]
    Io(#[from] io::Error),
}
