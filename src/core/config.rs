//! The four configuration axes of a [`Graph`](crate::graph::Graph).
//!
//! A configuration is fixed when the graph is created and never changes
//! afterwards. It determines which mutations are accepted and which
//! algorithms can be run on the graph.
//!
//! # Examples
//!
//! ```
//! use adjgraph::core::GraphConfig;
//!
//! let config = GraphConfig::new().directed().weighted();
//!
//! assert!(config.is_directed());
//! assert!(config.is_simple());
//! assert_eq!(
//!     config.to_string(),
//!     "Simple Weighted DiGraph with No SelfLoop"
//! );
//! ```

use std::fmt;

#[cfg(feature = "arbitrary")]
use arbitrary::Arbitrary;

/// Whether parallel edges between the same ordered pair of vertices are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub enum Multiplicity {
    /// At most one edge from `u` to `v`.
    #[default]
    Simple,
    /// Any number of edges from `u` to `v`.
    Multi,
}

impl Multiplicity {
    /// Decides whether an edge can be inserted given whether an edge with the
    /// same endpoints already exists.
    #[inline]
    pub fn admits(&self, has_parallel: bool) -> bool {
        match self {
            Multiplicity::Simple => !has_parallel,
            Multiplicity::Multi => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub enum EdgeMode {
    #[default]
    Undirected,
    Directed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub enum SelfLoops {
    #[default]
    Forbidden,
    Allowed,
}

/// Whether every edge payload must carry a weight.
///
/// See [`EdgeWeight`](crate::core::weight::EdgeWeight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub enum Weighting {
    #[default]
    Unweighted,
    Weighted,
}

/// Immutable configuration of a graph.
///
/// The default is a simple undirected unweighted graph without self-loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub struct GraphConfig {
    multiplicity: Multiplicity,
    edge_mode: EdgeMode,
    self_loops: SelfLoops,
    weighting: Weighting,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the configuration from the values of all four axes at once.
    ///
    /// Useful for external builders that collect the options separately.
    pub fn from_parts(
        multiplicity: Multiplicity,
        edge_mode: EdgeMode,
        self_loops: SelfLoops,
        weighting: Weighting,
    ) -> Self {
        Self {
            multiplicity,
            edge_mode,
            self_loops,
            weighting,
        }
    }

    /// Allows parallel edges.
    pub fn multi(self) -> Self {
        Self {
            multiplicity: Multiplicity::Multi,
            ..self
        }
    }

    pub fn directed(self) -> Self {
        Self {
            edge_mode: EdgeMode::Directed,
            ..self
        }
    }

    pub fn self_loops(self) -> Self {
        Self {
            self_loops: SelfLoops::Allowed,
            ..self
        }
    }

    /// Requires every edge payload to expose a weight.
    pub fn weighted(self) -> Self {
        Self {
            weighting: Weighting::Weighted,
            ..self
        }
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn self_loop_policy(&self) -> SelfLoops {
        self.self_loops
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn is_simple(&self) -> bool {
        self.multiplicity == Multiplicity::Simple
    }

    pub fn is_directed(&self) -> bool {
        self.edge_mode == EdgeMode::Directed
    }

    pub fn allows_self_loops(&self) -> bool {
        self.self_loops == SelfLoops::Allowed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighting == Weighting::Weighted
    }
}

impl fmt::Display for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}Weighted {}Graph with {}SelfLoop",
            if self.is_simple() { "Simple" } else { "Multi" },
            if self.is_weighted() { "" } else { "Non-" },
            if self.is_directed() { "Di" } else { "" },
            if self.allows_self_loops() { "" } else { "No " },
        )
    }
}
