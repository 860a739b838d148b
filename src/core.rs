pub mod config;
pub mod error;
pub mod id;
pub mod weight;

pub use config::{EdgeMode, GraphConfig, Multiplicity, SelfLoops, Weighting};
pub use error::{AddEdgeError, AddEdgeErrorKind, Error, Requirement, WriteError};
pub use id::VertexId;
pub use weight::{EdgeWeight, Labeled, Weight};
