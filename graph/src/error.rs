//! Typed graph mutation errors.
//!
//! Expected absence (lookups, removals of missing entities) is reported as
//! `None` or `false`, never as an error. `GraphError` covers only calls that
//! would break a structural invariant.

use thiserror::Error;

use crate::indexer::VertexId;

/// Result type alias for graph mutators.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {id} is not allowed")]
    SelfLoop { id: VertexId },

    /// An id-based mutator referenced a vertex that is not in the graph.
    #[error("vertex {id} not found")]
    VertexNotFound { id: VertexId },
}
