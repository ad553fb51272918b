//! Typed search-side errors.
//!
//! A search itself never fails: unknown endpoints and unreachable goals are
//! reported through [`crate::outcome::Termination`] with an empty path. The
//! only fallible operation is serializing a recorded [`crate::SearchTrace`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    /// The trace could not be rendered as JSON.
    #[error("trace serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
