//! Waypoint Graph: identity-keyed graph container for search.
//!
//! # API Surface
//!
//! - [`graph::Graph`] -- owns every vertex, keyed by [`indexer::VertexId`]
//! - [`vertex::Vertex`] -- one caller state plus outgoing edges and search scratch
//! - [`edge::Edge`] -- a directed `(src, dst, cost)` arc owned by its source vertex
//! - [`indexer::StateIndexer`] -- maps a caller state to its stable identity
//!
//! # Module Dependency Direction
//!
//! `indexer` ← `edge` ← `vertex` ← `graph`
//!
//! One-way only. Edges and predecessor lists refer to vertices by id, never
//! by reference, so the graph is a flat arena with no ownership cycles.

#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod graph;
pub mod indexer;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use indexer::{DefaultIndexer, Identified, StateIndexer, VertexId, VertexKey};
pub use vertex::{SearchInfo, Transition, Vertex};
