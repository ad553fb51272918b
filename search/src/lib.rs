//! Waypoint Search: A* over a [`waypoint_graph::Graph`].
//!
//! Two modes share one expansion loop:
//!
//! - batch ([`astar::AStar::search`]) over a fully built graph
//! - incremental ([`astar::AStar::inc_search`]) where the graph is grown from a
//!   neighbour function as vertices are expanded
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_graph  ←  waypoint_search  ←  waypoint_harness
//! (arena, ids)       (open list, A*)      (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`OpenList`] -- min-priority frontier with lazy deletion
//! - [`SearchPolicy`] -- tie-break configuration
//! - [`SearchObserver`] -- hooks for expansion and completion events
//! - [`SearchTrace`] -- recorded expansion log with a canonical digest
//! - [`SearchResult`] -- path, cost, termination reason and counters

#![forbid(unsafe_code)]

pub mod astar;
pub mod error;
pub mod observer;
pub mod open_list;
pub mod outcome;
pub mod policy;
pub mod trace;

pub use astar::{inc_search, search, AStar, Path, SearchResult};
pub use error::TraceError;
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use open_list::OpenList;
pub use outcome::{SearchStats, SearchSummary, Termination};
pub use policy::{SearchPolicy, TieBreak};
pub use trace::{content_digest, SearchTrace};
