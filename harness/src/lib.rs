//! Search worlds and the runner that drives them through the engine.
//!
//! A world ([`contract::SearchWorld`]) supplies states, successors, costs
//! and a heuristic. The runner ([`runner::run_world`]) searches it in batch
//! or incremental mode and produces a canonical, digest-bound report. The
//! [`oracle`] gives ground truth for small graphs.

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod oracle;
pub mod runner;
pub mod worlds;

pub use contract::{materialize, SearchWorld};
pub use error::{RunError, VerifyError, WorldError};
pub use runner::{run_world, verify_run_dir, write_run_dir, SearchMode, SearchReport, SearchRun};
