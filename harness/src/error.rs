//! Typed harness failures.

use std::path::PathBuf;

use thiserror::Error;
use waypoint_graph::GraphError;
use waypoint_search::TraceError;

/// A world description could not be parsed or built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("map has no rows")]
    EmptyMap,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    #[error("map has no {marker:?} marker")]
    MissingMarker { marker: char },

    #[error("map has more than one {marker:?} marker")]
    DuplicateMarker { marker: char },

    #[error("town {id} is not on the map")]
    UnknownTown { id: u32 },

    #[error("vertex {id} is not in a graph of {vertex_count} vertices")]
    UnknownVertex { id: u32, vertex_count: u32 },

    #[error("world parameter {name} is out of range: {detail}")]
    InvalidParameter { name: &'static str, detail: String },
}

/// Running a world through the engine, or persisting its report, failed.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A persisted run directory failed verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} is malformed: {detail}")]
    Malformed { file: &'static str, detail: String },

    #[error("{file} digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch {
        file: &'static str,
        recorded: String,
        computed: String,
    },
}
