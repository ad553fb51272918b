//! Harness runner: drives a world through the engine and records the result.
//!
//! # Pipeline
//!
//! ```text
//! batch:       materialize() → AStar::search_observed()
//! incremental: AStar::inc_search_observed(world.neighbours)
//!   → SearchTrace → SearchReport (binds the trace digest)
//! ```
//!
//! The report is canonical JSON (sorted keys, compact). Its digest covers
//! the trace through `trace_digest`, so one string identifies the run.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use waypoint_graph::{DefaultIndexer, VertexId};
use waypoint_search::trace::DOMAIN_SEARCH_TRACE;
use waypoint_search::{
    content_digest, AStar, SearchPolicy, SearchResult, SearchStats, SearchTrace, Termination,
    TieBreak, TracingObserver,
};

use crate::contract::{materialize, SearchWorld};
use crate::error::{RunError, VerifyError};

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYPOINT::SEARCH_REPORT::V1\0";

/// Fixed filenames in a run directory.
pub const REPORT_FILENAME: &str = "search_report.json";
pub const TRACE_FILENAME: &str = "search_trace.json";
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// How the graph is provided to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Whole reachable graph built up front.
    Batch,
    /// Graph discovered during expansion.
    Incremental,
}

impl SearchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Incremental => "incremental",
        }
    }
}

/// Normative summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub world_id: String,
    pub mode: SearchMode,
    pub tie_break: TieBreak,
    pub termination: Termination,
    pub path: Vec<VertexId>,
    /// Total cost rendered through `Display`.
    pub cost: Option<String>,
    pub stats: SearchStats,
    pub trace_digest: String,
}

impl SearchReport {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.termination.is_goal_reached()
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if rendering fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let stats = &self.stats;
        serde_json::to_vec(&serde_json::json!({
            "cost": self.cost,
            "mode": self.mode.as_str(),
            "path": self.path.iter().map(|id| id.get()).collect::<Vec<_>>(),
            "stats": {
                "expansions": stats.expansions,
                "frontier_high_water": stats.frontier_high_water,
                "stale_pops": stats.stale_pops,
                "vertices_materialized": stats.vertices_materialized,
            },
            "termination": self.termination.kind(),
            "tie_break": self.tie_break.as_str(),
            "trace_digest": self.trace_digest,
            "world_id": self.world_id,
        }))
    }

    /// Domain-separated digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if rendering fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        Ok(content_digest(
            DOMAIN_SEARCH_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct SearchRun<S> {
    pub report: SearchReport,
    pub trace: SearchTrace,
    /// States along the found path; empty when none was found.
    pub path: Vec<S>,
}

/// Run `world` through A* in `mode` under `policy`.
///
/// # Errors
///
/// Returns [`RunError::Graph`] if the world cannot be materialized, or
/// [`RunError::Trace`] if the trace cannot be digested.
pub fn run_world<W: SearchWorld + ?Sized>(
    world: &W,
    mode: SearchMode,
    policy: &SearchPolicy,
) -> Result<SearchRun<W::State>, RunError> {
    let engine = AStar::with_policy(*policy);
    let mut trace = SearchTrace::new();
    let mut observer = (&mut trace, TracingObserver);
    let heuristic = |state: &W::State, goal: &W::State| world.heuristic(state, goal);

    debug!(world = world.world_id(), mode = mode.as_str(), "run start");
    let result: SearchResult<W::State, W::Cost> = match mode {
        SearchMode::Batch => {
            let mut graph = materialize(world)?;
            let (start, goal) = (world.start(), world.goal());
            engine.search_observed(&mut graph, &start, &goal, heuristic, &mut observer)
        }
        SearchMode::Incremental => engine.inc_search_observed(
            world.start(),
            world.goal(),
            |state: &W::State| world.neighbours(state),
            heuristic,
            DefaultIndexer,
            &mut observer,
        ),
    };

    let report = SearchReport {
        world_id: world.world_id().to_string(),
        mode,
        tie_break: policy.tie_break,
        termination: result.termination,
        path: result.path_ids,
        cost: result.cost.as_ref().map(ToString::to_string),
        stats: result.stats,
        trace_digest: trace.digest()?,
    };
    info!(
        world = %report.world_id,
        mode = mode.as_str(),
        termination = report.termination.kind(),
        expansions = report.stats.expansions,
        "run complete"
    );
    Ok(SearchRun {
        report,
        trace,
        path: result.path,
    })
}

/// Write the report, trace and report digest into `dir`.
///
/// Returns the report digest.
///
/// # Errors
///
/// Returns [`RunError::Io`] on write failure, or a serialization error.
pub fn write_run_dir<S>(run: &SearchRun<S>, dir: &Path) -> Result<String, RunError> {
    let report_bytes = run.report.to_canonical_json_bytes()?;
    let trace_bytes = run.trace.to_canonical_json_bytes()?;
    let digest = content_digest(DOMAIN_SEARCH_REPORT, &report_bytes);

    for (name, bytes) in [
        (REPORT_FILENAME, report_bytes.as_slice()),
        (TRACE_FILENAME, trace_bytes.as_slice()),
        (DIGEST_FILENAME, digest.as_bytes()),
    ] {
        let path = dir.join(name);
        fs::write(&path, bytes).map_err(|source| RunError::Io { path, source })?;
    }
    Ok(digest)
}

/// Re-derive both digests from a run directory and compare them with the
/// recorded ones. Returns the report digest on success.
///
/// # Errors
///
/// Returns [`VerifyError`] if a file is missing or malformed, or if either
/// digest does not match.
pub fn verify_run_dir(dir: &Path) -> Result<String, VerifyError> {
    let read = |name: &str| {
        let path = dir.join(name);
        fs::read(&path).map_err(|source| VerifyError::Io { path, source })
    };
    let report_bytes = read(REPORT_FILENAME)?;
    let trace_bytes = read(TRACE_FILENAME)?;
    let recorded = String::from_utf8(read(DIGEST_FILENAME)?).map_err(|e| VerifyError::Malformed {
        file: DIGEST_FILENAME,
        detail: e.to_string(),
    })?;

    let computed = content_digest(DOMAIN_SEARCH_REPORT, &report_bytes);
    if recorded != computed {
        return Err(VerifyError::DigestMismatch {
            file: REPORT_FILENAME,
            recorded,
            computed,
        });
    }

    let report: serde_json::Value =
        serde_json::from_slice(&report_bytes).map_err(|e| VerifyError::Malformed {
            file: REPORT_FILENAME,
            detail: e.to_string(),
        })?;
    let Some(recorded_trace) = report["trace_digest"].as_str() else {
        return Err(VerifyError::Malformed {
            file: REPORT_FILENAME,
            detail: "missing trace_digest".to_string(),
        });
    };
    let computed_trace = content_digest(DOMAIN_SEARCH_TRACE, &trace_bytes);
    if recorded_trace != computed_trace {
        return Err(VerifyError::DigestMismatch {
            file: TRACE_FILENAME,
            recorded: recorded_trace.to_string(),
            computed: computed_trace,
        });
    }
    Ok(computed)
}
