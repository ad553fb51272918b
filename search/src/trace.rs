//! `SearchTrace`: recorded expansion log of one search run.
//!
//! A trace is a [`SearchObserver`]. Pass it to
//! [`crate::AStar::search_observed`] and it records every expansion in pop
//! order, which successors each expansion improved, and how the search
//! ended. Costs are recorded through `Display` so the trace does not depend
//! on the cost type.
//!
//! The canonical form is compact JSON with lexicographically sorted keys
//! (`serde_json`'s default map). Two runs with the same inputs and policy
//! produce byte-identical traces and therefore identical digests.

use std::fmt::Display;

use sha2::{Digest, Sha256};
use waypoint_graph::{Vertex, VertexId};

use crate::error::TraceError;
use crate::observer::SearchObserver;
use crate::outcome::{SearchSummary, Termination};

/// Domain prefix for search trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"WAYPOINT::SEARCH_TRACE::V1\0";

/// One frontier pop that led to an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    pub vertex: VertexId,
    pub parent: Option<VertexId>,
    pub g_cost: String,
    pub f_cost: String,
    /// Successors whose `g_cost` improved, in edge order.
    pub relaxed: Vec<VertexId>,
}

/// The complete record of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    pub expansions: Vec<ExpandEvent>,
    pub stale_pops: u64,
    /// `None` until the search finishes.
    pub termination: Option<Termination>,
    pub path: Vec<VertexId>,
    pub cost: Option<String>,
    pub frontier_high_water: u64,
}

impl SearchTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of expanded vertices in pop order.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<VertexId> {
        self.expansions.iter().map(|e| e.vertex).collect()
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Serialize`] if JSON rendering fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, TraceError> {
        Ok(serde_json::to_vec(&self.to_json_value())?)
    }

    /// Domain-separated SHA-256 of the canonical bytes, as `sha256:<hex>`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Serialize`] if JSON rendering fails.
    pub fn digest(&self) -> Result<String, TraceError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(content_digest(DOMAIN_SEARCH_TRACE, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost": self.cost,
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "frontier_high_water": self.frontier_high_water,
            "path": self.path.iter().map(|id| id.get()).collect::<Vec<_>>(),
            "stale_pops": self.stale_pops,
            "termination": self.termination.as_ref().map(termination_to_json),
        })
    }
}

impl<S, T: Display> SearchObserver<S, T> for SearchTrace {
    fn on_expand(&mut self, vertex: &Vertex<S, T>) {
        let info = vertex.search_info();
        self.expansions.push(ExpandEvent {
            expansion_order: self.expansions.len() as u64,
            vertex: vertex.id(),
            parent: info.search_parent,
            g_cost: info.g_cost.to_string(),
            f_cost: info.f_cost.to_string(),
            relaxed: Vec::new(),
        });
    }

    fn on_stale_pop(&mut self, _id: VertexId) {
        self.stale_pops += 1;
    }

    fn on_relax(&mut self, _from: VertexId, successor: &Vertex<S, T>) {
        if let Some(event) = self.expansions.last_mut() {
            event.relaxed.push(successor.id());
        }
    }

    fn on_finish(&mut self, summary: &SearchSummary<'_, T>) {
        self.termination = Some(summary.termination);
        self.path = summary.path.to_vec();
        self.cost = summary.cost.map(ToString::to_string);
        self.frontier_high_water = summary.stats.frontier_high_water;
    }
}

/// Domain-separated SHA-256 of `data`, formatted `sha256:<hex>`.
///
/// The single digest routine for traces and reports built on them.
#[must_use]
pub fn content_digest(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "expansion_order": e.expansion_order,
        "f_cost": e.f_cost,
        "g_cost": e.g_cost,
        "parent": e.parent.map(VertexId::get),
        "relaxed": e.relaxed.iter().map(|id| id.get()).collect::<Vec<_>>(),
        "vertex": e.vertex.get(),
    })
}

fn termination_to_json(t: &Termination) -> serde_json::Value {
    match t {
        Termination::GoalReached { goal } => {
            serde_json::json!({"goal": goal.get(), "type": t.kind()})
        }
        Termination::FrontierExhausted => serde_json::json!({"type": t.kind()}),
        Termination::UnknownEndpoint {
            start_found,
            goal_found,
        } => serde_json::json!({
            "goal_found": goal_found,
            "start_found": start_found,
            "type": t.kind(),
        }),
    }
}
