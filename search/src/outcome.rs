//! Termination reasons and counters shared by the engine, observers and
//! traces.

use waypoint_graph::VertexId;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The goal was popped from the open list.
    GoalReached { goal: VertexId },
    /// The open list emptied before the goal was popped.
    FrontierExhausted,
    /// Start or goal did not resolve to a vertex; no expansion happened.
    UnknownEndpoint { start_found: bool, goal_found: bool },
}

impl Termination {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }

    /// Stable name used in traces and reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::UnknownEndpoint { .. } => "unknown_endpoint",
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices marked expanded.
    pub expansions: u64,
    /// Popped entries skipped because their vertex was already expanded.
    pub stale_pops: u64,
    /// Largest open-list size, stale entries included.
    pub frontier_high_water: u64,
    /// Vertices in the searched graph when the search ended.
    pub vertices_materialized: u64,
}

/// Borrowed view of a finished search handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct SearchSummary<'a, T> {
    pub termination: Termination,
    /// Vertex ids from start to goal; empty when no path was found.
    pub path: &'a [VertexId],
    /// `g_cost` of the goal when a path was found.
    pub cost: Option<&'a T>,
    pub stats: &'a SearchStats,
}
