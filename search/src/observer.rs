//! Observer hooks for search events.
//!
//! The engine performs no I/O. Anything a caller wants to see about a run
//! (logs, traces, counters) goes through a [`SearchObserver`].

use std::fmt::Debug;

use tracing::{debug, info, trace};
use waypoint_graph::{Vertex, VertexId};

use crate::outcome::{SearchSummary, Termination};

/// Hooks invoked by the A* loop. Every method defaults to a no-op.
pub trait SearchObserver<S, T> {
    /// A vertex was popped, marked expanded, and is about to be relaxed.
    fn on_expand(&mut self, _vertex: &Vertex<S, T>) {}

    /// A popped entry was skipped because its vertex was already expanded.
    fn on_stale_pop(&mut self, _id: VertexId) {}

    /// `successor` got a better `g_cost` through `from` and was pushed.
    fn on_relax(&mut self, _from: VertexId, _successor: &Vertex<S, T>) {}

    /// The search finished.
    fn on_finish(&mut self, _summary: &SearchSummary<'_, T>) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S, T> SearchObserver<S, T> for NoopObserver {}

/// Observer that reports search progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<S, T: Debug> SearchObserver<S, T> for TracingObserver {
    fn on_expand(&mut self, vertex: &Vertex<S, T>) {
        let info = vertex.search_info();
        trace!(vertex = %vertex.id(), g = ?info.g_cost, f = ?info.f_cost, "expand");
    }

    fn on_stale_pop(&mut self, id: VertexId) {
        trace!(vertex = %id, "stale open-list entry skipped");
    }

    fn on_finish(&mut self, summary: &SearchSummary<'_, T>) {
        let stats = summary.stats;
        match summary.termination {
            Termination::GoalReached { .. } => {
                if let (Some(first), Some(last)) = (summary.path.first(), summary.path.last()) {
                    debug!(start = %first, goal = %last, "path endpoints");
                }
                info!(
                    cost = ?summary.cost,
                    length = summary.path.len(),
                    expansions = stats.expansions,
                    "path found"
                );
            }
            Termination::FrontierExhausted => {
                info!(expansions = stats.expansions, "failed to find a path");
            }
            Termination::UnknownEndpoint {
                start_found,
                goal_found,
            } => {
                debug!(start_found, goal_found, "search endpoint not in graph");
            }
        }
    }
}

impl<S, T, O: SearchObserver<S, T> + ?Sized> SearchObserver<S, T> for &mut O {
    fn on_expand(&mut self, vertex: &Vertex<S, T>) {
        (**self).on_expand(vertex);
    }

    fn on_stale_pop(&mut self, id: VertexId) {
        (**self).on_stale_pop(id);
    }

    fn on_relax(&mut self, from: VertexId, successor: &Vertex<S, T>) {
        (**self).on_relax(from, successor);
    }

    fn on_finish(&mut self, summary: &SearchSummary<'_, T>) {
        (**self).on_finish(summary);
    }
}

/// Fan events out to two observers, first `A` then `B`.
impl<S, T, A, B> SearchObserver<S, T> for (A, B)
where
    A: SearchObserver<S, T>,
    B: SearchObserver<S, T>,
{
    fn on_expand(&mut self, vertex: &Vertex<S, T>) {
        self.0.on_expand(vertex);
        self.1.on_expand(vertex);
    }

    fn on_stale_pop(&mut self, id: VertexId) {
        self.0.on_stale_pop(id);
        self.1.on_stale_pop(id);
    }

    fn on_relax(&mut self, from: VertexId, successor: &Vertex<S, T>) {
        self.0.on_relax(from, successor);
        self.1.on_relax(from, successor);
    }

    fn on_finish(&mut self, summary: &SearchSummary<'_, T>) {
        self.0.on_finish(summary);
        self.1.on_finish(summary);
    }
}
