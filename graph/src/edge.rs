//! Directed edge stored in its source vertex's edge list.

use std::fmt;

use crate::indexer::VertexId;

/// A directed arc `src → dst` with a transition cost.
///
/// Endpoints are vertex ids into the owning graph; an edge never outlives
/// its source vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    src: VertexId,
    dst: VertexId,
    cost: T,
}

impl<T> Edge<T> {
    pub(crate) fn new(src: VertexId, dst: VertexId, cost: T) -> Self {
        Self { src, dst, cost }
    }

    #[must_use]
    pub fn src(&self) -> VertexId {
        self.src
    }

    #[must_use]
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    #[must_use]
    pub fn cost(&self) -> &T {
        &self.cost
    }

    pub(crate) fn set_cost(&mut self, cost: T) {
        self.cost = cost;
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge: {} -> {}, cost: {}", self.src, self.dst, self.cost)
    }
}
