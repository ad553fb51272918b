//! The five-vertex reference scenario.
//!
//! ```text
//!   1 --1--> 2 --1--> 3 --1--> 4 --1--> 5
//!   \_________5________^
//! ```
//!
//! The cheapest route from 1 to 5 is `[1, 2, 3, 4, 5]` with cost 4.

use waypoint_graph::Graph;

/// Directed edges `(src, dst, cost)` in insertion order.
pub const EDGES: [(u32, u32, f64); 5] = [
    (1, 2, 1.0),
    (2, 3, 1.0),
    (1, 3, 5.0),
    (3, 4, 1.0),
    (4, 5, 1.0),
];

/// Graph holding exactly [`EDGES`].
///
/// # Panics
///
/// Never; the edge list contains no self-loops.
#[must_use]
pub fn graph() -> Graph<u32, f64> {
    let mut graph = Graph::new();
    for (src, dst, cost) in EDGES {
        graph
            .add_edge(src, dst, cost)
            .unwrap_or_else(|e| panic!("scenario edge {src}->{dst}: {e}"));
    }
    graph
}

/// Neighbour function yielding the same edges as [`graph`].
#[must_use]
pub fn neighbours(state: &u32) -> Vec<(u32, f64)> {
    EDGES
        .iter()
        .filter(|(src, _, _)| src == state)
        .map(|&(_, dst, cost)| (dst, cost))
        .collect()
}

/// The zero heuristic.
#[must_use]
pub fn zero(_state: &u32, _goal: &u32) -> f64 {
    0.0
}
