//! World contract: the minimal trait a world implements to be searched.
//!
//! Worlds describe states, successors, costs and a heuristic. They do not
//! build graphs, run searches, or hash anything; the runner owns those.

use std::collections::{BTreeSet, VecDeque};
use std::fmt::{Debug, Display};

use waypoint_graph::{DefaultIndexer, Graph, GraphResult, Identified, Transition, VertexId};

/// A search problem with a fixed start and goal.
pub trait SearchWorld {
    type State: Clone + Identified;
    type Cost: Transition + Debug + Display;

    /// Unique world identifier (e.g. `"grid_maze"`).
    fn world_id(&self) -> &str;

    fn start(&self) -> Self::State;

    fn goal(&self) -> Self::State;

    /// Successors of `state` with their step costs, in a fixed order.
    ///
    /// Must never yield `state` itself.
    fn neighbours(&self, state: &Self::State) -> Vec<(Self::State, Self::Cost)>;

    /// Estimated cost from `state` to `goal`. Worlds in this crate keep it
    /// admissible so the engine's result is optimal.
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> Self::Cost;
}

/// Build the full graph reachable from the world's start.
///
/// States are discovered breadth-first and successors are inserted in the
/// order the world yields them. The goal vertex is always present, so an
/// unreachable goal surfaces as an exhausted frontier rather than an
/// unknown endpoint.
///
/// # Errors
///
/// Returns [`waypoint_graph::GraphError::SelfLoop`] if the world yields a
/// state as its own successor.
pub fn materialize<W: SearchWorld + ?Sized>(
    world: &W,
) -> GraphResult<Graph<W::State, W::Cost, DefaultIndexer>> {
    let mut graph = Graph::new();
    let start = world.start();
    let start_id = graph.add_vertex(start.clone());
    graph.add_vertex(world.goal());

    let mut seen = BTreeSet::from([start_id]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        for (next, cost) in world.neighbours(&state) {
            let next_id: VertexId = next.identity();
            if seen.insert(next_id) {
                queue.push_back(next.clone());
            }
            graph.add_edge(state.clone(), next, cost)?;
        }
    }
    Ok(graph)
}
