//! Seeded random directed graphs for optimality checks.
//!
//! Generation draws from `ChaCha8Rng`, so a given [`RandomGraphConfig`]
//! always produces the same edges on every platform.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waypoint_graph::{Graph, GraphResult};

use crate::contract::SearchWorld;
use crate::error::WorldError;

/// Parameters for [`RandomGraph::generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGraphConfig {
    /// Vertices are `0..vertex_count`.
    pub vertex_count: u32,
    /// Probability of each ordered pair `(a, b)`, `a != b`, being an edge.
    pub edge_probability: f64,
    /// Edge costs are drawn uniformly from `0..=max_cost`.
    pub max_cost: u64,
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertex_count: 7,
            edge_probability: 0.3,
            max_cost: 9,
            seed: 0,
        }
    }
}

/// A generated edge list with a chosen start and goal.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    id: String,
    vertex_count: u32,
    edges: Vec<(u32, u32, u64)>,
    adjacency: BTreeMap<u32, Vec<(u32, u64)>>,
    start: u32,
    goal: u32,
}

impl RandomGraph {
    /// Generate a graph routing from `0` to `vertex_count - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameter`] if `vertex_count` is zero or
    /// `edge_probability` is outside `[0, 1]`.
    pub fn generate(config: &RandomGraphConfig) -> Result<Self, WorldError> {
        if config.vertex_count == 0 {
            return Err(WorldError::InvalidParameter {
                name: "vertex_count",
                detail: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.edge_probability) {
            return Err(WorldError::InvalidParameter {
                name: "edge_probability",
                detail: format!("{} is not a probability", config.edge_probability),
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut edges = Vec::new();
        for src in 0..config.vertex_count {
            for dst in 0..config.vertex_count {
                if src != dst && rng.gen_bool(config.edge_probability) {
                    edges.push((src, dst, rng.gen_range(0..=config.max_cost)));
                }
            }
        }

        let mut adjacency: BTreeMap<u32, Vec<(u32, u64)>> = BTreeMap::new();
        for &(src, dst, cost) in &edges {
            adjacency.entry(src).or_default().push((dst, cost));
        }

        Ok(Self {
            id: format!("random_{}_{}", config.vertex_count, config.seed),
            vertex_count: config.vertex_count,
            edges,
            adjacency,
            start: 0,
            goal: config.vertex_count - 1,
        })
    }

    /// Route the same edges between other vertices.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownVertex`] if either end is not below
    /// `vertex_count`.
    pub fn with_route(mut self, start: u32, goal: u32) -> Result<Self, WorldError> {
        for id in [start, goal] {
            if id >= self.vertex_count {
                return Err(WorldError::UnknownVertex {
                    id,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.start = start;
        self.goal = goal;
        Ok(self)
    }

    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Directed edges `(src, dst, cost)` in generation order.
    #[must_use]
    pub fn edges(&self) -> &[(u32, u32, u64)] {
        &self.edges
    }

    /// Every vertex and edge, isolated vertices included.
    ///
    /// # Errors
    ///
    /// Never in practice; generation skips self-loops.
    pub fn build_graph(&self) -> GraphResult<Graph<u32, u64>> {
        let mut graph = Graph::new();
        for id in 0..self.vertex_count {
            graph.add_vertex(id);
        }
        for &(src, dst, cost) in &self.edges {
            graph.add_edge(src, dst, cost)?;
        }
        Ok(graph)
    }
}

impl SearchWorld for RandomGraph {
    type State = u32;
    type Cost = u64;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> u32 {
        self.start
    }

    fn goal(&self) -> u32 {
        self.goal
    }

    fn neighbours(&self, state: &u32) -> Vec<(u32, u64)> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }

    /// Zero everywhere: trivially admissible and consistent.
    fn heuristic(&self, _state: &u32, _goal: &u32) -> u64 {
        0
    }
}
