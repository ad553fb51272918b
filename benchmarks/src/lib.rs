//! Shared world builders for waypoint benchmark suites.

use waypoint_harness::worlds::grid::GridWorld;
use waypoint_harness::worlds::random_graph::{RandomGraph, RandomGraphConfig};

/// Square map of side `size` with `S` top-left and `G` bottom-right.
///
/// Every fourth column is a wall with a single gap, alternating between the
/// bottom and top row, so the route snakes across the whole map.
#[must_use]
pub fn serpentine_map(size: usize) -> String {
    let size = size.max(2);
    let mut map = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            let ch = if (x, y) == (0, 0) {
                'S'
            } else if (x, y) == (size - 1, size - 1) {
                'G'
            } else if x % 4 == 2 && x + 1 < size {
                let gap = if (x / 4) % 2 == 0 { size - 1 } else { 0 };
                if y == gap {
                    '.'
                } else {
                    '#'
                }
            } else {
                '.'
            };
            map.push(ch);
        }
        map.push('\n');
    }
    map
}

/// [`serpentine_map`] parsed as a world.
///
/// # Panics
///
/// Panics if the generated map fails to parse. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn serpentine(size: usize) -> GridWorld {
    GridWorld::parse(format!("serpentine_{size}"), &serpentine_map(size))
        .unwrap_or_else(|e| panic!("serpentine map {size}: {e}"))
}

/// Sparse random graph with roughly `degree` out-edges per vertex.
///
/// # Panics
///
/// Panics if the parameters are rejected by the generator.
#[must_use]
pub fn sparse_random(vertex_count: u32, degree: f64, seed: u64) -> RandomGraph {
    let edge_probability = (degree / f64::from(vertex_count.max(2) - 1)).clamp(0.0, 1.0);
    RandomGraph::generate(&RandomGraphConfig {
        vertex_count,
        edge_probability,
        max_cost: 20,
        seed,
    })
    .unwrap_or_else(|e| panic!("random graph {vertex_count}/{seed}: {e}"))
}
