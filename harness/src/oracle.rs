//! Brute-force shortest-path oracle.
//!
//! Enumerates every simple path, so it is exponential in the vertex count
//! and only suitable for the small graphs property tests generate. With
//! non-negative costs the cheapest simple path is the cheapest walk.

use std::collections::{BTreeMap, BTreeSet};

use waypoint_graph::Transition;

/// Cost of the cheapest path from `start` to `goal`, or `None` if the goal
/// is unreachable. A path from a vertex to itself costs `T::default()`.
pub fn brute_force_cost<T: Transition>(
    edges: &[(u32, u32, T)],
    start: u32,
    goal: u32,
) -> Option<T> {
    if start == goal {
        return Some(T::default());
    }
    let mut adjacency: BTreeMap<u32, Vec<(u32, &T)>> = BTreeMap::new();
    for (src, dst, cost) in edges {
        adjacency.entry(*src).or_default().push((*dst, cost));
    }

    let mut best = None;
    let mut on_path = BTreeSet::from([start]);
    walk(&adjacency, start, goal, T::default(), &mut on_path, &mut best);
    best
}

fn walk<T: Transition>(
    adjacency: &BTreeMap<u32, Vec<(u32, &T)>>,
    at: u32,
    goal: u32,
    cost_so_far: T,
    on_path: &mut BTreeSet<u32>,
    best: &mut Option<T>,
) {
    if at == goal {
        let improves = match best {
            Some(b) => cost_so_far < *b,
            None => true,
        };
        if improves {
            *best = Some(cost_so_far);
        }
        return;
    }
    let Some(out) = adjacency.get(&at) else {
        return;
    };
    for &(next, step) in out {
        if !on_path.insert(next) {
            continue;
        }
        walk(
            adjacency,
            next,
            goal,
            cost_so_far.clone() + step.clone(),
            on_path,
            best,
        );
        on_path.remove(&next);
    }
}

/// Sum of edge costs along `path`, or `None` if two consecutive states are
/// not joined by an edge.
pub fn path_cost<T: Transition>(edges: &[(u32, u32, T)], path: &[u32]) -> Option<T> {
    let mut total = T::default();
    for pair in path.windows(2) {
        let step = edges
            .iter()
            .find(|(src, dst, _)| *src == pair[0] && *dst == pair[1])?;
        total = total + step.2.clone();
    }
    Some(total)
}
