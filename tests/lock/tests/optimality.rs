//! A* against the brute-force oracle on seeded random graphs.

use std::collections::BTreeMap;

use proptest::prelude::*;
use waypoint_graph::DefaultIndexer;
use waypoint_harness::oracle::{brute_force_cost, path_cost};
use waypoint_harness::worlds::grid;
use waypoint_harness::worlds::random_graph::{RandomGraph, RandomGraphConfig};
use waypoint_harness::worlds::road_map::{self, towns};
use waypoint_harness::SearchWorld;
use waypoint_search::{AStar, SearchPolicy, SearchTrace, TieBreak};

fn random_world() -> impl Strategy<Value = RandomGraph> {
    (2u32..7, 0.0f64..=1.0, 0u64..10, any::<u64>()).prop_map(
        |(vertex_count, edge_probability, max_cost, seed)| {
            RandomGraph::generate(&RandomGraphConfig {
                vertex_count,
                edge_probability,
                max_cost,
                seed,
            })
            .unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_cost_matches_brute_force_for_every_pair(world in random_world()) {
        let mut graph = world.build_graph().unwrap();
        for tie_break in [TieBreak::Fifo, TieBreak::Lifo] {
            let engine = AStar::with_policy(SearchPolicy::with_tie_break(tie_break));
            for start in 0..world.vertex_count() {
                for goal in 0..world.vertex_count() {
                    let result = engine.search(&mut graph, &start, &goal, |_, _| 0u64);
                    let expected = brute_force_cost(world.edges(), start, goal);
                    prop_assert_eq!(result.cost, expected, "{} -> {}", start, goal);
                    match expected {
                        Some(cost) => {
                            prop_assert_eq!(result.path.first(), Some(&start));
                            prop_assert_eq!(result.path.last(), Some(&goal));
                            prop_assert_eq!(path_cost(world.edges(), &result.path), Some(cost));
                        }
                        None => prop_assert!(result.path.is_empty()),
                    }
                }
            }
        }
    }

    #[test]
    fn incremental_replays_batch_exactly(world in random_world()) {
        let engine = AStar::new();
        let mut graph = world.build_graph().unwrap();
        let (start, goal) = (world.start(), world.goal());

        let mut batch_trace = SearchTrace::new();
        let batch = engine.search_observed(&mut graph, &start, &goal, |_, _| 0u64, &mut batch_trace);

        let mut inc_trace = SearchTrace::new();
        let inc = engine.inc_search_observed(
            start,
            goal,
            |s: &u32| world.neighbours(s),
            |_, _| 0u64,
            DefaultIndexer,
            &mut inc_trace,
        );

        prop_assert_eq!(&inc.path, &batch.path);
        prop_assert_eq!(inc.cost, batch.cost);
        prop_assert_eq!(inc_trace.digest().unwrap(), batch_trace.digest().unwrap());
        prop_assert!(inc.stats.vertices_materialized <= batch.stats.vertices_materialized);
    }

    #[test]
    fn exact_remaining_cost_heuristic_stays_optimal(world in random_world()) {
        let mut graph = world.build_graph().unwrap();
        // Vertices that cannot reach the goal get a bound above every path
        // cost, which keeps the heuristic consistent on every edge.
        let dead_end = world.edges().iter().map(|&(_, _, c)| c).sum::<u64>() + 1;
        for goal in 0..world.vertex_count() {
            let exact: BTreeMap<u32, u64> = (0..world.vertex_count())
                .map(|v| (v, brute_force_cost(world.edges(), v, goal).unwrap_or(dead_end)))
                .collect();
            for tie_break in [TieBreak::Fifo, TieBreak::Lifo] {
                let engine = AStar::with_policy(SearchPolicy::with_tie_break(tie_break));
                for start in 0..world.vertex_count() {
                    let result = engine.search(&mut graph, &start, &goal, |s: &u32, _: &u32| exact[s]);
                    let expected = brute_force_cost(world.edges(), start, goal);
                    prop_assert_eq!(result.cost, expected, "{} -> {} ({:?})", start, goal, tie_break);
                    if let Some(cost) = expected {
                        prop_assert_eq!(path_cost(world.edges(), &result.path), Some(cost));
                    }
                }
            }
        }
    }
}

#[test]
fn consistent_heuristic_keeps_grid_optimal() {
    let world = grid::maze().unwrap();
    let mut graph = waypoint_harness::materialize(&world).unwrap();
    let (start, goal) = (world.start(), world.goal());

    let informed = AStar::new().search(&mut graph, &start, &goal, |s, g| world.heuristic(s, g));
    let blind = AStar::new().search(&mut graph, &start, &goal, |_, _| 0.0);
    assert_eq!(informed.cost, Some(grid::MAZE_OPTIMAL_COST));
    assert_eq!(blind.cost, informed.cost);
    assert!(informed.stats.expansions <= blind.stats.expansions);
}

#[test]
fn road_map_every_pair_matches_dijkstra_baseline() {
    let map = road_map::shire().unwrap();
    let connected = [
        towns::ASHFORD,
        towns::BROOKVALE,
        towns::CARROW,
        towns::DUNMORE,
        towns::ELMSTEAD,
        towns::FENWICK,
        towns::GORSEY,
    ];
    for &from in &connected {
        for &to in &connected {
            let routed = map.clone().with_route(from, to).unwrap();
            let mut graph = waypoint_harness::materialize(&routed).unwrap();
            let (start, goal) = (routed.start(), routed.goal());
            let informed =
                AStar::new().search(&mut graph, &start, &goal, |s, g| routed.heuristic(s, g));
            let blind = AStar::new().search(&mut graph, &start, &goal, |_, _| 0.0);
            let (a, b) = (informed.cost.unwrap(), blind.cost.unwrap());
            assert!((a - b).abs() < 1e-9, "{from} -> {to}: {a} vs {b}");
        }
    }
}
