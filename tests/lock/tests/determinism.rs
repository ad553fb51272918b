//! In-process determinism: repeated runs and tie-break policies produce
//! byte-identical traces and reports.

use waypoint_harness::worlds::grid;
use waypoint_harness::worlds::random_graph::{RandomGraph, RandomGraphConfig};
use waypoint_harness::{run_world, SearchMode};
use waypoint_search::{AStar, SearchPolicy, SearchTrace, TieBreak};

#[test]
fn trace_bytes_identical_over_ten_runs() {
    let world = grid::maze().unwrap();
    for mode in [SearchMode::Batch, SearchMode::Incremental] {
        let first = run_world(&world, mode, &SearchPolicy::default()).unwrap();
        let first_bytes = first.trace.to_canonical_json_bytes().unwrap();
        for _ in 1..10 {
            let again = run_world(&world, mode, &SearchPolicy::default()).unwrap();
            assert_eq!(again.trace.to_canonical_json_bytes().unwrap(), first_bytes);
            assert_eq!(again.report.digest().unwrap(), first.report.digest().unwrap());
        }
    }
}

#[test]
fn reused_graph_traces_identically() {
    let world = RandomGraph::generate(&RandomGraphConfig {
        vertex_count: 20,
        edge_probability: 0.2,
        max_cost: 5,
        seed: 99,
    })
    .unwrap();
    let mut graph = world.build_graph().unwrap();
    let engine = AStar::new();

    let mut first = SearchTrace::new();
    engine.search_observed(&mut graph, &0u32, &19u32, |_, _| 0u64, &mut first);
    // an unrelated search in between must not change the next one
    let _ = engine.search(&mut graph, &19u32, &0u32, |_, _| 0u64);
    let mut second = SearchTrace::new();
    engine.search_observed(&mut graph, &0u32, &19u32, |_, _| 0u64, &mut second);

    assert_eq!(first, second);
    assert_eq!(first.digest().unwrap(), second.digest().unwrap());
}

#[test]
fn tie_breaks_differ_in_order_but_agree_on_cost() {
    let world = grid::maze().unwrap();
    let fifo = run_world(
        &world,
        SearchMode::Batch,
        &SearchPolicy::with_tie_break(TieBreak::Fifo),
    )
    .unwrap();
    let lifo = run_world(
        &world,
        SearchMode::Batch,
        &SearchPolicy::with_tie_break(TieBreak::Lifo),
    )
    .unwrap();
    assert_eq!(fifo.report.cost, lifo.report.cost);
    assert_ne!(fifo.report.digest().unwrap(), lifo.report.digest().unwrap());
}

#[test]
fn trace_records_expansions_in_pop_order() {
    let world = grid::maze().unwrap();
    let run = run_world(&world, SearchMode::Batch, &SearchPolicy::default()).unwrap();
    let order = run.trace.expansion_order();
    assert_eq!(order.len() as u64, run.report.stats.expansions);
    assert_eq!(order.first(), run.report.path.first());
    for (i, event) in run.trace.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64);
    }
    assert_eq!(run.trace.path, run.report.path);
    assert_eq!(run.trace.cost, run.report.cost);
}
