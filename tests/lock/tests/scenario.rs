//! Reference scenario: fixed paths and costs on the five-vertex graph.

use lock_tests::scenario;
use waypoint_graph::{DefaultIndexer, Graph, Identified, VertexId};
use waypoint_harness::worlds::road_map::Town;
use waypoint_search::{inc_search, search, AStar, Termination};

#[test]
fn cheapest_route_goes_around_the_expensive_edge() {
    let mut graph = scenario::graph();
    let result = AStar::new().search(&mut graph, &1u32, &5u32, scenario::zero);
    assert_eq!(result.path, vec![1, 2, 3, 4, 5]);
    assert_eq!(result.cost, Some(4.0));
    assert_eq!(
        result.termination,
        Termination::GoalReached {
            goal: VertexId::new(5)
        }
    );
    assert_eq!(result.stats.expansions, 4);
}

#[test]
fn free_function_returns_the_same_path() {
    let mut graph = scenario::graph();
    assert_eq!(search(&mut graph, &1u32, &5u32, scenario::zero), vec![1, 2, 3, 4, 5]);
}

#[test]
fn endpoints_can_be_given_as_ids() {
    let mut graph = scenario::graph();
    let path = search(&mut graph, VertexId::new(1), VertexId::new(5), scenario::zero);
    assert_eq!(path, vec![1, 2, 3, 4, 5]);
}

#[test]
fn isolated_vertex_is_unreachable() {
    let mut graph = scenario::graph();
    graph.add_vertex(6);
    let result = AStar::new().search(&mut graph, &1u32, &6u32, scenario::zero);
    assert!(result.path.is_empty());
    assert_eq!(result.cost, None);
    assert_eq!(result.termination, Termination::FrontierExhausted);
}

#[test]
fn unknown_endpoint_yields_empty_path_without_expansion() {
    let mut graph = scenario::graph();
    let result = AStar::new().search(&mut graph, &1u32, &99u32, scenario::zero);
    assert!(result.path.is_empty());
    assert_eq!(
        result.termination,
        Termination::UnknownEndpoint {
            start_found: true,
            goal_found: false
        }
    );
    assert_eq!(result.stats.expansions, 0);

    let result = AStar::new().search(&mut graph, &99u32, &5u32, scenario::zero);
    assert_eq!(
        result.termination,
        Termination::UnknownEndpoint {
            start_found: false,
            goal_found: true
        }
    );
}

#[test]
fn start_equal_to_goal_is_a_single_vertex_path() {
    let mut graph = scenario::graph();
    let result = AStar::new().search(&mut graph, &3u32, &3u32, scenario::zero);
    assert_eq!(result.path, vec![3]);
    assert_eq!(result.cost, Some(0.0));
}

#[test]
fn incremental_matches_batch() {
    let mut graph = scenario::graph();
    let batch = AStar::new().search(&mut graph, &1u32, &5u32, scenario::zero);
    let inc = AStar::new().inc_search(1, 5, scenario::neighbours, scenario::zero, DefaultIndexer);
    assert_eq!(inc.path, batch.path);
    assert_eq!(inc.cost, batch.cost);
    assert_eq!(inc.stats.expansions, batch.stats.expansions);

    let path = inc_search(1, 5, scenario::neighbours, scenario::zero, DefaultIndexer);
    assert_eq!(path, vec![1, 2, 3, 4, 5]);
}

#[test]
fn incremental_unreachable_goal_is_empty() {
    let path = inc_search(1, 6, scenario::neighbours, scenario::zero, DefaultIndexer);
    assert!(path.is_empty());
}

#[test]
fn search_twice_gives_identical_results() {
    let mut graph = scenario::graph();
    let engine = AStar::new();
    let first = engine.search(&mut graph, &1u32, &5u32, scenario::zero);
    let second = engine.search(&mut graph, &1u32, &5u32, scenario::zero);
    assert_eq!(first.path, second.path);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn previous_search_does_not_leak_into_next() {
    let mut graph = scenario::graph();
    let engine = AStar::new();
    let _ = engine.search(&mut graph, &1u32, &5u32, scenario::zero);
    let result = engine.search(&mut graph, &2u32, &4u32, scenario::zero);
    assert_eq!(result.path, vec![2, 3, 4]);
    assert_eq!(result.cost, Some(2.0));
}

#[test]
fn graph_edits_between_searches_are_respected() {
    let mut graph = scenario::graph();
    let engine = AStar::new();

    assert!(graph.remove_vertex(&2u32));
    let result = engine.search(&mut graph, &1u32, &5u32, scenario::zero);
    assert_eq!(result.path, vec![1, 3, 4, 5]);
    assert_eq!(result.cost, Some(7.0));

    assert!(graph.remove_edge(&3u32, &4u32));
    assert!(engine.search(&mut graph, &1u32, &5u32, scenario::zero).path.is_empty());

    graph.add_edge(3, 5, 0.5).unwrap();
    let result = engine.search(&mut graph, &1u32, &5u32, scenario::zero);
    assert_eq!(result.path, vec![1, 3, 5]);
    assert_eq!(result.cost, Some(5.5));
}

#[test]
fn edge_upsert_changes_the_route() {
    let mut graph = scenario::graph();
    graph.add_edge(1, 3, 1.5).unwrap();
    let result = AStar::new().search(&mut graph, &1u32, &5u32, scenario::zero);
    assert_eq!(result.path, vec![1, 3, 4, 5]);
    assert_eq!(result.cost, Some(3.5));
    assert_eq!(graph.edge_count(), scenario::EDGES.len());
}

#[test]
fn domain_state_with_identity_field() {
    let town = |id: u32, x: f64| Town {
        id,
        name: "t",
        x,
        y: 0.0,
    };
    let mut graph: Graph<Town, f64> = Graph::new();
    graph.add_undirected_edge(town(10, 0.0), town(20, 2.0), 2.0).unwrap();
    graph.add_undirected_edge(town(20, 2.0), town(30, 5.0), 3.0).unwrap();
    graph.add_undirected_edge(town(10, 0.0), town(30, 5.0), 9.0).unwrap();

    let straight_line = |a: &Town, b: &Town| a.distance(b);
    let result = AStar::new().search(&mut graph, &town(30, 5.0), &town(10, 0.0), straight_line);
    let ids: Vec<u32> = result.path.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![30, 20, 10]);
    assert_eq!(result.cost, Some(5.0));
    assert_eq!(result.path_ids, vec![town(30, 5.0).identity(), VertexId::new(20), VertexId::new(10)]);
}

#[test]
fn closure_indexer_keys_states() {
    // identity of a coordinate pair
    let indexer = |p: &(i32, i32)| VertexId::new(i64::from(p.0) * 1000 + i64::from(p.1));
    let mut graph = Graph::with_indexer(indexer);
    graph.add_edge((0, 0), (0, 1), 1u32).unwrap();
    graph.add_edge((0, 1), (1, 1), 1).unwrap();
    graph.add_edge((0, 0), (1, 1), 5).unwrap();

    let result = AStar::new().search(&mut graph, &(0i32, 0i32), &(1i32, 1i32), |_, _| 0);
    assert_eq!(result.path, vec![(0, 0), (0, 1), (1, 1)]);
    assert_eq!(result.cost, Some(2));
}
