//! A* entry points and the shared expansion loop.
//!
//! Per-vertex lifecycle during one search: unseen → frontier → expanded.
//! Expanded vertices are never reopened. The open list has no
//! decrease-key: an improved successor is pushed again, and a popped vertex
//! that is already expanded is skipped as stale.

use tracing::debug;
use waypoint_graph::{Graph, StateIndexer, Transition, VertexId, VertexKey};

use crate::observer::{NoopObserver, SearchObserver};
use crate::open_list::OpenList;
use crate::outcome::{SearchStats, SearchSummary, Termination};
use crate::policy::SearchPolicy;

/// States from start to goal, both inclusive. Empty when no path exists.
pub type Path<S> = Vec<S>;

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S, T> {
    pub path: Path<S>,
    /// Vertex ids matching `path`.
    pub path_ids: Vec<VertexId>,
    /// Total path cost (`g_cost` of the goal) when a path was found.
    pub cost: Option<T>,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl<S, T> SearchResult<S, T> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.termination.is_goal_reached()
    }
}

/// A* search engine.
///
/// Holds only configuration; all per-search scratch lives in the graph's
/// vertices and is reset at the start of every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    policy: SearchPolicy,
}

impl AStar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Batch search over a fully built graph.
    ///
    /// `start` and `goal` are vertex ids or state references. If either is
    /// absent the result has an empty path and
    /// [`Termination::UnknownEndpoint`].
    pub fn search<S, T, I, A, B, H>(
        &self,
        graph: &mut Graph<S, T, I>,
        start: A,
        goal: B,
        heuristic: H,
    ) -> SearchResult<S, T>
    where
        S: Clone,
        T: Transition,
        I: StateIndexer<S>,
        A: VertexKey<S>,
        B: VertexKey<S>,
        H: FnMut(&S, &S) -> T,
    {
        self.search_observed(graph, start, goal, heuristic, &mut NoopObserver)
    }

    /// [`AStar::search`] with an observer receiving every search event.
    pub fn search_observed<S, T, I, A, B, H, O>(
        &self,
        graph: &mut Graph<S, T, I>,
        start: A,
        goal: B,
        heuristic: H,
        observer: &mut O,
    ) -> SearchResult<S, T>
    where
        S: Clone,
        T: Transition,
        I: StateIndexer<S>,
        A: VertexKey<S>,
        B: VertexKey<S>,
        H: FnMut(&S, &S) -> T,
        O: SearchObserver<S, T> + ?Sized,
    {
        // reset last search information
        graph.reset_vertices();

        let start_id = start.resolve(graph.indexer());
        let goal_id = goal.resolve(graph.indexer());
        let start_found = graph.contains_vertex(start_id);
        let goal_found = graph.contains_vertex(goal_id);

        if !(start_found && goal_found) {
            let stats = SearchStats {
                vertices_materialized: graph.vertex_count() as u64,
                ..SearchStats::default()
            };
            let termination = Termination::UnknownEndpoint {
                start_found,
                goal_found,
            };
            observer.on_finish(&SearchSummary {
                termination,
                path: &[],
                cost: None,
                stats: &stats,
            });
            return SearchResult {
                path: Vec::new(),
                path_ids: Vec::new(),
                cost: None,
                termination,
                stats,
            };
        }

        self.perform_search(graph, start_id, goal_id, heuristic, |_, _| {}, observer)
    }

    /// Incremental search: the graph is discovered during expansion.
    ///
    /// A fresh graph holding only `start` and `goal` is built with `indexer`.
    /// Each vertex's neighbours are requested exactly once, at the moment the
    /// vertex is expanded, and inserted as edges before relaxation.
    /// Neighbours with the expanding vertex's own identity are skipped.
    pub fn inc_search<S, T, I, N, It, H>(
        &self,
        start: S,
        goal: S,
        neighbours: N,
        heuristic: H,
        indexer: I,
    ) -> SearchResult<S, T>
    where
        S: Clone,
        T: Transition,
        I: StateIndexer<S>,
        N: FnMut(&S) -> It,
        It: IntoIterator<Item = (S, T)>,
        H: FnMut(&S, &S) -> T,
    {
        self.inc_search_observed(start, goal, neighbours, heuristic, indexer, &mut NoopObserver)
    }

    /// [`AStar::inc_search`] with an observer receiving every search event.
    pub fn inc_search_observed<S, T, I, N, It, H, O>(
        &self,
        start: S,
        goal: S,
        mut neighbours: N,
        heuristic: H,
        indexer: I,
        observer: &mut O,
    ) -> SearchResult<S, T>
    where
        S: Clone,
        T: Transition,
        I: StateIndexer<S>,
        N: FnMut(&S) -> It,
        It: IntoIterator<Item = (S, T)>,
        H: FnMut(&S, &S) -> T,
        O: SearchObserver<S, T> + ?Sized,
    {
        // create a new graph with only start and goal vertices
        let mut graph = Graph::with_indexer(indexer);
        let start_id = graph.add_vertex(start);
        let goal_id = graph.add_vertex(goal);

        let expand = |graph: &mut Graph<S, T, I>, current: VertexId| {
            let Some(vertex) = graph.find_vertex(current) else {
                return;
            };
            let discovered = neighbours(vertex.state());
            for (state, cost) in discovered {
                let dst = graph.add_vertex(state);
                if let Err(err) = graph.add_edge_between(current, dst, cost) {
                    debug!(vertex = %current, error = %err, "neighbour skipped");
                }
            }
        };

        self.perform_search(&mut graph, start_id, goal_id, heuristic, expand, observer)
    }

    /// The best-first loop shared by both modes.
    ///
    /// `expand` runs once per vertex, after it is marked expanded and before
    /// its outgoing edges are relaxed.
    fn perform_search<S, T, I, H, E, O>(
        &self,
        graph: &mut Graph<S, T, I>,
        start: VertexId,
        goal: VertexId,
        mut heuristic: H,
        mut expand: E,
        observer: &mut O,
    ) -> SearchResult<S, T>
    where
        S: Clone,
        T: Transition,
        I: StateIndexer<S>,
        H: FnMut(&S, &S) -> T,
        E: FnMut(&mut Graph<S, T, I>, VertexId),
        O: SearchObserver<S, T> + ?Sized,
    {
        let mut openlist: OpenList<VertexId, T> = OpenList::new(self.policy.tie_break);
        let mut stats = SearchStats::default();

        // begin with start vertex
        if let Some(vertex) = graph.find_vertex_mut(start) {
            let info = vertex.search_info_mut();
            info.g_cost = T::default();
            info.is_in_openlist = true;
        }
        openlist.put(start, T::default());

        let mut found_path = false;
        while let Some(current) = openlist.get() {
            let Some(vertex) = graph.find_vertex(current) else {
                continue;
            };
            if vertex.search_info().is_checked {
                stats.stale_pops += 1;
                observer.on_stale_pop(current);
                continue;
            }
            if current == goal {
                found_path = true;
                break;
            }

            if let Some(vertex) = graph.find_vertex_mut(current) {
                let info = vertex.search_info_mut();
                info.is_in_openlist = false;
                info.is_checked = true;
            }
            stats.expansions += 1;

            expand(&mut *graph, current);

            let Some(vertex) = graph.find_vertex(current) else {
                continue;
            };
            observer.on_expand(vertex);
            let current_g = vertex.search_info().g_cost.clone();
            let successors: Vec<(VertexId, T)> = vertex
                .edges()
                .iter()
                .map(|e| (e.dst(), e.cost().clone()))
                .collect();

            // check all successors of the current vertex
            for (successor_id, edge_cost) in successors {
                let Some(successor) = graph.find_vertex(successor_id) else {
                    continue;
                };
                let info = successor.search_info();
                if info.is_checked {
                    continue;
                }
                let new_cost = current_g.clone() + edge_cost;
                let improves = !info.is_in_openlist || new_cost < info.g_cost;
                if !improves {
                    continue;
                }

                let h_cost = match graph.find_vertex(goal) {
                    Some(goal_vertex) => heuristic(successor.state(), goal_vertex.state()),
                    None => T::default(),
                };
                let f_cost = new_cost.clone() + h_cost.clone();

                if let Some(successor) = graph.find_vertex_mut(successor_id) {
                    let info = successor.search_info_mut();
                    info.search_parent = Some(current);
                    info.g_cost = new_cost;
                    info.h_cost = h_cost;
                    info.f_cost = f_cost.clone();
                    info.is_in_openlist = true;
                    observer.on_relax(current, successor);
                }
                openlist.put(successor_id, f_cost);
            }
        }

        stats.frontier_high_water = openlist.high_water() as u64;
        stats.vertices_materialized = graph.vertex_count() as u64;

        let (termination, path_ids, cost) = if found_path {
            let path_ids = reconstruct_path(graph, start, goal);
            let cost = graph
                .find_vertex(goal)
                .map(|v| v.search_info().g_cost.clone());
            (Termination::GoalReached { goal }, path_ids, cost)
        } else {
            (Termination::FrontierExhausted, Vec::new(), None)
        };

        observer.on_finish(&SearchSummary {
            termination,
            path: &path_ids,
            cost: cost.as_ref(),
            stats: &stats,
        });

        let path = path_ids
            .iter()
            .filter_map(|&id| graph.find_vertex(id).map(|v| v.state().clone()))
            .collect();

        SearchResult {
            path,
            path_ids,
            cost,
            termination,
            stats,
        }
    }
}

/// Walk `search_parent` links from `goal` back to `start`, then reverse.
///
/// Returns an empty list if the chain is broken or longer than the graph,
/// which can only happen if scratch fields were modified externally.
fn reconstruct_path<S, T, I>(graph: &Graph<S, T, I>, start: VertexId, goal: VertexId) -> Vec<VertexId>
where
    T: Transition,
    I: StateIndexer<S>,
{
    let mut path = vec![goal];
    let mut waypoint = goal;
    while waypoint != start {
        let parent = graph
            .find_vertex(waypoint)
            .and_then(|v| v.search_info().search_parent);
        let Some(parent) = parent else {
            return Vec::new();
        };
        if path.len() > graph.vertex_count() {
            return Vec::new();
        }
        path.push(parent);
        waypoint = parent;
    }
    path.reverse();
    path
}

/// Batch search with the default policy, returning only the path.
pub fn search<S, T, I, A, B, H>(graph: &mut Graph<S, T, I>, start: A, goal: B, heuristic: H) -> Path<S>
where
    S: Clone,
    T: Transition,
    I: StateIndexer<S>,
    A: VertexKey<S>,
    B: VertexKey<S>,
    H: FnMut(&S, &S) -> T,
{
    AStar::new().search(graph, start, goal, heuristic).path
}

/// Incremental search with the default policy, returning only the path.
pub fn inc_search<S, T, I, N, It, H>(
    start: S,
    goal: S,
    neighbours: N,
    heuristic: H,
    indexer: I,
) -> Path<S>
where
    S: Clone,
    T: Transition,
    I: StateIndexer<S>,
    N: FnMut(&S) -> It,
    It: IntoIterator<Item = (S, T)>,
    H: FnMut(&S, &S) -> T,
{
    AStar::new()
        .inc_search(start, goal, neighbours, heuristic, indexer)
        .path
}
