//! Vertex: one caller state, its outgoing edges, and per-search scratch.

use std::ops::Add;

use crate::edge::Edge;
use crate::indexer::VertexId;

/// Edge cost type.
///
/// `Default` is the zero cost. `PartialOrd` orders priorities; `Add`
/// accumulates path cost. Blanket-implemented for every type that fits.
pub trait Transition: Clone + PartialOrd + Add<Output = Self> + Default {}

impl<T> Transition for T where T: Clone + PartialOrd + Add<Output = T> + Default {}

/// Per-search scratch fields.
///
/// Only meaningful between a reset and the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInfo<T> {
    /// Expanded (closed).
    pub is_checked: bool,
    /// Currently on the frontier.
    pub is_in_openlist: bool,
    pub g_cost: T,
    pub h_cost: T,
    pub f_cost: T,
    /// Predecessor on the best known path from the start.
    pub search_parent: Option<VertexId>,
}

impl<T: Default> Default for SearchInfo<T> {
    fn default() -> Self {
        Self {
            is_checked: false,
            is_in_openlist: false,
            g_cost: T::default(),
            h_cost: T::default(),
            f_cost: T::default(),
            search_parent: None,
        }
    }
}

/// A vertex owned by a [`crate::Graph`].
///
/// State and identity are fixed at construction; there is no setter for
/// either. Changing a vertex's state means removing it and adding a new one.
#[derive(Debug, Clone)]
pub struct Vertex<S, T> {
    state: S,
    id: VertexId,
    edges_to: Vec<Edge<T>>,
    vertices_from: Vec<VertexId>,
    search: SearchInfo<T>,
}

impl<S, T: Default> Vertex<S, T> {
    pub(crate) fn new(state: S, id: VertexId) -> Self {
        Self {
            state,
            id,
            edges_to: Vec::new(),
            vertices_from: Vec::new(),
            search: SearchInfo::default(),
        }
    }

    /// Clear search scratch before a new search.
    pub fn clear_search_info(&mut self) {
        self.search = SearchInfo::default();
    }
}

impl<S, T> Vertex<S, T> {
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Outgoing edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges_to
    }

    /// Ids of vertices that hold an edge pointing at this one.
    #[must_use]
    pub fn predecessors(&self) -> &[VertexId] {
        &self.vertices_from
    }

    #[must_use]
    pub fn search_info(&self) -> &SearchInfo<T> {
        &self.search
    }

    /// Mutable search scratch. Identity and state stay untouched.
    pub fn search_info_mut(&mut self) -> &mut SearchInfo<T> {
        &mut self.search
    }

    /// The edge from this vertex to `dst`, if any.
    #[must_use]
    pub fn find_edge(&self, dst: VertexId) -> Option<&Edge<T>> {
        self.edges_to.iter().find(|e| e.dst() == dst)
    }

    #[must_use]
    pub fn edge_cost_to(&self, dst: VertexId) -> Option<&T> {
        self.find_edge(dst).map(Edge::cost)
    }

    /// Whether `dst` is a direct successor of this vertex.
    #[must_use]
    pub fn check_neighbour(&self, dst: VertexId) -> bool {
        self.find_edge(dst).is_some()
    }

    /// Ids of all direct successors.
    #[must_use]
    pub fn neighbours(&self) -> Vec<VertexId> {
        self.edges_to.iter().map(Edge::dst).collect()
    }

    /// Insert or update the edge to `dst`. Returns `true` if a new edge was
    /// created.
    pub(crate) fn upsert_edge(&mut self, dst: VertexId, cost: T) -> bool {
        if let Some(edge) = self.edges_to.iter_mut().find(|e| e.dst() == dst) {
            edge.set_cost(cost);
            return false;
        }
        self.edges_to.push(Edge::new(self.id, dst, cost));
        true
    }

    /// Drop the edge to `dst`. Returns `true` if one was removed.
    pub(crate) fn remove_edge_to(&mut self, dst: VertexId) -> bool {
        let before = self.edges_to.len();
        self.edges_to.retain(|e| e.dst() != dst);
        self.edges_to.len() != before
    }

    pub(crate) fn add_predecessor(&mut self, src: VertexId) {
        if !self.vertices_from.contains(&src) {
            self.vertices_from.push(src);
        }
    }

    pub(crate) fn remove_predecessor(&mut self, src: VertexId) {
        self.vertices_from.retain(|&v| v != src);
    }
}

/// Two vertices are equal when they share an identity.
impl<S, T> PartialEq for Vertex<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S, T> Eq for Vertex<S, T> {}
