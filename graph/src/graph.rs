//! Identity-keyed graph container.
//!
//! Vertices live in a `BTreeMap<VertexId, Vertex>` arena. Edges and
//! predecessor lists hold ids, so a `VertexId` handed out by the graph stays
//! valid until that vertex is removed or the graph is cleared, regardless of
//! what else is added or removed. Iteration is in ascending id order.

use std::collections::BTreeMap;

use tracing::trace;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::indexer::{DefaultIndexer, StateIndexer, VertexId, VertexKey};
use crate::vertex::{Transition, Vertex};

/// Directed graph over caller states.
///
/// The graph owns its vertices and edges. It never manages memory that a
/// state itself refers to.
#[derive(Debug, Clone)]
pub struct Graph<S, T = f64, I = DefaultIndexer> {
    vertex_map: BTreeMap<VertexId, Vertex<S, T>>,
    indexer: I,
}

impl<S, T, I> Graph<S, T, I>
where
    T: Transition,
    I: StateIndexer<S> + Default,
{
    #[must_use]
    pub fn new() -> Self {
        Self::with_indexer(I::default())
    }
}

impl<S, T, I> Default for Graph<S, T, I>
where
    T: Transition,
    I: StateIndexer<S> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T, I> Graph<S, T, I>
where
    T: Transition,
    I: StateIndexer<S>,
{
    /// Create an empty graph keyed by a caller-supplied indexer.
    #[must_use]
    pub fn with_indexer(indexer: I) -> Self {
        Self {
            vertex_map: BTreeMap::new(),
            indexer,
        }
    }

    #[must_use]
    pub fn indexer(&self) -> &I {
        &self.indexer
    }

    /// Identity the graph's indexer assigns to `state`.
    #[must_use]
    pub fn index_of(&self, state: &S) -> VertexId {
        self.indexer.index(state)
    }

    // -----------------------------------------------------------------------
    // Vertices
    // -----------------------------------------------------------------------

    /// Get-or-create the vertex for `state`.
    ///
    /// If a vertex with the same identity exists it is returned unchanged;
    /// the stored state is not overwritten.
    pub fn add_vertex(&mut self, state: S) -> VertexId {
        let id = self.indexer.index(&state);
        self.vertex_map.entry(id).or_insert_with(|| {
            trace!(vertex = %id, "vertex created");
            Vertex::new(state, id)
        });
        id
    }

    /// Remove a vertex, its outgoing edges, and every edge pointing at it.
    ///
    /// Every remaining vertex is swept, so no edge or predecessor entry can
    /// dangle even if back-references were incomplete. Returns `false` if
    /// the vertex was absent.
    pub fn remove_vertex<K: VertexKey<S>>(&mut self, key: K) -> bool {
        let id = key.resolve(&self.indexer);
        if self.vertex_map.remove(&id).is_none() {
            return false;
        }
        for vertex in self.vertex_map.values_mut() {
            vertex.remove_edge_to(id);
            vertex.remove_predecessor(id);
        }
        trace!(vertex = %id, "vertex removed");
        true
    }

    /// Look up a vertex by id or by state. `None` is the not-found sentinel.
    pub fn find_vertex<K: VertexKey<S>>(&self, key: K) -> Option<&Vertex<S, T>> {
        self.vertex_map.get(&key.resolve(&self.indexer))
    }

    pub fn find_vertex_mut<K: VertexKey<S>>(&mut self, key: K) -> Option<&mut Vertex<S, T>> {
        let id = key.resolve(&self.indexer);
        self.vertex_map.get_mut(&id)
    }

    pub fn contains_vertex<K: VertexKey<S>>(&self, key: K) -> bool {
        self.find_vertex(key).is_some()
    }

    /// All vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<S, T>> {
        self.vertex_map.values()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_map.keys().copied()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_map.is_empty()
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Add a directed edge, creating either endpoint if needed.
    ///
    /// If the ordered pair is already connected, only the cost is updated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if both states share an identity.
    /// The graph is left untouched in that case.
    pub fn add_edge(&mut self, src: S, dst: S, cost: T) -> GraphResult<()> {
        let src_id = self.indexer.index(&src);
        let dst_id = self.indexer.index(&dst);
        if src_id == dst_id {
            return Err(GraphError::SelfLoop { id: src_id });
        }
        self.add_vertex(src);
        self.add_vertex(dst);
        self.connect(src_id, dst_id, cost);
        Ok(())
    }

    /// Add a directed edge between two vertices that already exist.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if `src == dst`, or
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge_between(&mut self, src: VertexId, dst: VertexId, cost: T) -> GraphResult<()> {
        if src == dst {
            return Err(GraphError::SelfLoop { id: src });
        }
        for id in [src, dst] {
            if !self.vertex_map.contains_key(&id) {
                return Err(GraphError::VertexNotFound { id });
            }
        }
        self.connect(src, dst, cost);
        Ok(())
    }

    /// Remove the directed edge `src → dst`.
    ///
    /// Returns `false` if either endpoint or the edge itself is absent.
    pub fn remove_edge<A, B>(&mut self, src: A, dst: B) -> bool
    where
        A: VertexKey<S>,
        B: VertexKey<S>,
    {
        let src_id = src.resolve(&self.indexer);
        let dst_id = dst.resolve(&self.indexer);
        let removed = self
            .vertex_map
            .get_mut(&src_id)
            .is_some_and(|v| v.remove_edge_to(dst_id));
        if removed {
            if let Some(dst_vertex) = self.vertex_map.get_mut(&dst_id) {
                dst_vertex.remove_predecessor(src_id);
            }
            trace!(src = %src_id, dst = %dst_id, "edge removed");
        }
        removed
    }

    /// Add `a → b` and `b → a` with the same cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if both states share an identity.
    pub fn add_undirected_edge(&mut self, a: S, b: S, cost: T) -> GraphResult<()>
    where
        S: Clone,
    {
        self.add_edge(a.clone(), b.clone(), cost.clone())?;
        self.add_edge(b, a, cost)
    }

    /// Remove both `a → b` and `b → a`. Returns `true` if either existed.
    pub fn remove_undirected_edge<A, B>(&mut self, a: A, b: B) -> bool
    where
        A: VertexKey<S>,
        B: VertexKey<S>,
    {
        let a = a.resolve(&self.indexer);
        let b = b.resolve(&self.indexer);
        let forward = self.remove_edge(a, b);
        let backward = self.remove_edge(b, a);
        forward || backward
    }

    /// The edge `src → dst`, with either end given by id or by state.
    #[must_use]
    pub fn find_edge<A, B>(&self, src: A, dst: B) -> Option<&Edge<T>>
    where
        A: VertexKey<S>,
        B: VertexKey<S>,
    {
        let dst = dst.resolve(&self.indexer);
        self.find_vertex(src)?.find_edge(dst)
    }

    /// Whether `dst` is a direct successor of `src`.
    #[must_use]
    pub fn check_neighbour<A, B>(&self, src: A, dst: B) -> bool
    where
        A: VertexKey<S>,
        B: VertexKey<S>,
    {
        self.find_edge(src, dst).is_some()
    }

    /// Every directed edge, grouped by source vertex in id order.
    #[must_use]
    pub fn all_edges(&self) -> Vec<&Edge<T>> {
        self.edges().collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.vertex_map.values().flat_map(Vertex::edges)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertex_map.values().map(|v| v.edges().len()).sum()
    }

    // -----------------------------------------------------------------------
    // Utilities
    // -----------------------------------------------------------------------

    /// Clear search scratch on every vertex. Idempotent.
    pub fn reset_vertices(&mut self) {
        for vertex in self.vertex_map.values_mut() {
            vertex.clear_search_info();
        }
    }

    /// Drop every vertex and edge. The indexer is kept.
    pub fn clear(&mut self) {
        self.vertex_map.clear();
    }

    fn connect(&mut self, src: VertexId, dst: VertexId, cost: T) {
        let Some(src_vertex) = self.vertex_map.get_mut(&src) else {
            return;
        };
        let created = src_vertex.upsert_edge(dst, cost);
        if let Some(dst_vertex) = self.vertex_map.get_mut(&dst) {
            dst_vertex.add_predecessor(src);
        }
        trace!(src = %src, dst = %dst, created, "edge upserted");
    }
}
