//! State identity: the only relation the graph relies on.
//!
//! A state is never hashed or compared directly. Every container in this
//! crate is keyed by the [`VertexId`] an indexer derives from the state.

use std::fmt;

/// Stable 64-bit identity of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(i64);

impl VertexId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw identity value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A state that carries its own identity.
///
/// Implemented for every primitive integer (the value is the identity).
/// Domain states implement it by returning their identity field.
pub trait Identified {
    fn identity(&self) -> VertexId;
}

macro_rules! identified_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
                fn identity(&self) -> VertexId {
                    VertexId(*self as i64)
                }
            }
        )*
    };
}

identified_by_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<S: Identified + ?Sized> Identified for &S {
    fn identity(&self) -> VertexId {
        (**self).identity()
    }
}

/// Maps a state to its identity.
///
/// # Contract
///
/// - Total: every state handed to a graph must be indexable.
/// - Deterministic and side-effect free for the lifetime of the vertex.
///
/// Any `Fn(&S) -> VertexId` closure is an indexer.
pub trait StateIndexer<S> {
    fn index(&self, state: &S) -> VertexId;
}

/// Indexer for states implementing [`Identified`].
///
/// A state type with neither an [`Identified`] impl nor a custom indexer is
/// rejected at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultIndexer;

impl<S: Identified> StateIndexer<S> for DefaultIndexer {
    fn index(&self, state: &S) -> VertexId {
        state.identity()
    }
}

impl<S, F> StateIndexer<S> for F
where
    F: Fn(&S) -> VertexId,
{
    fn index(&self, state: &S) -> VertexId {
        self(state)
    }
}

/// Anything that resolves to a vertex id: the id itself, or a state
/// reference run through the graph's indexer.
pub trait VertexKey<S> {
    fn resolve<I: StateIndexer<S>>(&self, indexer: &I) -> VertexId;
}

impl<S> VertexKey<S> for VertexId {
    fn resolve<I: StateIndexer<S>>(&self, _indexer: &I) -> VertexId {
        *self
    }
}

impl<S> VertexKey<S> for &S {
    fn resolve<I: StateIndexer<S>>(&self, indexer: &I) -> VertexId {
        indexer.index(self)
    }
}
