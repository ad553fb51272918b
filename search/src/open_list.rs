//! Open list: min-priority frontier without decrease-key.
//!
//! An improved priority is expressed by pushing the item again. The stale
//! entry stays in the heap; consumers must check whether a popped item was
//! already expanded and skip it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::policy::TieBreak;

/// Ordering key: priority first, then insertion order.
///
/// `order` is derived from the insertion sequence so that a smaller value
/// always pops first; the tie-break policy decides the direction.
///
/// A priority that is not comparable with itself (NaN) sorts after every
/// comparable priority. Comparable priorities must be totally ordered
/// among themselves.
#[derive(Debug, Clone, Copy)]
struct OpenKey<P> {
    priority: P,
    order: u64,
}

impl<P: PartialOrd> PartialEq for OpenKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd> Eq for OpenKey<P> {}

impl<P: PartialOrd> PartialOrd for OpenKey<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> Ord for OpenKey<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_priority = match (is_unordered(&self.priority), is_unordered(&other.priority)) {
            (false, false) => self
                .priority
                .partial_cmp(&other.priority)
                .unwrap_or(Ordering::Equal),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        };
        by_priority.then(self.order.cmp(&other.order))
    }
}

fn is_unordered<P: PartialOrd>(p: &P) -> bool {
    p.partial_cmp(p).is_none()
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<OpenKey>` to pop the
/// lowest priority first.
#[derive(Debug)]
struct OpenEntry<V, P> {
    key: Reverse<OpenKey<P>>,
    item: V,
}

impl<V, P: PartialOrd> PartialEq for OpenEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V, P: PartialOrd> Eq for OpenEntry<V, P> {}

impl<V, P: PartialOrd> PartialOrd for OpenEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: PartialOrd> Ord for OpenEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue over `(priority, item)` pairs.
///
/// Equal priorities pop in insertion order ([`TieBreak::Fifo`]) or reverse
/// insertion order ([`TieBreak::Lifo`]), so pop order is fully determined
/// by the sequence of `put` calls.
#[derive(Debug)]
pub struct OpenList<V, P> {
    heap: BinaryHeap<OpenEntry<V, P>>,
    tie_break: TieBreak,
    next_seq: u64,
    high_water: usize,
}

impl<V, P: PartialOrd> OpenList<V, P> {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Push `item` at `priority`. Never replaces an existing entry.
    pub fn put(&mut self, item: V, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let order = match self.tie_break {
            TieBreak::Fifo => seq,
            TieBreak::Lifo => u64::MAX - seq,
        };
        self.heap.push(OpenEntry {
            key: Reverse(OpenKey { priority, order }),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the item with the lowest priority.
    pub fn get(&mut self) -> Option<V> {
        self.heap.pop().map(|e| e.item)
    }

    /// Lowest priority currently queued.
    #[must_use]
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|e| &e.key.0.priority)
    }

    /// Number of queued entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the list has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<V, P: PartialOrd> Default for OpenList<V, P> {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}
