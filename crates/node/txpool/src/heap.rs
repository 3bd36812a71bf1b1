//! Capacity-bounded binary heap.

use std::{fmt, iter::FusedIterator, mem};

use crate::{Priority, Reversed};

/// Upper bound on the up-front allocation made by [`BoundedHeap::new`].
const MAX_PREALLOC: usize = 1 << 16;

/// Outcome of offering an item to a [`BoundedHeap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission<T> {
    /// The item was admitted without displacing anything.
    Admitted,
    /// The item was admitted and the previous minimum was evicted.
    Evicted(T),
    /// The item did not outrank the current minimum and was turned away.
    Rejected(T),
}

impl<T> Admission<T> {
    /// Returns `true` if the offered item is now held by the heap.
    pub const fn is_admitted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// A binary heap holding at most `capacity` items, lowest priority at the root.
///
/// Keeping the minimum at the root means an item offered to a full heap only
/// has to be compared against one element, and eviction replaces the root in
/// place followed by a single sift-down. Positions are tracked by the heap
/// itself; items carry no bookkeeping of their own.
pub struct BoundedHeap<T, P> {
    items: Vec<T>,
    capacity: usize,
    priority: P,
}

impl<T: fmt::Debug, P> fmt::Debug for BoundedHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHeap")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, P: Priority<T>> BoundedHeap<T, P> {
    /// Creates an empty heap retaining at most `capacity` items.
    pub fn new(capacity: usize, priority: P) -> Self {
        Self { items: Vec::with_capacity(capacity.min(MAX_PREALLOC)), capacity, priority }
    }

    /// Returns the maximum number of items retained.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another item can only be admitted by evicting one.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Returns the lowest-priority item, the next candidate for eviction.
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Offers an item to the heap.
    ///
    /// Below capacity the item is always admitted. At capacity it is admitted
    /// only if it strictly outranks the current minimum, which is then evicted
    /// and returned. An item that ties with the minimum is rejected.
    pub fn push(&mut self, item: T) -> Admission<T> {
        if !self.is_full() {
            self.items.push(item);
            self.sift_up(self.items.len() - 1);
            return Admission::Admitted;
        }

        match self.items.first() {
            Some(min) if self.priority.compare(&item, min).is_gt() => {
                let evicted = mem::replace(&mut self.items[0], item);
                self.sift_down(0);
                Admission::Evicted(evicted)
            }
            _ => Admission::Rejected(item),
        }
    }

    /// Removes and returns the lowest-priority item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Consumes the heap, yielding its items from highest to lowest priority.
    ///
    /// The items are re-heapified under the reversed priority in `O(n)`; each
    /// step of the returned iterator is then `O(log n)`. Items of equal
    /// priority come out in no particular order.
    pub fn drain_descending(self) -> DrainDescending<T, P> {
        let Self { items, capacity, priority } = self;
        let mut heap = BoundedHeap { items, capacity, priority: Reversed(priority) };
        heap.heapify();
        DrainDescending { heap }
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.priority.compare(&self.items[a], &self.items[b]).is_lt()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.precedes(idx, parent) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) { right } else { left };
            if !self.precedes(child, idx) {
                break;
            }
            self.items.swap(idx, child);
            idx = child;
        }
    }

    fn heapify(&mut self) {
        for idx in (0..self.items.len() / 2).rev() {
            self.sift_down(idx);
        }
    }
}

/// Iterator returned by [`BoundedHeap::drain_descending`].
pub struct DrainDescending<T, P> {
    heap: BoundedHeap<T, Reversed<P>>,
}

impl<T: fmt::Debug, P> fmt::Debug for DrainDescending<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrainDescending").field("remaining", &self.heap.items.len()).finish()
    }
}

impl<T, P: Priority<T>> Iterator for DrainDescending<T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, P: Priority<T>> ExactSizeIterator for DrainDescending<T, P> {}

impl<T, P: Priority<T>> FusedIterator for DrainDescending<T, P> {}
