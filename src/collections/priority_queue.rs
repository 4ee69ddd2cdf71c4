//! `PriorityQueue` — a min-priority queue implemented with a binary heap.
//!
//! Entries pair an opaque item with an externally supplied priority. The
//! entry with the smallest priority is always at the root. Priorities only
//! need `PartialOrd`, so floating point keys such as path lengths work
//! directly; incomparable keys (NaN) never count as "less" and therefore
//! leave the heap shape intact but their ordering unspecified.

use core::fmt;

/// A single `(item, priority)` pair stored in a [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<T, P> {
    /// The stored value.
    pub item: T,
    /// The key the heap is ordered by.
    pub priority: P,
}

/// A min-priority queue implemented with a binary heap.
///
/// Storage is a dense `Vec` encoding a complete binary tree: the children of
/// index `i` live at `2i + 1` and `2i + 2`. Every non-root entry has a
/// priority greater than or equal to its parent's.
///
/// Entries with equal priority come out in no guaranteed order.
pub struct PriorityQueue<T, P> {
    data: Vec<HeapEntry<T, P>>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty priority queue with space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `item` keyed by `priority`.
    ///
    /// Runs in `O(log n)`.
    pub fn enqueue(&mut self, item: T, priority: P) {
        self.data.push(HeapEntry { item, priority });
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// Returns `None` when the queue is empty; callers that need to tell
    /// "empty" apart from a present value should check [`is_empty`] first or
    /// match on the option.
    ///
    /// [`is_empty`]: Self::is_empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_entry().map(|entry| entry.item)
    }

    /// Removes the minimum entry and returns it together with its priority.
    pub fn dequeue_entry(&mut self) -> Option<HeapEntry<T, P>> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.data.first().map(|entry| (&entry.item, &entry.priority))
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drains the queue into a vector of items in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.dequeue() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Strict comparison of two stored priorities.
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].priority < self.data[b].priority
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Iterates over all entries in storage (heap) order.
    pub fn iter(&self) -> core::slice::Iter<'_, HeapEntry<T, P>> {
        self.data.iter()
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Clone> Clone for PriorityQueue<T, P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, P: fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("min_priority", &self.data.first().map(|entry| &entry.priority))
            .finish()
    }
}
