use std::fmt::Debug;

use crate::{Error, Result};

/// Direction of a [`PriorityQueue`], fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest priority is extracted first (min-heap)
    Ascending,
    /// Largest priority is extracted first (max-heap)
    Descending,
}

/// Binary heap over `(priority, payload)` pairs with in-place decrease-key.
///
/// Positions are 1-based: the root lives at position 1 and the children of
/// position `i` are `2i` and `2i + 1`. Position `i` is stored at `heap[i - 1]`,
/// so the live range is always the whole vector.
///
/// Payloads are located by equality with a linear scan, which makes
/// [`decrease_key`](Self::decrease_key) O(n). That is the dominant cost when it
/// is called for every relaxed edge of a dense graph, and is accepted here in
/// exchange for not requiring `Hash` on payloads.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: PartialEq + Debug,
{
    /// Heap entries; position `i` is at index `i - 1`
    heap: Vec<(P, T)>,

    /// Ordering applied to every comparison
    order: HeapOrder,
}

impl<P, T> PriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: PartialEq + Debug,
{
    /// Creates a new empty priority queue with the given ordering
    pub fn new(order: HeapOrder) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            order,
        }
    }

    /// Creates an empty min-first queue
    pub fn ascending() -> Self {
        Self::new(HeapOrder::Ascending)
    }

    /// Creates an empty max-first queue
    pub fn descending() -> Self {
        Self::new(HeapOrder::Descending)
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the ordering of this queue
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the top entry without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap.first().map(|(priority, payload)| (payload, *priority))
    }

    /// Returns true if an entry with this payload is queued
    pub fn contains(&self, payload: &T) -> bool {
        self.find_position(payload).is_some()
    }

    /// Returns the current priority of a queued payload
    pub fn priority_of(&self, payload: &T) -> Option<P> {
        self.find_position(payload).map(|pos| self.priority(pos))
    }

    /// Iterates over the entries in heap (not sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.heap.iter().map(|(priority, payload)| (payload, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Inserts a new entry, restoring the heap property by percolating it up
    pub fn insert(&mut self, priority: P, payload: T) {
        self.heap.push((priority, payload));
        let last = self.heap.len();
        self.percolate_up(last);
    }

    /// Removes the top entry and returns its payload.
    ///
    /// Fails with [`Error::EmptyQueue`] when the queue holds nothing.
    pub fn extract_top(&mut self) -> Result<T> {
        self.pop().map(|(payload, _)| payload).ok_or(Error::EmptyQueue)
    }

    /// Removes the top entry, returning it with its priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }

        // Move the last entry to the root, then sift it down
        let (priority, payload) = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.percolate_down(1);
        }

        Some((payload, priority))
    }

    /// Replaces the priority of `payload` and moves it to its new place.
    ///
    /// Returns false and leaves the heap untouched if the payload is not
    /// queued; that is the normal case for a vertex that was never inserted or
    /// was already extracted.
    pub fn decrease_key(&mut self, payload: &T, new_priority: P) -> bool {
        let pos = match self.find_position(payload) {
            Some(pos) => pos,
            None => return false,
        };

        let old_priority = self.priority(pos);
        self.heap[pos - 1].0 = new_priority;

        if self.precedes(new_priority, old_priority) {
            self.percolate_up(pos);
        } else {
            self.percolate_down(pos);
        }
        true
    }

    /// Bulk-loads entries in O(n).
    ///
    /// Entries are appended after the current contents, then every non-leaf
    /// position is sifted down from the last one to the root.
    pub fn build_heap<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (P, T)>,
    {
        self.heap.extend(entries);
        let mut pos = self.heap.len() / 2;
        while pos > 0 {
            self.percolate_down(pos);
            pos -= 1;
        }
    }

    /// Checks the heap property over every parent/child pair
    pub fn is_heap(&self) -> bool {
        (2..=self.heap.len()).all(|pos| !self.precedes(self.priority(pos), self.priority(pos / 2)))
    }

    /// Drains the queue in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Position (1-based) of the first entry carrying `payload`
    fn find_position(&self, payload: &T) -> Option<usize> {
        self.heap
            .iter()
            .position(|(_, queued)| queued == payload)
            .map(|idx| idx + 1)
    }

    fn priority(&self, pos: usize) -> P {
        self.heap[pos - 1].0
    }

    /// True if `a` must sit above `b` under the configured ordering
    fn precedes(&self, a: P, b: P) -> bool {
        match self.order {
            HeapOrder::Ascending => a < b,
            HeapOrder::Descending => a > b,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
    }

    fn percolate_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if !self.precedes(self.priority(pos), self.priority(parent)) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    /// Child of `pos` that should move up first; ties go to the left child
    fn top_child(&self, pos: usize) -> usize {
        let left = pos * 2;
        let right = left + 1;
        if right <= self.heap.len() && self.precedes(self.priority(right), self.priority(left)) {
            right
        } else {
            left
        }
    }

    fn percolate_down(&mut self, mut pos: usize) {
        while pos * 2 <= self.heap.len() {
            let child = self.top_child(pos);
            if !self.precedes(self.priority(child), self.priority(pos)) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

impl<P, T> Default for PriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: PartialEq + Debug,
{
    fn default() -> Self {
        Self::ascending()
    }
}
