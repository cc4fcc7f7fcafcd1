//! Binary min-heap over vertex handles with mutable keys.
//!
//! The heap stores handles rather than keys and reads every comparison from
//! its key table, so lowering a key after insertion only needs a sift-up from
//! the handle's recorded slot. A position index (handle → slot) keeps
//! `decrease_key` at `O(log n)`.
//!
//! Keys of extracted handles stay in the table: Prim reads the final key of
//! every vertex once the queue has drained.

use std::cmp::Ordering;

use crate::{error::QueueError, graph::Vertex};

/// Array-backed binary min-heap supporting `decrease_key`.
///
/// Equal keys compare equal; the relative order of equal-key handles is
/// unspecified.
///
/// # Examples
/// ```
/// use tubegraph_core::MinHeapPriorityQueue;
///
/// let mut queue = MinHeapPriorityQueue::with_keys(vec![5.0, 3.0, 9.0]);
/// for item in 0..3 {
///     queue.insert(item)?;
/// }
/// queue.decrease_key(2, 1.0)?;
/// assert_eq!(queue.extract_min()?, 2);
/// assert_eq!(queue.extract_min()?, 1);
/// assert_eq!(queue.get_size(), 1);
/// # Ok::<(), tubegraph_core::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeapPriorityQueue {
    heap: Vec<Vertex>,
    keys: Vec<f64>,
    positions: Vec<Option<usize>>,
}

impl MinHeapPriorityQueue {
    /// Creates an empty queue for handles `0..capacity`, every key set to
    /// infinity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_keys(vec![f64::INFINITY; capacity])
    }

    /// Creates an empty queue that takes ownership of an existing key table.
    /// The table's length fixes the handle capacity.
    #[must_use]
    pub fn with_keys(keys: Vec<f64>) -> Self {
        let capacity = keys.len();
        Self {
            heap: Vec::with_capacity(capacity),
            keys,
            positions: vec![None; capacity],
        }
    }

    /// Returns the number of queued handles in `O(1)`.
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no handle is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of handles the queue can address.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when `item` is currently queued.
    #[must_use]
    pub fn contains(&self, item: Vertex) -> bool {
        matches!(self.positions.get(item), Some(Some(_)))
    }

    /// Returns the key associated with `item`, queued or not.
    #[must_use]
    pub fn key(&self, item: Vertex) -> Option<f64> {
        self.keys.get(item).copied()
    }

    /// Returns the whole key table.
    #[must_use]
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Returns the handle with the smallest key without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<Vertex> {
        self.heap.first().copied()
    }

    /// Queues `item` under the key currently stored in the table.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::ItemOutOfRange`] for a handle beyond the
    /// capacity and [`QueueError::AlreadyQueued`] when `item` is queued.
    pub fn insert(&mut self, item: Vertex) -> Result<(), QueueError> {
        self.check_item(item)?;
        if self.contains(item) {
            return Err(QueueError::AlreadyQueued { item });
        }
        let slot = self.heap.len();
        self.heap.push(item);
        self.positions[item] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Stores `key` for `item` and queues it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert`]; the key table is left untouched on error.
    pub fn insert_with_key(&mut self, item: Vertex, key: f64) -> Result<(), QueueError> {
        self.check_item(item)?;
        if self.contains(item) {
            return Err(QueueError::AlreadyQueued { item });
        }
        self.keys[item] = key;
        self.insert(item)
    }

    /// Removes and returns the handle with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] when nothing is queued.
    pub fn extract_min(&mut self) -> Result<Vertex, QueueError> {
        let last = self.heap.len().checked_sub(1).ok_or(QueueError::Empty)?;
        self.swap(0, last);
        let min = self.heap.pop().ok_or(QueueError::Empty)?;
        self.positions[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Lowers the key of a queued handle and restores heap order.
    ///
    /// A key equal to the current one is accepted and leaves the heap
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DecreaseKeyViolation`] when `new_key` exceeds the
    /// current key (NaN always does), [`QueueError::NotQueued`] when `item`
    /// is not in the heap, and [`QueueError::ItemOutOfRange`] for a handle
    /// beyond the capacity.
    pub fn decrease_key(&mut self, item: Vertex, new_key: f64) -> Result<(), QueueError> {
        self.check_item(item)?;
        let slot = self.positions[item].ok_or(QueueError::NotQueued { item })?;
        let current = self.keys[item];
        if new_key.total_cmp(&current) == Ordering::Greater {
            return Err(QueueError::DecreaseKeyViolation {
                item,
                current,
                requested: new_key,
            });
        }
        self.keys[item] = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Returns `true` when every parent key is at most its children's keys
    /// and the position index agrees with the heap array.
    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.less(self.heap[child], self.heap[parent])
        });
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, &item)| self.positions[item] == Some(slot));
        let queued = self.positions.iter().filter(|slot| slot.is_some()).count();
        ordered && indexed && queued == self.heap.len()
    }

    fn check_item(&self, item: Vertex) -> Result<(), QueueError> {
        if item < self.keys.len() {
            Ok(())
        } else {
            Err(QueueError::ItemOutOfRange {
                item,
                capacity: self.keys.len(),
            })
        }
    }

    fn less(&self, left: Vertex, right: Vertex) -> bool {
        self.keys[left].total_cmp(&self.keys[right]) == Ordering::Less
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.heap.swap(first, second);
        self.positions[self.heap[first]] = Some(first);
        self.positions[self.heap[second]] = Some(second);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(self.heap[slot], self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = slot;
            if self.less(self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.less(self.heap[right], self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
