//! Holdfast Ring - Fixed-capacity ring buffer for per-tick history
//!
//! This crate provides a double-ended circular buffer over a flat, fixed-size
//! array, used to hold the most recent rows of an input buffer.
//!
//! # Features
//!
//! - **Bounded memory**: Slots are allocated once at construction, never grown
//! - **O(1) insertion**: Pushing at either end is index arithmetic
//! - **Overwrite on full**: Pushing into a full buffer evicts the opposite end
//! - **Logical indexing**: `buffer[0]` is always the front, whatever the wrap
//! - **Slot recycling**: `push_front_with` reuses the evicted slot in place
//!
//! # Example
//!
//! ```rust
//! use holdfast_ring::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3);
//! buffer.push_front(1);
//! buffer.push_front(2);
//! buffer.push_front(3);
//! assert!(buffer.is_full());
//!
//! // Full: the back (1) is evicted
//! buffer.push_front(4);
//! assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
//! assert_eq!(buffer[0], 4);
//! assert_eq!(buffer.back(), Some(&2));
//! ```
//!
//! # Concurrency
//!
//! The buffer does no synchronization of its own. It is meant to be owned by
//! a single consumer; sharing it across threads requires an outer lock.

use std::ops::{Index, IndexMut};

/// A fixed-capacity, double-ended ring buffer
///
/// Once full, every push overwrites the element at the opposite end, so the
/// buffer behaves as a sliding window over the most recent `capacity` items.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Backing storage, always `capacity` slots long
    slots: Vec<T>,
    /// Physical index of the front element
    start: usize,
    /// Physical index one past the back element
    end: usize,
    /// Number of live elements
    len: usize,
}

impl<T: Default> RingBuffer<T> {
    /// Create a new ring buffer with the given capacity
    ///
    /// All slots are default-initialized up front; the buffer starts empty.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use holdfast_ring::RingBuffer;
    ///
    /// let buffer: RingBuffer<u32> = RingBuffer::new(20);
    /// assert_eq!(buffer.capacity(), 20);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
            start: 0,
            end: 0,
            len: 0,
        }
    }

    /// Remove and return the front element
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = std::mem::take(&mut self.slots[self.start]);
        self.start = self.increment(self.start);
        self.len -= 1;
        Some(item)
    }

    /// Remove and return the back element
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.end = self.decrement(self.end);
        self.len -= 1;
        Some(std::mem::take(&mut self.slots[self.end]))
    }

    /// Drop all elements, resetting every slot to its default
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = T::default();
        }
        self.start = 0;
        self.end = 0;
        self.len = 0;
    }
}

impl<T> RingBuffer<T> {
    /// Insert an element at the front
    ///
    /// If the buffer is full the back element is overwritten.
    pub fn push_front(&mut self, item: T) {
        self.push_front_with(|slot, _| *slot = item);
    }

    /// Insert an element at the back
    ///
    /// If the buffer is full the front element is overwritten.
    pub fn push_back(&mut self, item: T) {
        self.slots[self.end] = item;
        self.end = self.increment(self.end);
        if self.is_full() {
            self.start = self.end;
        } else {
            self.len += 1;
        }
    }

    /// Claim a new front slot and fill it in place
    ///
    /// The closure receives the claimed slot (holding whatever element it last
    /// held, i.e. the evicted back element when full) and the previous front
    /// element. The previous front is `None` when the buffer was empty, or when
    /// capacity is 1 and the claimed slot *is* the previous front.
    ///
    /// This avoids allocating a fresh element per push when `T` owns heap
    /// storage that can be reused.
    pub fn push_front_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T, Option<&T>),
    {
        let previous = (self.len > 0).then_some(self.start);

        self.start = self.decrement(self.start);
        if self.is_full() {
            self.end = self.start;
        } else {
            self.len += 1;
        }

        match previous {
            Some(prev) if prev != self.start => {
                let (fresh, prev) = split_pair(&mut self.slots, self.start, prev);
                f(fresh, Some(prev));
            }
            _ => f(&mut self.slots[self.start], None),
        }
    }

    /// Get the element at a logical index (0 = front)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.slots[self.physical(index)])
        } else {
            None
        }
    }

    /// Get a mutable reference to the element at a logical index (0 = front)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let physical = self.physical(index);
            Some(&mut self.slots[physical])
        } else {
            None
        }
    }

    /// Peek at the front element
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Peek at the back element
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Iterate elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.slots[self.physical(i)])
    }

    /// Maximum number of elements
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Get statistics about the buffer
    pub fn stats(&self) -> RingStats {
        RingStats {
            capacity: self.capacity(),
            len: self.len,
        }
    }

    /// Map a logical index to a slot index
    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.capacity()
    }

    fn increment(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }

    fn decrement(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            index - 1
        }
    }
}

/// Borrow one slot mutably and a different slot immutably
fn split_pair<T>(slots: &mut [T], fresh: usize, prev: usize) -> (&mut T, &T) {
    debug_assert_ne!(fresh, prev);
    if fresh < prev {
        let (lo, hi) = slots.split_at_mut(prev);
        (&mut lo[fresh], &hi[0])
    } else {
        let (lo, hi) = slots.split_at_mut(fresh);
        (&mut hi[0], &lo[prev])
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {index} out of range for ring buffer of length {}",
            self.len
        );
        &self.slots[self.physical(index)]
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {index} out of range for ring buffer of length {}",
            self.len
        );
        let physical = self.physical(index);
        &mut self.slots[physical]
    }
}

impl<T: Default> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Statistics about a ring buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingStats {
    /// Maximum capacity
    pub capacity: usize,
    /// Current number of stored elements
    pub len: usize,
}

impl RingStats {
    /// Get the fill percentage (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f32 {
        self.len as f32 / self.capacity as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(buffer: &RingBuffer<i32>) -> Vec<i32> {
        buffer.iter().copied().collect()
    }

    #[test]
    fn test_new() {
        let buffer: RingBuffer<i32> = RingBuffer::new(8);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert!(buffer.front().is_none());
        assert!(buffer.back().is_none());
    }

    #[test]
    #[should_panic(expected = "Capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _buffer: RingBuffer<i32> = RingBuffer::new(0);
    }

    #[test]
    fn test_push_front_order() {
        let mut buffer = RingBuffer::new(4);
        buffer.push_front(1);
        buffer.push_front(2);
        buffer.push_front(3);

        assert_eq!(contents(&buffer), vec![3, 2, 1]);
        assert_eq!(buffer.front(), Some(&3));
        assert_eq!(buffer.back(), Some(&1));
    }

    #[test]
    fn test_push_back_order() {
        let mut buffer = RingBuffer::new(4);
        buffer.push_back(1);
        buffer.push_back(2);
        buffer.push_back(3);

        assert_eq!(contents(&buffer), vec![1, 2, 3]);
        assert_eq!(buffer[2], 3);
    }

    #[test]
    fn test_push_front_evicts_back_when_full() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_back(1);
        buffer.push_back(2);
        buffer.push_back(3);
        assert!(buffer.is_full());

        buffer.push_front(0);
        assert_eq!(buffer.len(), 3);
        assert_eq!(contents(&buffer), vec![0, 1, 2]);

        buffer.push_front(-1);
        assert_eq!(contents(&buffer), vec![-1, 0, 1]);
    }

    #[test]
    fn test_push_back_evicts_front_when_full() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_front(1);
        buffer.push_front(2);
        buffer.push_front(3);

        buffer.push_back(0);
        assert_eq!(buffer.len(), 3);
        assert_eq!(contents(&buffer), vec![2, 1, 0]);
    }

    #[test]
    fn test_mixed_pushes_wrap() {
        let mut buffer = RingBuffer::new(4);
        buffer.push_back(2);
        buffer.push_front(1);
        buffer.push_back(3);
        buffer.push_front(0);
        assert_eq!(contents(&buffer), vec![0, 1, 2, 3]);

        for i in 0..4 {
            assert_eq!(buffer[i], i as i32);
        }
    }

    #[test]
    fn test_index_mut() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_front(1);
        buffer.push_front(2);
        buffer[1] = 10;
        assert_eq!(contents(&buffer), vec![2, 10]);

        if let Some(front) = buffer.get_mut(0) {
            *front = 20;
        }
        assert_eq!(buffer.front(), Some(&20));
        assert!(buffer.get_mut(2).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_past_len_panics() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_front(1);
        let _value = buffer[1];
    }

    #[test]
    fn test_pop() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_back(1);
        buffer.push_back(2);
        buffer.push_back(3);

        assert_eq!(buffer.pop_front(), Some(1));
        assert_eq!(buffer.pop_back(), Some(3));
        assert_eq!(contents(&buffer), vec![2]);
        assert_eq!(buffer.pop_back(), Some(2));
        assert_eq!(buffer.pop_front(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_back(1);
        buffer.push_back(2);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
        buffer.push_front(5);
        assert_eq!(contents(&buffer), vec![5]);
    }

    #[test]
    fn test_push_front_with_sees_previous_front() {
        let mut buffer = RingBuffer::new(3);
        buffer.push_front_with(|slot, prev| {
            assert!(prev.is_none());
            *slot = 1;
        });
        buffer.push_front_with(|slot, prev| *slot = prev.copied().unwrap_or(0) + 1);
        buffer.push_front_with(|slot, prev| *slot = prev.copied().unwrap_or(0) + 1);
        assert_eq!(contents(&buffer), vec![3, 2, 1]);

        // Full: the claimed slot still holds the evicted back element
        buffer.push_front_with(|slot, prev| {
            assert_eq!(*slot, 1);
            assert_eq!(prev, Some(&3));
            *slot = 4;
        });
        assert_eq!(contents(&buffer), vec![4, 3, 2]);
    }

    #[test]
    fn test_push_front_with_capacity_one() {
        let mut buffer = RingBuffer::new(1);
        buffer.push_front(7);
        buffer.push_front_with(|slot, prev| {
            assert!(prev.is_none());
            assert_eq!(*slot, 7);
            *slot += 1;
        });
        assert_eq!(contents(&buffer), vec![8]);
    }

    #[test]
    fn test_stats() {
        let mut buffer = RingBuffer::new(4);
        buffer.push_front(1);

        let stats = buffer.stats();
        assert_eq!(stats.capacity, 4);
        assert_eq!(stats.len, 1);
        assert_eq!(stats.fill_ratio(), 0.25);
    }

    #[test]
    fn test_default_capacity() {
        let buffer: RingBuffer<u8> = RingBuffer::default();
        assert_eq!(buffer.capacity(), 16);
    }
}
