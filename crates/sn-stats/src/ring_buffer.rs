//! Fixed-capacity circular buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sn_core::{ensure, Result};

/// A circular buffer holding the most recent `capacity` values.
///
/// Storage is allocated once at construction. Pushing into a full buffer
/// overwrites the oldest value in place and hands it back, so a push never
/// shifts or reallocates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRingBuffer<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
pub struct RingBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    /// Slot written by the next push; the oldest value once full.
    cursor: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        ensure!(
            capacity > 0,
            "capacity must be a positive integer, got {capacity}"
        );
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        })
    }

    /// Append `value`, returning the evicted oldest value if the buffer was
    /// full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.data.len() < self.capacity {
            self.data.push(value);
            None
        } else {
            Some(std::mem::replace(&mut self.data[self.cursor], value))
        };
        self.cursor = (self.cursor + 1) % self.capacity;
        evicted
    }

    /// Value at logical position `index`, where `0` is the oldest.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.data.len() {
            return None;
        }
        self.data.get((self.start() + index) % self.data.len())
    }

    /// The most recently pushed value.
    pub fn newest(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (tail, head) = self.data.split_at(self.start());
        head.iter().chain(tail.iter())
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been pushed since construction or the last
    /// [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the next push evicts a value.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Maximum number of values held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every value, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
        self.cursor = 0;
    }

    fn start(&self) -> usize {
        if self.is_full() {
            self.cursor
        } else {
            0
        }
    }
}

/// Unchecked field layout of a serialized [`RingBuffer`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRingBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    cursor: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawRingBuffer<T>> for RingBuffer<T> {
    type Error = sn_core::Error;

    fn try_from(raw: RawRingBuffer<T>) -> Result<Self> {
        let RawRingBuffer {
            mut data,
            capacity,
            cursor,
        } = raw;
        ensure!(
            capacity > 0,
            "capacity must be a positive integer, got {capacity}"
        );
        ensure!(
            data.len() <= capacity,
            "{} values exceed capacity {capacity}",
            data.len()
        );
        // A partial buffer is always written front to back.
        let expected = if data.len() < capacity { data.len() } else { cursor };
        ensure!(
            cursor < capacity && cursor == expected,
            "cursor {cursor} is inconsistent with {} of {capacity} values",
            data.len()
        );
        data.reserve_exact(capacity - data.len());
        Ok(Self {
            data,
            capacity,
            cursor,
        })
    }
}
