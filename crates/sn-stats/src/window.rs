//! Window bookkeeping shared by the moving accumulators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::Float;
use sn_core::Result;

use crate::moments::Aggregate;
use crate::ring_buffer::RingBuffer;

/// Fill level of a moving window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowState {
    /// Nothing pushed yet (or since the last reset).
    Empty,
    /// Holding this many values, fewer than the capacity.
    Partial(usize),
    /// Holding exactly `capacity` values; every push evicts one.
    Full,
}

/// The last `capacity` observations plus an aggregate over their finite
/// members.
///
/// NaN and the two infinities are counted instead of aggregated. When an
/// eviction leaves the aggregate imprecise, it is rebuilt from the buffered
/// values, which costs one pass over the window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct Window<T, A> {
    values: RingBuffer<T>,
    nan: usize,
    pos_inf: usize,
    neg_inf: usize,
    aggregate: A,
}

impl<T: Float, A: Aggregate<T>> Window<T, A> {
    pub(crate) fn new(capacity: usize, aggregate: A) -> Result<Self> {
        Ok(Self {
            values: RingBuffer::new(capacity)?,
            nan: 0,
            pos_inf: 0,
            neg_inf: 0,
            aggregate,
        })
    }

    pub(crate) fn push(&mut self, x: T) {
        let evicted = self.values.push(x);
        if let Some(old) = evicted {
            self.uncount(old);
        }
        self.count(x);
        match (evicted.filter(|v| v.is_finite()), x.is_finite()) {
            (Some(old), true) => self.aggregate.replace(old, x),
            (Some(old), false) => self.aggregate.remove(old),
            (None, true) => {
                self.aggregate.insert(x);
                return;
            }
            (None, false) => return,
        }
        if self.aggregate.needs_rescan() {
            self.rescan();
        }
    }

    /// Rebuild the aggregate from the finite values in the window.
    fn rescan(&mut self) {
        self.aggregate.clear();
        for &v in self.values.iter().filter(|v| v.is_finite()) {
            self.aggregate.insert(v);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.nan = 0;
        self.pos_inf = 0;
        self.neg_inf = 0;
        self.aggregate.clear();
    }

    pub(crate) fn aggregate(&self) -> &A {
        &self.aggregate
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub(crate) fn state(&self) -> WindowState {
        match self.values.len() {
            0 => WindowState::Empty,
            n if n < self.values.capacity() => WindowState::Partial(n),
            _ => WindowState::Full,
        }
    }

    /// Whether any NaN is in the window.
    pub(crate) fn has_nan(&self) -> bool {
        self.nan > 0
    }

    /// Whether any `+inf` is in the window.
    pub(crate) fn has_pos_inf(&self) -> bool {
        self.pos_inf > 0
    }

    /// Whether any `-inf` is in the window.
    pub(crate) fn has_neg_inf(&self) -> bool {
        self.neg_inf > 0
    }

    /// Whether any infinity is in the window.
    pub(crate) fn has_inf(&self) -> bool {
        self.has_pos_inf() || self.has_neg_inf()
    }

    fn count(&mut self, x: T) {
        if x.is_nan() {
            self.nan += 1;
        } else if x == T::infinity() {
            self.pos_inf += 1;
        } else if x == T::neg_infinity() {
            self.neg_inf += 1;
        }
    }

    fn uncount(&mut self, x: T) {
        if x.is_nan() {
            self.nan -= 1;
        } else if x == T::infinity() {
            self.pos_inf -= 1;
        } else if x == T::neg_infinity() {
            self.neg_inf -= 1;
        }
    }
}
