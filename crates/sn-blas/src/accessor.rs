//! Element-access protocol.
//!
//! Generic kernels read and write logical elements through [`Accessor`] and
//! [`AccessorMut`] instead of indexing a concrete buffer type. Plain slices
//! map element `i` to slot `i`; the interleaved views map element `i` to the
//! slot pair `(2i, 2i + 1)` and expose it as a [`Complex`] value. The choice
//! is made by the type parameter, so there is no runtime dispatch.

use num_complex::Complex;
use num_traits::Float;

/// Read access to logical elements of a buffer.
pub trait Accessor {
    /// Logical element type.
    type Item: Copy;

    /// Number of logical elements.
    fn len(&self) -> usize;

    /// Whether the buffer holds no logical elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read logical element `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> Self::Item;
}

/// Write access to logical elements of a buffer.
pub trait AccessorMut: Accessor {
    /// Overwrite logical element `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Item);
}

impl<T: Copy> Accessor for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> AccessorMut for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Copy> Accessor for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> AccessorMut for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

/// Read-only complex view over an interleaved `(re, im)` buffer.
#[derive(Debug, Clone, Copy)]
pub struct Interleaved<'a, T> {
    slots: &'a [T],
}

impl<'a, T: Float> Interleaved<'a, T> {
    /// Wrap an interleaved buffer. A trailing unpaired slot is ignored.
    pub fn new(slots: &'a [T]) -> Self {
        Self { slots }
    }

    /// The underlying scalar slots.
    pub fn as_slice(&self) -> &'a [T] {
        self.slots
    }
}

impl<T: Float> Accessor for Interleaved<'_, T> {
    type Item = Complex<T>;

    #[inline]
    fn len(&self) -> usize {
        self.slots.len() / 2
    }

    #[inline]
    fn get(&self, index: usize) -> Complex<T> {
        Complex::new(self.slots[2 * index], self.slots[2 * index + 1])
    }
}

/// Mutable complex view over an interleaved `(re, im)` buffer.
#[derive(Debug)]
pub struct InterleavedMut<'a, T> {
    slots: &'a mut [T],
}

impl<'a, T: Float> InterleavedMut<'a, T> {
    /// Wrap an interleaved buffer. A trailing unpaired slot is ignored.
    pub fn new(slots: &'a mut [T]) -> Self {
        Self { slots }
    }

    /// The underlying scalar slots.
    pub fn as_slice(&self) -> &[T] {
        self.slots
    }

    /// Release the view, returning the underlying buffer.
    pub fn into_inner(self) -> &'a mut [T] {
        self.slots
    }
}

impl<T: Float> Accessor for InterleavedMut<'_, T> {
    type Item = Complex<T>;

    #[inline]
    fn len(&self) -> usize {
        self.slots.len() / 2
    }

    #[inline]
    fn get(&self, index: usize) -> Complex<T> {
        Complex::new(self.slots[2 * index], self.slots[2 * index + 1])
    }
}

impl<T: Float> AccessorMut for InterleavedMut<'_, T> {
    #[inline]
    fn set(&mut self, index: usize, value: Complex<T>) {
        self.slots[2 * index] = value.re;
        self.slots[2 * index + 1] = value.im;
    }
}
