//! Index-addressable element storage.
//!
//! A [`Sequence`] is anything that can report a length and hand out copies of
//! its elements by 0-based index: slices, arrays, vectors, views over any of
//! those, and the fixed-arity vector/matrix values. [`SequenceMut`] adds
//! element writes.
//!
//! Element access is not bounds checked beyond what the backing storage does
//! natively; an out-of-range index panics inside the storage access.

use crate::MAX_ARITY;

/// Read access to an ordered, fully populated range of elements.
pub trait Sequence {
    /// Element type handed out by [`Sequence::get`].
    type Elem: Copy;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Element at `index`.
    fn get(&self, index: usize) -> Self::Elem;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read `K` consecutive elements starting at `index`.
    ///
    /// `K` must be in `1..=16`; other arities fail to compile.
    #[inline]
    fn get_n<const K: usize>(&self, index: usize) -> [Self::Elem; K] {
        const { assert!(K >= 1 && K <= MAX_ARITY, "arity must be in 1..=16") };
        std::array::from_fn(|k| self.get(index + k))
    }

    /// Copy every element into a new `Vec`.
    fn to_vec(&self) -> Vec<Self::Elem> {
        (0..self.len()).map(|k| self.get(k)).collect()
    }
}

/// Write access on top of [`Sequence`].
pub trait SequenceMut: Sequence {
    /// Overwrite the element at `index`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Write `K` consecutive elements starting at `index`.
    #[inline]
    fn set_n<const K: usize>(&mut self, index: usize, values: [Self::Elem; K]) {
        const { assert!(K >= 1 && K <= MAX_ARITY, "arity must be in 1..=16") };
        for (k, value) in values.into_iter().enumerate() {
            self.set(index + k, value);
        }
    }
}

// ============================================================================
// Native storage
// ============================================================================

impl<T: Copy> Sequence for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn to_vec(&self) -> Vec<T> {
        <[T]>::to_vec(self)
    }
}

impl<T: Copy> SequenceMut for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Copy, const N: usize> Sequence for [T; N] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Copy> Sequence for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn to_vec(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Copy> SequenceMut for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

// ============================================================================
// Borrowed sequences
// ============================================================================

impl<S: Sequence + ?Sized> Sequence for &S {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        S::get(self, index)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        S::get(self, index)
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for &mut S {
    #[inline]
    fn set(&mut self, index: usize, value: S::Elem) {
        S::set(self, index, value)
    }
}
