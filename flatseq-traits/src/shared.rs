//! Aliasable storage handle.
//!
//! Rust forbids passing `&buf` and `&mut buf` to the same call, yet every bulk
//! operation must accept its destination aliasing one or both sources
//! (`add_into(a, a, a)`). [`Shared`] wraps the buffer as `&[Cell<T>]`: the
//! handle is `Copy`, reads and writes go through the cells, and the same
//! handle can appear in every argument position.

use std::cell::Cell;
use std::fmt;

use crate::sequence::{Sequence, SequenceMut};

/// Copyable read/write handle over a borrowed buffer.
pub struct Shared<'a, T> {
    cells: &'a [Cell<T>],
}

impl<T> Clone for Shared<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Shared<'_, T> {}

impl<T: Copy + fmt::Debug> fmt::Debug for Shared<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}

impl<'a, T> Shared<'a, T> {
    /// Borrow `data` for aliased access. The buffer is unusable directly for
    /// as long as any handle lives.
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            cells: Cell::from_mut(data).as_slice_of_cells(),
        }
    }

    /// Wrap cells that are already shared.
    pub fn from_cells(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &'a [Cell<T>] {
        self.cells
    }
}

impl<T: Copy> Sequence for Shared<'_, T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.cells[index].get()
    }
}

impl<T: Copy> SequenceMut for Shared<'_, T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self.cells[index].set(value);
    }
}
