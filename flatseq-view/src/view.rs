//! View types remapping logical indices onto a backing sequence.

use flatseq_traits::{Result, SeqError, Sequence, SequenceMut, MAX_ARITY};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that `[start, start + len)` stays within `[0, base_len)`.
fn validate_range(name: &'static str, base_len: usize, start: usize, len: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= base_len => Ok(()),
        _ => Err(SeqError::out_of_bounds(name, start, len, base_len)),
    }
}

/// Signed physical offset `start + steps * stride`, rejecting overflow.
fn offset(name: &'static str, start: usize, steps: usize, stride: isize) -> Result<isize> {
    let start = isize::try_from(start).map_err(|_| SeqError::offset_overflow(name))?;
    let steps = isize::try_from(steps).map_err(|_| SeqError::offset_overflow(name))?;
    steps
        .checked_mul(stride)
        .and_then(|delta| start.checked_add(delta))
        .ok_or(SeqError::offset_overflow(name))
}

/// Validate that every physical offset in `candidates` lies in `[0, base_len)`.
///
/// Callers pass the extreme offsets of the mapping; since each mapping is
/// piecewise affine the extremes bound every other offset.
fn validate_offsets(name: &'static str, base_len: usize, candidates: &[isize]) -> Result<()> {
    for &candidate in candidates {
        if candidate < 0 {
            return Err(SeqError::offset_overflow(name));
        }
        if candidate as usize >= base_len {
            return Err(SeqError::out_of_bounds(name, candidate as usize, 1, base_len));
        }
    }
    Ok(())
}

#[cfg(feature = "debug-checks")]
#[inline]
fn check_logical(kind: &str, index: usize, len: usize) {
    assert!(
        index < len,
        "{kind}: logical index {index} out of bounds for length {len}"
    );
}

#[cfg(not(feature = "debug-checks"))]
#[inline(always)]
fn check_logical(_kind: &str, _index: usize, _len: usize) {}

// ============================================================================
// SliceView
// ============================================================================

/// Contiguous window `[start, start + len)` of the backing sequence.
#[derive(Debug, Clone, Copy)]
pub struct SliceView<S> {
    base: S,
    start: usize,
    len: usize,
}

impl<S: Sequence> SliceView<S> {
    /// Create a contiguous view.
    ///
    /// # Errors
    /// Returns `InvalidRange` if the window runs past the backing length.
    pub fn new(base: S, start: usize, len: usize) -> Result<Self> {
        validate_range("slice", base.len(), start, len)?;
        tracing::trace!(start, len, "slice view");
        Ok(Self { base, start, len })
    }

    /// Physical index of logical element `index`.
    #[inline]
    pub fn physical_index(&self, index: usize) -> usize {
        self.start + index
    }
}

impl<S> SliceView<S> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn base(&self) -> &S {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut S {
        &mut self.base
    }

    /// Give back the backing sequence.
    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence> Sequence for SliceView<S> {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        check_logical("slice", index, self.len);
        self.base.get(self.start + index)
    }
}

impl<S: SequenceMut> SequenceMut for SliceView<S> {
    #[inline]
    fn set(&mut self, index: usize, value: S::Elem) {
        check_logical("slice", index, self.len);
        self.base.set(self.start + index, value);
    }
}

// ============================================================================
// StridedView
// ============================================================================

/// Every `stride`-th element of the backing sequence, starting at `start`.
///
/// A negative stride walks backwards; `stride == -1` starting at the last
/// element is a reversed view.
#[derive(Debug, Clone, Copy)]
pub struct StridedView<S> {
    base: S,
    start: usize,
    stride: isize,
    len: usize,
}

impl<S: Sequence> StridedView<S> {
    /// Create a strided view.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `stride == 0` or any mapped index falls
    /// outside the backing sequence.
    pub fn new(base: S, start: usize, stride: isize, len: usize) -> Result<Self> {
        if stride == 0 {
            return Err(SeqError::zero_stride("stride"));
        }
        if len > 0 {
            let first = offset("strided", start, 0, stride)?;
            let last = offset("strided", start, len - 1, stride)?;
            validate_offsets("strided", base.len(), &[first, last])?;
        }
        tracing::trace!(start, stride, len, "strided view");
        Ok(Self {
            base,
            start,
            stride,
            len,
        })
    }

    /// View the whole backing sequence back to front.
    pub fn reversed(base: S) -> Self {
        let len = base.len();
        Self {
            base,
            start: len.saturating_sub(1),
            stride: -1,
            len,
        }
    }

    /// Physical index of logical element `index`.
    #[inline]
    pub fn physical_index(&self, index: usize) -> usize {
        (self.start as isize + index as isize * self.stride) as usize
    }

    /// Flip the traversal order without touching the data.
    pub fn reverse(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            start: self.physical_index(self.len - 1),
            stride: -self.stride,
            ..self
        }
    }
}

impl<S> StridedView<S> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn base(&self) -> &S {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut S {
        &mut self.base
    }

    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence> Sequence for StridedView<S> {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        check_logical("strided", index, self.len);
        self.base.get(self.physical_index(index))
    }
}

impl<S: SequenceMut> SequenceMut for StridedView<S> {
    #[inline]
    fn set(&mut self, index: usize, value: S::Elem) {
        check_logical("strided", index, self.len);
        let physical = self.physical_index(index);
        self.base.set(physical, value);
    }
}

// ============================================================================
// InterleavedView
// ============================================================================

/// Groups of `group_size` consecutive elements, consecutive groups `stride`
/// apart.
///
/// Picks one channel out of packed multi-channel data: the normals of a
/// position/normal vertex buffer are `InterleavedView::new(buf, 3, 3, 6, n * 3)`.
#[derive(Debug, Clone, Copy)]
pub struct InterleavedView<S> {
    base: S,
    start: usize,
    group_size: usize,
    stride: isize,
    len: usize,
}

impl<S: Sequence> InterleavedView<S> {
    /// Create an interleaved view.
    ///
    /// # Errors
    /// Returns `InvalidRange` for a zero group size or zero stride, or if any
    /// mapped index falls outside the backing sequence.
    pub fn new(
        base: S,
        start: usize,
        group_size: usize,
        stride: isize,
        len: usize,
    ) -> Result<Self> {
        if group_size == 0 {
            return Err(SeqError::InvalidRange {
                name: "group_size",
                detail: "group size must be at least 1".to_string(),
            });
        }
        if stride == 0 {
            return Err(SeqError::zero_stride("stride"));
        }
        if len > 0 {
            // first element, end of the first group, start of the last group,
            // end of the last full group, last element
            let mut extremes = vec![
                0,
                group_size.min(len) - 1,
                (len - 1) / group_size * group_size,
                len - 1,
            ];
            if len >= group_size {
                extremes.push(len / group_size * group_size - 1);
            }
            let mut candidates = Vec::with_capacity(extremes.len());
            for k in extremes {
                let group = offset("interleaved", start, k / group_size, stride)?;
                candidates.push(group + (k % group_size) as isize);
            }
            validate_offsets("interleaved", base.len(), &candidates)?;
        }
        tracing::trace!(start, group_size, stride, len, "interleaved view");
        Ok(Self {
            base,
            start,
            group_size,
            stride,
            len,
        })
    }

    /// Physical index of logical element `index`.
    #[inline]
    pub fn physical_index(&self, index: usize) -> usize {
        let group = (index / self.group_size) as isize;
        let within = index % self.group_size;
        (self.start as isize + group * self.stride) as usize + within
    }
}

impl<S> InterleavedView<S> {
    #[inline]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn base(&self) -> &S {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut S {
        &mut self.base
    }

    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence> Sequence for InterleavedView<S> {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        check_logical("interleaved", index, self.len);
        self.base.get(self.physical_index(index))
    }
}

impl<S: SequenceMut> SequenceMut for InterleavedView<S> {
    #[inline]
    fn set(&mut self, index: usize, value: S::Elem) {
        check_logical("interleaved", index, self.len);
        let physical = self.physical_index(index);
        self.base.set(physical, value);
    }
}

// ============================================================================
// FixedView
// ============================================================================

/// Contiguous window of exactly `K` elements, `K` in `1..=16`.
///
/// The length is a type parameter rather than a field, which suits viewing a
/// single vector or matrix out of a larger buffer.
#[derive(Debug, Clone, Copy)]
pub struct FixedView<S, const K: usize> {
    base: S,
    start: usize,
}

impl<S: Sequence, const K: usize> FixedView<S, K> {
    /// Create a fixed-length view.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `K` elements from `start` do not fit.
    pub fn new(base: S, start: usize) -> Result<Self> {
        const { assert!(K >= 1 && K <= MAX_ARITY, "arity must be in 1..=16") };
        validate_range("fixed", base.len(), start, K)?;
        tracing::trace!(start, arity = K, "fixed view");
        Ok(Self { base, start })
    }

    /// Read all `K` elements at once.
    #[inline]
    pub fn to_array(&self) -> [S::Elem; K] {
        std::array::from_fn(|k| self.base.get(self.start + k))
    }
}

impl<S: SequenceMut, const K: usize> FixedView<S, K> {
    /// Overwrite all `K` elements at once.
    #[inline]
    pub fn set_array(&mut self, values: [S::Elem; K]) {
        for (k, value) in values.into_iter().enumerate() {
            self.base.set(self.start + k, value);
        }
    }
}

impl<S, const K: usize> FixedView<S, K> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn base(&self) -> &S {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut S {
        &mut self.base
    }

    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence, const K: usize> Sequence for FixedView<S, K> {
    type Elem = S::Elem;

    #[inline]
    fn len(&self) -> usize {
        K
    }

    #[inline]
    fn get(&self, index: usize) -> S::Elem {
        check_logical("fixed", index, K);
        self.base.get(self.start + index)
    }
}

impl<S: SequenceMut, const K: usize> SequenceMut for FixedView<S, K> {
    #[inline]
    fn set(&mut self, index: usize, value: S::Elem) {
        check_logical("fixed", index, K);
        self.base.set(self.start + index, value);
    }
}

// ============================================================================
// Constructor shorthands
// ============================================================================

/// `len` elements of `base` starting at `start`.
pub fn slice<S: Sequence>(base: S, start: usize, len: usize) -> Result<SliceView<S>> {
    SliceView::new(base, start, len)
}

/// `len` elements of `base`, `stride` apart, starting at `start`.
pub fn strided<S: Sequence>(
    base: S,
    start: usize,
    stride: isize,
    len: usize,
) -> Result<StridedView<S>> {
    StridedView::new(base, start, stride, len)
}

/// All of `base`, last element first.
pub fn reverse<S: Sequence>(base: S) -> StridedView<S> {
    StridedView::reversed(base)
}

/// `len` elements taken `group_size` at a time, groups `stride` apart.
pub fn interleaved<S: Sequence>(
    base: S,
    start: usize,
    group_size: usize,
    stride: isize,
    len: usize,
) -> Result<InterleavedView<S>> {
    InterleavedView::new(base, start, group_size, stride, len)
}

/// Exactly `K` elements of `base` starting at `start`.
pub fn fixed<S: Sequence, const K: usize>(base: S, start: usize) -> Result<FixedView<S, K>> {
    FixedView::new(base, start)
}
