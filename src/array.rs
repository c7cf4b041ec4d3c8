//! Array primitives: allocation, copy, reverse, growth and concatenation.
//!
//! Arrays are plain `Vec<T>`. Every function that reads a range takes any
//! [`Sequence`], so views and [`Shared`](flatseq_traits::Shared) handles work
//! as sources and destinations alike.

use crate::check::{self, debug_check};
use crate::map::{map_ex, map_ex_into};
use flatseq_traits::{Result, SeqError, Sequence, SequenceMut};
use num_traits::Zero;

/// Number of elements in `seq`.
#[inline]
pub fn length<S: Sequence + ?Sized>(seq: &S) -> usize {
    seq.len()
}

pub fn zeros<T: Zero + Clone>(len: usize) -> Vec<T> {
    tracing::trace!(len, "allocating zeros");
    vec![T::zero(); len]
}

pub fn fill<T: Clone>(len: usize, value: T) -> Vec<T> {
    tracing::trace!(len, "allocating filled array");
    vec![value; len]
}

// ============================================================================
// Copy
// ============================================================================

pub fn copy<S: Sequence + ?Sized>(src: &S) -> Vec<S::Elem> {
    copy_ex(src, 0, src.len())
}

pub fn copy_ex<S: Sequence + ?Sized>(src: &S, src_index: usize, count: usize) -> Vec<S::Elem> {
    map_ex(src, src_index, count, |x| x)
}

/// Copy all of `src` to the front of `dest`.
pub fn copy_into<S, D>(src: &S, dest: &mut D)
where
    S: Sequence + ?Sized,
    D: SequenceMut<Elem = S::Elem> + ?Sized,
{
    copy_ex_into(src, 0, src.len(), dest, 0)
}

/// Copy `count` elements, ascending. Overlapping storage at a higher
/// destination offset sees its own earlier writes.
pub fn copy_ex_into<S, D>(src: &S, src_index: usize, count: usize, dest: &mut D, dest_index: usize)
where
    S: Sequence + ?Sized,
    D: SequenceMut<Elem = S::Elem> + ?Sized,
{
    map_ex_into(src, src_index, count, dest, dest_index, |x| x)
}

// ============================================================================
// Reverse
// ============================================================================

pub fn reverse<S: Sequence + ?Sized>(src: &S) -> Vec<S::Elem> {
    reverse_ex(src, 0, src.len())
}

pub fn reverse_ex<S: Sequence + ?Sized>(src: &S, src_index: usize, count: usize) -> Vec<S::Elem> {
    debug_check!(check::range(src, src_index, count, "src"));
    tracing::trace!(count, "allocating reversed copy");
    (0..count).rev().map(|k| src.get(src_index + k)).collect()
}

/// Write the reversal of `src[src_index..src_index + count]` to `dest`.
///
/// The range is read in full before the first write, so `dest` may be the
/// same storage as `src`, at any offset.
pub fn reverse_ex_into<S, D>(
    src: &S,
    src_index: usize,
    count: usize,
    dest: &mut D,
    dest_index: usize,
) where
    S: Sequence + ?Sized,
    D: SequenceMut<Elem = S::Elem> + ?Sized,
{
    debug_check!(check::range(dest, dest_index, count, "dest"));
    let buffer = reverse_ex(src, src_index, count);
    for (k, value) in buffer.into_iter().enumerate() {
        dest.set(dest_index + k, value);
    }
}

/// Reverse `seq[index..index + count]` in place by swapping pairs.
pub fn reverse_in_place<S: SequenceMut + ?Sized>(seq: &mut S, index: usize, count: usize) {
    debug_check!(check::range(seq, index, count, "seq"));
    let (mut lo, mut hi) = (index, index + count);
    while lo + 1 < hi {
        hi -= 1;
        let (low, high) = (seq.get(lo), seq.get(hi));
        seq.set(lo, high);
        seq.set(hi, low);
        lo += 1;
    }
}

// ============================================================================
// Growth and concatenation
// ============================================================================

/// Pad `array` with zeros up to `len`. Never shrinks.
pub fn grow<T: Zero + Clone>(array: &mut Vec<T>, len: usize) {
    if array.len() < len {
        tracing::trace!(from = array.len(), to = len, "growing array");
        array.resize(len, T::zero());
    }
}

/// Append all of `src` to `dest`.
pub fn append<S: Sequence + ?Sized>(dest: &mut Vec<S::Elem>, src: &S) {
    append_ex(dest, src, 0, src.len())
}

pub fn append_ex<S: Sequence + ?Sized>(
    dest: &mut Vec<S::Elem>,
    src: &S,
    src_index: usize,
    count: usize,
) {
    debug_check!(check::range(src, src_index, count, "src"));
    dest.reserve(count);
    dest.extend((0..count).map(|k| src.get(src_index + k)));
}

/// Copy `count` elements of `src` into `dest` at `dest_index`, growing
/// `dest` when the write runs past its end.
///
/// `dest_index` may be at most `dest.len()`: the write must start inside or
/// directly after the existing elements so no holes appear.
pub fn write_grow<S: Sequence + ?Sized>(
    dest: &mut Vec<S::Elem>,
    dest_index: usize,
    src: &S,
    src_index: usize,
    count: usize,
) -> Result<()> {
    check::range(src, src_index, count, "src")?;
    if dest_index > dest.len() {
        return Err(SeqError::InvalidRange {
            name: "dest_index",
            detail: format!("index {dest_index} past end of array of length {}", dest.len()),
        });
    }
    let overlap = count.min(dest.len() - dest_index);
    for k in 0..overlap {
        dest[dest_index + k] = src.get(src_index + k);
    }
    append_ex(dest, src, src_index + overlap, count - overlap);
    Ok(())
}

/// Concatenate `parts` into a fresh array sized to their total length.
pub fn join<S: Sequence>(parts: &[S]) -> Vec<S::Elem> {
    let total: usize = parts.iter().map(Sequence::len).sum();
    tracing::trace!(parts = parts.len(), total, "joining arrays");
    let mut out = Vec::with_capacity(total);
    for part in parts {
        append(&mut out, part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{reverse as reverse_view, strided};
    use flatseq_traits::Shared;

    #[test]
    fn test_zeros_fill_length() {
        let z: Vec<f32> = zeros(3);
        assert_eq!(z, vec![0.0; 3]);
        assert_eq!(fill(2, 7u8), vec![7, 7]);
        assert_eq!(length(&z), 3);
        assert_eq!(length(&[0i32; 0]), 0);
    }

    #[test]
    fn test_copy_forms() {
        let a = [1, 2, 3, 4, 5];
        assert_eq!(copy(&a), a.to_vec());
        assert_eq!(copy_ex(&a, 1, 3), vec![2, 3, 4]);

        let mut dest = [0; 6];
        copy_into(&a, &mut dest);
        assert_eq!(dest, [1, 2, 3, 4, 5, 0]);
        copy_ex_into(&a, 3, 2, &mut dest, 0);
        assert_eq!(dest, [4, 5, 3, 4, 5, 0]);
    }

    #[test]
    fn test_copy_from_view() {
        let a = [1, 2, 3, 4, 5, 6];
        let back = reverse_view(&a);
        assert_eq!(copy(&back), vec![6, 5, 4, 3, 2, 1]);
        let odd = strided(&a, 0, 2, 3).unwrap();
        let mut dest = vec![0; 3];
        copy_into(&odd, &mut dest);
        assert_eq!(dest, vec![1, 3, 5]);
    }

    #[test]
    fn test_reverse_forms() {
        let a = [1, 2, 3, 4, 5];
        assert_eq!(reverse(&a), vec![5, 4, 3, 2, 1]);
        assert_eq!(reverse_ex(&a, 1, 3), vec![4, 3, 2]);

        let mut dest = [0; 3];
        reverse_ex_into(&a, 0, 3, &mut dest, 0);
        assert_eq!(dest, [3, 2, 1]);
    }

    #[test]
    fn test_reverse_ex_into_aliased() {
        let mut data = vec![1, 2, 3, 4, 5];
        let s = Shared::new(&mut data);
        reverse_ex_into(&s, 0, 4, &mut s.clone(), 1);
        assert_eq!(data, vec![1, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_in_place() {
        let mut odd = vec![1, 2, 3, 4, 5];
        reverse_in_place(&mut odd, 0, 5);
        assert_eq!(odd, vec![5, 4, 3, 2, 1]);

        let mut even = vec![1, 2, 3, 4, 5, 6];
        reverse_in_place(&mut even, 1, 4);
        assert_eq!(even, vec![1, 5, 4, 3, 2, 6]);

        reverse_in_place(&mut even, 3, 0);
        assert_eq!(even, vec![1, 5, 4, 3, 2, 6]);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut a = vec![1, 2];
        grow(&mut a, 4);
        assert_eq!(a, vec![1, 2, 0, 0]);
        grow(&mut a, 1);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_append_and_join() {
        let mut a = vec![1, 2];
        append(&mut a, &[3, 4]);
        append_ex(&mut a, &[9, 5, 6, 9], 1, 2);
        assert_eq!(a, vec![1, 2, 3, 4, 5, 6]);

        let parts: [&[i32]; 3] = [&[1], &[], &[2, 3]];
        assert_eq!(join(&parts), vec![1, 2, 3]);
        assert_eq!(join(&[vec![1.0], vec![2.0]]), vec![1.0, 2.0]);
    }

    #[test]
    fn test_write_grow() {
        let mut a = vec![1, 2, 3];
        write_grow(&mut a, 2, &[7, 8, 9], 0, 3).unwrap();
        assert_eq!(a, vec![1, 2, 7, 8, 9]);

        write_grow(&mut a, 5, &[4], 0, 1).unwrap();
        assert_eq!(a, vec![1, 2, 7, 8, 9, 4]);

        write_grow(&mut a, 0, &[0, 0], 0, 2).unwrap();
        assert_eq!(a, vec![0, 0, 7, 8, 9, 4]);
    }

    #[test]
    fn test_write_grow_rejects_holes() {
        let mut a = vec![1, 2, 3];
        let err = write_grow(&mut a, 4, &[1], 0, 1).unwrap_err();
        assert!(matches!(err, SeqError::InvalidRange { name: "dest_index", .. }));
        assert!(write_grow(&mut a, 0, &[1], 0, 2).is_err());
        assert_eq!(a, vec![1, 2, 3]);
    }
}
