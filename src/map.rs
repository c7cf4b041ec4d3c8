//! Element-wise kernels shared by every bulk operation.
//!
//! Each kernel walks `k` in `0..count` ascending, reads every input at its
//! offset `k`, and only then writes `dest[dest_index + k]`. When a destination
//! aliases a source at the same offset (`dest_index == a_index` on the same
//! storage) every output is therefore computed from unmodified inputs. A
//! destination that overlaps a source at a *different* offset sees earlier
//! writes, exactly as a forward loop would.
//!
//! The `_ex` forms allocate a `Vec` holding `count` results; the `_ex_into`
//! forms write a caller-supplied destination.

use crate::check::{self, debug_check};
use crate::constant::Constant;
use flatseq_traits::{Sequence, SequenceMut};

/// Apply `f` to `count` elements of `a` starting at `a_index`.
pub fn map_ex<A, O, F>(a: &A, a_index: usize, count: usize, mut f: F) -> Vec<O>
where
    A: Sequence + ?Sized,
    F: FnMut(A::Elem) -> O,
{
    debug_check!(check::range(a, a_index, count, "a"));
    tracing::trace!(count, "allocating map result");
    (0..count).map(|k| f(a.get(a_index + k))).collect()
}

pub fn map_ex_into<A, D, F>(
    a: &A,
    a_index: usize,
    count: usize,
    dest: &mut D,
    dest_index: usize,
    mut f: F,
) where
    A: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(A::Elem) -> D::Elem,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(dest, dest_index, count, "dest"),
    );
    for k in 0..count {
        let out = f(a.get(a_index + k));
        dest.set(dest_index + k, out);
    }
}

/// Combine `count` elements of `a` and `b` pairwise.
pub fn zip_map_ex<A, B, O, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    mut f: F,
) -> Vec<O>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> O,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
    );
    tracing::trace!(count, "allocating zip_map result");
    (0..count)
        .map(|k| f(a.get(a_index + k), b.get(b_index + k)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn zip_map_ex_into<A, B, D, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    dest: &mut D,
    dest_index: usize,
    mut f: F,
) where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> D::Elem,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
        check::range(dest, dest_index, count, "dest"),
    );
    for k in 0..count {
        let out = f(a.get(a_index + k), b.get(b_index + k));
        dest.set(dest_index + k, out);
    }
}

/// Combine `count` elements of `a` with a scalar or cyclic pattern.
pub fn zip_map_constant_ex<A, C, O, F>(
    a: &A,
    a_index: usize,
    count: usize,
    c: &Constant<'_, C>,
    mut f: F,
) -> Vec<O>
where
    A: Sequence + ?Sized,
    C: Copy,
    F: FnMut(A::Elem, C) -> O,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::pattern(c, "c"),
    );
    tracing::trace!(count, period = c.period(), "allocating constant map result");
    (0..count).map(|k| f(a.get(a_index + k), c.at(k))).collect()
}

pub fn zip_map_constant_ex_into<A, C, D, F>(
    a: &A,
    a_index: usize,
    count: usize,
    c: &Constant<'_, C>,
    dest: &mut D,
    dest_index: usize,
    mut f: F,
) where
    A: Sequence + ?Sized,
    C: Copy,
    D: SequenceMut + ?Sized,
    F: FnMut(A::Elem, C) -> D::Elem,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::pattern(c, "c"),
        check::range(dest, dest_index, count, "dest"),
    );
    match *c {
        Constant::Scalar(value) => {
            for k in 0..count {
                let out = f(a.get(a_index + k), value);
                dest.set(dest_index + k, out);
            }
        }
        Constant::Pattern(values) => {
            // the pattern restarts at the first processed element, not at a_index
            let period = values.len();
            for k in 0..count {
                let out = f(a.get(a_index + k), values[k % period]);
                dest.set(dest_index + k, out);
            }
        }
    }
}

/// Combine `count` elements of three sequences.
#[allow(clippy::too_many_arguments)]
pub fn zip_map3_ex<A, B, C, O, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &C,
    c_index: usize,
    mut f: F,
) -> Vec<O>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> O,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
        check::range(c, c_index, count, "c"),
    );
    tracing::trace!(count, "allocating zip_map3 result");
    (0..count)
        .map(|k| f(a.get(a_index + k), b.get(b_index + k), c.get(c_index + k)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn zip_map3_ex_into<A, B, C, D, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &C,
    c_index: usize,
    dest: &mut D,
    dest_index: usize,
    mut f: F,
) where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    C: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> D::Elem,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
        check::range(c, c_index, count, "c"),
        check::range(dest, dest_index, count, "dest"),
    );
    for k in 0..count {
        let out = f(a.get(a_index + k), b.get(b_index + k), c.get(c_index + k));
        dest.set(dest_index + k, out);
    }
}

/// Combine `count` elements of `a` and `b` with a scalar or cyclic pattern.
#[allow(clippy::too_many_arguments)]
pub fn zip_map2_constant_ex_into<A, B, C, D, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &Constant<'_, C>,
    dest: &mut D,
    dest_index: usize,
    mut f: F,
) where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    C: Copy,
    D: SequenceMut + ?Sized,
    F: FnMut(A::Elem, B::Elem, C) -> D::Elem,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
        check::pattern(c, "c"),
        check::range(dest, dest_index, count, "dest"),
    );
    for k in 0..count {
        let out = f(a.get(a_index + k), b.get(b_index + k), c.at(k));
        dest.set(dest_index + k, out);
    }
}

pub fn zip_map2_constant_ex<A, B, C, O, F>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &Constant<'_, C>,
    mut f: F,
) -> Vec<O>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    C: Copy,
    F: FnMut(A::Elem, B::Elem, C) -> O,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
        check::pattern(c, "c"),
    );
    tracing::trace!(count, "allocating zip_map2 constant result");
    (0..count)
        .map(|k| f(a.get(a_index + k), b.get(b_index + k), c.at(k)))
        .collect()
}
