//! Reductions over index ranges.

use crate::check::{self, debug_check};
use flatseq_traits::{Element, Sequence};

/// Fold `count` elements of `a` starting at `a_index` with `op`, seeded by `init`.
pub fn reduce_ex<A, Acc, F>(a: &A, a_index: usize, count: usize, init: Acc, mut op: F) -> Acc
where
    A: Sequence + ?Sized,
    F: FnMut(Acc, A::Elem) -> Acc,
{
    debug_check!(check::range(a, a_index, count, "a"));
    let mut acc = init;
    for k in 0..count {
        acc = op(acc, a.get(a_index + k));
    }
    acc
}

pub fn sum<T, A>(a: &A) -> T
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
{
    sum_ex(a, 0, a.len())
}

pub fn sum_ex<T, A>(a: &A, a_index: usize, count: usize) -> T
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
{
    reduce_ex(a, a_index, count, T::zero(), |acc, x| acc + x)
}

/// Inner product over all of `a`; `b` must be at least as long.
pub fn dot<T, A, B>(a: &A, b: &B) -> T
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    dot_ex(a, 0, a.len(), b, 0)
}

pub fn dot_ex<T, A, B>(a: &A, a_index: usize, count: usize, b: &B, b_index: usize) -> T
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    debug_check!(
        check::range(a, a_index, count, "a"),
        check::range(b, b_index, count, "b"),
    );
    let mut acc = T::zero();
    for k in 0..count {
        acc = acc + a.get(a_index + k) * b.get(b_index + k);
    }
    acc
}

/// `true` when every element is `true`. Empty input yields `true`.
pub fn all<A>(a: &A) -> bool
where
    A: Sequence<Elem = bool> + ?Sized,
{
    (0..a.len()).all(|k| a.get(k))
}

/// `true` when some element is `true`. Empty input yields `false`.
pub fn any<A>(a: &A) -> bool
where
    A: Sequence<Elem = bool> + ?Sized,
{
    (0..a.len()).any(|k| a.get(k))
}
