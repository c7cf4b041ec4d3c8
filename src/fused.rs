//! Fused element-wise operations.
//!
//! - `mul_add(a, b, c) = a + b * c`, with `c` a sequence or a [`Constant`]
//! - `lerp(a, b, t) = a * (1 - t) + b * t` for a scalar `t`
//!
//! The `lerp` form is exact at both ends: `t == 0` yields `a` and `t == 1`
//! yields `b` for finite inputs.

use crate::constant::Constant;
use crate::map::{zip_map2_constant_ex, zip_map2_constant_ex_into, zip_map3_ex, zip_map3_ex_into};
use crate::map::{zip_map_ex, zip_map_ex_into};
use flatseq_traits::{Element, Sequence, SequenceMut};

// ============================================================================
// mul_add
// ============================================================================

/// `a + b * c` element-wise over all of `a`.
pub fn mul_add<T, A, B, C>(a: &A, b: &B, c: &C) -> Vec<T>
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    C: Sequence<Elem = T> + ?Sized,
{
    mul_add_ex(a, 0, a.len(), b, 0, c, 0)
}

pub fn mul_add_into<T, A, B, C, D>(a: &A, b: &B, c: &C, dest: &mut D)
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    C: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    mul_add_ex_into(a, 0, a.len(), b, 0, c, 0, dest, 0)
}

#[allow(clippy::too_many_arguments)]
pub fn mul_add_ex<T, A, B, C>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &C,
    c_index: usize,
) -> Vec<T>
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    C: Sequence<Elem = T> + ?Sized,
{
    zip_map3_ex(a, a_index, count, b, b_index, c, c_index, |x, y, z| x + y * z)
}

#[allow(clippy::too_many_arguments)]
pub fn mul_add_ex_into<T, A, B, C, D>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: &C,
    c_index: usize,
    dest: &mut D,
    dest_index: usize,
) where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    C: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    zip_map3_ex_into(
        a,
        a_index,
        count,
        b,
        b_index,
        c,
        c_index,
        dest,
        dest_index,
        |x, y, z| x + y * z,
    )
}

/// `a + b * c` with `c` a scalar or cyclic pattern.
///
/// One explicit Euler step of positions `p` with velocities `v` is
/// `mul_add_constant(&p, &v, dt)`.
pub fn mul_add_constant<'c, T, A, B>(a: &A, b: &B, c: impl Into<Constant<'c, T>>) -> Vec<T>
where
    T: Element + 'c,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    mul_add_constant_ex(a, 0, a.len(), b, 0, c)
}

pub fn mul_add_constant_ex<'c, T, A, B>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: impl Into<Constant<'c, T>>,
) -> Vec<T>
where
    T: Element + 'c,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    zip_map2_constant_ex(a, a_index, count, b, b_index, &c.into(), |x, y, z| x + y * z)
}

#[allow(clippy::too_many_arguments)]
pub fn mul_add_constant_ex_into<'c, T, A, B, D>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    c: impl Into<Constant<'c, T>>,
    dest: &mut D,
    dest_index: usize,
) where
    T: Element + 'c,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    zip_map2_constant_ex_into(
        a,
        a_index,
        count,
        b,
        b_index,
        &c.into(),
        dest,
        dest_index,
        |x, y, z| x + y * z,
    )
}

// ============================================================================
// lerp
// ============================================================================

#[inline]
fn lerp_one<T: Element>(x: T, y: T, t: T, one_minus_t: T) -> T {
    x * one_minus_t + y * t
}

/// `a * (1 - t) + b * t` element-wise over all of `a`.
pub fn lerp<T, A, B>(a: &A, b: &B, t: T) -> Vec<T>
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    lerp_ex(a, 0, a.len(), b, 0, t)
}

pub fn lerp_into<T, A, B, D>(a: &A, b: &B, t: T, dest: &mut D)
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    lerp_ex_into(a, 0, a.len(), b, 0, t, dest, 0)
}

pub fn lerp_ex<T, A, B>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    t: T,
) -> Vec<T>
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    let one_minus_t = T::one() - t;
    zip_map_ex(a, a_index, count, b, b_index, |x, y| lerp_one(x, y, t, one_minus_t))
}

#[allow(clippy::too_many_arguments)]
pub fn lerp_ex_into<T, A, B, D>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    t: T,
    dest: &mut D,
    dest_index: usize,
) where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    let one_minus_t = T::one() - t;
    zip_map_ex_into(a, a_index, count, b, b_index, dest, dest_index, |x, y| {
        lerp_one(x, y, t, one_minus_t)
    })
}
