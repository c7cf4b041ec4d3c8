//! Element-wise binary and unary operations.
//!
//! Each binary operation comes in seven call shapes running one kernel
//! (shown for `add`):
//!
//! | function | operands | result |
//! |---|---|---|
//! | `add(a, b)` | all of `a`, same offsets of `b` | new `Vec` |
//! | `add_into(a, b, dest)` | all of `a` | `dest[0..]` |
//! | `add_ex(a, ai, n, b, bi)` | explicit ranges | new `Vec` |
//! | `add_ex_into(a, ai, n, b, bi, dest, di)` | explicit ranges | `dest[di..]` |
//! | `add_constant(a, c)` | all of `a`, scalar or pattern `c` | new `Vec` |
//! | `add_constant_ex(a, ai, n, c)` | explicit range | new `Vec` |
//! | `add_constant_ex_into(a, ai, n, c, dest, di)` | explicit range | `dest[di..]` |
//!
//! Comparisons produce `bool` sequences. `b` must hold at least as many
//! elements as are read from `a`.

use crate::check::{self, debug_check};
use crate::constant::Constant;
use crate::map::{
    map_ex, map_ex_into, zip_map_constant_ex, zip_map_constant_ex_into, zip_map_ex,
    zip_map_ex_into,
};
use crate::DEFAULT_EPSILON;
use flatseq_traits::{Element, Sequence, SequenceMut};
use num_traits::{Float, Signed};
use std::ops::Neg;

/// [`DEFAULT_EPSILON`] converted to `T`, or `T::epsilon()` if `T` cannot hold it.
#[inline]
pub(crate) fn default_epsilon<T: Float>() -> T {
    T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon)
}

/// Floored modulo: the result takes the sign of the divisor.
#[inline]
fn floored_mod<T: Element + PartialOrd>(x: T, y: T) -> T {
    let r = x % y;
    let zero = T::zero();
    if r != zero && ((r < zero) != (y < zero)) {
        r + y
    } else {
        r
    }
}

#[inline]
fn within<T: Float>(x: T, y: T, epsilon: T) -> bool {
    (x - y).abs() < epsilon
}

#[inline]
fn within_or_both_nan<T: Float>(x: T, y: T, epsilon: T) -> bool {
    (x.is_nan() && y.is_nan()) || within(x, y, epsilon)
}

macro_rules! binary_op {
    (
        $(#[$doc:meta])*
        [$($bound:tt)+] -> $out:ty, |$x:ident, $y:ident| $body:expr;
        $name:ident, $into:ident, $ex:ident, $ex_into:ident,
        $constant:ident, $constant_ex:ident, $constant_ex_into:ident $(,)?
    ) => {
        $(#[$doc])*
        pub fn $name<T, A, B>(a: &A, b: &B) -> Vec<$out>
        where
            T: $($bound)+,
            A: Sequence<Elem = T> + ?Sized,
            B: Sequence<Elem = T> + ?Sized,
        {
            debug_check!(check::range(b, 0, a.len(), "b"));
            $ex(a, 0, a.len(), b, 0)
        }

        pub fn $into<T, A, B, D>(a: &A, b: &B, dest: &mut D)
        where
            T: $($bound)+,
            A: Sequence<Elem = T> + ?Sized,
            B: Sequence<Elem = T> + ?Sized,
            D: SequenceMut<Elem = $out> + ?Sized,
        {
            $ex_into(a, 0, a.len(), b, 0, dest, 0)
        }

        pub fn $ex<T, A, B>(a: &A, a_index: usize, count: usize, b: &B, b_index: usize) -> Vec<$out>
        where
            T: $($bound)+,
            A: Sequence<Elem = T> + ?Sized,
            B: Sequence<Elem = T> + ?Sized,
        {
            zip_map_ex(a, a_index, count, b, b_index, |$x: T, $y: T| -> $out { $body })
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $ex_into<T, A, B, D>(
            a: &A,
            a_index: usize,
            count: usize,
            b: &B,
            b_index: usize,
            dest: &mut D,
            dest_index: usize,
        ) where
            T: $($bound)+,
            A: Sequence<Elem = T> + ?Sized,
            B: Sequence<Elem = T> + ?Sized,
            D: SequenceMut<Elem = $out> + ?Sized,
        {
            zip_map_ex_into(a, a_index, count, b, b_index, dest, dest_index, |$x: T, $y: T| -> $out {
                $body
            })
        }

        pub fn $constant<'c, T, A>(a: &A, c: impl Into<Constant<'c, T>>) -> Vec<$out>
        where
            T: $($bound)+ + 'c,
            A: Sequence<Elem = T> + ?Sized,
        {
            $constant_ex(a, 0, a.len(), c)
        }

        pub fn $constant_ex<'c, T, A>(
            a: &A,
            a_index: usize,
            count: usize,
            c: impl Into<Constant<'c, T>>,
        ) -> Vec<$out>
        where
            T: $($bound)+ + 'c,
            A: Sequence<Elem = T> + ?Sized,
        {
            zip_map_constant_ex(a, a_index, count, &c.into(), |$x: T, $y: T| -> $out { $body })
        }

        pub fn $constant_ex_into<'c, T, A, D>(
            a: &A,
            a_index: usize,
            count: usize,
            c: impl Into<Constant<'c, T>>,
            dest: &mut D,
            dest_index: usize,
        ) where
            T: $($bound)+ + 'c,
            A: Sequence<Elem = T> + ?Sized,
            D: SequenceMut<Elem = $out> + ?Sized,
        {
            zip_map_constant_ex_into(
                a,
                a_index,
                count,
                &c.into(),
                dest,
                dest_index,
                |$x: T, $y: T| -> $out { $body },
            )
        }
    };
}

// ============================================================================
// Arithmetic
// ============================================================================

binary_op! {
    /// `a + b` element-wise.
    [Element] -> T, |x, y| x + y;
    add, add_into, add_ex, add_ex_into, add_constant, add_constant_ex, add_constant_ex_into
}

binary_op! {
    /// `a - b` element-wise.
    [Element] -> T, |x, y| x - y;
    sub, sub_into, sub_ex, sub_ex_into, sub_constant, sub_constant_ex, sub_constant_ex_into
}

binary_op! {
    /// `a * b` element-wise.
    [Element] -> T, |x, y| x * y;
    mul, mul_into, mul_ex, mul_ex_into, mul_constant, mul_constant_ex, mul_constant_ex_into
}

binary_op! {
    /// `a / b` element-wise. Integer division by zero panics.
    [Element] -> T, |x, y| x / y;
    div, div_into, div_ex, div_ex_into, div_constant, div_constant_ex, div_constant_ex_into
}

binary_op! {
    /// Floored `a mod b`: the result has the sign of `b`, so
    /// `modulo(&[-1], &[3]) == [2]`.
    [Element + PartialOrd] -> T, |x, y| floored_mod(x, y);
    modulo, modulo_into, modulo_ex, modulo_ex_into,
    modulo_constant, modulo_constant_ex, modulo_constant_ex_into
}

binary_op! {
    /// `a` raised to the power `b` element-wise.
    ///
    /// Float elements only: a fractional or negative exponent has no
    /// integer result. Integer powers are repeated [`mul`].
    [Float] -> T, |x, y| x.powf(y);
    pow, pow_into, pow_ex, pow_ex_into, pow_constant, pow_constant_ex, pow_constant_ex_into
}

binary_op! {
    /// Smaller of each pair; `a` wins ties and unordered (NaN) pairs.
    [Copy + PartialOrd] -> T, |x, y| if y < x { y } else { x };
    min, min_into, min_ex, min_ex_into, min_constant, min_constant_ex, min_constant_ex_into
}

binary_op! {
    /// Larger of each pair; `a` wins ties and unordered (NaN) pairs.
    [Copy + PartialOrd] -> T, |x, y| if y > x { y } else { x };
    max, max_into, max_ex, max_ex_into, max_constant, max_constant_ex, max_constant_ex_into
}

// ============================================================================
// Comparisons
// ============================================================================

binary_op! {
    /// Exact `a == b`.
    [Copy + PartialEq] -> bool, |x, y| x == y;
    equal, equal_into, equal_ex, equal_ex_into,
    equal_constant, equal_constant_ex, equal_constant_ex_into
}

binary_op! {
    [Copy + PartialEq] -> bool, |x, y| x != y;
    not_equal, not_equal_into, not_equal_ex, not_equal_ex_into,
    not_equal_constant, not_equal_constant_ex, not_equal_constant_ex_into
}

binary_op! {
    [Copy + PartialOrd] -> bool, |x, y| x < y;
    less_than, less_than_into, less_than_ex, less_than_ex_into,
    less_than_constant, less_than_constant_ex, less_than_constant_ex_into
}

binary_op! {
    [Copy + PartialOrd] -> bool, |x, y| x <= y;
    less_than_or_equal, less_than_or_equal_into, less_than_or_equal_ex,
    less_than_or_equal_ex_into, less_than_or_equal_constant, less_than_or_equal_constant_ex,
    less_than_or_equal_constant_ex_into
}

binary_op! {
    [Copy + PartialOrd] -> bool, |x, y| x > y;
    greater_than, greater_than_into, greater_than_ex, greater_than_ex_into,
    greater_than_constant, greater_than_constant_ex, greater_than_constant_ex_into
}

binary_op! {
    [Copy + PartialOrd] -> bool, |x, y| x >= y;
    greater_than_or_equal, greater_than_or_equal_into, greater_than_or_equal_ex,
    greater_than_or_equal_ex_into, greater_than_or_equal_constant,
    greater_than_or_equal_constant_ex, greater_than_or_equal_constant_ex_into
}

binary_op! {
    /// `|a - b| < 1e-9`. NaN is never almost equal to anything.
    [Float] -> bool, |x, y| within(x, y, default_epsilon());
    almost_equal, almost_equal_into, almost_equal_ex, almost_equal_ex_into,
    almost_equal_constant, almost_equal_constant_ex, almost_equal_constant_ex_into
}

binary_op! {
    /// As [`almost_equal`], but two NaNs compare equal (missing-value
    /// semantics rather than IEEE semantics).
    [Float] -> bool, |x, y| within_or_both_nan(x, y, default_epsilon());
    almost_equal_with_nan, almost_equal_with_nan_into, almost_equal_with_nan_ex,
    almost_equal_with_nan_ex_into, almost_equal_with_nan_constant,
    almost_equal_with_nan_constant_ex, almost_equal_with_nan_constant_ex_into
}

// ============================================================================
// Explicit tolerance
// ============================================================================

/// [`almost_equal`] with a caller-chosen `epsilon`.
pub fn almost_equal_within<T, A, B>(a: &A, b: &B, epsilon: T) -> Vec<bool>
where
    T: Float,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    zip_map_ex(a, 0, a.len(), b, 0, |x, y| within(x, y, epsilon))
}

#[allow(clippy::too_many_arguments)]
pub fn almost_equal_within_ex_into<T, A, B, D>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    epsilon: T,
    dest: &mut D,
    dest_index: usize,
) where
    T: Float,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = bool> + ?Sized,
{
    zip_map_ex_into(a, a_index, count, b, b_index, dest, dest_index, |x, y| {
        within(x, y, epsilon)
    })
}

/// [`almost_equal_with_nan`] with a caller-chosen `epsilon`.
pub fn almost_equal_with_nan_within<T, A, B>(a: &A, b: &B, epsilon: T) -> Vec<bool>
where
    T: Float,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    zip_map_ex(a, 0, a.len(), b, 0, |x, y| within_or_both_nan(x, y, epsilon))
}

#[allow(clippy::too_many_arguments)]
pub fn almost_equal_with_nan_within_ex_into<T, A, B, D>(
    a: &A,
    a_index: usize,
    count: usize,
    b: &B,
    b_index: usize,
    epsilon: T,
    dest: &mut D,
    dest_index: usize,
) where
    T: Float,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = bool> + ?Sized,
{
    zip_map_ex_into(a, a_index, count, b, b_index, dest, dest_index, |x, y| {
        within_or_both_nan(x, y, epsilon)
    })
}

// ============================================================================
// Unary
// ============================================================================

/// `-a` element-wise.
pub fn negate<T, A>(a: &A) -> Vec<T>
where
    T: Copy + Neg<Output = T>,
    A: Sequence<Elem = T> + ?Sized,
{
    map_ex(a, 0, a.len(), |x| -x)
}

pub fn negate_into<T, A, D>(a: &A, dest: &mut D)
where
    T: Copy + Neg<Output = T>,
    A: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    map_ex_into(a, 0, a.len(), dest, 0, |x| -x)
}

pub fn negate_ex<T, A>(a: &A, a_index: usize, count: usize) -> Vec<T>
where
    T: Copy + Neg<Output = T>,
    A: Sequence<Elem = T> + ?Sized,
{
    map_ex(a, a_index, count, |x| -x)
}

pub fn negate_ex_into<T, A, D>(a: &A, a_index: usize, count: usize, dest: &mut D, dest_index: usize)
where
    T: Copy + Neg<Output = T>,
    A: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    map_ex_into(a, a_index, count, dest, dest_index, |x| -x)
}

/// `|a|` element-wise.
pub fn abs<T, A>(a: &A) -> Vec<T>
where
    T: Copy + Signed,
    A: Sequence<Elem = T> + ?Sized,
{
    map_ex(a, 0, a.len(), |x| x.abs())
}

pub fn abs_ex_into<T, A, D>(a: &A, a_index: usize, count: usize, dest: &mut D, dest_index: usize)
where
    T: Copy + Signed,
    A: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    map_ex_into(a, a_index, count, dest, dest_index, |x| x.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use flatseq_traits::Shared;

    #[test]
    fn test_arithmetic() {
        let a = vec![6.0, 8.0, 10.0];
        let b = vec![2.0, 4.0, 5.0];
        assert_eq!(add(&a, &b), vec![8.0, 12.0, 15.0]);
        assert_eq!(sub(&a, &b), vec![4.0, 4.0, 5.0]);
        assert_eq!(mul(&a, &b), vec![12.0, 32.0, 50.0]);
        assert_eq!(div(&a, &b), vec![3.0, 2.0, 2.0]);
    }

    #[test]
    fn test_full_length_follows_a() {
        // b may be longer than a; only a.len() elements are used
        let a = [1, 2];
        let b = [10, 20, 30];
        assert_eq!(add(&a, &b), vec![11, 22]);
    }

    #[test]
    fn test_modulo_is_floored() {
        let a = [7, -7, 7, -7, 6];
        let b = [3, 3, -3, -3, 3];
        assert_eq!(modulo(&a, &b), vec![1, 2, -2, -1, 0]);

        let r = modulo_constant(&[-0.5f64, 5.5], 2.0);
        assert_relative_eq!(r[0], 1.5);
        assert_relative_eq!(r[1], 1.5);
    }

    #[test]
    fn test_pow() {
        let r = pow(&[2.0f64, 9.0, 4.0], &[3.0, 0.5, -1.0]);
        assert_relative_eq!(r[0], 8.0);
        assert_relative_eq!(r[1], 3.0);
        assert_relative_eq!(r[2], 0.25);
        let r = pow_constant(&[3.0f32, 4.0], 2.0);
        assert_relative_eq!(r[0], 9.0);
        assert_relative_eq!(r[1], 16.0);
    }

    #[test]
    fn test_min_max() {
        let a = [1, 5, 3];
        let b = [4, 2, 3];
        assert_eq!(min(&a, &b), vec![1, 2, 3]);
        assert_eq!(max(&a, &b), vec![4, 5, 3]);
        assert_eq!(max_constant(&a, 2), vec![2, 5, 3]);
        assert_eq!(min_constant(&a, &[0, 9]), vec![0, 5, 0]);
    }

    #[test]
    fn test_comparisons() {
        let a = [1, 2, 3];
        let b = [2, 2, 2];
        assert_eq!(equal(&a, &b), vec![false, true, false]);
        assert_eq!(not_equal(&a, &b), vec![true, false, true]);
        assert_eq!(less_than(&a, &b), vec![true, false, false]);
        assert_eq!(less_than_or_equal(&a, &b), vec![true, true, false]);
        assert_eq!(greater_than(&a, &b), vec![false, false, true]);
        assert_eq!(greater_than_or_equal(&a, &b), vec![false, true, true]);
        assert_eq!(equal_constant(&a, 3), vec![false, false, true]);
    }

    #[test]
    fn test_almost_equal_policies() {
        assert_eq!(almost_equal(&[1.0], &[1.0 + 1e-10]), vec![true]);
        assert_eq!(almost_equal(&[1.0], &[1.0 + 1e-8]), vec![false]);
        assert_eq!(almost_equal(&[f64::NAN], &[f64::NAN]), vec![false]);
        assert_eq!(almost_equal_with_nan(&[f64::NAN], &[f64::NAN]), vec![true]);
        assert_eq!(almost_equal_with_nan(&[f64::NAN], &[1.0]), vec![false]);
        assert_eq!(equal(&[f64::NAN], &[f64::NAN]), vec![false]);
    }

    #[test]
    fn test_almost_equal_within() {
        let a = [1.0, 2.0];
        let b = [1.05, 2.5];
        assert_eq!(almost_equal_within(&a, &b, 0.1), vec![true, false]);
        assert_eq!(
            almost_equal_with_nan_within(&[f32::NAN, 1.0], &[f32::NAN, 1.5], 1.0),
            vec![true, true]
        );
        let mut dest = [false; 3];
        almost_equal_within_ex_into(&a, 0, 2, &b, 0, 1.0, &mut dest, 1);
        assert_eq!(dest, [false, true, true]);
    }

    #[test]
    fn test_constant_broadcast_cycles() {
        assert_eq!(
            add_constant(&[1, 2, 3, 4], &[10, 20]),
            vec![11, 22, 13, 24]
        );
        assert_eq!(mul_constant(&[1.0, 2.0, 3.0], 2.0), vec![2.0, 4.0, 6.0]);
        let pattern = vec![1, 0, 0];
        assert_eq!(sub_constant(&[5, 5, 5, 5], &pattern), vec![4, 5, 5, 4]);
    }

    #[test]
    fn test_ex_forms() {
        let a = [1, 2, 3, 4, 5];
        let b = [10, 20, 30, 40, 50];
        assert_eq!(add_ex(&a, 1, 3, &b, 0), vec![12, 23, 34]);
        let mut dest = vec![0; 6];
        add_ex_into(&a, 3, 2, &b, 3, &mut dest, 4);
        assert_eq!(dest, vec![0, 0, 0, 0, 44, 55]);
        assert_eq!(add_constant_ex(&a, 2, 3, &[100, 200]), vec![103, 204, 105]);
        add_constant_ex_into(&a, 0, 2, 1, &mut dest, 0);
        assert_eq!(&dest[..2], &[2, 3]);
    }

    #[test]
    fn test_add_into_fully_aliased() {
        let mut a = vec![1.0, 2.0, 3.0, 4.0];
        let s = Shared::new(&mut a);
        let mut dest = s;
        add_into(&s, &s, &mut dest);
        assert_eq!(a, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_in_place_against_other_source() {
        let mut a = vec![1, 2, 3];
        let b = vec![1, 1, 1];
        let s = Shared::new(&mut a);
        mul_ex_into(&s, 0, 3, &b, 0, &mut s.clone(), 0);
        sub_into(&s, &b, &mut s.clone());
        assert_eq!(a, vec![0, 1, 2]);
    }

    #[test]
    fn test_comparison_into_bool_destination() {
        let a = [1.0, 5.0];
        let mut mask = vec![false; 2];
        greater_than_constant_ex_into(&a, 0, 2, 2.0, &mut mask, 0);
        assert_eq!(mask, vec![false, true]);
    }

    #[test]
    fn test_unary() {
        let a = vec![1, -2, 3];
        assert_eq!(negate(&a), vec![-1, 2, -3]);
        assert_eq!(negate_ex(&a, 1, 2), vec![2, -3]);
        assert_eq!(abs(&a), vec![1, 2, 3]);

        let mut data = vec![1.0, -2.0];
        let s = Shared::new(&mut data);
        negate_into(&s, &mut s.clone());
        abs_ex_into(&s, 1, 1, &mut s.clone(), 1);
        assert_eq!(data, vec![-1.0, 2.0]);

        let mut dest = [0; 4];
        negate_ex_into(&a, 0, 3, &mut dest, 1);
        assert_eq!(dest, [0, -1, 2, -3]);
    }

    #[test]
    fn test_views_as_operands() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let evens = flatseq_view::strided(&data, 1, 2, 3).unwrap();
        let odds = flatseq_view::strided(&data, 0, 2, 3).unwrap();
        assert_eq!(sub(&evens, &odds), vec![1, 1, 1]);

        let mut out = vec![0; 6];
        {
            let mut back = flatseq_view::reverse(&mut out);
            add_into(&evens, &odds, &mut back);
        }
        assert_eq!(out, vec![0, 0, 0, 11, 7, 3]);
    }

    #[test]
    fn test_complex_elements() {
        use num_complex::Complex64;
        let a = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 2.0)];
        let b = [Complex64::new(1.0, -1.0), Complex64::new(0.0, 1.0)];
        let p = mul(&a, &b);
        assert_eq!(p[0], Complex64::new(2.0, 0.0));
        assert_eq!(p[1], Complex64::new(-2.0, 0.0));
    }

    #[cfg(feature = "debug-checks")]
    #[test]
    #[should_panic(expected = "invalid range for `a`: index 0 with count 3 exceeds length 2")]
    fn test_debug_checks_name_short_source() {
        add_ex(&[1, 2], 0, 3, &[1, 2, 3], 0);
    }

    #[cfg(feature = "debug-checks")]
    #[test]
    #[should_panic(expected = "invalid range for `dest`")]
    fn test_debug_checks_name_short_dest() {
        let mut dest = [0; 2];
        add_ex_into(&[1, 2, 3], 0, 3, &[1, 2, 3], 0, &mut dest, 0);
    }

    #[cfg(feature = "debug-checks")]
    #[test]
    #[should_panic(expected = "missing argument `c`")]
    fn test_debug_checks_reject_empty_pattern() {
        let empty: [i32; 0] = [];
        add_constant_ex(&[1, 2], 0, 0, &empty);
    }

    #[cfg(not(feature = "debug-checks"))]
    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_unchecked_short_source_panics_in_storage() {
        add_ex(&[1, 2], 0, 3, &[1, 2, 3], 0);
    }
}
