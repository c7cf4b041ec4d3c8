//! Constant operands for the `_constant` operation family.
//!
//! The second operand of `add_constant`, `mul_add_constant` and friends is
//! either a single scalar broadcast to every element, or a short pattern
//! repeated cyclically: element `k` of the array pairs with
//! `pattern[k % pattern.len()]`. Adding `(dx, dy)` to a flat list of 2D
//! points is `add_constant(&points, &[dx, dy])`.
//!
//! The choice is made once when the [`Constant`] is built, not per element.

/// A scalar or a cyclically repeated pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant<'a, T> {
    /// One value for every element.
    Scalar(T),
    /// Values repeated with period `len`. Must not be empty.
    Pattern(&'a [T]),
}

impl<T: Copy> Constant<'_, T> {
    /// Value paired with element `k`.
    ///
    /// # Panics
    /// Panics on an empty pattern.
    #[inline]
    pub fn at(&self, k: usize) -> T {
        match *self {
            Constant::Scalar(value) => value,
            Constant::Pattern(values) => values[k % values.len()],
        }
    }

    /// Number of elements before the constant repeats.
    pub fn period(&self) -> usize {
        match self {
            Constant::Scalar(_) => 1,
            Constant::Pattern(values) => values.len(),
        }
    }
}

impl<T> From<T> for Constant<'_, T> {
    fn from(value: T) -> Self {
        Constant::Scalar(value)
    }
}

impl<'a, T> From<&'a [T]> for Constant<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Constant::Pattern(values)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Constant<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Constant::Pattern(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Constant<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Constant::Pattern(values)
    }
}
