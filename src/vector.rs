//! Fixed-arity vector values.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::check;
use flatseq_traits::{Element, Result, SeqError, Sequence, SequenceMut};
use num_traits::{Float, Zero};

/// Element-wise `+ - * /` against `Self` or a scalar, unary `-`, and the
/// compound assigning forms, all routed through the bulk engine.
///
/// The type must be `Copy` and a `Sequence<Elem = T>` over all of its values.
macro_rules! elementwise_ops {
    ($ty:ident) => {
        elementwise_ops!(@binary $ty, Add, add, AddAssign, add_assign, add_into, add_constant_ex_into);
        elementwise_ops!(@binary $ty, Sub, sub, SubAssign, sub_assign, sub_into, sub_constant_ex_into);
        elementwise_ops!(@binary $ty, Mul, mul, MulAssign, mul_assign, mul_into, mul_constant_ex_into);
        elementwise_ops!(@binary $ty, Div, div, DivAssign, div_assign, div_into, div_constant_ex_into);

        impl<T, const N: usize> ::std::ops::Neg for $ty<T, N>
        where
            T: ::flatseq_traits::Element + ::std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                let mut out = self;
                $crate::ops::negate_into(&self, &mut out);
                out
            }
        }
    };
    (@binary $ty:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident,
     $into:ident, $constant_into:ident) => {
        impl<T: ::flatseq_traits::Element, const N: usize> ::std::ops::$op for $ty<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                $crate::ops::$into(&self, &rhs, &mut out);
                out
            }
        }

        impl<T: ::flatseq_traits::Element, const N: usize> ::std::ops::$op<T> for $ty<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                let mut out = self;
                let count = ::flatseq_traits::Sequence::len(&self);
                $crate::ops::$constant_into(&self, 0, count, rhs, &mut out, 0);
                out
            }
        }

        impl<T: ::flatseq_traits::Element, const N: usize> ::std::ops::$op_assign for $ty<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }

        impl<T: ::flatseq_traits::Element, const N: usize> ::std::ops::$op_assign<T> for $ty<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }
    };
}
pub(crate) use elementwise_ops;

/// An owned tuple of `N` numbers.
///
/// Arithmetic operators work element-wise, against another vector or a
/// scalar:
///
/// ```rust
/// use flatseq::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!((v * 2.0 + v).to_array(), [3.0, 6.0, 9.0]);
/// assert_eq!(v.zyx().to_array(), [3.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

impl<T: Copy, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Read `N` values of `src` starting at `index`.
    ///
    /// # Errors
    /// Returns `MissingArgument` when `src` holds fewer than `N` values from
    /// `index` on.
    pub fn from_slice<S>(src: &S, index: usize) -> Result<Self>
    where
        S: Sequence<Elem = T> + ?Sized,
    {
        if let Err(err) = check::range(src, index, N, "values") {
            tracing::debug!(%err, arity = N, "too few values for vector");
            return Err(SeqError::MissingArgument { name: "values" });
        }
        Ok(Self::from_array(src.get_n::<N>(index)))
    }

    pub fn fill(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn set_array(&mut self, values: [T; N]) {
        self.data = values;
    }

    /// Write all components to `dest` starting at `index`.
    pub fn copy_into<D>(&self, dest: &mut D, index: usize)
    where
        D: SequenceMut<Elem = T> + ?Sized,
    {
        check::debug_check!(check::range(dest, index, N, "dest"));
        dest.set_n(index, self.data);
    }

    /// Overwrite all components from `src` starting at `index`.
    pub fn copy_from<S>(&mut self, src: &S, index: usize)
    where
        S: Sequence<Elem = T> + ?Sized,
    {
        check::debug_check!(check::range(src, index, N, "src"));
        self.data = src.get_n(index);
    }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    pub fn zeros() -> Self {
        Self::from_array([T::zero(); N])
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    pub fn dot(&self, other: &Self) -> T {
        crate::reduce::dot(self, other)
    }
}

impl<T: Element + Float, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    pub fn length(&self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T: Copy> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Copy> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }
}

impl<T: Copy> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }
}

impl<T: Element> Vector<T, 3> {
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Copy, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Copy, const N: usize> Sequence for Vector<T, N> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Copy, const N: usize> SequenceMut for Vector<T, N> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }
}

elementwise_ops!(Vector);

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (k, value) in self.data.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            value.fmt(f)?;
        }
        f.write_str(")")
    }
}
