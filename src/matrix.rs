//! Square matrices stored column-major.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::array::copy_ex_into;
use crate::check;
use crate::linalg::{matmul_into, matmul_vector_into, transpose_into};
use crate::vector::{elementwise_ops, Vector};
use flatseq_traits::{Element, Result, SeqError, Sequence, SequenceMut};
use num_traits::{One, Zero};

/// An `N x N` matrix.
///
/// As a [`Sequence`] the matrix is its `N * N` values column after column:
/// flat element `i * N + j` is column `i`, row `j`. Indexing by a
/// `(column, row)` pair addresses the same element.
///
/// The arithmetic operators are element-wise. Use [`Matrix::matmul`] and
/// [`Matrix::mul_vector`] for the matrix product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const N: usize> {
    columns: [[T; N]; N],
}

pub type Matrix2<T> = Matrix<T, 2>;
pub type Matrix3<T> = Matrix<T, 3>;
pub type Matrix4<T> = Matrix<T, 4>;

impl<T: Copy, const N: usize> Matrix<T, N> {
    #[inline]
    pub const fn from_columns(columns: [[T; N]; N]) -> Self {
        Self { columns }
    }

    /// Read `N * N` column-major values of `src` starting at `index`.
    ///
    /// # Errors
    /// Returns `MissingArgument` when `src` runs out of values.
    pub fn from_slice<S>(src: &S, index: usize) -> Result<Self>
    where
        S: Sequence<Elem = T> + ?Sized,
    {
        if let Err(err) = check::range(src, index, N * N, "values") {
            tracing::debug!(%err, order = N, "too few values for matrix");
            return Err(SeqError::MissingArgument { name: "values" });
        }
        Ok(Self::from_columns(std::array::from_fn(|i| {
            src.get_n::<N>(index + i * N)
        })))
    }

    pub fn fill(value: T) -> Self {
        Self::from_columns([[value; N]; N])
    }

    #[inline]
    pub fn to_array(&self) -> [[T; N]; N] {
        self.columns
    }

    #[inline]
    pub fn set_array(&mut self, columns: [[T; N]; N]) {
        self.columns = columns;
    }

    pub fn column(&self, i: usize) -> Vector<T, N> {
        Vector::from_array(self.columns[i])
    }

    pub fn set_column(&mut self, i: usize, column: Vector<T, N>) {
        self.columns[i] = column.to_array();
    }

    pub fn row(&self, j: usize) -> Vector<T, N> {
        Vector::from_array(std::array::from_fn(|i| self.columns[i][j]))
    }

    /// Write all `N * N` values to `dest` starting at `index`.
    pub fn copy_into<D>(&self, dest: &mut D, index: usize)
    where
        D: SequenceMut<Elem = T> + ?Sized,
    {
        copy_ex_into(self, 0, N * N, dest, index)
    }

    /// Overwrite all values from `src` starting at `index`.
    pub fn copy_from<S>(&mut self, src: &S, index: usize)
    where
        S: Sequence<Elem = T> + ?Sized,
    {
        copy_ex_into(src, index, N * N, self, 0)
    }

    pub fn transpose(&self) -> Self {
        let mut out = *self;
        transpose_into::<N, N, T, Self, Self>(self, &mut out);
        out
    }
}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N> {
    pub fn identity() -> Self {
        Self::from_columns(std::array::from_fn(|i| {
            std::array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }
}

impl<T: Element, const N: usize> Matrix<T, N> {
    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Self) -> Self {
        let mut out = *self;
        matmul_into::<N, N, N, T, Self, Self, Self>(self, other, &mut out);
        out
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vector(&self, v: &Vector<T, N>) -> Vector<T, N> {
        let mut out = *v;
        matmul_vector_into::<N, N, T, Self, Vector<T, N>, Vector<T, N>>(self, v, &mut out);
        out
    }
}

macro_rules! matrix_new {
    ($n:literal; $([$($v:ident),+]),+) => {
        impl<T: Copy> Matrix<T, $n> {
            /// Build from explicit values, column by column.
            #[allow(clippy::too_many_arguments)]
            #[inline]
            pub const fn new($($($v: T),+),+) -> Self {
                Self::from_columns([$([$($v),+]),+])
            }
        }
    };
}

matrix_new!(2; [c0r0, c0r1], [c1r0, c1r1]);
matrix_new!(3; [c0r0, c0r1, c0r2], [c1r0, c1r1, c1r2], [c2r0, c2r1, c2r2]);
matrix_new!(4;
    [c0r0, c0r1, c0r2, c0r3],
    [c1r0, c1r1, c1r2, c1r3],
    [c2r0, c2r1, c2r2, c2r3],
    [c3r0, c3r1, c3r2, c3r3]
);

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    /// Element at `(column, row)`.
    #[inline]
    fn index(&self, (column, row): (usize, usize)) -> &T {
        &self.columns[column][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
        &mut self.columns[column][row]
    }
}

impl<T: Copy, const N: usize> Sequence for Matrix<T, N> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        N * N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.columns[index / N][index % N]
    }
}

impl<T: Copy, const N: usize> SequenceMut for Matrix<T, N> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self.columns[index / N][index % N] = value;
    }
}

elementwise_ops!(Matrix);

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    /// One row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..N {
            if j > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for i in 0..N {
                if i > 0 {
                    f.write_str(", ")?;
                }
                self.columns[i][j].fmt(f)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector2;
    use approx::assert_relative_eq;

    #[test]
    fn test_column_major_layout() {
        let m = Matrix2::new(1, 2, 3, 4);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(m.row(0).to_array(), [1, 3]);
        assert_eq!(m.column(1).to_array(), [3, 4]);
    }

    #[test]
    fn test_from_slice() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let m = Matrix3::from_slice(&data, 1).unwrap();
        assert_eq!(m.to_array(), [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(
            Matrix3::from_slice(&data, 2).unwrap_err(),
            SeqError::MissingArgument { name: "values" }
        );
    }

    #[test]
    fn test_identity_matmul() {
        let m = Matrix3::new(2.0, -1.0, 0.5, 3.0, 4.0, 1.5, -2.0, 0.0, 7.0);
        let i = Matrix3::identity();
        assert_eq!(i.matmul(&m), m);
        assert_eq!(m.matmul(&i), m);
    }

    #[test]
    fn test_matmul_and_mul_vector() {
        // rows [1 3; 2 4]
        let a = Matrix2::new(1, 2, 3, 4);
        let b = Matrix2::new(5, 6, 7, 8);
        assert_eq!(a.matmul(&b), Matrix2::new(23, 34, 31, 46));
        assert_eq!(a.mul_vector(&Vector2::new(1, 1)), Vector2::new(4, 6));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix2::new(1, 2, 3, 4);
        assert_eq!(m.transpose(), Matrix2::new(1, 3, 2, 4));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_elementwise_operators() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m + m, m * 2.0);
        assert_eq!((m * m).to_vec(), vec![1.0, 4.0, 9.0, 16.0]);
        assert_eq!((-m)[(1, 1)], -4.0);
        let mut n = m;
        n -= m;
        assert_eq!(n, Matrix2::zeros());
        n += 0.5;
        n /= 0.25;
        assert_relative_eq!(n[(0, 0)], 2.0);
    }

    #[test]
    fn test_copy_into_and_from() {
        let m = Matrix2::new(1, 2, 3, 4);
        let mut buf = vec![0; 6];
        m.copy_into(&mut buf, 1);
        assert_eq!(buf, vec![0, 1, 2, 3, 4, 0]);

        let mut n = Matrix2::zeros();
        n.copy_from(&buf, 2);
        assert_eq!(n, Matrix2::new(2, 3, 4, 0));

        let mut column = Matrix2::identity();
        column.set_column(0, Vector2::new(9, 9));
        assert_eq!(column.to_array(), [[9, 9], [0, 1]]);
    }

    #[test]
    fn test_display() {
        let m = Matrix2::new(1, 2, 3, 4);
        assert_eq!(m.to_string(), "[1, 3]\n[2, 4]");
    }
}
