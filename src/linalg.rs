//! Small dense matrix kernels over flat column-major storage.
//!
//! An `R x C` matrix occupies `R * C` consecutive elements, column after
//! column: the element at column `i`, row `j` lives at flat index `i * R + j`.
//! All sizes are compile-time constants, so the loops below are fully known
//! to the optimizer.
//!
//! Every `_into` kernel computes the whole result before writing `dest`, so
//! `dest` may alias either operand.

use crate::check::{self, debug_check};
use flatseq_traits::{Element, Sequence, SequenceMut};

#[inline]
fn product<T, A, B, const R: usize, const K: usize, const C: usize>(a: &A, b: &B) -> [[T; R]; C]
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let mut acc = T::zero();
            for k in 0..K {
                acc = acc + a.get(k * R + j) * b.get(i * K + k);
            }
            acc
        })
    })
}

/// `dest = a * b` for an `R x K` matrix `a` and a `K x C` matrix `b`.
pub fn matmul_into<const R: usize, const K: usize, const C: usize, T, A, B, D>(
    a: &A,
    b: &B,
    dest: &mut D,
) where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    debug_check!(
        check::range(a, 0, R * K, "a"),
        check::range(b, 0, K * C, "b"),
        check::range(dest, 0, R * C, "dest"),
    );
    let result = product::<T, A, B, R, K, C>(a, b);
    for (i, column) in result.into_iter().enumerate() {
        for (j, value) in column.into_iter().enumerate() {
            dest.set(i * R + j, value);
        }
    }
}

/// `a * b` as a new `R x C` column-major array.
pub fn matmul<const R: usize, const K: usize, const C: usize, T, A, B>(a: &A, b: &B) -> Vec<T>
where
    T: Element,
    A: Sequence<Elem = T> + ?Sized,
    B: Sequence<Elem = T> + ?Sized,
{
    debug_check!(
        check::range(a, 0, R * K, "a"),
        check::range(b, 0, K * C, "b"),
    );
    tracing::trace!(rows = R, cols = C, "allocating matmul result");
    product::<T, A, B, R, K, C>(a, b).into_iter().flatten().collect()
}

/// `dest = m * v` for an `R x K` matrix and a `K`-vector.
pub fn matmul_vector_into<const R: usize, const K: usize, T, M, V, D>(m: &M, v: &V, dest: &mut D)
where
    T: Element,
    M: Sequence<Elem = T> + ?Sized,
    V: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    matmul_into::<R, K, 1, T, M, V, D>(m, v, dest)
}

pub fn matmul_vector<const R: usize, const K: usize, T, M, V>(m: &M, v: &V) -> Vec<T>
where
    T: Element,
    M: Sequence<Elem = T> + ?Sized,
    V: Sequence<Elem = T> + ?Sized,
{
    matmul::<R, K, 1, T, M, V>(m, v)
}

/// Write the `C x R` transpose of the `R x C` matrix `a` into `dest`.
pub fn transpose_into<const R: usize, const C: usize, T, A, D>(a: &A, dest: &mut D)
where
    T: Copy,
    A: Sequence<Elem = T> + ?Sized,
    D: SequenceMut<Elem = T> + ?Sized,
{
    debug_check!(
        check::range(a, 0, R * C, "a"),
        check::range(dest, 0, R * C, "dest"),
    );
    // column j of the result is row j of `a`
    let result: [[T; C]; R] = std::array::from_fn(|j| std::array::from_fn(|i| a.get(i * R + j)));
    for (j, column) in result.into_iter().enumerate() {
        for (i, value) in column.into_iter().enumerate() {
            dest.set(j * C + i, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use flatseq_traits::Shared;

    #[test]
    fn test_matmul_identity() {
        let identity = [1, 0, 0, 1];
        let m = [1, 2, 3, 4];
        assert_eq!(matmul::<2, 2, 2, _, _, _>(&identity, &m), m.to_vec());
        assert_eq!(matmul::<2, 2, 2, _, _, _>(&m, &identity), m.to_vec());
    }

    #[test]
    fn test_matmul_column_major() {
        // a = [[1, 3], [2, 4]] as rows, so columns are (1, 2) and (3, 4)
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        // rows of a*b: [1*5 + 3*6, 1*7 + 3*8], [2*5 + 4*6, 2*7 + 4*8]
        assert_eq!(matmul::<2, 2, 2, _, _, _>(&a, &b), vec![23, 34, 31, 46]);
    }

    #[test]
    fn test_matmul_rectangular() {
        // 2x3 times 3x1
        let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let v = [1.0, 0.5, 0.25];
        let r = matmul_vector::<2, 3, _, _, _>(&a, &v);
        assert_relative_eq!(r[0], 1.0 + 1.0 + 0.75);
        assert_relative_eq!(r[1], 4.0 + 2.5 + 1.5);
    }

    #[test]
    fn test_matmul_into_aliased() {
        let mut data = vec![1, 2, 3, 4];
        let s = Shared::new(&mut data);
        matmul_into::<2, 2, 2, _, _, _, _>(&s, &s, &mut s.clone());
        // square of [[1, 3], [2, 4]] is [[7, 15], [10, 22]]
        assert_eq!(data, vec![7, 10, 15, 22]);
    }

    #[test]
    fn test_matmul_vector_into_offset_dest() {
        let m = [2, 0, 0, 3];
        let v = [4, 5];
        let mut dest = [0; 3];
        let mut tail = crate::view::slice(&mut dest[..], 1, 2).unwrap();
        matmul_vector_into::<2, 2, _, _, _, _>(&m, &v, &mut tail);
        assert_eq!(dest, [0, 8, 15]);
    }

    #[test]
    fn test_transpose_into() {
        // 2x3: columns (1, 2), (3, 4), (5, 6)
        let a = [1, 2, 3, 4, 5, 6];
        let mut t = [0; 6];
        transpose_into::<2, 3, _, _, _>(&a, &mut t);
        // 3x2: columns (1, 3, 5), (2, 4, 6)
        assert_eq!(t, [1, 3, 5, 2, 4, 6]);
    }
}
