//! Conversion between flat arrays and nested arrays of arrays.
//!
//! [`reshape`] walks `dims` in row-major order: the last dimension varies
//! fastest. A flat array whose length differs from the product of `dims` is
//! rejected with [`SeqError::ShapeMismatch`] instead of being truncated.

use flatseq_traits::{Result, SeqError, Sequence, SequenceMut};

/// A nested array: either a single element or a list of nested arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    fn kind(&self) -> &'static str {
        match self {
            Nested::Leaf(_) => "leaf",
            Nested::Branch(_) => "branch",
        }
    }

    /// Total number of leaves.
    pub fn len_flat(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Branch(children) => children.iter().map(Nested::len_flat).sum(),
        }
    }

    /// Rectangular shape of this value, outermost dimension first.
    ///
    /// A leaf has shape `[]`. Children that mix leaves and branches, or
    /// nest to different depths, give [`SeqError::TypeMismatch`]; children
    /// of equal depth but different extents give [`SeqError::ShapeMismatch`].
    pub fn shape(&self) -> Result<Vec<usize>> {
        let children = match self {
            Nested::Leaf(_) => return Ok(Vec::new()),
            Nested::Branch(children) => children,
        };
        let Some(first) = children.first() else {
            return Ok(vec![0]);
        };
        let inner = first.shape()?;
        for child in &children[1..] {
            if child.kind() != first.kind() {
                return Err(SeqError::TypeMismatch {
                    name: "nested",
                    expected: first.kind(),
                    found: child.kind(),
                });
            }
            let got = child.shape()?;
            if got.len() != inner.len() {
                return Err(SeqError::TypeMismatch {
                    name: "nested",
                    expected: "uniform depth",
                    found: "ragged depth",
                });
            }
            if got != inner {
                tracing::debug!(?inner, ?got, "ragged nested array");
                return Err(SeqError::ShapeMismatch {
                    expected: inner,
                    got,
                });
            }
        }
        let mut shape = Vec::with_capacity(inner.len() + 1);
        shape.push(children.len());
        shape.extend(inner);
        Ok(shape)
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::Branch(values.into_iter().map(Nested::Leaf).collect())
    }
}

/// Build a nested array of shape `dims` from `flat`.
///
/// Empty `dims` describes a single element and yields a [`Nested::Leaf`].
///
/// # Errors
/// Returns `InvalidRange` when the element count of `dims` overflows `usize`
/// or the branches in front of a zero extent could never be allocated, and
/// `ShapeMismatch` when the element count differs from `flat.len()`.
pub fn reshape<S: Sequence + ?Sized>(flat: &S, dims: &[usize]) -> Result<Nested<S::Elem>> {
    let Some(expected) = dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)) else {
        tracing::debug!(?dims, "reshape element count overflows");
        return Err(SeqError::InvalidRange {
            name: "dims",
            detail: format!("element count of {dims:?} overflows"),
        });
    };
    if expected == 0 && !branches_fit::<S::Elem>(dims) {
        tracing::debug!(?dims, "reshape branch count too large");
        return Err(SeqError::InvalidRange {
            name: "dims",
            detail: format!("too many empty branches in {dims:?}"),
        });
    }
    if expected != flat.len() {
        tracing::debug!(?dims, len = flat.len(), "reshape size mismatch");
        return Err(SeqError::ShapeMismatch {
            expected: dims.to_vec(),
            got: vec![flat.len()],
        });
    }
    let mut cursor = 0;
    Ok(build(flat, dims, &mut cursor))
}

/// Branches in front of the first zero extent are still built; their count
/// must stay within what a `Vec` can hold.
fn branches_fit<T>(dims: &[usize]) -> bool {
    let limit = isize::MAX as usize / std::mem::size_of::<Nested<T>>().max(1);
    dims.iter()
        .take_while(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d).filter(|&n| n <= limit))
        .is_some()
}

fn build<S: Sequence + ?Sized>(flat: &S, dims: &[usize], cursor: &mut usize) -> Nested<S::Elem> {
    match dims.split_first() {
        None => {
            let value = flat.get(*cursor);
            *cursor += 1;
            Nested::Leaf(value)
        }
        Some((&extent, rest)) => {
            Nested::Branch((0..extent).map(|_| build(flat, rest, cursor)).collect())
        }
    }
}

/// Leaves of `nested` in depth-first order.
pub fn flatten<T: Copy>(nested: &Nested<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(nested.len_flat());
    push_leaves(nested, &mut out);
    out
}

fn push_leaves<T: Copy>(nested: &Nested<T>, out: &mut Vec<T>) {
    match nested {
        Nested::Leaf(value) => out.push(*value),
        Nested::Branch(children) => children.iter().for_each(|c| push_leaves(c, out)),
    }
}

/// Write the leaves of `nested` into `dest` starting at `dest_index` and
/// return how many were written.
pub fn flatten_into<T, D>(nested: &Nested<T>, dest: &mut D, dest_index: usize) -> usize
where
    T: Copy,
    D: SequenceMut<Elem = T> + ?Sized,
{
    match nested {
        Nested::Leaf(value) => {
            dest.set(dest_index, *value);
            1
        }
        Nested::Branch(children) => children
            .iter()
            .fold(0, |written, c| written + flatten_into(c, dest, dest_index + written)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(values: &[i32]) -> Nested<i32> {
        Nested::from(values.to_vec())
    }

    #[test]
    fn test_reshape_row_major() {
        let flat = [1, 2, 3, 4, 5, 6];
        let nested = reshape(&flat, &[2, 3]).unwrap();
        assert_eq!(
            nested,
            Nested::Branch(vec![leaves(&[1, 2, 3]), leaves(&[4, 5, 6])])
        );
        assert_eq!(nested.shape().unwrap(), vec![2, 3]);
        assert_eq!(nested.len_flat(), 6);
    }

    #[test]
    fn test_reshape_flatten_round_trip() {
        let flat: Vec<i32> = (0..24).collect();
        let cases: [&[usize]; 5] = [&[24], &[2, 12], &[2, 3, 4], &[4, 3, 2], &[1, 24, 1]];
        for dims in cases {
            let nested = reshape(&flat, dims).unwrap();
            assert_eq!(nested.shape().unwrap(), dims.to_vec());
            assert_eq!(flatten(&nested), flat);
        }
    }

    #[test]
    fn test_reshape_count_mismatch() {
        let err = reshape(&[1, 2, 3, 4, 5], &[2, 3]).unwrap_err();
        assert_eq!(
            err,
            SeqError::ShapeMismatch {
                expected: vec![2, 3],
                got: vec![5]
            }
        );
    }

    #[test]
    fn test_reshape_scalar_and_empty() {
        assert_eq!(reshape(&[7], &[]).unwrap(), Nested::Leaf(7));
        assert!(reshape(&[7, 8], &[]).is_err());

        let empty: [i32; 0] = [];
        let nested = reshape(&empty, &[2, 0]).unwrap();
        assert_eq!(nested.shape().unwrap(), vec![2, 0]);
        assert!(flatten(&nested).is_empty());
    }

    #[test]
    fn test_reshape_overflowing_dims() {
        let err = reshape(&[1, 2], &[usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, SeqError::InvalidRange { name: "dims", .. }));

        let empty: [u8; 0] = [];
        assert!(reshape(&empty, &[usize::MAX, 0]).is_err());
        assert!(reshape(&empty, &[2, usize::MAX, 0]).is_err());
        assert!(reshape(&empty, &[0, usize::MAX]).is_ok());
        assert_eq!(reshape(&empty, &[3, 0]).unwrap().shape().unwrap(), vec![3, 0]);
    }

    #[test]
    fn test_flatten_into() {
        let nested = reshape(&[1, 2, 3, 4], &[2, 2]).unwrap();
        let mut dest = [0; 6];
        assert_eq!(flatten_into(&nested, &mut dest, 1), 4);
        assert_eq!(dest, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_shape_ragged() {
        let ragged = Nested::Branch(vec![leaves(&[1, 2]), leaves(&[3])]);
        assert!(matches!(ragged.shape(), Err(SeqError::ShapeMismatch { .. })));
        // ragged input still flattens depth-first
        assert_eq!(flatten(&ragged), vec![1, 2, 3]);
    }

    #[test]
    fn test_shape_mixed_depth() {
        let mixed = Nested::Branch(vec![Nested::Leaf(1), leaves(&[2, 3])]);
        assert!(matches!(
            mixed.shape(),
            Err(SeqError::TypeMismatch {
                expected: "leaf",
                found: "branch",
                ..
            })
        ));
    }
}
