//! Argument and range validation.
//!
//! The kernels never validate on their own; an out-of-range access panics
//! inside the backing storage. Callers that want a descriptive error first
//! run the checks here. With the `debug-checks` feature every `_ex`/`_ex_into`
//! operation runs them itself and panics with the error message.

use crate::constant::Constant;
use flatseq_traits::{Result, SeqError, Sequence, SequenceMut, MAX_ARITY};

/// Run checks under the `debug-checks` feature and panic on the first failure.
macro_rules! debug_check {
    ($($check:expr),+ $(,)?) => {
        if cfg!(feature = "debug-checks") {
            $(
                if let Err(err) = $check {
                    tracing::debug!(%err, "debug check failed");
                    panic!("{err}");
                }
            )+
        }
    };
}
pub(crate) use debug_check;

/// `[index, index + count)` must be populated in `seq`.
pub fn range<S: Sequence + ?Sized>(
    seq: &S,
    index: usize,
    count: usize,
    name: &'static str,
) -> Result<()> {
    let len = seq.len();
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(SeqError::out_of_bounds(name, index, count, len)),
    }
}

/// `a` and `b` must have the same length.
pub fn same_len<A, B>(a: &A, b: &B, name: &'static str) -> Result<()>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    if a.len() == b.len() {
        return Ok(());
    }
    tracing::debug!(name, a = a.len(), b = b.len(), "length check failed");
    Err(SeqError::ShapeMismatch {
        expected: vec![a.len()],
        got: vec![b.len()],
    })
}

/// Pattern constants must hold at least one element.
pub fn pattern<T>(constant: &Constant<'_, T>, name: &'static str) -> Result<()> {
    match constant {
        Constant::Pattern(values) if values.is_empty() => Err(SeqError::MissingArgument { name }),
        _ => Ok(()),
    }
}

/// Strides must be nonzero.
pub fn stride(stride: isize, name: &'static str) -> Result<()> {
    if stride == 0 {
        Err(SeqError::zero_stride(name))
    } else {
        Ok(())
    }
}

/// Tuple arities must be in `1..=16`.
pub fn arity(k: usize, name: &'static str) -> Result<()> {
    if (1..=MAX_ARITY).contains(&k) {
        Ok(())
    } else {
        Err(SeqError::InvalidRange {
            name,
            detail: format!("arity {k} outside 1..={MAX_ARITY}"),
        })
    }
}

/// A required value must be present.
pub fn present<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(SeqError::MissingArgument { name })
}

/// Validated [`Sequence::get_n`].
pub fn get_n<S, const K: usize>(seq: &S, index: usize) -> Result<[S::Elem; K]>
where
    S: Sequence + ?Sized,
{
    range(seq, index, K, "seq")?;
    Ok(seq.get_n::<K>(index))
}

/// Validated [`SequenceMut::set_n`].
pub fn set_n<S, const K: usize>(dest: &mut S, index: usize, values: [S::Elem; K]) -> Result<()>
where
    S: SequenceMut + ?Sized,
{
    range(dest, index, K, "dest")?;
    dest.set_n(index, values);
    Ok(())
}
