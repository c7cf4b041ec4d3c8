//! Zero-copy views over flat sequences.
//!
//! A view borrows (or owns a handle to) a backing [`Sequence`] and maps each
//! logical index to a physical index of the backing storage:
//!
//! - [`SliceView`]: `start + k`
//! - [`StridedView`]: `start + k * stride`, stride may be negative
//! - [`InterleavedView`]: `start + (k / group) * stride + k % group`
//! - [`FixedView`]: `start + k` with a compile-time length
//!
//! Views never copy. Writing through a view writes the backing storage, and
//! views nest: a strided view of a slice view of a `Vec` is fine.
//!
//! # Example
//!
//! ```rust
//! use flatseq_traits::Sequence;
//! use flatseq_view::{reverse, strided};
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! let odd = strided(&data, 0, 2, 3).unwrap();
//! assert_eq!(odd.to_vec(), vec![1, 3, 5]);
//!
//! let back = reverse(&data);
//! assert_eq!(back.get(0), 6);
//! ```

pub mod view;

pub use flatseq_traits::{Result, SeqError, Sequence, SequenceMut};
pub use view::{
    fixed, interleaved, reverse, slice, strided, FixedView, InterleavedView, SliceView,
    StridedView,
};
