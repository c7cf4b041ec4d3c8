//! Flat-array numerics: element-wise kernels, zero-copy views and small
//! fixed-size linear algebra over column-major flat storage.
//!
//! # Core Types
//!
//! - [`Sequence`] / [`SequenceMut`]: anything index-addressable (slices,
//!   arrays, `Vec`, views, vectors, matrices)
//! - [`Shared`]: copyable handle for passing one buffer as source and
//!   destination of the same call
//! - [`SliceView`], [`StridedView`], [`InterleavedView`], [`FixedView`]:
//!   index-remapping views that never copy
//! - [`Vector`] / [`Matrix`]: fixed-arity values with element-wise operators
//!   and matmul kernels
//!
//! # Call shapes
//!
//! Every bulk operation comes in an allocating form and a write-into-destination
//! form running the same kernel, shown here for `add`:
//!
//! - [`add`]: whole `a` with whole `b`, returns a new `Vec`
//! - [`add_ex`]: explicit ranges, returns a new `Vec`
//! - [`add_ex_into`]: explicit ranges, writes `dest` at `dest_index`
//! - [`add_constant`], [`add_constant_ex`], [`add_constant_ex_into`]: the second
//!   operand is a [`Constant`], a scalar or a pattern repeated cyclically
//!
//! Indices are 0-based. Destinations may alias sources; each output element is
//! computed from the inputs at the same offset and written in ascending order.
//!
//! # Example
//!
//! ```rust
//! use flatseq::{add_constant, mul_add_constant};
//!
//! // offset a flat list of 2D points by (10, 20)
//! let points = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(add_constant(&points, &[10.0, 20.0]), vec![11.0, 22.0, 13.0, 24.0]);
//!
//! // one Euler step: p + v * dt
//! let p = vec![0.0, 0.0, 0.0];
//! let v = vec![0.0, 0.0, 1.0];
//! assert_eq!(mul_add_constant(&p, &v, 0.5), vec![0.0, 0.0, 0.5]);
//! ```
//!
//! # Features
//!
//! - `debug-checks`: validate every range before the kernels run and panic
//!   with a message naming the offending parameter

pub mod array;
pub mod check;
mod constant;
pub mod fused;
pub mod iter;
pub mod linalg;
pub mod map;
mod matrix;
pub mod ops;
pub mod reduce;
pub mod reshape;
mod swizzle;
mod vector;

pub use flatseq_traits::{Element, Result, SeqError, Sequence, SequenceMut, Shared, MAX_ARITY};
pub use flatseq_view as view;
pub use flatseq_view::{FixedView, InterleavedView, SliceView, StridedView};

pub use array::*;
pub use constant::Constant;
pub use fused::*;
pub use linalg::{matmul, matmul_into, matmul_vector, matmul_vector_into, transpose_into};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use ops::*;
pub use reduce::*;
pub use reshape::{flatten, flatten_into, reshape, Nested};
pub use vector::{Vector, Vector2, Vector3, Vector4};

/// Tolerance used by [`almost_equal`] and [`almost_equal_with_nan`].
pub const DEFAULT_EPSILON: f64 = 1e-9;
