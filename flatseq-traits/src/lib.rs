//! Shared traits for the flatseq crates.
//!
//! This crate provides the core definitions that are shared across
//! `flatseq-view` and the `flatseq` engine:
//!
//! - [`Sequence`] / [`SequenceMut`]: index-addressable element storage
//! - [`Shared`]: a copyable handle that lets one buffer be passed as both
//!   source and destination of the same call
//! - [`Element`]: numeric bounds for element types
//! - [`SeqError`]: the error taxonomy used by every fallible operation
//!
//! External crates can depend on `flatseq-traits` to implement [`Sequence`]
//! for their own buffer types without orphan rule violations.

pub mod error;
pub mod scalar;
pub mod sequence;
pub mod shared;

pub use error::{Result, SeqError};
pub use scalar::Element;
pub use sequence::{Sequence, SequenceMut};
pub use shared::Shared;

/// Largest tuple arity accepted by [`Sequence::get_n`] and [`SequenceMut::set_n`].
pub const MAX_ARITY: usize = 16;
