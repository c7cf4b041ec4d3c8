//! Error taxonomy for flatseq operations.

/// Errors that can occur during sequence operations.
///
/// Hot-path kernels do not produce these; they are returned by constructors,
/// reshaping and the debug-check helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeqError {
    /// A required value is absent.
    #[error("missing argument `{name}`")]
    MissingArgument { name: &'static str },

    /// A value is present but has the wrong kind.
    #[error("type mismatch for `{name}`: expected {expected}, found {found}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Index, count, stride or arity outside of what the operation accepts.
    #[error("invalid range for `{name}`: {detail}")]
    InvalidRange { name: &'static str, detail: String },

    /// Source and target element counts disagree.
    #[error("shape mismatch: {expected:?} vs {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
}

impl SeqError {
    /// `[index, index + count)` does not fit in a sequence of length `len`.
    pub fn out_of_bounds(name: &'static str, index: usize, count: usize, len: usize) -> Self {
        SeqError::InvalidRange {
            name,
            detail: format!("index {index} with count {count} exceeds length {len}"),
        }
    }

    /// A stride of zero was supplied where a nonzero one is required.
    pub fn zero_stride(name: &'static str) -> Self {
        SeqError::InvalidRange {
            name,
            detail: "stride must be nonzero".to_string(),
        }
    }

    /// Signed index arithmetic overflowed or went negative.
    pub fn offset_overflow(name: &'static str) -> Self {
        SeqError::InvalidRange {
            name,
            detail: "offset overflow while computing physical index".to_string(),
        }
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;
