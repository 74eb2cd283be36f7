use thiserror::Error;

/// Errors surfaced by the basis-set hierarchy.
///
/// Every fallible accessor in the owning and view families returns this
/// type at the point of the offending call; nothing is swallowed or
/// logged-and-ignored internally. `Internal` marks consistency failures
/// that are unreachable when the flattening store's invariants hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasisSetError {
    #[error("{what} has no backing storage")]
    Uninitialized { what: &'static str },

    #[error("index {index} is out of range for {what} of length {len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("cannot assign between null and non-null {what}")]
    NullMismatch { what: &'static str },

    #[error("{what} has no shells")]
    NoShells { what: &'static str },

    #[error("{what}: unsupported request: {detail}")]
    Unsupported { what: &'static str, detail: String },

    #[error("internal consistency error: {0}")]
    Internal(String),
}
