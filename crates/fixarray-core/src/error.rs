//! Error taxonomy for fixed array operations.

use std::fmt;

/// Which required argument was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// The array handle itself.
    Target,
    /// The output destination.
    Output,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target => f.write_str("array handle"),
            Self::Output => f.write_str("output destination"),
        }
    }
}

/// Coarse classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required handle or output destination was absent.
    InvalidArgument,
    /// An index or length falls outside valid bounds.
    OutOfRange,
    /// Storage allocation failed.
    OutOfMemory,
    /// The caller's element size differs from the array's.
    SizeMismatch,
}

/// Error type for fixed array operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A required argument was absent.
    #[error("invalid argument: {0} is missing")]
    InvalidArgument(Missing),

    /// Requested length is zero or its byte size overflows `usize`.
    #[error("length {length} with element size {elem_size} is out of range")]
    LengthOutOfRange {
        /// Requested element count.
        length: usize,
        /// Requested element size in bytes.
        elem_size: usize,
    },

    /// Index is not below the array length.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Current array length.
        length: usize,
    },

    /// The allocator refused the request.
    #[error("out of memory allocating {bytes} bytes")]
    OutOfMemory {
        /// Number of bytes requested.
        bytes: usize,
    },

    /// Element size supplied by the caller does not match.
    #[error("element size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Size the operation required.
        expected: usize,
        /// Size the caller supplied.
        actual: usize,
    },
}

impl ArrayError {
    /// Collapse this error into its [`ErrorKind`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::LengthOutOfRange { .. } | Self::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
        }
    }
}
