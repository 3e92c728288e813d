//! Numeric status codes for callers that speak integer statuses.
//!
//! Codes are stable and match the established integer interface: 3 is
//! unassigned.

use std::fmt;

use crate::error::{ArrayError, Missing};

/// Raw status code values.
pub mod codes {
    /// Operation completed successfully.
    pub const OK: i32 = 0;
    /// The array handle was absent.
    pub const SELF_IS_NULL: i32 = 1;
    /// The output destination was absent.
    pub const RETURN_PARAMS_IS_NULL: i32 = 2;
    /// Storage allocation failed.
    pub const OUT_OF_MEMORY: i32 = 4;
    /// Index or length outside valid bounds.
    pub const OUT_OF_RANGE: i32 = 5;
    /// Element size differs from the array's.
    pub const ELEMENT_SIZE_MISMATCH: i32 = 6;
}

/// Outcome of an array operation as a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Success.
    Ok = codes::OK,
    /// The array handle was absent.
    SelfIsNull = codes::SELF_IS_NULL,
    /// The output destination was absent.
    ReturnParamsIsNull = codes::RETURN_PARAMS_IS_NULL,
    /// Storage allocation failed.
    OutOfMemory = codes::OUT_OF_MEMORY,
    /// Index or length outside valid bounds.
    OutOfRange = codes::OUT_OF_RANGE,
    /// Element size differs from the array's.
    ElementSizeMismatch = codes::ELEMENT_SIZE_MISMATCH,
}

impl Status {
    /// Numeric code of this status.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Parse a numeric code. Unassigned codes yield `None`.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            codes::OK => Some(Self::Ok),
            codes::SELF_IS_NULL => Some(Self::SelfIsNull),
            codes::RETURN_PARAMS_IS_NULL => Some(Self::ReturnParamsIsNull),
            codes::OUT_OF_MEMORY => Some(Self::OutOfMemory),
            codes::OUT_OF_RANGE => Some(Self::OutOfRange),
            codes::ELEMENT_SIZE_MISMATCH => Some(Self::ElementSizeMismatch),
            _ => None,
        }
    }

    /// Whether this is the success status.
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Status corresponding to an operation result.
    pub fn of<T>(result: &Result<T, ArrayError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => Self::from(err),
        }
    }
}

impl From<&ArrayError> for Status {
    fn from(err: &ArrayError) -> Self {
        match err {
            ArrayError::InvalidArgument(Missing::Target) => Self::SelfIsNull,
            ArrayError::InvalidArgument(Missing::Output) => Self::ReturnParamsIsNull,
            ArrayError::LengthOutOfRange { .. } | ArrayError::IndexOutOfRange { .. } => {
                Self::OutOfRange
            }
            ArrayError::OutOfMemory { .. } => Self::OutOfMemory,
            ArrayError::SizeMismatch { .. } => Self::ElementSizeMismatch,
        }
    }
}

impl From<ArrayError> for Status {
    fn from(err: ArrayError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Ok => "ok",
            Self::SelfIsNull => "self is null",
            Self::ReturnParamsIsNull => "out params is missing",
            Self::OutOfMemory => "out of memory",
            Self::OutOfRange => "index out of range",
            Self::ElementSizeMismatch => "type size mismatched",
        };
        write!(f, "status({}): {msg}", self.code())
    }
}
