//! # fixarray-core
//!
//! Type-erased fixed-size array with explicit lifecycle and size-checked
//! element access.
//!
//! [`FixedArray`] owns one zeroed, contiguous byte region of
//! `length * elem_size` bytes. Every access states the element size and is
//! checked against the array's; failures are returned as [`ArrayError`] and
//! never leave a partial write behind. [`handle`] exposes the same operations
//! over optional handles, and [`Status`] maps results onto stable integer
//! codes.
#![warn(missing_docs)]

pub mod error;
pub mod handle;
pub mod layout;
pub mod status;
pub mod storage;

// Re-exports
pub use error::{ArrayError, ErrorKind, Missing};
pub use layout::ArrayLayout;
pub use status::Status;
pub use storage::FixedArray;
