//! # fixarray
//!
//! Fixed-size arrays with manual lifecycle control.
//!
//! [`Array<T>`] is the typed entry point for plain-old-data elements. The
//! type-erased [`FixedArray`] underneath, its [`handle`] API and the
//! [`Status`] codes are re-exported from `fixarray-core` for callers that
//! work with runtime element sizes.
//!
//! # Example
//! ```
//! let mut arr = fixarray::Array::<i32>::new(5).unwrap();
//! arr.set(2, 42).unwrap();
//! assert_eq!(arr.get(2).unwrap(), 42);
//! assert_eq!(arr.to_string(), "[0 0 42 0 0]");
//! ```
#![warn(missing_docs)]

pub mod typed;

// Re-exports
pub use fixarray_core::{
    error, handle, layout, status, ArrayError, ArrayLayout, ErrorKind, FixedArray, Missing,
    Status,
};
pub use typed::Array;
