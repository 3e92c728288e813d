//! Array layout configuration: element count and element size.

use serde::{Deserialize, Serialize};

use crate::error::ArrayError;

/// Shape of a fixed array.
///
/// This is the only configuration a [`FixedArray`](crate::FixedArray)
/// takes. Deserializable so it can come from any serde format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayLayout {
    /// Number of elements.
    pub length: usize,
    /// Size of one element in bytes.
    pub elem_size: usize,
}

impl ArrayLayout {
    /// Create a layout.
    #[must_use]
    pub const fn new(length: usize, elem_size: usize) -> Self {
        Self { length, elem_size }
    }

    /// Layout for `length` elements of `T`.
    #[must_use]
    pub const fn of<T>(length: usize) -> Self {
        Self::new(length, std::mem::size_of::<T>())
    }

    /// Largest length representable for the given element size.
    ///
    /// Zero for a zero element size.
    #[must_use]
    pub const fn max_length(elem_size: usize) -> usize {
        match usize::MAX.checked_div(elem_size) {
            Some(max) => max,
            None => 0,
        }
    }

    /// Total storage size in bytes, `None` on overflow.
    #[must_use]
    pub const fn total_bytes(&self) -> Option<usize> {
        self.length.checked_mul(self.elem_size)
    }

    /// Check that both dimensions are positive and the byte size fits `usize`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.length == 0 || self.length > Self::max_length(self.elem_size) {
            return Err(ArrayError::LengthOutOfRange {
                length: self.length,
                elem_size: self.elem_size,
            });
        }
        Ok(())
    }
}
