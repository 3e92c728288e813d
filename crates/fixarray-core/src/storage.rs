//! Owned, zero-initialized element storage.
//!
//! A [`FixedArray`] is a single contiguous byte region holding `length`
//! elements of `elem_size` bytes each. Elements are opaque byte blobs: the
//! caller states the element size on every access and the array checks it.
//!
//! The array has two states. *Allocated* means `length > 0` with storage
//! present; *empty* means `length == 0`, `elem_size == 0` and no storage.
//! [`FixedArray::initialize`] moves empty to allocated and
//! [`FixedArray::release`] moves back. Dropping the array releases its
//! storage.

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace, warn};

use crate::error::ArrayError;
use crate::layout::ArrayLayout;

/// Fixed-size, type-erased array of equally sized elements.
///
/// The array exclusively owns its storage. It can be moved but not cloned.
#[derive(Default)]
pub struct FixedArray {
    storage: Box<[u8]>,
    length: usize,
    elem_size: usize,
}

impl FixedArray {
    /// Create an empty, unallocated array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array of `length` zeroed elements of `elem_size` bytes.
    pub fn with_layout(length: usize, elem_size: usize) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.initialize(length, elem_size)?;
        Ok(array)
    }

    /// Allocate zeroed storage for `length` elements of `elem_size` bytes.
    ///
    /// Rejects a zero length, a zero element size, and any shape whose byte
    /// size overflows `usize` with `LengthOutOfRange`. An allocator refusal
    /// yields `OutOfMemory`. On failure the array is left exactly as it was;
    /// on success any previous storage is released and replaced.
    pub fn initialize(&mut self, length: usize, elem_size: usize) -> Result<(), ArrayError> {
        let layout = ArrayLayout::new(length, elem_size);
        layout.validate()?;
        let bytes = length * elem_size;
        let storage = allocate_zeroed(bytes)?;

        self.storage = storage;
        self.length = length;
        self.elem_size = elem_size;
        debug!(length, elem_size, bytes, "fixed array allocated");
        Ok(())
    }

    /// Free the storage and reset to the empty state.
    ///
    /// Idempotent: releasing an empty array succeeds and changes nothing.
    pub fn release(&mut self) -> Result<(), ArrayError> {
        if self.is_allocated() {
            debug!(
                length = self.length,
                elem_size = self.elem_size,
                "fixed array released"
            );
        }
        self.storage = Box::default();
        self.length = 0;
        self.elem_size = 0;
        Ok(())
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// `value.len()` must equal the element size. Nothing is written on error.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), ArrayError> {
        let range = self.element_range(index)?;
        self.check_size(value.len())?;
        self.storage[range].copy_from_slice(value);
        Ok(())
    }

    /// Copy the element at `index` into `out`.
    ///
    /// `out.len()` must equal the element size. `out` is untouched on error.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<(), ArrayError> {
        let range = self.element_range(index)?;
        self.check_size(out.len())?;
        out.copy_from_slice(&self.storage[range]);
        Ok(())
    }

    /// Borrow the bytes of the element at `index`.
    pub fn element(&self, index: usize) -> Result<&[u8], ArrayError> {
        let range = self.element_range(index)?;
        Ok(&self.storage[range])
    }

    /// Mutably borrow the bytes of the element at `index`.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut [u8], ArrayError> {
        let range = self.element_range(index)?;
        Ok(&mut self.storage[range])
    }

    /// Number of elements. Zero when empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Element size in bytes. Zero when empty.
    #[must_use]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Storage size in bytes, always `len() * elem_size()`.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.storage.len()
    }

    /// Whether storage is currently allocated.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.length > 0
    }

    /// The whole storage region.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Current layout, `None` when empty.
    #[must_use]
    pub fn layout(&self) -> Option<ArrayLayout> {
        self.is_allocated()
            .then_some(ArrayLayout::new(self.length, self.elem_size))
    }

    fn element_range(&self, index: usize) -> Result<Range<usize>, ArrayError> {
        if index >= self.length {
            trace!(index, length = self.length, "element index rejected");
            return Err(ArrayError::IndexOutOfRange {
                index,
                length: self.length,
            });
        }
        let start = index * self.elem_size;
        Ok(start..start + self.elem_size)
    }

    fn check_size(&self, value_size: usize) -> Result<(), ArrayError> {
        if value_size != self.elem_size {
            trace!(
                expected = self.elem_size,
                actual = value_size,
                "element size rejected"
            );
            return Err(ArrayError::SizeMismatch {
                expected: self.elem_size,
                actual: value_size,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("length", &self.length)
            .field("elem_size", &self.elem_size)
            .finish_non_exhaustive()
    }
}

/// Fallibly allocate `bytes` zeroed bytes.
fn allocate_zeroed(bytes: usize) -> Result<Box<[u8]>, ArrayError> {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(err) = buf.try_reserve_exact(bytes) {
        warn!(bytes, error = %err, "fixed array allocation refused");
        return Err(ArrayError::OutOfMemory { bytes });
    }
    buf.resize(bytes, 0);
    Ok(buf.into_boxed_slice())
}
