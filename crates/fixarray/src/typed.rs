//! Typed array over type-erased storage.
//!
//! `Array<T>` fixes the element size to `size_of::<T>()` at compile time, so
//! typed callers never see a size mismatch. Elements move in and out as
//! byte copies through `bytemuck`, which limits `T` to plain-old-data.

use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::Pod;
use fixarray_core::{ArrayError, FixedArray};
use tracing::debug;

/// Fixed-size array of `T`.
///
/// ```text
/// Array::<u32>::new(5):
/// ┌───┬───┬───┬───┬───┐
/// │ 0 │ 0 │ 0 │ 0 │ 0 │
/// └───┴───┴───┴───┴───┘
///   0   1   2   3   4
/// ```
pub struct Array<T: Pod> {
    raw: FixedArray,
    _marker: PhantomData<T>,
}

impl<T: Pod> Array<T> {
    /// Allocate `length` zeroed elements.
    ///
    /// Fails with `LengthOutOfRange` for a zero length or a zero-sized `T`.
    pub fn new(length: usize) -> Result<Self, ArrayError> {
        let raw = FixedArray::with_layout(length, size_of::<T>())?;
        Ok(Self {
            raw,
            _marker: PhantomData,
        })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the array has no elements (only after [`release`](Self::release)).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        self.raw.element(index).map(bytemuck::pod_read_unaligned)
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.raw.set(index, bytemuck::bytes_of(&value))
    }

    /// Read the element at `index`, `None` when out of range.
    #[must_use]
    pub fn try_get(&self, index: usize) -> Option<T> {
        self.get(index).ok()
    }

    /// Overwrite the element at `index`. Returns `false` when out of range.
    pub fn try_set(&mut self, index: usize, value: T) -> bool {
        self.set(index, value).is_ok()
    }

    /// First element, `None` when empty.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.try_get(0)
    }

    /// Last element, `None` when empty.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|i| self.try_get(i))
    }

    /// Free the storage. Idempotent.
    pub fn release(&mut self) {
        // Releasing a present handle cannot fail.
        let _ = self.raw.release();
    }

    /// The underlying type-erased array.
    #[must_use]
    pub fn as_raw(&self) -> &FixedArray {
        &self.raw
    }

    /// Unwrap into the underlying type-erased array.
    #[must_use]
    pub fn into_raw(self) -> FixedArray {
        self.raw
    }
}

impl<T: Pod> TryFrom<FixedArray> for Array<T> {
    type Error = ArrayError;

    /// Adopt an allocated array whose element size is `size_of::<T>()`.
    fn try_from(raw: FixedArray) -> Result<Self, Self::Error> {
        if raw.elem_size() != size_of::<T>() {
            debug!(
                expected = size_of::<T>(),
                actual = raw.elem_size(),
                "typed view rejected"
            );
            return Err(ArrayError::SizeMismatch {
                expected: size_of::<T>(),
                actual: raw.elem_size(),
            });
        }
        Ok(Self {
            raw,
            _marker: PhantomData,
        })
    }
}

impl<T: Pod + fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.len() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let value = self.get(i).map_err(|_| fmt::Error)?;
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: Pod> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("type", &std::any::type_name::<T>())
            .field("length", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, bytemuck::Zeroable)]
    #[repr(C)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn new_is_zeroed() {
        let arr = Array::<u64>::new(5).unwrap();
        assert_eq!(arr.len(), 5);
        for i in 0..5 {
            assert_eq!(arr.get(i).unwrap(), 0);
        }
    }

    #[test]
    fn zero_length_rejected() {
        assert!(matches!(
            Array::<u32>::new(0),
            Err(ArrayError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_sized_type_rejected() {
        assert!(matches!(
            Array::<()>::new(3),
            Err(ArrayError::LengthOutOfRange { elem_size: 0, .. })
        ));
    }

    #[test]
    fn get_set() {
        let mut arr = Array::<i32>::new(5).unwrap();
        arr.set(2, -17).unwrap();
        assert_eq!(arr.get(2).unwrap(), -17);
        assert!(matches!(
            arr.set(5, 1),
            Err(ArrayError::IndexOutOfRange { index: 5, length: 5 })
        ));
    }

    #[test]
    fn try_variants() {
        let mut arr = Array::<u16>::new(2).unwrap();
        assert!(arr.try_set(1, 9));
        assert!(!arr.try_set(2, 9));
        assert_eq!(arr.try_get(1), Some(9));
        assert_eq!(arr.try_get(2), None);
    }

    #[test]
    fn first_and_last() {
        let mut arr = Array::<u8>::new(3).unwrap();
        arr.set(0, 1).unwrap();
        arr.set(2, 3).unwrap();
        assert_eq!(arr.first(), Some(1));
        assert_eq!(arr.last(), Some(3));
        arr.release();
        assert_eq!(arr.first(), None);
        assert_eq!(arr.last(), None);
    }

    #[test]
    fn release_is_idempotent() {
        let mut arr = Array::<f64>::new(4).unwrap();
        arr.release();
        assert!(arr.is_empty());
        arr.release();
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn struct_elements() {
        let mut arr = Array::<Point>::new(2).unwrap();
        arr.set(1, Point { x: 3, y: -4 }).unwrap();
        assert_eq!(arr.get(1).unwrap(), Point { x: 3, y: -4 });
        assert_eq!(arr.get(0).unwrap(), Point { x: 0, y: 0 });
        assert_eq!(arr.as_raw().elem_size(), 8);
    }

    #[test]
    fn display() {
        let mut arr = Array::<i32>::new(3).unwrap();
        arr.set(0, 1).unwrap();
        arr.set(2, -3).unwrap();
        assert_eq!(arr.to_string(), "[1 0 -3]");
        arr.release();
        assert_eq!(arr.to_string(), "[]");
    }

    #[test]
    fn raw_roundtrip() {
        let mut arr = Array::<u32>::new(2).unwrap();
        arr.set(1, 0xDEAD_BEEF).unwrap();
        let raw = arr.into_raw();
        assert_eq!(raw.element(1).unwrap(), &0xDEAD_BEEFu32.to_ne_bytes());

        let arr = Array::<u32>::try_from(raw).unwrap();
        assert_eq!(arr.get(1).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn try_from_rejects_other_size() {
        let raw = FixedArray::with_layout(2, 4).unwrap();
        assert_eq!(
            Array::<u64>::try_from(raw).unwrap_err(),
            ArrayError::SizeMismatch {
                expected: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn debug_names_type() {
        let arr = Array::<u8>::new(1).unwrap();
        assert_eq!(format!("{arr:?}"), r#"Array { type: "u8", length: 1 }"#);
    }
}
