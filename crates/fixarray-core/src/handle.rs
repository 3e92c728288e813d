//! Procedural API over possibly absent handles and outputs.
//!
//! These functions mirror the methods of [`FixedArray`] for callers that
//! hold optional handles, such as binding layers translating null pointers.
//! Preconditions are checked in a fixed order and the first violation is
//! returned: absent handle, absent output, index range, element size.
//!
//! ```text
//! initialize(Some(&mut a), 5, 4)  -> Ok(())
//! set(Some(&mut a), 2, &v, 4)     -> Ok(())
//! get(Some(&a), 3, None, 4)       -> Err(InvalidArgument(Output))
//! length(None, Some(&mut n))      -> Err(InvalidArgument(Target))
//! ```

use crate::error::{ArrayError, Missing};
use crate::storage::FixedArray;

fn target<T>(handle: Option<T>) -> Result<T, ArrayError> {
    handle.ok_or(ArrayError::InvalidArgument(Missing::Target))
}

fn output<T>(out: Option<T>) -> Result<T, ArrayError> {
    out.ok_or(ArrayError::InvalidArgument(Missing::Output))
}

/// Initialize the array behind `handle`. See [`FixedArray::initialize`].
pub fn initialize(
    handle: Option<&mut FixedArray>,
    length: usize,
    elem_size: usize,
) -> Result<(), ArrayError> {
    target(handle)?.initialize(length, elem_size)
}

/// Release the array behind `handle`. See [`FixedArray::release`].
pub fn release(handle: Option<&mut FixedArray>) -> Result<(), ArrayError> {
    target(handle)?.release()
}

/// Write `value` to element `index`, declaring it `value_size` bytes long.
pub fn set(
    handle: Option<&mut FixedArray>,
    index: usize,
    value: &[u8],
    value_size: usize,
) -> Result<(), ArrayError> {
    let array = target(handle)?;
    if index >= array.len() {
        return Err(ArrayError::IndexOutOfRange {
            index,
            length: array.len(),
        });
    }
    if value_size != array.elem_size() {
        return Err(ArrayError::SizeMismatch {
            expected: array.elem_size(),
            actual: value_size,
        });
    }
    if value.len() != value_size {
        return Err(ArrayError::SizeMismatch {
            expected: value_size,
            actual: value.len(),
        });
    }
    array.set(index, value)
}

/// Copy element `index` into `out`, declaring it `value_size` bytes long.
pub fn get(
    handle: Option<&FixedArray>,
    index: usize,
    out: Option<&mut [u8]>,
    value_size: usize,
) -> Result<(), ArrayError> {
    let array = target(handle)?;
    let out = output(out)?;
    if index >= array.len() {
        return Err(ArrayError::IndexOutOfRange {
            index,
            length: array.len(),
        });
    }
    if value_size != array.elem_size() {
        return Err(ArrayError::SizeMismatch {
            expected: array.elem_size(),
            actual: value_size,
        });
    }
    if out.len() != value_size {
        return Err(ArrayError::SizeMismatch {
            expected: value_size,
            actual: out.len(),
        });
    }
    array.get(index, out)
}

/// Store the element count of the array behind `handle` in `out`.
pub fn length(handle: Option<&FixedArray>, out: Option<&mut usize>) -> Result<(), ArrayError> {
    let array = target(handle)?;
    let out = output(out)?;
    *out = array.len();
    Ok(())
}
