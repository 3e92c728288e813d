//! Shared fixtures for the cross-crate integration tests.

use bytemuck::{Pod, Zeroable};
use fixarray_core::FixedArray;

/// Element size of an `i32`, the integer element used throughout the suites.
pub const INT_ELEM_SIZE: usize = std::mem::size_of::<i32>();

/// Three-field record stored as a 12-byte element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl Vec3 {
    /// Build a record from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Write an `i32` into a type-erased array.
pub fn write_i32(array: &mut FixedArray, index: usize, value: i32) {
    array
        .set(index, &value.to_ne_bytes())
        .unwrap_or_else(|err| panic!("set({index}) failed: {err}"));
}

/// Read an `i32` out of a type-erased array.
pub fn read_i32(array: &FixedArray, index: usize) -> i32 {
    let mut out = [0u8; INT_ELEM_SIZE];
    array
        .get(index, &mut out)
        .unwrap_or_else(|err| panic!("get({index}) failed: {err}"));
    i32::from_ne_bytes(out)
}
