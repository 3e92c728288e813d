//! Property-based tests for the typed array.

use proptest::prelude::*;

use fixarray::{Array, ArrayError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Values written through the typed API read back unchanged.
    #[test]
    fn typed_roundtrip(values in prop::collection::vec(any::<i64>(), 1..200)) {
        let mut arr = Array::<i64>::new(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(arr.get(i).unwrap(), v);
        }
        prop_assert_eq!(arr.first(), values.first().copied());
        prop_assert_eq!(arr.last(), values.last().copied());
    }

    /// Indices at or past the end are rejected without side effects.
    #[test]
    fn typed_bounds(length in 1usize..100, overshoot in 0usize..100, value in any::<u32>()) {
        let mut arr = Array::<u32>::new(length).unwrap();
        let index = length + overshoot;
        prop_assert_eq!(arr.set(index, value), Err(ArrayError::IndexOutOfRange { index, length }));
        prop_assert!(!arr.try_set(index, value));
        prop_assert_eq!(arr.try_get(index), None);
        prop_assert!(arr.as_raw().as_bytes().iter().all(|&b| b == 0));
    }

    /// Display lists every element separated by single spaces.
    #[test]
    fn display_matches_elements(values in prop::collection::vec(any::<u8>(), 1..32)) {
        let mut arr = Array::<u8>::new(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }
        let expected = format!(
            "[{}]",
            values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );
        prop_assert_eq!(arr.to_string(), expected);
    }
}
