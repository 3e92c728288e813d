#![no_main]

use libfuzzer_sys::fuzz_target;

use fixarray_core::{ArrayError, FixedArray};

/// Replays a byte-encoded operation sequence against a `FixedArray` and a
/// plain `Vec<u8>` model, asserting they never diverge.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes choose the shape, kept small for speed.
    let length = usize::from(data[0] % 64);
    let elem_size = usize::from(data[1] % 16);

    let mut array = FixedArray::new();
    let mut model: Vec<u8> = Vec::new();
    let mut model_elem = 0usize;

    match array.initialize(length, elem_size) {
        Ok(()) => {
            model = vec![0; length * elem_size];
            model_elem = elem_size;
        }
        Err(err) => {
            assert!(length == 0 || elem_size == 0, "unexpected {err}");
            assert!(!array.is_allocated());
        }
    }

    for op in data[2..].chunks(3) {
        let &[kind, index, size] = op else {
            break;
        };
        let index = usize::from(index % 72);
        let size = usize::from(size % 18);
        let model_len = model.len().checked_div(model_elem).unwrap_or(0);

        match kind % 4 {
            0 => {
                let value = vec![kind; size];
                let result = array.set(index, &value);
                if index >= model_len {
                    assert!(matches!(result, Err(ArrayError::IndexOutOfRange { .. })));
                } else if size != model_elem {
                    assert!(matches!(result, Err(ArrayError::SizeMismatch { .. })));
                } else {
                    assert!(result.is_ok());
                    let start = index * model_elem;
                    model[start..start + model_elem].copy_from_slice(&value);
                }
            }
            1 => {
                let mut out = vec![0xEE; size];
                let result = array.get(index, &mut out);
                if index < model_len && size == model_elem {
                    assert!(result.is_ok());
                    let start = index * model_elem;
                    assert_eq!(&out[..], &model[start..start + model_elem]);
                } else {
                    assert!(result.is_err());
                    assert!(out.iter().all(|&b| b == 0xEE));
                }
            }
            2 => {
                assert!(array.release().is_ok());
                model.clear();
                model_elem = 0;
            }
            _ => {
                assert_eq!(array.len(), model_len);
            }
        }
        assert_eq!(array.as_bytes(), &model[..]);
    }
});
