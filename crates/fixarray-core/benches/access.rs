//! Criterion benchmarks for element access.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fixarray_core::FixedArray;

fn bench_access(c: &mut Criterion) {
    let elem_sizes: Vec<usize> = vec![4, 12, 64, 256];
    let length = 1_024;

    let mut group = c.benchmark_group("set");
    for &elem_size in &elem_sizes {
        let mut array = FixedArray::with_layout(length, elem_size).unwrap();
        let value = vec![0xA5u8; elem_size];
        group.bench_with_input(BenchmarkId::from_parameter(elem_size), &elem_size, |b, _| {
            b.iter(|| {
                for i in 0..length {
                    array.set(i, &value).unwrap();
                }
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("get");
    for &elem_size in &elem_sizes {
        let array = FixedArray::with_layout(length, elem_size).unwrap();
        let mut out = vec![0u8; elem_size];
        group.bench_with_input(BenchmarkId::from_parameter(elem_size), &elem_size, |b, _| {
            b.iter(|| {
                for i in 0..length {
                    array.get(i, &mut out).unwrap();
                }
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("initialize");
    for &elem_size in &elem_sizes {
        group.bench_with_input(
            BenchmarkId::from_parameter(elem_size),
            &elem_size,
            |b, &elem_size| {
                b.iter(|| FixedArray::with_layout(length, elem_size).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_access);
criterion_main!(benches);
