// benches/bit_access.rs

use bit_array::{BitArray, FixedSeed, InitMode};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_array(size: usize) -> BitArray {
    BitArray::create_with(size, InitMode::Random, &mut FixedSeed::new(42)).unwrap()
}

fn bench_get_bit(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("get_bit");
    for size in sizes {
        let bits = create_array(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut ones = 0usize;
                for i in 0..size {
                    if black_box(bits.get_bit(i)) == Some(true) {
                        ones += 1;
                    }
                }
                ones
            });
        });
    }
    group.finish();
}

fn bench_set_bit(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("set_bit");
    for size in sizes {
        let mut bits = create_array(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    bits.set_bit(black_box(i), i % 3 == 0);
                }
            });
        });
    }
    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for mode in [InitMode::Zeroes, InitMode::Ones, InitMode::Random] {
        group.bench_function(format!("{:?}", mode), |b| {
            let mut source = FixedSeed::new(7);
            b.iter(|| BitArray::create_with(black_box(100_000), mode, &mut source).unwrap());
        });
    }
    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("extend_ones");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let bits = create_array(size);
                bits.extend(black_box(size), InitMode::Ones).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(access_benches, bench_get_bit, bench_set_bit);
criterion_group!(resize_benches, bench_create, bench_extend);
criterion_main!(access_benches, resize_benches);
