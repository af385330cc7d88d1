//! Bit-manipulation benchmarks: the tier-selected symbols against the
//! software sequences they fall back to.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdport::bits::{self, soft};
use simdport::ACTIVE_TIER;

const SAMPLES: usize = 1_024;

fn generate_test_data() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..SAMPLES).map(|_| rng.random::<u64>() >> rng.random_range(0..64)).collect()
}

fn benchmark_counts(c: &mut Criterion) {
    let data = generate_test_data();
    let mut group = c.benchmark_group(format!("counts_{ACTIVE_TIER}"));

    group.bench_function("leading_zero_count/selected", |b| {
        b.iter(|| {
            black_box(&data)
                .iter()
                .map(|&x| bits::leading_zero_count_u64(x))
                .sum::<u32>()
        })
    });
    group.bench_function("leading_zero_count/soft", |b| {
        b.iter(|| {
            black_box(&data)
                .iter()
                .map(|&x| soft::leading_zero_count_u64(x))
                .sum::<u32>()
        })
    });
    group.bench_function("pop_count/soft", |b| {
        b.iter(|| black_box(&data).iter().map(|&x| soft::pop_count_u64(x)).sum::<u32>())
    });
    group.bench_function("reverse_bits/soft", |b| {
        b.iter(|| {
            black_box(&data)
                .iter()
                .fold(0u64, |acc, &x| acc ^ soft::reverse_element_bits_u64(x))
        })
    });

    group.finish();
}

fn benchmark_wide_multiply(c: &mut Criterion) {
    let data = generate_test_data();
    let mut group = c.benchmark_group(format!("wide_multiply_{ACTIVE_TIER}"));

    group.bench_function("big_mul_u64/selected", |b| {
        b.iter(|| {
            black_box(&data)
                .windows(2)
                .fold(0u64, |acc, w| acc ^ bits::big_mul_u64(w[0], w[1]).0)
        })
    });
    group.bench_function("big_mul_u64/soft", |b| {
        b.iter(|| {
            black_box(&data)
                .windows(2)
                .fold(0u64, |acc, w| acc ^ soft::big_mul_u64(w[0], w[1]).0)
        })
    });
    group.bench_function("multiply_high_i64/soft", |b| {
        b.iter(|| {
            black_box(&data).windows(2).fold(0i64, |acc, w| {
                acc ^ soft::multiply_high_i64(w[0] as i64, w[1] as i64)
            })
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_counts, benchmark_wide_multiply);
criterion_main!(benches);
