//! Packed bit-array sieve against a one-bool-per-byte sieve at the same limits.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitsieve::{compute_primes, BitSieve};

/// Baseline: the same algorithm with a Vec<bool>.
fn bool_sieve(limit: usize) -> Vec<u64> {
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for num in 2..=limit {
        if !composite[num] {
            primes.push(num as u64);
            let mut multiple = num * num;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += num;
            }
        }
    }
    primes
}

fn bench_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for limit in [10_000u64, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(limit));
        group.bench_with_input(BenchmarkId::new("bit_array", limit), &limit, |b, &limit| {
            b.iter(|| compute_primes(black_box(limit)))
        });
        group.bench_with_input(BenchmarkId::new("bool_array", limit), &limit, |b, &limit| {
            b.iter(|| bool_sieve(black_box(limit as usize)))
        });
    }

    group.finish();
}

fn bench_first_primes(c: &mut Criterion) {
    c.bench_function("first_1000_of_10_000_000", |b| {
        b.iter(|| {
            BitSieve::new(black_box(10_000_000))
                .map(|sieve| sieve.take(1000).count())
        })
    });
}

criterion_group!(benches, bench_limits, bench_first_primes);
criterion_main!(benches);
