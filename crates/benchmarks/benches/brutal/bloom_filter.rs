//! # Bloom Filter Brutal Benchmarks
//!
//! Claims to validate:
//! - Sizing: `bits_needed` is constant time
//! - Insert: O(d) hash computations, no allocation
//! - Find: O(d) worst case, early exit on the first zero bit
//! - `bits_set_count`: O(1), independent of N
//!
//! Brutal Conditions:
//! - Full-size filter (n = 100 000, d = 4, p = 0.05, N = 624 699)
//! - Keys sharing a long common prefix
//! - High d values
//! - Both hash families

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use qc_benchmarks::utils::{generate_keys, generate_prefixed_keys};
use qc_bloom::{bits_needed, BloomFilter, HashFamily, Murmur3Family, SipHashFamily};
use std::time::Duration;

const NUM_KEYS: usize = 100_000;

fn populated_filter<H: HashFamily>(hasher: H) -> BloomFilter<H> {
    let mut filter = BloomFilter::with_hasher(NUM_KEYS, 4, 0.05, hasher)
        .expect("benchmark parameters are valid");
    for key in generate_keys(NUM_KEYS, 1) {
        filter.insert(&key);
    }
    filter
}

pub fn brutal_sizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/brutal/sizing");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("bits_needed", |b| {
        b.iter(|| bits_needed(black_box(NUM_KEYS), black_box(4), black_box(0.05)))
    });

    group.bench_function("construct_full_size_filter", |b| {
        b.iter(|| BloomFilter::new(black_box(NUM_KEYS), 4, 0.05))
    });

    group.finish();
}

pub fn brutal_insert_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/brutal/insert");
    group.measurement_time(Duration::from_secs(10));

    // Insert is O(d) hash computations
    for d in [1u32, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("single_insert", d), &d, |b, &d| {
            let mut filter = BloomFilter::new(NUM_KEYS, d, 0.05).expect("valid parameters");
            let key = generate_keys(1, 2)[0];
            b.iter(|| filter.insert(black_box(&key)));
        });
    }

    let keys = generate_keys(10_000, 3);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("bulk_insert_10000_murmur", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(keys.len(), 4, 0.05).expect("valid parameters");
            for key in &keys {
                filter.insert(black_box(key));
            }
            black_box(filter.bits_set_count())
        });
    });

    group.bench_function("bulk_insert_10000_siphash", |b| {
        b.iter(|| {
            let mut filter =
                BloomFilter::with_hasher(keys.len(), 4, 0.05, SipHashFamily::with_key(9))
                    .expect("valid parameters");
            for key in &keys {
                filter.insert(black_box(key));
            }
            black_box(filter.bits_set_count())
        });
    });

    // Keys that differ only in their last four bytes
    let prefixed = generate_prefixed_keys(10_000);
    group.bench_function("adversarial_insert_common_prefix", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(prefixed.len(), 4, 0.05).expect("valid parameters");
            for key in &prefixed {
                filter.insert(black_box(key));
            }
            black_box(filter.bits_set_count())
        });
    });

    group.finish();
}

pub fn brutal_find_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/brutal/find");
    group.measurement_time(Duration::from_secs(10));

    let filter = populated_filter(Murmur3Family::new());
    let inserted = generate_keys(1, 1)[0];
    let probes = generate_keys(10_000, 4);

    // Worst case: all d bits are checked
    group.bench_function("find_inserted_key", |b| {
        b.iter(|| black_box(filter.find(black_box(&inserted))))
    });

    // Usually exits after the first or second bit
    group.bench_function("find_absent_key", |b| {
        let absent = probes[0];
        b.iter(|| black_box(filter.find(black_box(&absent))))
    });

    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("bulk_find_10000_absent", |b| {
        b.iter(|| {
            let hits = probes.iter().filter(|key| filter.find(black_box(*key))).count();
            black_box(hits)
        });
    });

    group.finish();
}

pub fn brutal_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/brutal/stats");
    group.measurement_time(Duration::from_secs(5));

    let filter = populated_filter(Murmur3Family::new());

    // Must not scan the 624 699-bit array
    group.bench_function("bits_set_count_full_filter", |b| {
        b.iter(|| black_box(filter.bits_set_count()))
    });

    group.bench_function("estimated_false_positive_rate", |b| {
        b.iter(|| black_box(filter.estimated_false_positive_rate()))
    });

    group.bench_function("occupancy_false_positive_rate", |b| {
        b.iter(|| black_box(filter.occupancy_false_positive_rate()))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_sizing(c);
    brutal_insert_operations(c);
    brutal_find_operations(c);
    brutal_statistics(c);
}
