// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_extent::{ExtentStore, Extents};

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// A store with scattered non-default extents, as after a user resized some
/// of the rows.
fn varied_store(len: usize, seed: u64) -> ExtentStore {
    let mut store = ExtentStore::new(len, 24);
    let mut rng = Lcg::new(seed);
    for _ in 0..len / 8 {
        let index = rng.next_u32() as usize % len;
        let extent = 8 + rng.next_u32() % 64;
        store.set_extent(index, extent);
    }
    store
}

fn bench_index_at_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("extent/index_at_offset");

    // Hypothesis: warm lookups are a binary search over the prefix table,
    // so per-query cost grows only logarithmically with the row count.
    for len in [1_024usize, 16_384, 262_144] {
        let mut store = varied_store(len, 7);
        let total = store.total_extent();
        let mut probe = 0_u64;
        group.bench_with_input(BenchmarkId::new("warm", len), &total, |b, &total| {
            b.iter(|| {
                probe = probe.wrapping_add(0x9e37_79b9);
                black_box(store.index_at_offset(probe % total));
            });
        });
    }

    group.finish();
}

fn bench_edit_then_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("extent/edit_then_lookup");

    // Hypothesis: the first lookup after an edit pays the linear prefix
    // rebuild, so an interactive resize costs one rebuild per frame rather
    // than one per query.
    for len in [1_024usize, 16_384, 262_144] {
        let mut warm = varied_store(len, 7);
        warm.total_extent();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rebuild", len), &warm, |b, warm| {
            b.iter_batched(
                || warm.clone(),
                |mut store| {
                    store.set_extent(len / 2, 96);
                    let mid = store.total_extent() / 2;
                    black_box(store.index_at_offset(mid));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("extent/visible_range");

    // Hypothesis: mapping a viewport to an index range is two lookups, flat
    // in the content size.
    for len in [16_384usize, 262_144] {
        let mut store = varied_store(len, 11);
        let total = store.total_extent();
        let mut probe = 0_u64;
        group.bench_with_input(BenchmarkId::new("window", len), &total, |b, &total| {
            b.iter(|| {
                probe = probe.wrapping_add(0x9e37_79b9);
                black_box(store.visible_range(probe % total, 720));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_index_at_offset,
    bench_edit_then_lookup,
    bench_visible_range
);
criterion_main!(benches);
