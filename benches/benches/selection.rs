// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_selection::{IndexSelection, SelectAction};

fn fresh(len: usize) -> IndexSelection {
    let mut selection = IndexSelection::new();
    selection.set_len(len);
    selection
}

fn bench_select_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/select_range");

    // Hypothesis: an additive range touches only the range, while a
    // replacing range pays a full sweep to deselect everything outside it.
    for len in [1_024usize, 16_384, 262_144] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("additive", len), &len, |b, &len| {
            b.iter_batched(
                || fresh(len),
                |mut selection| {
                    selection.select_range(len / 4, 3 * len / 4, true);
                    black_box(selection);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("replacing", len), &len, |b, &len| {
            b.iter_batched(
                || fresh(len),
                |mut selection| {
                    selection.select_range(len / 4, 3 * len / 4, false);
                    black_box(selection);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/select_all");

    // Hypothesis: toggling every flag is one linear sweep regardless of how
    // many flags were set beforehand.
    for len in [16_384usize, 262_144] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("toggle", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut selection = fresh(len);
                    selection.select_range(0, len / 2, true);
                    selection
                },
                |mut selection| {
                    selection.select_all(SelectAction::Toggle);
                    black_box(selection);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_range, bench_select_all);
criterion_main!(benches);
