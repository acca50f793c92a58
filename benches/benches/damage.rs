// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_damage::{CellSpan, DamageAccumulator};

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

fn scattered_cells(marks: usize, seed: u64) -> Vec<CellSpan> {
    let mut rng = Lcg::new(seed);
    (0..marks)
        .map(|_| {
            let row = rng.next_u32() as usize % 100_000;
            let col = rng.next_u32() as usize % 64;
            CellSpan::cell(row, col)
        })
        .collect()
}

fn bench_mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("damage/mark");

    // Hypothesis: the accumulator keeps a single bounding box, so per-mark
    // cost stays flat no matter how many marks it has already absorbed.
    for marks in [64_usize, 1_024, 16_384] {
        let cells = scattered_cells(marks, 0xDA_4A6E + marks as u64);
        group.throughput(Throughput::Elements(marks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(marks), &cells, |b, cells| {
            b.iter_batched(
                DamageAccumulator::new,
                |mut damage| {
                    for &cell in cells {
                        damage.mark(cell);
                    }
                    black_box(damage.take_and_reset())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_mark_take_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("damage/cycle");

    // Hypothesis: the per-frame path (a few marks, one take) runs in
    // constant time with no allocation, so a host can call it per event.
    group.bench_function("mark_then_take", |b| {
        let mut damage = DamageAccumulator::new();
        b.iter(|| {
            damage.mark(CellSpan::cell(10, 2));
            damage.mark(CellSpan::new(12, 40, 0, 63));
            damage.mark(CellSpan::cell(700, 8));
            black_box(damage.take_and_reset())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mark, bench_mark_take_cycle);
criterion_main!(benches);
