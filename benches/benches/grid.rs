// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use trellis_grid::{Axis, CellSource, Grid, GridConfig};

struct Counts {
    rows: usize,
    cols: usize,
}

impl CellSource for Counts {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn col_count(&self) -> usize {
        self.cols
    }
}

fn grid_with(rows: usize) -> Grid<Counts> {
    Grid::new(
        Counts { rows, cols: 16 },
        Rect::new(0.0, 0.0, 1280.0, 720.0),
        GridConfig::default(),
    )
}

fn bench_scroll_then_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/scroll_then_paint");

    // Hypothesis: a scroll damages everything, but the paint that follows
    // walks only the visible window, so the frame cost stays flat as the
    // row count grows.
    for rows in [10_000usize, 100_000, 1_000_000] {
        let mut grid = grid_with(rows);
        let max = grid.scroll().vertical().max_offset();
        let mut step = 0_u64;
        group.bench_with_input(BenchmarkId::from_parameter(rows), &max, |b, &max| {
            b.iter(|| {
                step = step.wrapping_add(40_503);
                grid.scroll_to(Axis::Vertical, step % (max + 1));
                black_box(grid.paint());
            });
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/hit_test");

    // Hypothesis: classifying a pointer position is two offset lookups,
    // independent of the content size.
    for rows in [10_000usize, 1_000_000] {
        let mut grid = grid_with(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(grid.hit_test(Point::new(640.0, 360.0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scroll_then_paint, bench_hit_test);
criterion_main!(benches);
