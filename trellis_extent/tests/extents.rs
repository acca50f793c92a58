// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-model checks for axis geometry: cumulative-offset consistency,
//! offset-to-index lookup, and visible-range resolution.

use trellis_extent::{ExtentStore, Extents, UniformExtents};

fn store_from(sizes: &[u32]) -> ExtentStore {
    let mut store = ExtentStore::new(sizes.len(), 0);
    store.set_min_extent(0);
    for (i, &size) in sizes.iter().enumerate() {
        store.set_extent(i, size);
    }
    store
}

#[test]
fn offsets_are_cumulative_sums() {
    let mut rows = store_from(&[10, 20, 10, 5, 15]);
    let mut acc = 0_u64;
    for i in 0..5 {
        assert_eq!(rows.offset_of(i), acc);
        acc += u64::from(rows.extent_of(i));
    }
    assert_eq!(rows.total_extent(), acc);
    assert_eq!(rows.offset_of(5), acc);
}

#[test]
fn visible_range_matches_span_intersection() {
    let sizes = [10_u32, 20, 10, 5, 15, 0, 30, 1, 1, 8];
    let mut rows = store_from(&sizes);
    let total = rows.total_extent();

    for offset in 0..=total {
        for extent in [0_u64, 1, 7, 25, 60, 200] {
            let range = rows.visible_range(offset, extent);
            let window_end = offset + extent;
            for i in 0..sizes.len() {
                let start = rows.offset_of(i);
                let end = start + u64::from(rows.extent_of(i));
                let intersects = extent > 0 && start < window_end && end > offset;
                if intersects {
                    assert!(
                        range.contains(&i),
                        "index {i} [{start},{end}) missing from {range:?} for window [{offset},{window_end})"
                    );
                }
            }
            // Nothing before the first or after the last intersecting index.
            if let (Some(first), Some(last)) = (range.clone().next(), range.clone().last()) {
                let first_end = rows.offset_of(first) + u64::from(rows.extent_of(first));
                let last_start = rows.offset_of(last);
                assert!(first_end > offset, "leading index ends before the window");
                assert!(last_start < window_end, "trailing index starts past the window");
            }
        }
    }
}

#[test]
fn varied_heights_viewport_picks_intersecting_rows() {
    // Heights 10/20/10/5/15 give row spans [0,10) [10,30) [30,40) [40,45) [45,60).
    let mut rows = store_from(&[10, 20, 10, 5, 15]);
    assert_eq!(rows.offset_of(3), 40);
    // A 20px viewport at offset 15 covers [15,35): rows 1 and 2.
    assert_eq!(rows.visible_range(15, 20), 1..3);
    // Nudging one pixel further reaches row 3's span [40,45).
    assert_eq!(rows.visible_range(21, 20), 1..4);
}

#[test]
fn empty_axis_yields_empty_range() {
    let mut rows = ExtentStore::new(0, 20);
    assert_eq!(rows.visible_range(0, 100), 0..0);
    assert_eq!(rows.total_extent(), 0);

    let mut uniform = UniformExtents::new(0, 20);
    assert_eq!(uniform.visible_range(0, 100), 0..0);
}

#[test]
fn store_and_uniform_agree_on_equal_extents() {
    let mut store = ExtentStore::new(50, 16);
    let mut uniform = UniformExtents::new(50, 16);
    for offset in [0_u64, 1, 15, 16, 400, 799, 800, 2000] {
        assert_eq!(store.index_at_offset(offset), uniform.index_at_offset(offset));
    }
    for index in [0_usize, 1, 25, 49, 50, 60] {
        assert_eq!(store.offset_of(index), uniform.offset_of(index));
    }
    assert_eq!(store.visible_range(100, 64), uniform.visible_range(100, 64));
}

#[test]
fn resize_keeps_untouched_entries() {
    let mut cols = ExtentStore::new(4, 80);
    cols.set_extent(2, 120);
    cols.set_len(6);
    assert_eq!(cols.extent(2), Some(120));
    assert_eq!(cols.extent(5), Some(80));
    cols.set_len(2);
    assert_eq!(cols.extent(1), Some(80));
    assert_eq!(cols.extent(2), None);
    // Growing again re-fills from the default, not the old value.
    cols.set_len(3);
    assert_eq!(cols.extent(2), Some(80));
}

#[test]
fn changing_the_default_affects_only_later_growth() {
    let mut rows = ExtentStore::new(2, 25);
    rows.set_default_extent(40);
    assert_eq!(rows.default_extent(), 40);
    assert_eq!(rows.extent(1), Some(25));
    rows.set_len(4);
    assert_eq!(rows.extent(1), Some(25));
    assert_eq!(rows.extent(2), Some(40));
    assert_eq!(rows.total_extent(), 130);
}
