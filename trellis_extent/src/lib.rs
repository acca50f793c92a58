// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_extent --heading-base-level=0

//! Trellis Extent: per-index axis geometry for virtualized grids.
//!
//! A grid axis (the rows of a table, the columns of a spreadsheet) is a dense
//! strip of items indexed `0..len`, each with an integer pixel extent. This
//! crate answers the geometry questions a virtualized renderer asks about such
//! a strip without ever touching item *content*:
//!
//! - [`Extents`]: the trait describing an axis — per-index extents, cumulative
//!   offsets, total extent, and offset-to-index lookup. Methods take `&mut self`
//!   so implementations can maintain lazy caches.
//! - [`ExtentStore`]: the workhorse implementation. Per-index sizes live in a
//!   dense vector; cumulative offsets are kept in a prefix table that is
//!   rebuilt lazily after mutations, giving `O(log n)` offset-to-index lookup
//!   via binary search.
//! - [`UniformExtents`]: an all-items-equal model where every query is `O(1)`,
//!   for fixed-height lists and for baselines in tests and benchmarks.
//!
//! Extents are `u32` logical pixels; offsets and totals are `u64` so that very
//! long axes cannot overflow. Out-of-range writes are ignored rather than
//! panicking, and reads clamp, matching the fail-soft conventions of the
//! interactive widgets this crate serves.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_extent::{ExtentStore, Extents};
//!
//! // Five rows of varying heights; rows added later default to 20px.
//! let mut rows = ExtentStore::new(5, 20);
//! rows.set_extent(1, 35);
//!
//! assert_eq!(rows.offset_of(2), 55);
//! assert_eq!(rows.total_extent(), 115);
//!
//! // Which rows intersect a 40px-tall viewport scrolled to 30px?
//! // Row 1 spans [20, 55) and row 2 spans [55, 75).
//! assert_eq!(rows.visible_range(30, 40), 1..3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::ops::Range;

mod store;
mod uniform;

pub use store::ExtentStore;
pub use uniform::UniformExtents;

/// A dense 1D strip of items with per-item pixel extents.
///
/// Methods take `&mut self` because implementations are expected to maintain
/// lazy caches (for example a prefix-sum table) that are rebuilt on demand.
///
/// Implementations must uphold, for every valid index `i`:
/// `offset_of(i + 1) == offset_of(i) + extent_of(i)` (where `offset_of(len)`
/// is the total extent), and `total_extent()` equals the sum of all extents.
pub trait Extents {
    /// Returns the number of items on the axis.
    fn len(&mut self) -> usize;

    /// Returns `true` if the axis has no items.
    fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Returns the sum of all extents, in pixels.
    fn total_extent(&mut self) -> u64;

    /// Returns the extent of `index`, or 0 if out of range.
    fn extent_of(&mut self, index: usize) -> u32;

    /// Returns the cumulative offset of the leading edge of `index`.
    ///
    /// `index == len` is permitted and yields the total extent; anything
    /// beyond clamps to the total.
    fn offset_of(&mut self, index: usize) -> u64;

    /// Returns the index whose pixel span contains `offset`.
    ///
    /// Offsets at or beyond the total extent clamp to the last index; an
    /// empty axis yields 0.
    fn index_at_offset(&mut self, offset: u64) -> usize;

    /// Returns the half-open range of indices intersecting the viewport
    /// `[viewport_offset, viewport_offset + viewport_extent)`.
    ///
    /// An empty axis or an empty viewport yields an empty range. Items whose
    /// span merely touches the window boundary without overlapping it (this
    /// includes zero-extent items sitting exactly on a boundary) are excluded;
    /// zero-extent items strictly inside the window fall within the returned
    /// contiguous range and occupy no pixels.
    fn visible_range(&mut self, viewport_offset: u64, viewport_extent: u64) -> Range<usize> {
        let len = self.len();
        if len == 0 || viewport_extent == 0 {
            return 0..0;
        }
        if viewport_offset >= self.total_extent() {
            return len..len;
        }
        let start = self.index_at_offset(viewport_offset);
        // Index containing the last visible pixel, then one past it.
        let last = viewport_offset.saturating_add(viewport_extent) - 1;
        let end = self.index_at_offset(last) + 1;
        start..end
    }
}
