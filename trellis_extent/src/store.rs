// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::Extents;

/// Per-index extents backed by a dense vector with a lazy prefix-offset table.
///
/// `ExtentStore` is the variable-size axis model. Each index has its own
/// `u32` extent; cumulative offsets are answered from a prefix table with
/// `len + 1` entries that is invalidated by any size mutation and rebuilt on
/// the next offset query, so a burst of writes costs one rebuild.
///
/// Two configuration knobs shape mutations:
/// - the **default extent** is assigned to indices created by [`set_len`]
///   growth, and
/// - the **minimum extent** (1 unless configured otherwise) is a floor applied
///   to every explicit [`set_extent`] write. Setting the minimum to 0 makes
///   zero-extent (hidden) entries expressible.
///
/// [`set_len`]: ExtentStore::set_len
/// [`set_extent`]: ExtentStore::set_extent
#[derive(Clone, Debug)]
pub struct ExtentStore {
    extents: Vec<u32>,
    default_extent: u32,
    min_extent: u32,
    // Leading-edge offsets, `extents.len() + 1` entries when fresh.
    offsets: Vec<u64>,
    dirty: bool,
}

impl ExtentStore {
    /// Creates a store with `len` entries, all at `default_extent`.
    ///
    /// The default is stored as given; the minimum extent starts at 1 and
    /// applies only to later explicit writes.
    #[must_use]
    pub fn new(len: usize, default_extent: u32) -> Self {
        let mut extents = Vec::new();
        extents.resize(len, default_extent);
        Self {
            extents,
            default_extent,
            min_extent: 1,
            offsets: Vec::new(),
            dirty: true,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Returns the extent assigned to newly created entries.
    #[must_use]
    pub fn default_extent(&self) -> u32 {
        self.default_extent
    }

    /// Sets the extent assigned to newly created entries.
    ///
    /// Existing entries are unaffected.
    pub fn set_default_extent(&mut self, extent: u32) {
        self.default_extent = extent;
    }

    /// Returns the floor applied to explicit extent writes.
    #[must_use]
    pub fn min_extent(&self) -> u32 {
        self.min_extent
    }

    /// Sets the floor applied to explicit extent writes.
    ///
    /// Already-stored extents are not revisited.
    pub fn set_min_extent(&mut self, min: u32) {
        self.min_extent = min;
    }

    /// Resizes the axis to `len` entries.
    ///
    /// Entries that survive keep their extents; new entries receive the
    /// default extent. Shrinking truncates.
    pub fn set_len(&mut self, len: usize) {
        if len == self.extents.len() {
            return;
        }
        self.extents.resize(len, self.default_extent);
        self.dirty = true;
    }

    /// Returns the extent of `index`, or `None` if out of range.
    #[must_use]
    pub fn extent(&self, index: usize) -> Option<u32> {
        self.extents.get(index).copied()
    }

    /// Sets the extent of `index`, clamped to the minimum extent.
    ///
    /// Returns `true` if the stored value changed. Out-of-range indices are
    /// ignored and report `false`.
    pub fn set_extent(&mut self, index: usize, extent: u32) -> bool {
        let clamped = extent.max(self.min_extent);
        match self.extents.get_mut(index) {
            Some(slot) if *slot != clamped => {
                *slot = clamped;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Sets every entry to `extent` (clamped to the minimum extent).
    ///
    /// Returns `true` if any stored value changed.
    pub fn set_all(&mut self, extent: u32) -> bool {
        let clamped = extent.max(self.min_extent);
        let mut changed = false;
        for slot in &mut self.extents {
            if *slot != clamped {
                *slot = clamped;
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
        changed
    }

    fn offsets(&mut self) -> &[u64] {
        if self.dirty {
            self.offsets.clear();
            self.offsets.reserve(self.extents.len() + 1);
            let mut acc = 0_u64;
            self.offsets.push(acc);
            for &extent in &self.extents {
                acc += u64::from(extent);
                self.offsets.push(acc);
            }
            self.dirty = false;
        }
        &self.offsets
    }
}

impl Extents for ExtentStore {
    fn len(&mut self) -> usize {
        self.extents.len()
    }

    fn total_extent(&mut self) -> u64 {
        match self.offsets().last() {
            Some(&total) => total,
            None => 0,
        }
    }

    fn extent_of(&mut self, index: usize) -> u32 {
        self.extents.get(index).copied().unwrap_or(0)
    }

    fn offset_of(&mut self, index: usize) -> u64 {
        let offsets = self.offsets();
        offsets[index.min(offsets.len() - 1)]
    }

    fn index_at_offset(&mut self, offset: u64) -> usize {
        let len = self.extents.len();
        if len == 0 {
            return 0;
        }
        // `offsets[1..]` holds each entry's trailing edge; the first entry
        // whose trailing edge lies beyond `offset` contains it.
        let index = self.offsets()[1..].partition_point(|&end| end <= offset);
        index.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_with_default() {
        let mut store = ExtentStore::new(4, 25);
        assert_eq!(store.len(), 4);
        assert_eq!(store.extent(3), Some(25));
        assert_eq!(store.total_extent(), 100);
    }

    #[test]
    fn grow_preserves_and_defaults() {
        let mut store = ExtentStore::new(2, 10);
        assert!(store.set_extent(1, 40));
        store.set_len(4);
        assert_eq!(store.extent(1), Some(40));
        assert_eq!(store.extent(2), Some(10));
        assert_eq!(store.total_extent(), 70);
    }

    #[test]
    fn shrink_truncates() {
        let mut store = ExtentStore::new(5, 10);
        store.set_extent(4, 99);
        store.set_len(3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.extent(4), None);
        assert_eq!(store.total_extent(), 30);
    }

    #[test]
    fn set_extent_clamps_to_minimum() {
        let mut store = ExtentStore::new(3, 40);
        store.set_min_extent(10);
        assert!(store.set_extent(1, 3));
        assert_eq!(store.extent(1), Some(10));
    }

    #[test]
    fn set_extent_out_of_range_is_ignored() {
        let mut store = ExtentStore::new(3, 40);
        assert!(!store.set_extent(3, 55));
        assert_eq!(store.len(), 3);
        assert_eq!(store.total_extent(), 120);
    }

    #[test]
    fn set_extent_reports_no_change() {
        let mut store = ExtentStore::new(3, 40);
        assert!(!store.set_extent(1, 40));
        assert!(store.set_extent(1, 41));
        assert!(!store.set_extent(1, 41));
    }

    #[test]
    fn offsets_accumulate_extents() {
        let mut store = ExtentStore::new(5, 0);
        store.set_min_extent(0);
        for (i, extent) in [10, 20, 10, 5, 15].into_iter().enumerate() {
            store.set_extent(i, extent);
        }
        for i in 0..5 {
            let here = store.offset_of(i);
            let next = store.offset_of(i + 1);
            assert_eq!(next, here + u64::from(store.extent_of(i)));
        }
        assert_eq!(store.total_extent(), 60);
    }

    #[test]
    fn index_lookup_hits_boundaries() {
        let mut store = ExtentStore::new(3, 10);
        assert_eq!(store.index_at_offset(0), 0);
        assert_eq!(store.index_at_offset(9), 0);
        assert_eq!(store.index_at_offset(10), 1);
        assert_eq!(store.index_at_offset(29), 2);
        // At and beyond the total extent clamps to the last index.
        assert_eq!(store.index_at_offset(30), 2);
        assert_eq!(store.index_at_offset(1000), 2);
    }

    #[test]
    fn zero_extent_entries_are_skipped_by_lookup() {
        let mut store = ExtentStore::new(4, 10);
        store.set_min_extent(0);
        store.set_extent(1, 0);
        store.set_extent(2, 0);
        // Spans: [0,10) [10,10) [10,10) [10,20).
        assert_eq!(store.index_at_offset(10), 3);
        assert_eq!(store.total_extent(), 20);
    }

    #[test]
    fn set_all_overwrites_every_entry() {
        let mut store = ExtentStore::new(3, 10);
        store.set_extent(2, 50);
        assert!(store.set_all(20));
        assert_eq!(store.extent(0), Some(20));
        assert_eq!(store.extent(2), Some(20));
        assert!(!store.set_all(20));
    }

    #[test]
    fn empty_store_is_harmless() {
        let mut store = ExtentStore::new(0, 10);
        assert!(store.is_empty());
        assert_eq!(store.total_extent(), 0);
        assert_eq!(store.index_at_offset(5), 0);
        assert_eq!(store.offset_of(0), 0);
        assert_eq!(store.visible_range(0, 100), 0..0);
    }
}
