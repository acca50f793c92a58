// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Extents;

/// An axis where every entry has the same extent.
///
/// All queries are `O(1)` arithmetic; there is nothing to cache. Useful for
/// fixed-height lists and as a baseline in tests and benchmarks.
#[derive(Clone, Copy, Debug)]
pub struct UniformExtents {
    len: usize,
    extent: u32,
}

impl UniformExtents {
    /// Creates an axis with `len` entries of `extent` pixels each.
    #[must_use]
    pub const fn new(len: usize, extent: u32) -> Self {
        Self { len, extent }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the axis has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the shared per-entry extent.
    #[must_use]
    pub const fn extent(&self) -> u32 {
        self.extent
    }

    /// Sets the number of entries.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the shared per-entry extent.
    pub fn set_extent(&mut self, extent: u32) {
        self.extent = extent;
    }
}

impl Extents for UniformExtents {
    fn len(&mut self) -> usize {
        self.len
    }

    fn total_extent(&mut self) -> u64 {
        self.len as u64 * u64::from(self.extent)
    }

    fn extent_of(&mut self, index: usize) -> u32 {
        if index < self.len { self.extent } else { 0 }
    }

    fn offset_of(&mut self, index: usize) -> u64 {
        index.min(self.len) as u64 * u64::from(self.extent)
    }

    fn index_at_offset(&mut self, offset: u64) -> usize {
        if self.len == 0 || self.extent == 0 {
            return 0;
        }
        let last = (self.len - 1) as u64;
        #[expect(clippy::cast_possible_truncation, reason = "clamped to `len - 1`")]
        let index = (offset / u64::from(self.extent)).min(last) as usize;
        index
    }
}
