// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive 2D spans of cell indices.

/// An inclusive box of cell indices: rows `top..=bottom`, columns
/// `left..=right`.
///
/// Spans are always normalized — constructors order the bounds, so `top <=
/// bottom` and `left <= right` hold for every value that can be observed.
/// A span therefore covers at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    /// First row covered.
    pub top: usize,
    /// Last row covered (inclusive).
    pub bottom: usize,
    /// First column covered.
    pub left: usize,
    /// Last column covered (inclusive).
    pub right: usize,
}

impl CellSpan {
    /// Creates a span covering rows `top..=bottom` and columns
    /// `left..=right`, swapping bounds given in reverse order.
    #[must_use]
    pub const fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        let (top, bottom) = if top <= bottom { (top, bottom) } else { (bottom, top) };
        let (left, right) = if left <= right { (left, right) } else { (right, left) };
        Self { top, bottom, left, right }
    }

    /// Creates a span covering the single cell `(row, col)`.
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> Self {
        Self { top: row, bottom: row, left: col, right: col }
    }

    /// Returns the number of rows covered.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Returns the number of columns covered.
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.right - self.left + 1
    }

    /// Returns `true` if `(row, col)` lies within the span.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Returns the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
        }
    }

    /// Returns the overlap of `self` and `other`, or `None` if they are
    /// disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        (top <= bottom && left <= right).then_some(Self { top, bottom, left, right })
    }
}
