// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard cursor and its shift-extended region.

use trellis_damage::CellSpan;

/// The keyboard cursor: an anchor cell plus an optional extension cell.
///
/// When the cursor has been extended (shift-navigation or shift-click), the
/// pair spans a rectangular region; otherwise the region is the single
/// anchor cell. Every mutator returns the union of the old and new regions
/// so the caller can repaint exactly what changed, or `None` when nothing
/// did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellCursor {
    current: Option<(usize, usize)>,
    extension: Option<(usize, usize)>,
}

impl CellCursor {
    /// A cursor that is not placed on any cell.
    pub const fn new() -> Self {
        Self {
            current: None,
            extension: None,
        }
    }

    /// The anchor cell, if the cursor is placed.
    #[must_use]
    pub const fn current(&self) -> Option<(usize, usize)> {
        self.current
    }

    /// The cell the region extends to. Equals [`current`](Self::current)
    /// when the cursor has not been extended.
    #[must_use]
    pub const fn extension(&self) -> Option<(usize, usize)> {
        match self.extension {
            Some(cell) => Some(cell),
            None => self.current,
        }
    }

    /// The rectangular region covered by the cursor, if placed.
    #[must_use]
    pub fn span(&self) -> Option<CellSpan> {
        let (row, col) = self.current?;
        let (ext_row, ext_col) = self.extension.unwrap_or((row, col));
        Some(CellSpan::new(row, ext_row, col, ext_col))
    }

    /// Places the anchor on `(row, col)` and collapses any extension.
    ///
    /// Returns the region to repaint, covering both the old and new
    /// positions, or `None` if the cursor was already exactly there.
    pub fn move_to(&mut self, row: usize, col: usize) -> Option<CellSpan> {
        if self.current == Some((row, col)) && self.extension.is_none() {
            return None;
        }
        let old = self.span();
        self.current = Some((row, col));
        self.extension = None;
        union_opt(old, self.span())
    }

    /// Extends the region from the anchor to `(row, col)`.
    ///
    /// With no anchor placed this behaves like [`move_to`](Self::move_to).
    /// Returns the region to repaint, or `None` if nothing changed.
    pub fn extend_to(&mut self, row: usize, col: usize) -> Option<CellSpan> {
        let Some(anchor) = self.current else {
            return self.move_to(row, col);
        };
        let target = if (row, col) == anchor {
            None
        } else {
            Some((row, col))
        };
        if self.extension == target {
            return None;
        }
        let old = self.span();
        self.extension = target;
        union_opt(old, self.span())
    }

    /// Removes the cursor entirely. Returns the vacated region, if any.
    pub fn clear(&mut self) -> Option<CellSpan> {
        let old = self.span();
        self.current = None;
        self.extension = None;
        old
    }

    /// Pulls the cursor back inside a `rows` by `cols` grid.
    ///
    /// Cells at or past the new bounds are clamped to the last valid index;
    /// if either count is zero the cursor is cleared. Returns the region to
    /// repaint, or `None` if the cursor already fit.
    pub fn clamp_to(&mut self, rows: usize, cols: usize) -> Option<CellSpan> {
        if rows == 0 || cols == 0 {
            return self.clear();
        }
        let clamp = |(row, col): (usize, usize)| (row.min(rows - 1), col.min(cols - 1));
        let current = self.current.map(clamp);
        let extension = self.extension.map(clamp);
        if current == self.current && extension == self.extension {
            return None;
        }
        let old = self.span();
        self.current = current;
        self.extension = if extension == current { None } else { extension };
        union_opt(old, self.span())
    }
}

fn union_opt(a: Option<CellSpan>, b: Option<CellSpan>) -> Option<CellSpan> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (span, None) | (None, span) => span,
    }
}
