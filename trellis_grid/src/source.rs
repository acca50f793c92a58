// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content provider contract between a [`Grid`](crate::Grid) and its host.

use kurbo::Rect;

/// What a [`CellSource::draw_cell`] call is being asked to paint.
///
/// A paint pass is bracketed by [`StartPage`] and [`EndPage`] so a source
/// backed by an external store can lock it once per pass. Between the
/// brackets the engine visits column headers, row headers, and then every
/// damaged visible cell, in that order.
///
/// [`StartPage`]: PaintContext::StartPage
/// [`EndPage`]: PaintContext::EndPage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintContext {
    /// A paint pass is starting. `row`/`col` are the first visible row and
    /// column and `bounds` is the body rect.
    StartPage,
    /// The paint pass has finished. Arguments mirror [`StartPage`].
    ///
    /// [`StartPage`]: PaintContext::StartPage
    EndPage,
    /// A row header cell. `row` names the row; `col` is 0.
    RowHeader,
    /// A column header cell. `col` names the column; `row` is 0.
    ColHeader,
    /// A body cell at `row`/`col`.
    Cell,
}

/// Supplies cell counts, optional per-index size hints, and cell painting
/// for a [`Grid`](crate::Grid).
///
/// The engine treats content as opaque: it never inspects what a cell holds,
/// only how many rows and columns exist and how large each one wants to be.
/// Size hints are pulled lazily, the first time an index enters the visible
/// range; an index that has never been visible contributes the axis default
/// to cumulative offsets until it is first revealed. Explicit size setters on
/// the grid pin an index so its hint is never consulted again.
pub trait CellSource {
    /// Number of rows currently in the data set.
    fn row_count(&self) -> usize;

    /// Number of columns currently in the data set.
    fn col_count(&self) -> usize;

    /// Preferred height in pixels for `row`, or `None` to keep the default.
    fn row_extent_hint(&mut self, row: usize) -> Option<u32> {
        let _ = row;
        None
    }

    /// Preferred width in pixels for `col`, or `None` to keep the default.
    fn col_extent_hint(&mut self, col: usize) -> Option<u32> {
        let _ = col;
        None
    }

    /// Paints one step of a paint pass.
    ///
    /// `bounds` is expressed in the same coordinate space as the grid's outer
    /// rect. Cells straddling the body edge are reported with their full
    /// rect; clipping is the host's business. The default implementation
    /// paints nothing, which suits hosts that only use the grid as a state
    /// machine.
    fn draw_cell(&mut self, context: PaintContext, row: usize, col: usize, bounds: Rect) {
        let _ = (context, row, col, bounds);
    }
}
