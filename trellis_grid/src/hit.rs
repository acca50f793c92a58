// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial classification of pointer positions.

use trellis_scroll::Axis;

/// Region of the grid a point falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitZone {
    /// Inside the body, over a cell.
    Cell,
    /// Inside the row header band, over a row.
    RowHeader,
    /// Inside the column header band, over a column.
    ColHeader,
    /// Over one of the scrollbar tracks.
    Scrollbar(Axis),
    /// Inside the widget but past the content on at least one axis.
    DeadZone,
    /// Outside the widget's outer rect entirely.
    Outside,
}

/// Which cell boundary a point is close enough to grab for resizing.
///
/// Grabbing the left edge of a column resizes the column *before* it, so
/// the first column's left edge is not a resize handle. The same holds for
/// the top edge of the first row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Near the left edge of the hit column; resizes the previous column.
    ColLeft,
    /// Near the right edge of the hit column; resizes it.
    ColRight,
    /// Near the top edge of the hit row; resizes the previous row.
    RowAbove,
    /// Near the bottom edge of the hit row; resizes it.
    RowBelow,
}

/// Result of [`Grid::hit_test`](crate::Grid::hit_test).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hit {
    /// Region the point falls in.
    pub zone: HitZone,
    /// Row under the point, when `zone` resolves one.
    pub row: Option<usize>,
    /// Column under the point, when `zone` resolves one.
    pub col: Option<usize>,
    /// Resize handle under the point, when the matching axis allows
    /// interactive resizing and the point is within the grab margin of a
    /// boundary in a header band.
    pub resize: Option<ResizeEdge>,
}

impl Hit {
    pub(crate) const fn outside() -> Self {
        Self {
            zone: HitZone::Outside,
            row: None,
            col: None,
            resize: None,
        }
    }

    pub(crate) const fn dead_zone() -> Self {
        Self {
            zone: HitZone::DeadZone,
            row: None,
            col: None,
            resize: None,
        }
    }
}
