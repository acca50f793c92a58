// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome layout: carving the outer rect into body, header bands, and
//! scrollbar tracks.

use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::grid::GridConfig;

/// Where each piece of grid chrome landed, in the outer rect's coordinate
/// space.
///
/// Pieces that are disabled or not currently needed are [`Rect::ZERO`], so
/// point containment against them always fails.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridLayout {
    /// The scrolled cell viewport.
    pub body: Rect,
    /// Row header band along the body's left edge.
    pub row_header: Rect,
    /// Column header band along the body's top edge.
    pub col_header: Rect,
    /// Vertical scrollbar track on the outer rect's right edge.
    pub v_scrollbar: Rect,
    /// Horizontal scrollbar track on the outer rect's bottom edge.
    pub h_scrollbar: Rect,
}

/// Splits `outer` into chrome for the given content size.
///
/// Scrollbars are reserved in two passes: taking space for one bar shrinks
/// the body, which can push the other axis into overflow and force its bar
/// to appear as well.
pub(crate) fn compute(
    outer: Rect,
    config: &GridConfig,
    content_w: u64,
    content_h: u64,
) -> GridLayout {
    let outer = outer.abs();
    let scrollbar = config.scrollbar_size.max(0.0);
    let header_w = if config.row_header {
        config.row_header_width.max(0.0)
    } else {
        0.0
    };
    let header_h = if config.col_header {
        config.col_header_height.max(0.0)
    } else {
        0.0
    };

    let body_x = outer.x0 + header_w;
    let body_y = outer.y0 + header_h;
    let mut body_w = (outer.width() - header_w).max(0.0);
    let mut body_h = (outer.height() - header_h).max(0.0);
    let content_w = content_w as f64;
    let content_h = content_h as f64;

    let mut show_v = content_h > body_h;
    let mut show_h = content_w > body_w;
    if show_h {
        body_h = (body_h - scrollbar).max(0.0);
    }
    if show_v {
        body_w = (body_w - scrollbar).max(0.0);
    }
    if !show_v && content_h > body_h {
        show_v = true;
        body_w = (body_w - scrollbar).max(0.0);
    }
    if !show_h && content_w > body_w {
        show_h = true;
        body_h = (body_h - scrollbar).max(0.0);
    }

    let body = Rect::new(body_x, body_y, body_x + body_w, body_y + body_h);
    let row_header = if config.row_header {
        Rect::new(outer.x0, body_y, body_x.min(outer.x1), body_y + body_h)
    } else {
        Rect::ZERO
    };
    let col_header = if config.col_header {
        Rect::new(body_x, outer.y0, body_x + body_w, body_y.min(outer.y1))
    } else {
        Rect::ZERO
    };
    let v_scrollbar = if show_v {
        let bottom_inset = if show_h { scrollbar } else { 0.0 };
        Rect::new(
            (outer.x1 - scrollbar).max(outer.x0),
            outer.y0,
            outer.x1,
            (outer.y1 - bottom_inset).max(outer.y0),
        )
    } else {
        Rect::ZERO
    };
    let h_scrollbar = if show_h {
        let right_inset = if show_v { scrollbar } else { 0.0 };
        Rect::new(
            outer.x0,
            (outer.y1 - scrollbar).max(outer.y0),
            (outer.x1 - right_inset).max(outer.x0),
            outer.y1,
        )
    } else {
        Rect::ZERO
    };

    GridLayout {
        body,
        row_header,
        col_header,
        v_scrollbar,
        h_scrollbar,
    }
}

/// Rounds a pointer coordinate to a whole pixel for drag arithmetic.
#[expect(
    clippy::cast_possible_truncation,
    reason = "pointer coordinates are nowhere near the i64 range"
)]
pub(crate) fn pointer_px(v: f64) -> i64 {
    v.round() as i64
}

/// Rounds a non-negative length to whole pixels for viewport extents.
#[expect(
    clippy::cast_possible_truncation,
    reason = "lengths are clamped non-negative and nowhere near the u64 range"
)]
pub(crate) fn px_extent(v: f64) -> u64 {
    v.max(0.0).round() as u64
}

/// Rounds a non-negative on-screen length to whole pixels.
#[expect(
    clippy::cast_possible_truncation,
    reason = "on-screen lengths are well inside the u32 range"
)]
pub(crate) fn track_px(v: f64) -> u32 {
    v.max(0.0).round() as u32
}
