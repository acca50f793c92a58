// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state per axis, with hard and soft clamping.

/// Identifies one of the two scroll directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Scrolling along y; rows travel through the viewport.
    Vertical,
    /// Scrolling along x; columns travel through the viewport.
    Horizontal,
}

/// One axis of scroll state: offset, viewport extent, and content extent.
///
/// The published offset is an invariant of the type: it never exceeds
/// [`max_offset`] and never goes below zero. Setters and geometry changes
/// re-clamp, so observers can rely on the offset without checking. The soft
/// clamp used by in-flight thumb drags lives in [`soft_clamp`] and operates
/// on the gesture's *virtual* value, not on the stored offset.
///
/// [`max_offset`]: ScrollAxis::max_offset
/// [`soft_clamp`]: ScrollAxis::soft_clamp
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollAxis {
    offset: u64,
    viewport: u64,
    total: u64,
}

impl ScrollAxis {
    /// Creates an axis at offset 0 with the given viewport and content
    /// extents.
    #[must_use]
    pub const fn new(viewport: u64, total: u64) -> Self {
        Self { offset: 0, viewport, total }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the viewport extent in pixels.
    #[must_use]
    pub const fn viewport(&self) -> u64 {
        self.viewport
    }

    /// Returns the content extent in pixels.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the largest valid offset: `total - viewport`, or 0 when the
    /// content fits.
    #[must_use]
    pub const fn max_offset(&self) -> u64 {
        self.total.saturating_sub(self.viewport)
    }

    /// Returns `true` if the content overflows the viewport on this axis.
    #[must_use]
    pub const fn overflows(&self) -> bool {
        self.total > self.viewport
    }

    /// Sets the offset, hard-clamped to `[0, max_offset]`.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn set_offset(&mut self, offset: u64) -> bool {
        let clamped = offset.min(self.max_offset());
        if self.offset == clamped {
            return false;
        }
        self.offset = clamped;
        true
    }

    /// Moves the offset by a signed pixel delta, saturating at the bounds.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.set_offset(target)
    }

    /// Scrolls to the start of the content.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn to_start(&mut self) -> bool {
        self.set_offset(0)
    }

    /// Scrolls to the end of the content.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn to_end(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    /// Scrolls forward by one viewport extent.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn page_forward(&mut self) -> bool {
        let page = self.viewport;
        self.scroll_by(i64::try_from(page).unwrap_or(i64::MAX))
    }

    /// Scrolls backward by one viewport extent.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn page_backward(&mut self) -> bool {
        let page = self.viewport;
        self.scroll_by(i64::try_from(page).map(|p| -p).unwrap_or(i64::MIN))
    }

    /// Sets the viewport extent, re-clamping the offset.
    pub fn set_viewport(&mut self, viewport: u64) {
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Sets the content extent, re-clamping the offset.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Applies the interactive soft clamp to a drag's virtual value.
    ///
    /// The upper bound arrests `value` only if `grabbed` (the virtual value
    /// when the gesture began) was inside it; a gesture that began at or
    /// beyond the bound may carry the value further out. The lower bound is
    /// structural — offsets are unsigned — so downward overshoot always
    /// saturates at 0 in the drag math itself.
    #[must_use]
    pub fn soft_clamp(&self, value: u64, grabbed: u64) -> u64 {
        let max = self.max_offset();
        if value > max && grabbed < max { max } else { value }
    }
}

/// The vertical/horizontal pair of [`ScrollAxis`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollPos {
    vertical: ScrollAxis,
    horizontal: ScrollAxis,
}

impl ScrollPos {
    /// Creates a pair of axes at offset 0.
    #[must_use]
    pub const fn new(vertical: ScrollAxis, horizontal: ScrollAxis) -> Self {
        Self { vertical, horizontal }
    }

    /// Returns the axis for `which`.
    #[must_use]
    pub const fn axis(&self, which: Axis) -> &ScrollAxis {
        match which {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    /// Returns the axis for `which`, mutably.
    pub fn axis_mut(&mut self, which: Axis) -> &mut ScrollAxis {
        match which {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    /// Returns the vertical axis.
    #[must_use]
    pub const fn vertical(&self) -> &ScrollAxis {
        &self.vertical
    }

    /// Returns the horizontal axis.
    #[must_use]
    pub const fn horizontal(&self) -> &ScrollAxis {
        &self.horizontal
    }
}
