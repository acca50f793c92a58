// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional scrollbar thumb geometry.

use crate::axis::ScrollAxis;

/// Default floor for the thumb extent, in pixels.
///
/// Long axes would otherwise shrink the thumb below what a pointer can grab.
const DEFAULT_MIN_THUMB: u32 = 16;

/// Maps an axis's scroll state onto a scrollbar track and back.
///
/// The track is the lane the thumb travels in, measured along the scroll
/// direction. Thumb size is proportional to the visible fraction of the
/// content (floored so it stays grabbable); thumb position is proportional
/// to the scroll offset. [`offset_for_drag`] is the inverse used while a
/// thumb drag is in flight: pointer pixels, scaled by content-per-track-pixel,
/// against the offset captured when the thumb was grabbed.
///
/// [`offset_for_drag`]: ThumbTrack::offset_for_drag
#[derive(Clone, Copy, Debug)]
pub struct ThumbTrack {
    track_extent: u32,
    min_thumb: u32,
}

impl ThumbTrack {
    /// Creates a track of `track_extent` pixels with the default thumb floor.
    #[must_use]
    pub const fn new(track_extent: u32) -> Self {
        Self { track_extent, min_thumb: DEFAULT_MIN_THUMB }
    }

    /// Returns the track extent in pixels.
    #[must_use]
    pub const fn track_extent(&self) -> u32 {
        self.track_extent
    }

    /// Sets the track extent in pixels.
    pub fn set_track_extent(&mut self, track_extent: u32) {
        self.track_extent = track_extent;
    }

    /// Sets the minimum thumb extent in pixels.
    pub fn set_min_thumb(&mut self, min_thumb: u32) {
        self.min_thumb = min_thumb;
    }

    /// Returns the thumb extent for the axis's visible fraction.
    ///
    /// Content that fits yields a full-track thumb.
    #[must_use]
    pub fn thumb_extent(&self, axis: &ScrollAxis) -> u32 {
        if !axis.overflows() {
            return self.track_extent;
        }
        let scaled = u128::from(self.track_extent) * u128::from(axis.viewport())
            / u128::from(axis.total());
        #[expect(clippy::cast_possible_truncation, reason = "scaled <= track_extent")]
        let proportional = scaled as u32;
        proportional.max(self.min_thumb).min(self.track_extent)
    }

    /// Returns the thumb's position within the track, in pixels from the
    /// track start.
    #[must_use]
    pub fn thumb_offset(&self, axis: &ScrollAxis) -> u32 {
        let travel = self.travel(axis);
        let max = axis.max_offset();
        if travel == 0 || max == 0 {
            return 0;
        }
        let scaled = u128::from(travel) * u128::from(axis.offset().min(max)) / u128::from(max);
        #[expect(clippy::cast_possible_truncation, reason = "scaled <= travel")]
        let position = scaled as u32;
        position
    }

    /// Returns the content offset a thumb placed `thumb_pos` pixels into the
    /// track corresponds to.
    #[must_use]
    pub fn offset_for_thumb_pos(&self, axis: &ScrollAxis, thumb_pos: u32) -> u64 {
        let travel = self.travel(axis);
        if travel == 0 {
            return 0;
        }
        let scaled =
            u128::from(thumb_pos.min(travel)) * u128::from(axis.max_offset()) / u128::from(travel);
        #[expect(clippy::cast_possible_truncation, reason = "scaled <= max_offset")]
        let offset = scaled as u64;
        offset
    }

    /// Converts a pointer drag into a virtual content offset.
    ///
    /// `grab_offset` is the axis offset when the thumb was grabbed and
    /// `delta` the signed pointer travel since, in track pixels. The result
    /// saturates at 0 but is *not* clamped above — pass it through
    /// [`ScrollAxis::soft_clamp`] before publishing.
    #[must_use]
    pub fn offset_for_drag(&self, axis: &ScrollAxis, grab_offset: u64, delta: i64) -> u64 {
        let travel = self.travel(axis);
        if travel == 0 {
            return grab_offset;
        }
        let scaled = i128::from(delta) * i128::from(axis.max_offset()) / i128::from(travel);
        let raw = i128::from(grab_offset) + scaled;
        let clamped = raw.clamp(0, i128::from(u64::MAX));
        #[expect(clippy::cast_possible_truncation, reason = "clamped to u64 range")]
        let offset = clamped as u64;
        offset
    }

    /// Pixels of track the thumb can travel.
    fn travel(&self, axis: &ScrollAxis) -> u32 {
        self.track_extent.saturating_sub(self.thumb_extent(axis))
    }
}
