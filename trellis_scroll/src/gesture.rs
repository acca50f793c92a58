// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer-drag gesture machine.

use crate::axis::{Axis, ScrollAxis};
use crate::thumb::ThumbTrack;

/// A scrollbar-thumb drag in flight.
///
/// Captures where the pointer grabbed the thumb and the axis offset at that
/// moment; every later pointer position maps to a target offset relative to
/// that grab, so the thumb never jumps under the pointer.
#[derive(Clone, Copy, Debug)]
pub struct ThumbDrag {
    axis: Axis,
    grab_pos: i64,
    grab_offset: u64,
}

impl ThumbDrag {
    /// Returns which axis's thumb is being dragged.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the target offset for the pointer at `pos`.
    ///
    /// `pos` is the pointer coordinate along the track, in the same space as
    /// the grab position. The result is soft-clamped against the offset at
    /// grab time; publish it with [`ScrollAxis::set_offset`], which applies
    /// the hard clamp.
    #[must_use]
    pub fn target_offset(&self, pos: i64, state: &ScrollAxis, track: &ThumbTrack) -> u64 {
        let raw = track.offset_for_drag(state, self.grab_offset, pos - self.grab_pos);
        state.soft_clamp(raw, self.grab_offset)
    }
}

/// A row/column boundary drag in flight.
///
/// Captures the dragged index and its extent at grab time; every later
/// pointer position maps to a new extent as grab extent plus pointer travel.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryResize {
    axis: Axis,
    index: usize,
    grab_pos: i64,
    grab_extent: u32,
}

impl BoundaryResize {
    /// Returns which axis the dragged boundary belongs to.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the index whose extent is being resized.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the index's extent when the boundary was grabbed.
    #[must_use]
    pub const fn grab_extent(&self) -> u32 {
        self.grab_extent
    }

    /// Returns the extent for the pointer at `pos`, clamped to
    /// `min_extent` and, when given, `max_extent`.
    #[must_use]
    pub fn extent_for(&self, pos: i64, min_extent: u32, max_extent: Option<u32>) -> u32 {
        let raw = i64::from(self.grab_extent) + (pos - self.grab_pos);
        let lo = i64::from(min_extent);
        let mut clamped = raw.max(lo);
        if let Some(max) = max_extent {
            clamped = clamped.min(i64::from(max).max(lo));
        }
        #[expect(clippy::cast_possible_truncation, reason = "clamped into u32 bounds")]
        let extent = clamped.clamp(0, i64::from(u32::MAX)) as u32;
        extent
    }
}

/// Which pointer gesture is in flight, if any.
///
/// At most one gesture exists at a time: a press either starts a thumb drag
/// or a boundary resize, and the machine stays in that state until
/// [`finish`] — called on release *or* on pointer-capture loss. Finishing
/// does not rewind anything: each pointer move already applied a fully
/// clamped value, so the last applied state simply stands.
///
/// [`finish`]: DragGesture::finish
#[derive(Clone, Copy, Debug, Default)]
pub enum DragGesture {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A scrollbar thumb is being dragged.
    Thumb(ThumbDrag),
    /// A row/column boundary is being dragged.
    Resize(BoundaryResize),
}

impl DragGesture {
    /// Returns `true` if no gesture is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Starts a thumb drag from idle.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already in
    /// flight.
    pub fn begin_thumb(&mut self, axis: Axis, grab_pos: i64, grab_offset: u64) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Thumb(ThumbDrag { axis, grab_pos, grab_offset });
        true
    }

    /// Starts a boundary resize from idle.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already in
    /// flight.
    pub fn begin_resize(
        &mut self,
        axis: Axis,
        index: usize,
        grab_pos: i64,
        grab_extent: u32,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Resize(BoundaryResize { axis, index, grab_pos, grab_extent });
        true
    }

    /// Returns the in-flight thumb drag, if that is the current state.
    #[must_use]
    pub const fn thumb(&self) -> Option<&ThumbDrag> {
        match self {
            Self::Thumb(drag) => Some(drag),
            _ => None,
        }
    }

    /// Returns the in-flight boundary resize, if that is the current state.
    #[must_use]
    pub const fn resize(&self) -> Option<&BoundaryResize> {
        match self {
            Self::Resize(resize) => Some(resize),
            _ => None,
        }
    }

    /// Ends the gesture, returning what was in flight.
    pub fn finish(&mut self) -> Self {
        core::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_gesture_at_a_time() {
        let mut gesture = DragGesture::default();
        assert!(gesture.is_idle());
        assert!(gesture.begin_thumb(Axis::Vertical, 10, 0));
        assert!(!gesture.begin_thumb(Axis::Horizontal, 20, 0));
        assert!(!gesture.begin_resize(Axis::Vertical, 3, 0, 40));
        assert!(gesture.thumb().is_some());
        assert!(gesture.resize().is_none());

        let finished = gesture.finish();
        assert!(gesture.is_idle());
        assert!(finished.thumb().is_some());
        assert!(gesture.begin_resize(Axis::Vertical, 3, 0, 40));
    }

    #[test]
    fn thumb_drag_tracks_the_pointer_relative_to_the_grab() {
        let mut state = ScrollAxis::new(200, 1000);
        state.set_offset(100);
        let track = ThumbTrack::new(200);

        let mut gesture = DragGesture::default();
        gesture.begin_thumb(Axis::Vertical, 50, state.offset());
        let drag = gesture.thumb().copied().unwrap();

        // travel = 160px over max_offset = 800: 5 content px per track px.
        assert_eq!(drag.target_offset(50, &state, &track), 100);
        assert_eq!(drag.target_offset(70, &state, &track), 200);
        assert_eq!(drag.target_offset(30, &state, &track), 0);
        // Far past the end: arrested at the bound, because the grab was inside.
        assert_eq!(drag.target_offset(5000, &state, &track), 800);
    }

    #[test]
    fn shrinking_content_mid_drag_leaves_the_value_out_of_range() {
        let mut state = ScrollAxis::new(200, 1000);
        state.set_offset(700);
        let track = ThumbTrack::new(200);

        let mut gesture = DragGesture::default();
        gesture.begin_thumb(Axis::Vertical, 0, state.offset());
        let drag = gesture.thumb().copied().unwrap();

        // Content shrinks under the drag; the grab offset (700) is now past
        // the new max_offset (300).
        state.set_total(500);
        assert_eq!(state.offset(), 300);

        // The virtual value stays out of range rather than snapping.
        let virtual_value = drag.target_offset(4, &state, &track);
        assert!(virtual_value > state.max_offset());
        // Publishing hard-clamps; the stored offset stays at the bound.
        state.set_offset(virtual_value);
        assert_eq!(state.offset(), 300);
    }

    #[test]
    fn resize_clamps_to_the_minimum() {
        let mut gesture = DragGesture::default();
        gesture.begin_resize(Axis::Horizontal, 2, 100, 40);
        let resize = gesture.resize().copied().unwrap();

        // Dragging 50px toward the boundary start from a 40px extent.
        assert_eq!(resize.extent_for(50, 10, None), 10);
        assert_eq!(resize.extent_for(130, 10, None), 70);
    }

    #[test]
    fn resize_honors_an_upper_bound() {
        let mut gesture = DragGesture::default();
        gesture.begin_resize(Axis::Vertical, 0, 0, 25);
        let resize = gesture.resize().copied().unwrap();

        assert_eq!(resize.extent_for(500, 1, Some(120)), 120);
        // A degenerate upper bound below the minimum yields the minimum.
        assert_eq!(resize.extent_for(500, 30, Some(10)), 30);
    }
}
