// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_scroll --heading-base-level=0

//! Trellis Scroll: clamped scroll state and drag gestures for viewports.
//!
//! A virtualized widget scrolls a viewport over content that is usually much
//! larger than itself. This crate owns the state machines of that interaction,
//! in integer pixels and with no rendering or windowing knowledge:
//!
//! - [`ScrollAxis`]: one axis of scroll state — offset, viewport extent, and
//!   content extent — with the published offset always hard-clamped to
//!   `[0, max_offset]`, plus the *soft* clamp used while a thumb drag is in
//!   flight (see below).
//! - [`ScrollPos`]: the vertical/horizontal pair, addressed via [`Axis`].
//! - [`ThumbTrack`]: proportional scrollbar thumb geometry — thumb size and
//!   position from the axis state, and the inverse mapping that turns thumb
//!   pixels back into a content offset while dragging.
//! - [`DragGesture`]: the pointer-gesture machine with three states — idle,
//!   dragging a scrollbar thumb ([`ThumbDrag`]), or dragging a row/column
//!   boundary to resize it ([`BoundaryResize`]). At most one gesture is in
//!   flight at a time; releasing or losing pointer capture returns to idle,
//!   keeping whatever state the last pointer move already applied.
//!
//! ## Soft vs hard clamping
//!
//! Interactive drags honor a two-tier clamp inherited from classic valuator
//! widgets: a bound only arrests the value if the drag *started* inside it.
//! If the value was already beyond a bound when grabbed (say the content
//! shrank mid-gesture), the drag may keep it out there, and the published
//! offset simply saturates at the bound until motion brings the virtual value
//! back inside. Everything non-interactive — keyboard steps, wheel deltas,
//! programmatic positioning, geometry changes — applies the hard clamp
//! immediately.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_scroll::{ScrollAxis, ThumbTrack};
//!
//! // A 200px viewport over 1000px of content.
//! let mut axis = ScrollAxis::new(200, 1000);
//! axis.scroll_by(250);
//! assert_eq!(axis.offset(), 250);
//!
//! // Overshoot hard-clamps to `total - viewport`.
//! axis.scroll_by(10_000);
//! assert_eq!(axis.offset(), 800);
//!
//! // A 200px scrollbar lane shows a proportional thumb.
//! let track = ThumbTrack::new(200);
//! assert_eq!(track.thumb_extent(&axis), 40);
//! assert_eq!(track.thumb_offset(&axis), 160);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod axis;
mod gesture;
mod thumb;

pub use axis::{Axis, ScrollAxis, ScrollPos};
pub use gesture::{BoundaryResize, DragGesture, ThumbDrag};
pub use thumb::ThumbTrack;
