// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-independent input types fed to a [`Grid`](crate::Grid).

use kurbo::Point;

use crate::hit::HitZone;

bitflags::bitflags! {
    /// Keyboard modifiers active during a pointer or key event.
    ///
    /// Only the modifiers the engine reacts to are modeled. `CTRL` stands
    /// for whichever key the host platform uses for discontiguous
    /// selection (Command on macOS).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Extend-selection modifier.
        const SHIFT = 1 << 0;
        /// Toggle-selection modifier. Wins over `SHIFT` when both are down.
        const CTRL = 1 << 1;
    }
}

/// Which pointer button an event concerns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary (usually left) button. Drives selection, drags, and
    /// scrollbar interaction.
    #[default]
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle button or wheel press.
    Middle,
}

/// A pointer event in the grid's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Pointer position, in the same space as the grid's outer rect.
    pub pos: Point,
    /// Button the event concerns. Ignored for pure motion.
    pub button: PointerButton,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// A primary-button event at `pos` with no modifiers held.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }
}

/// Navigation keys the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Move the cursor up one row.
    Up,
    /// Move the cursor down one row.
    Down,
    /// Move the cursor left one column.
    Left,
    /// Move the cursor right one column.
    Right,
    /// Move the cursor up by one page of visible rows.
    PageUp,
    /// Move the cursor down by one page of visible rows.
    PageDown,
    /// Move the cursor to the first column.
    Home,
    /// Move the cursor to the last column.
    End,
}

/// What kind of pointer interaction a [`GridEvent`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridEventKind {
    /// A press landed on content.
    Press,
    /// A release over content.
    Release,
    /// An interactive row or column resize changed an extent.
    Resize,
}

/// A host-visible report of a pointer interaction.
///
/// Returned by the pointer entry points when an event touched content the
/// host may want to react to. Internal interactions (scrollbar thumb drags,
/// trough clicks) are consumed silently; their effect shows up in the scroll
/// position and pending damage instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridEvent {
    /// Region the interaction landed on.
    pub zone: HitZone,
    /// Row involved, if the zone resolves one.
    pub row: Option<usize>,
    /// Column involved, if the zone resolves one.
    pub col: Option<usize>,
    /// What happened.
    pub kind: GridEventKind,
}
