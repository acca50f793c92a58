// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_selection --heading-base-level=0

//! Trellis Selection: an index-based selection state machine.
//!
//! Row- and column-oriented widgets track selection as a flag per index on a
//! dense axis `0..len`, not as a set of item identities. This crate provides
//! that machine: [`IndexSelection`] holds the flags, the active
//! [`SelectMode`], and an optional anchor index for range gestures, and every
//! mutation reports a [`SelectOutcome`] describing the minimal contiguous
//! [`IndexSpan`] whose flags changed — exactly what a repaint accumulator
//! wants to hear.
//!
//! The machine is fail-soft throughout, in the manner of the classic toolkit
//! widgets it models:
//!
//! - out-of-range indices are ignored or clamped, never an error;
//! - operations invalid for the current mode (for example "select all" in
//!   single-select) are reported as [`SelectOutcome::Ignored`] no-ops;
//! - in [`SelectMode::Single`], at most one index is ever selected — a select
//!   or toggle atomically deselects the rest, and the reported span covers
//!   both the old and new positions;
//! - in [`SelectMode::Disabled`], selection mutations are ignored entirely.
//!
//! A monotonically increasing revision counter bumps whenever the observable
//! state changes, so hosts can cheaply skip work when nothing moved.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_selection::{IndexSelection, IndexSpan, SelectAction, SelectOutcome};
//!
//! let mut rows = IndexSelection::new();
//! rows.set_len(10);
//!
//! // Plain click on row 4.
//! let outcome = rows.select(4, SelectAction::Select);
//! assert_eq!(outcome, SelectOutcome::Changed(IndexSpan::single(4)));
//!
//! // Shift-click on row 7: additive range from the anchor; only rows 5..=7
//! // actually change, and that is the span reported for repaint.
//! let outcome = rows.select_range(4, 7, true);
//! assert_eq!(outcome, SelectOutcome::Changed(IndexSpan::new(5, 7)));
//! assert_eq!(rows.selected_count(), 4);
//!
//! // Clicking the same row again changes nothing.
//! assert_eq!(rows.select(4, SelectAction::Select), SelectOutcome::Unchanged);
//! ```
//!
//! The crate knows nothing about pixels, pointers, or widgets; mapping input
//! gestures (click, ctrl-click, shift-click, drag sweep) onto these
//! operations is the caller's job.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// How selection mutations are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectMode {
    /// Selection is switched off; mutations are ignored and nothing is ever
    /// selected.
    Disabled,
    /// At most one index may be selected at a time.
    Single,
    /// Any subset of indices may be selected.
    #[default]
    Multi,
}

/// What a selection mutation should do to an index's flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAction {
    /// Clear the flag.
    Deselect,
    /// Set the flag.
    Select,
    /// Invert the flag.
    Toggle,
}

/// An inclusive contiguous range of indices, `first..=last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSpan {
    /// First index covered.
    pub first: usize,
    /// Last index covered (inclusive).
    pub last: usize,
}

impl IndexSpan {
    /// Creates a span covering `a..=b` in either argument order.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b { Self { first: a, last: b } } else { Self { first: b, last: a } }
    }

    /// Creates a span covering exactly one index.
    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self { first: index, last: index }
    }

    /// Returns the number of indices covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Returns `true` if `index` lies within the span.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }

    /// Returns the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            first: self.first.min(other.first),
            last: self.last.max(other.last),
        }
    }
}

/// The result of a selection mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The operation was invalid — index out of range on a non-clamping
    /// operation, or an action the current [`SelectMode`] does not permit.
    /// Nothing happened.
    Ignored,
    /// The operation was valid but every flag already had its target value.
    Unchanged,
    /// Flags changed within the given span (the minimal contiguous range
    /// covering every changed index).
    Changed(IndexSpan),
}

impl SelectOutcome {
    /// Returns `true` if the mutation changed any flag.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Returns the changed span, if any flag changed.
    #[must_use]
    pub const fn changed_span(&self) -> Option<IndexSpan> {
        match self {
            Self::Changed(span) => Some(*span),
            _ => None,
        }
    }
}

/// Per-index selection flags for a dense axis, plus mode and anchor.
///
/// The tracked axis has `len` indices; [`set_len`] reconciles the flags when
/// the axis grows or shrinks, preserving the flags of surviving indices.
/// The anchor is a remembered reference index for range gestures
/// (shift-click, drag sweep); the machine stores it but never consults it —
/// callers pass the endpoints to [`select_range`] explicitly.
///
/// [`set_len`]: IndexSelection::set_len
/// [`select_range`]: IndexSelection::select_range
#[derive(Clone, Debug, Default)]
pub struct IndexSelection {
    flags: Vec<bool>,
    mode: SelectMode,
    anchor: Option<usize>,
    revision: u64,
}

impl IndexSelection {
    /// Creates an empty selection in [`SelectMode::Multi`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: Vec::new(),
            mode: SelectMode::Multi,
            anchor: None,
            revision: 0,
        }
    }

    /// Returns the number of indices on the tracked axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the tracked axis has no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the active selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Returns the current revision counter.
    ///
    /// Bumped whenever observable state changes: flags, mode, or anchor.
    /// No-op mutations leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the anchor index, if one is set.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Sets or clears the anchor index.
    ///
    /// A requested anchor beyond the axis clamps to the last index; on an
    /// empty axis the anchor becomes `None`.
    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        let clamped = match anchor {
            Some(index) if !self.flags.is_empty() => Some(index.min(self.flags.len() - 1)),
            _ => None,
        };
        if self.anchor != clamped {
            self.anchor = clamped;
            self.bump_revision();
        }
    }

    /// Resizes the tracked axis to `len` indices.
    ///
    /// Surviving indices keep their flags; new indices start deselected.
    /// Shrinking drops the flags of truncated indices and clears the anchor
    /// if it falls off the end.
    pub fn set_len(&mut self, len: usize) {
        if len == self.flags.len() {
            return;
        }
        let lost = self.flags.iter().skip(len).any(|&flag| flag);
        self.flags.resize(len, false);
        let mut changed = lost;
        if let Some(anchor) = self.anchor
            && anchor >= len
        {
            self.anchor = None;
            changed = true;
        }
        if changed {
            self.bump_revision();
        }
    }

    /// Switches the selection mode, pruning flags the new mode cannot hold.
    ///
    /// - [`SelectMode::Disabled`] deselects everything.
    /// - [`SelectMode::Single`] keeps the first selected index and deselects
    ///   the rest.
    /// - [`SelectMode::Multi`] keeps everything.
    ///
    /// Returns the span of pruned indices, or [`SelectOutcome::Unchanged`] if
    /// no flag moved.
    pub fn set_mode(&mut self, mode: SelectMode) -> SelectOutcome {
        let mode_changed = self.mode != mode;
        self.mode = mode;
        let mut span = None;
        match mode {
            SelectMode::Disabled => {
                for (index, flag) in self.flags.iter_mut().enumerate() {
                    if *flag {
                        *flag = false;
                        extend_span(&mut span, index);
                    }
                }
            }
            SelectMode::Single => {
                let mut keep_seen = false;
                for (index, flag) in self.flags.iter_mut().enumerate() {
                    if *flag {
                        if keep_seen {
                            *flag = false;
                            extend_span(&mut span, index);
                        } else {
                            keep_seen = true;
                        }
                    }
                }
            }
            SelectMode::Multi => {}
        }
        match span {
            Some(span) => {
                self.bump_revision();
                SelectOutcome::Changed(span)
            }
            None => {
                if mode_changed {
                    self.bump_revision();
                }
                SelectOutcome::Unchanged
            }
        }
    }

    /// Returns `true` if `index` is selected (`false` when out of range).
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of selected indices.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Returns the lowest selected index, if any.
    #[must_use]
    pub fn first_selected(&self) -> Option<usize> {
        self.flags.iter().position(|&flag| flag)
    }

    /// Returns an iterator over the selected indices in ascending order.
    pub fn iter_selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }

    /// Applies `action` to the flag of `index`.
    ///
    /// In [`SelectMode::Single`], any action also deselects every other
    /// index, and the reported span covers both the old and new positions.
    /// Out-of-range indices and [`SelectMode::Disabled`] yield
    /// [`SelectOutcome::Ignored`].
    pub fn select(&mut self, index: usize, action: SelectAction) -> SelectOutcome {
        if index >= self.flags.len() {
            return SelectOutcome::Ignored;
        }
        let mut span = None;
        match self.mode {
            SelectMode::Disabled => return SelectOutcome::Ignored,
            SelectMode::Single => {
                for (other, flag) in self.flags.iter_mut().enumerate() {
                    if other != index && *flag {
                        *flag = false;
                        extend_span(&mut span, other);
                    }
                }
                self.apply(index, action, &mut span);
            }
            SelectMode::Multi => {
                self.apply(index, action, &mut span);
            }
        }
        self.finish(span)
    }

    /// Selects the inclusive range between `anchor` and `index`, given in
    /// either order.
    ///
    /// Only meaningful in [`SelectMode::Multi`]; other modes yield
    /// [`SelectOutcome::Ignored`]. Endpoints beyond the axis clamp to the
    /// last index. When `additive` is `false`, indices outside the range are
    /// deselected, so the reported span can exceed the range itself.
    ///
    /// The stored anchor is not consulted or updated; callers own that
    /// bookkeeping via [`set_anchor`](IndexSelection::set_anchor).
    pub fn select_range(&mut self, anchor: usize, index: usize, additive: bool) -> SelectOutcome {
        if self.mode != SelectMode::Multi || self.flags.is_empty() {
            return SelectOutcome::Ignored;
        }
        let last = self.flags.len() - 1;
        let span_range = IndexSpan::new(anchor.min(last), index.min(last));
        let mut span = None;
        for (current, flag) in self.flags.iter_mut().enumerate() {
            let target = if span_range.contains(current) {
                true
            } else if additive {
                *flag
            } else {
                false
            };
            if *flag != target {
                *flag = target;
                extend_span(&mut span, current);
            }
        }
        self.finish(span)
    }

    /// Applies `action` to every index at once.
    ///
    /// Selecting or toggling everything is only meaningful in
    /// [`SelectMode::Multi`]; deselecting works in [`SelectMode::Single`]
    /// too. [`SelectMode::Disabled`] ignores all three.
    pub fn select_all(&mut self, action: SelectAction) -> SelectOutcome {
        match (self.mode, action) {
            (SelectMode::Disabled, _) => return SelectOutcome::Ignored,
            (SelectMode::Single, SelectAction::Select | SelectAction::Toggle) => {
                return SelectOutcome::Ignored;
            }
            _ => {}
        }
        let mut span = None;
        for (index, flag) in self.flags.iter_mut().enumerate() {
            let target = match action {
                SelectAction::Deselect => false,
                SelectAction::Select => true,
                SelectAction::Toggle => !*flag,
            };
            if *flag != target {
                *flag = target;
                extend_span(&mut span, index);
            }
        }
        self.finish(span)
    }

    /// Deselects everything, regardless of mode.
    pub fn clear_all(&mut self) -> SelectOutcome {
        let mut span = None;
        for (index, flag) in self.flags.iter_mut().enumerate() {
            if *flag {
                *flag = false;
                extend_span(&mut span, index);
            }
        }
        self.finish(span)
    }

    /// Applies `action` to `index` (already bounds-checked), extending `span`
    /// if the flag moved.
    fn apply(&mut self, index: usize, action: SelectAction, span: &mut Option<IndexSpan>) {
        let flag = &mut self.flags[index];
        let target = match action {
            SelectAction::Deselect => false,
            SelectAction::Select => true,
            SelectAction::Toggle => !*flag,
        };
        if *flag != target {
            *flag = target;
            extend_span(span, index);
        }
    }

    fn finish(&mut self, span: Option<IndexSpan>) -> SelectOutcome {
        match span {
            Some(span) => {
                self.bump_revision();
                SelectOutcome::Changed(span)
            }
            None => SelectOutcome::Unchanged,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn extend_span(span: &mut Option<IndexSpan>, index: usize) {
    let single = IndexSpan::single(index);
    *span = Some(match span {
        Some(existing) => existing.union(&single),
        None => single,
    });
}
