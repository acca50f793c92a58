// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending-damage bookkeeping between paints.

use crate::span::CellSpan;

/// The region a paint pass must repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Damage {
    /// Nothing changed since the last paint.
    Empty,
    /// Repaint the cells in the given bounding box.
    Cells(CellSpan),
    /// Repaint everything; cell bookkeeping was bypassed.
    Everything,
}

impl Damage {
    /// Returns `true` if there is nothing to repaint.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Accumulates damage marks into a single pending region.
///
/// Marks grow a bounding box over cell indices; [`mark_all`] switches to the
/// full-invalidate state, which absorbs every later mark until the next
/// [`take_and_reset`]. The pending region never shrinks between resets.
///
/// The revision counter bumps whenever the pending region actually changes,
/// giving observers a cheap "has damage moved since I looked?" probe without
/// comparing regions.
///
/// [`mark_all`]: DamageAccumulator::mark_all
/// [`take_and_reset`]: DamageAccumulator::take_and_reset
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageAccumulator {
    pending: Option<PendingDamage>,
    revision: u64,
}

#[derive(Clone, Copy, Debug)]
enum PendingDamage {
    Cells(CellSpan),
    Everything,
}

impl DamageAccumulator {
    /// Creates an accumulator with no pending damage.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None, revision: 0 }
    }

    /// Returns `true` if no damage is pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when a mutation changes the pending region; re-marking
    /// already-covered cells leaves it alone.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Extends the pending region to cover `span`.
    ///
    /// The pending region is kept as one bounding box, so marking cells far
    /// apart damages the rectangle spanning them.
    pub fn mark(&mut self, span: CellSpan) {
        match self.pending {
            None => {
                self.pending = Some(PendingDamage::Cells(span));
                self.bump_revision();
            }
            Some(PendingDamage::Cells(current)) => {
                let grown = current.union(&span);
                if grown != current {
                    self.pending = Some(PendingDamage::Cells(grown));
                    self.bump_revision();
                }
            }
            Some(PendingDamage::Everything) => {}
        }
    }

    /// Marks everything as damaged, bypassing cell bookkeeping.
    ///
    /// Used for geometry-level changes (resize, scroll, count change) where
    /// per-cell tracking buys nothing.
    pub fn mark_all(&mut self) {
        if !matches!(self.pending, Some(PendingDamage::Everything)) {
            self.pending = Some(PendingDamage::Everything);
            self.bump_revision();
        }
    }

    /// Returns the pending damage without consuming it.
    #[must_use]
    pub const fn pending(&self) -> Damage {
        match self.pending {
            None => Damage::Empty,
            Some(PendingDamage::Cells(span)) => Damage::Cells(span),
            Some(PendingDamage::Everything) => Damage::Everything,
        }
    }

    /// Returns the pending damage and resets to empty.
    ///
    /// Calling this twice without an intervening mark returns
    /// [`Damage::Empty`] the second time.
    pub fn take_and_reset(&mut self) -> Damage {
        let taken = self.pending();
        if self.pending.is_some() {
            self.pending = None;
            self.bump_revision();
        }
        taken
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
