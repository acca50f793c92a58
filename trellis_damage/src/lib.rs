// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_damage --heading-base-level=0

//! Trellis Damage: bounding-box damage accumulation for cell grids.
//!
//! Interactive grids change a few cells at a time — a selection flips, a
//! cursor moves — and repainting everything on each change wastes work. This
//! crate accumulates the *logical* region touched between two paints as a
//! single bounding box over (row, column) index space, which a renderer then
//! intersects with its visible range.
//!
//! - [`CellSpan`]: an inclusive 2D box of cell indices with union,
//!   intersection, and containment queries.
//! - [`Damage`]: what a paint pass receives — nothing, a cell box, or
//!   everything (the full-invalidate bypass used for geometry changes).
//! - [`DamageAccumulator`]: collects [`CellSpan`] marks into the pending
//!   bounding box and hands it over exactly once per paint via
//!   [`take_and_reset`](DamageAccumulator::take_and_reset).
//!
//! A single box deliberately over-approximates: marking two far-apart cells
//! damages the rectangle spanning both. This trades repaint precision for
//! constant-size state and is the classic behavior of row/column widgets that
//! track a `(row1, row2, col1, col2)` redraw range.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_damage::{CellSpan, Damage, DamageAccumulator};
//!
//! let mut damage = DamageAccumulator::new();
//! damage.mark(CellSpan::cell(2, 3));
//! damage.mark(CellSpan::cell(5, 1));
//!
//! // One bounding box covering rows 2..=5, columns 1..=3.
//! assert_eq!(
//!     damage.take_and_reset(),
//!     Damage::Cells(CellSpan::new(2, 5, 1, 3)),
//! );
//!
//! // Taking again without new marks reports nothing to repaint.
//! assert_eq!(damage.take_and_reset(), Damage::Empty);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod accumulator;
mod span;

pub use accumulator::{Damage, DamageAccumulator};
pub use span::CellSpan;
