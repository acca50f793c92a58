// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_grid --heading-base-level=0

//! Trellis Grid: a headless virtualized grid engine.
//!
//! [`Grid`] drives a row/column widget without drawing or owning a window:
//! it ties per-axis extent stores, two-axis scroll state, chrome layout
//! (header bands and scrollbar tracks), row selection, a keyboard cursor,
//! pointer gesture tracking, and a damage accumulator together behind one
//! state machine. The host implements [`CellSource`] to report counts and
//! paint cells, feeds pointer and key events in, and calls [`Grid::paint`]
//! when damage is pending; the grid calls back with exactly the cells that
//! need drawing.
//!
//! Content is virtualized: the grid stores the extents of rows and columns,
//! never their contents, so a grid over a million rows costs memory
//! proportional to the row count, not the cell count. Per-index sizes are
//! pulled lazily from the source the first time an index becomes visible.
//!
//! Everything is fail-soft in the manner of the classic table widgets this
//! engine models: out-of-range indices and positions outside the content
//! are clamped or ignored, never an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_grid::{Axis, CellSource, CellSpan, Damage, Grid, GridConfig, SelectAction};
//!
//! struct Table;
//!
//! impl CellSource for Table {
//!     fn row_count(&self) -> usize {
//!         100
//!     }
//!     fn col_count(&self) -> usize {
//!         4
//!     }
//! }
//!
//! let mut grid = Grid::new(Table, Rect::new(0.0, 0.0, 320.0, 240.0), GridConfig::default());
//!
//! // 100 rows of 25px overflow the widget, so a vertical scrollbar appears;
//! // the narrowed body then makes the 4 columns of 80px overflow as well.
//! assert_eq!(grid.layout().body, Rect::new(0.0, 0.0, 304.0, 224.0));
//! assert_eq!(grid.visible_rows(), 0..9);
//!
//! // A fresh grid is fully damaged, then the damage drains.
//! assert_eq!(grid.take_damage(), Damage::Everything);
//! assert_eq!(grid.take_damage(), Damage::Empty);
//!
//! // Scrolling moves the visible window and damages everything...
//! grid.scroll_to(Axis::Vertical, 500);
//! assert_eq!(grid.visible_rows(), 20..29);
//! assert_eq!(grid.take_damage(), Damage::Everything);
//!
//! // ...while selecting a row damages just that row's cells.
//! grid.select_row(22, SelectAction::Select);
//! assert_eq!(grid.take_damage(), Damage::Cells(CellSpan::new(22, 22, 0, 3)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod grid;
mod hit;
mod input;
mod layout;
mod source;

pub use cursor::CellCursor;
pub use grid::{Grid, GridConfig, GridDebugInfo};
pub use hit::{Hit, HitZone, ResizeEdge};
pub use input::{GridEvent, GridEventKind, Modifiers, NavKey, PointerButton, PointerInput};
pub use layout::GridLayout;
pub use source::{CellSource, PaintContext};

// The vocabulary types a grid host works with, re-exported from the sibling
// crates so most hosts need only this one dependency.
pub use trellis_damage::{CellSpan, Damage};
pub use trellis_scroll::{Axis, ScrollAxis, ScrollPos};
pub use trellis_selection::{IndexSelection, IndexSpan, SelectAction, SelectMode, SelectOutcome};
