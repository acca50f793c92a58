// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid engine: one state machine tying geometry, scrolling, selection,
//! and damage together.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect, Vec2};

use trellis_damage::{CellSpan, Damage, DamageAccumulator};
use trellis_extent::{ExtentStore, Extents};
use trellis_scroll::{Axis, DragGesture, ScrollAxis, ScrollPos, ThumbTrack};
use trellis_selection::{IndexSelection, IndexSpan, SelectAction, SelectMode, SelectOutcome};

use crate::cursor::CellCursor;
use crate::hit::{Hit, HitZone, ResizeEdge};
use crate::input::{GridEvent, GridEventKind, Modifiers, NavKey, PointerButton, PointerInput};
use crate::layout::{self, GridLayout};
use crate::source::{CellSource, PaintContext};

/// Options for a [`Grid`], applied at construction and adjustable through
/// the grid's setters afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Height in pixels for rows with no explicit or hinted height.
    ///
    /// Consumed when the grid is built and whenever new rows appear; changing
    /// the field on a built grid has no effect on existing rows.
    pub default_row_height: u32,
    /// Width in pixels for columns with no explicit or hinted width.
    ///
    /// Consumed like [`default_row_height`](Self::default_row_height).
    pub default_col_width: u32,
    /// Whether a row header band is laid out along the left edge.
    pub row_header: bool,
    /// Whether a column header band is laid out along the top edge.
    pub col_header: bool,
    /// Width of the row header band, in pixels.
    pub row_header_width: f64,
    /// Height of the column header band, in pixels.
    pub col_header_height: f64,
    /// Thickness of the scrollbar tracks, in pixels.
    pub scrollbar_size: f64,
    /// Whether row heights can be dragged at row header boundaries.
    pub row_resize: bool,
    /// Whether column widths can be dragged at column header boundaries.
    pub col_resize: bool,
    /// Smallest height an interactive row resize may produce. Values below
    /// 1 behave as 1.
    pub row_resize_min: u32,
    /// Smallest width an interactive column resize may produce. Values below
    /// 1 behave as 1.
    pub col_resize_min: u32,
    /// Distance in pixels within which a header boundary can be grabbed for
    /// resizing.
    pub resize_grab_margin: f64,
    /// Selection mode the grid starts in.
    pub select_mode: SelectMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_row_height: 25,
            default_col_width: 80,
            row_header: false,
            col_header: false,
            row_header_width: 40.0,
            col_header_height: 25.0,
            scrollbar_size: 16.0,
            row_resize: false,
            col_resize: false,
            row_resize_min: 1,
            col_resize_min: 1,
            resize_grab_margin: 3.0,
            select_mode: SelectMode::Multi,
        }
    }
}

/// A point-in-time snapshot of a grid's observable state, for logs and
/// assertions.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDebugInfo {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Total content width in pixels.
    pub content_width: u64,
    /// Total content height in pixels.
    pub content_height: u64,
    /// Horizontal scroll offset in pixels.
    pub scroll_x: u64,
    /// Vertical scroll offset in pixels.
    pub scroll_y: u64,
    /// Rows intersecting the body viewport.
    pub visible_rows: Range<usize>,
    /// Columns intersecting the body viewport.
    pub visible_cols: Range<usize>,
    /// Number of selected rows.
    pub selected_rows: usize,
    /// Cursor anchor cell, if placed.
    pub cursor: Option<(usize, usize)>,
    /// Damage pending for the next paint.
    pub damage: Damage,
}

/// A headless virtualized grid over a [`CellSource`].
///
/// The grid owns the source plus every piece of view state the source does
/// not: per-axis extents, scroll offsets, chrome layout, row selection, the
/// keyboard cursor, in-flight pointer gestures, and pending damage. Hosts
/// feed it pointer and key events in its own coordinate space and drive
/// [`paint`] when damage is pending; everything in between is this type's
/// business.
///
/// All mutating entry points are fail-soft: out-of-range indices and
/// positions outside the content are ignored or clamped, never an error.
///
/// [`paint`]: Grid::paint
#[derive(Debug)]
pub struct Grid<S> {
    source: S,
    config: GridConfig,
    outer: Rect,
    layout: GridLayout,
    rows: ExtentStore,
    cols: ExtentStore,
    // One flag per index: true once the source's extent hint has been
    // consulted (or an explicit setter pinned the extent).
    row_hinted: Vec<bool>,
    col_hinted: Vec<bool>,
    scroll: ScrollPos,
    v_track: ThumbTrack,
    h_track: ThumbTrack,
    selection: IndexSelection,
    cursor: CellCursor,
    damage: DamageAccumulator,
    gesture: DragGesture,
    // True between a primary press on a cell and its release: pointer moves
    // sweep the selection.
    sweeping: bool,
    // Row of the most recent press or sweep step; range anchor for
    // shift-clicks and drag sweeps.
    last_row: Option<usize>,
    // Position of the most recent primary press, for the release-time
    // dead-zone check.
    last_push: Option<Point>,
    last_pointer: Point,
    last_modifiers: Modifiers,
}

impl<S: CellSource> Grid<S> {
    /// Creates a grid over `source` occupying `outer`.
    ///
    /// Reads the source's counts immediately and starts fully damaged, so
    /// the first [`paint`](Grid::paint) draws everything.
    pub fn new(source: S, outer: Rect, config: GridConfig) -> Self {
        let mut rows = ExtentStore::new(0, config.default_row_height);
        rows.set_min_extent(0);
        let mut cols = ExtentStore::new(0, config.default_col_width);
        cols.set_min_extent(0);
        let mut selection = IndexSelection::new();
        selection.set_mode(config.select_mode);
        let mut grid = Self {
            source,
            config,
            outer: outer.abs(),
            layout: GridLayout::default(),
            rows,
            cols,
            row_hinted: Vec::new(),
            col_hinted: Vec::new(),
            scroll: ScrollPos::default(),
            v_track: ThumbTrack::new(0),
            h_track: ThumbTrack::new(0),
            selection,
            cursor: CellCursor::new(),
            damage: DamageAccumulator::new(),
            gesture: DragGesture::default(),
            sweeping: false,
            last_row: None,
            last_push: None,
            last_pointer: Point::ZERO,
            last_modifiers: Modifiers::empty(),
        };
        grid.reconcile();
        grid
    }

    /// Re-reads the source's counts and reconciles all per-index state.
    ///
    /// Call after adding or removing rows or columns in the source.
    /// Surviving indices keep their extents, selection flags, and hint
    /// state; the cursor and the range anchor are clamped or cleared, the
    /// scroll offsets re-clamp, and everything is marked damaged.
    pub fn reconcile(&mut self) {
        let rows = self.source.row_count();
        let cols = self.source.col_count();
        // Selection grows before the extent store and shrinks after it, so
        // an observer never sees a selectable row without geometry.
        if rows >= self.rows.len() {
            self.selection.set_len(rows);
            self.rows.set_len(rows);
        } else {
            self.rows.set_len(rows);
            self.selection.set_len(rows);
        }
        self.cols.set_len(cols);
        self.row_hinted.resize(rows, false);
        self.col_hinted.resize(cols, false);
        if self.last_row.is_some_and(|row| row >= rows) {
            self.last_row = None;
        }
        self.cursor.clamp_to(rows, cols);
        self.sync_geometry();
        self.damage.mark_all();
    }

    // --- Counts and extents ---

    /// Returns the number of rows the grid currently knows about.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns the grid currently knows about.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    /// Returns the stored height of `row`, or 0 if out of range.
    ///
    /// Unpulled source hints are not consulted; the stored value is what
    /// geometry currently uses.
    #[must_use]
    pub fn row_height(&self, row: usize) -> u32 {
        self.rows.extent(row).unwrap_or(0)
    }

    /// Returns the stored width of `col`, or 0 if out of range.
    #[must_use]
    pub fn col_width(&self, col: usize) -> u32 {
        self.cols.extent(col).unwrap_or(0)
    }

    /// Sets the height of `row` in pixels and pins it against source hints.
    ///
    /// A height of 0 hides the row. Returns `true` if geometry changed;
    /// out-of-range rows are ignored.
    pub fn set_row_height(&mut self, row: usize, height: u32) -> bool {
        let Some(hinted) = self.row_hinted.get_mut(row) else {
            return false;
        };
        *hinted = true;
        self.apply_row_extent(row, height)
    }

    /// Sets the width of `col` in pixels and pins it against source hints.
    ///
    /// A width of 0 hides the column. Returns `true` if geometry changed;
    /// out-of-range columns are ignored.
    pub fn set_col_width(&mut self, col: usize, width: u32) -> bool {
        let Some(hinted) = self.col_hinted.get_mut(col) else {
            return false;
        };
        *hinted = true;
        self.apply_col_extent(col, width)
    }

    /// Sets every row to `height` pixels, including rows added later.
    pub fn set_row_height_all(&mut self, height: u32) {
        self.rows.set_default_extent(height);
        for hinted in &mut self.row_hinted {
            *hinted = true;
        }
        if self.rows.set_all(height) {
            self.damage.mark_all();
        }
        self.sync_geometry();
    }

    /// Sets every column to `width` pixels, including columns added later.
    pub fn set_col_width_all(&mut self, width: u32) {
        self.cols.set_default_extent(width);
        for hinted in &mut self.col_hinted {
            *hinted = true;
        }
        if self.cols.set_all(width) {
            self.damage.mark_all();
        }
        self.sync_geometry();
    }

    /// Returns the total content width in pixels, as currently known.
    pub fn content_width(&mut self) -> u64 {
        self.cols.total_extent()
    }

    /// Returns the total content height in pixels, as currently known.
    pub fn content_height(&mut self) -> u64 {
        self.rows.total_extent()
    }

    // --- Scrolling ---

    /// Returns the scroll state for both axes.
    #[must_use]
    pub const fn scroll(&self) -> &ScrollPos {
        &self.scroll
    }

    /// Returns the horizontal scroll offset in pixels.
    #[must_use]
    pub const fn scroll_x(&self) -> u64 {
        self.scroll.horizontal().offset()
    }

    /// Returns the vertical scroll offset in pixels.
    #[must_use]
    pub const fn scroll_y(&self) -> u64 {
        self.scroll.vertical().offset()
    }

    /// Scrolls `axis` to `offset`, hard-clamped to the valid range.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_to(&mut self, axis: Axis, offset: u64) -> bool {
        let moved = self.scroll.axis_mut(axis).set_offset(offset);
        if moved {
            self.damage.mark_all();
        }
        moved
    }

    /// Applies a wheel delta in pixels; positive components scroll toward
    /// larger offsets (down and right).
    ///
    /// Returns `true` if either offset changed.
    pub fn scroll_wheel(&mut self, delta: Vec2) -> bool {
        let mut moved = false;
        let dy = layout::pointer_px(delta.y);
        if dy != 0 {
            moved |= self.scroll.axis_mut(Axis::Vertical).scroll_by(dy);
        }
        let dx = layout::pointer_px(delta.x);
        if dx != 0 {
            moved |= self.scroll.axis_mut(Axis::Horizontal).scroll_by(dx);
        }
        if moved {
            self.damage.mark_all();
        }
        moved
    }

    /// Returns the topmost row intersecting the viewport.
    pub fn row_position(&mut self) -> usize {
        let offset = self.scroll.vertical().offset();
        self.rows.index_at_offset(offset)
    }

    /// Scrolls so `row` is the topmost row. Out-of-range rows clamp to the
    /// last row.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_row_position(&mut self, row: usize) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let row = row.min(self.rows.len() - 1);
        let offset = self.rows.offset_of(row);
        self.scroll_to(Axis::Vertical, offset)
    }

    /// Returns the leftmost column intersecting the viewport.
    pub fn col_position(&mut self) -> usize {
        let offset = self.scroll.horizontal().offset();
        self.cols.index_at_offset(offset)
    }

    /// Scrolls so `col` is the leftmost column. Out-of-range columns clamp
    /// to the last column.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_col_position(&mut self, col: usize) -> bool {
        if self.cols.is_empty() {
            return false;
        }
        let col = col.min(self.cols.len() - 1);
        let offset = self.cols.offset_of(col);
        self.scroll_to(Axis::Horizontal, offset)
    }

    /// Scrolls the minimal distance that brings `(row, col)` fully into the
    /// viewport.
    ///
    /// A cell already in view scrolls nothing; a cell larger than the
    /// viewport aligns its leading edge. Returns `true` if either offset
    /// changed.
    pub fn reveal_cell(&mut self, row: usize, col: usize) -> bool {
        let mut moved = reveal_index(&mut self.rows, self.scroll.axis_mut(Axis::Vertical), row);
        moved |= reveal_index(&mut self.cols, self.scroll.axis_mut(Axis::Horizontal), col);
        if moved {
            self.damage.mark_all();
        }
        moved
    }

    /// Returns the rows intersecting the body viewport, pulling pending
    /// source hints for newly revealed rows first.
    pub fn visible_rows(&mut self) -> Range<usize> {
        self.ensure_hints();
        let offset = self.scroll.vertical().offset();
        let viewport = self.scroll.vertical().viewport();
        self.rows.visible_range(offset, viewport)
    }

    /// Returns the columns intersecting the body viewport, pulling pending
    /// source hints for newly revealed columns first.
    pub fn visible_cols(&mut self) -> Range<usize> {
        self.ensure_hints();
        let offset = self.scroll.horizontal().offset();
        let viewport = self.scroll.horizontal().viewport();
        self.cols.visible_range(offset, viewport)
    }

    /// Returns the span of cells intersecting the body viewport, or `None`
    /// when either axis shows nothing.
    pub fn visible_cells(&mut self) -> Option<CellSpan> {
        let rows = self.visible_rows();
        let cols = self.visible_cols();
        if rows.is_empty() || cols.is_empty() {
            return None;
        }
        Some(CellSpan::new(rows.start, rows.end - 1, cols.start, cols.end - 1))
    }

    // --- Selection ---

    /// Returns the row selection state.
    #[must_use]
    pub const fn selection(&self) -> &IndexSelection {
        &self.selection
    }

    /// Returns `true` if `row` is selected.
    #[must_use]
    pub fn row_selected(&self, row: usize) -> bool {
        self.selection.is_selected(row)
    }

    /// Applies `action` to the selection flag of `row`.
    pub fn select_row(&mut self, row: usize, action: SelectAction) -> SelectOutcome {
        let outcome = self.selection.select(row, action);
        self.mark_rows(outcome.changed_span());
        outcome
    }

    /// Selects the inclusive row range between `anchor` and `row`.
    pub fn select_row_range(&mut self, anchor: usize, row: usize, additive: bool) -> SelectOutcome {
        let outcome = self.selection.select_range(anchor, row, additive);
        self.mark_rows(outcome.changed_span());
        outcome
    }

    /// Applies `action` to every row's selection flag.
    pub fn select_all_rows(&mut self, action: SelectAction) -> SelectOutcome {
        let outcome = self.selection.select_all(action);
        self.mark_rows(outcome.changed_span());
        outcome
    }

    /// Deselects every row, regardless of mode.
    pub fn clear_selection(&mut self) -> SelectOutcome {
        let outcome = self.selection.clear_all();
        self.mark_rows(outcome.changed_span());
        outcome
    }

    /// Switches the selection mode, pruning flags the new mode cannot hold.
    pub fn set_select_mode(&mut self, mode: SelectMode) -> SelectOutcome {
        self.config.select_mode = mode;
        let outcome = self.selection.set_mode(mode);
        self.mark_rows(outcome.changed_span());
        outcome
    }

    // --- Cursor ---

    /// Returns the keyboard cursor.
    #[must_use]
    pub const fn cursor(&self) -> &CellCursor {
        &self.cursor
    }

    /// Places the cursor on `(row, col)`, collapsing any extension.
    ///
    /// Returns `true` if the cursor moved; out-of-range cells are ignored.
    pub fn set_cursor(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows.len() || col >= self.cols.len() {
            return false;
        }
        match self.cursor.move_to(row, col) {
            Some(span) => {
                self.damage.mark(span);
                true
            }
            None => false,
        }
    }

    /// Extends the cursor region to `(row, col)`.
    ///
    /// Returns `true` if the region changed; out-of-range cells are ignored.
    pub fn extend_cursor(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows.len() || col >= self.cols.len() {
            return false;
        }
        match self.cursor.extend_to(row, col) {
            Some(span) => {
                self.damage.mark(span);
                true
            }
            None => false,
        }
    }

    /// Removes the cursor. Returns `true` if one was placed.
    pub fn clear_cursor(&mut self) -> bool {
        match self.cursor.clear() {
            Some(span) => {
                self.damage.mark(span);
                true
            }
            None => false,
        }
    }

    /// Handles a navigation key.
    ///
    /// Arrows move the cursor one cell; `PageUp`/`PageDown` move by the
    /// visible row count less an overlap row; `Home`/`End` jump to the first
    /// and last column. With no cursor placed, navigation starts from the
    /// top-left cell. Holding shift extends the cursor region instead of
    /// moving the anchor. The target cell is revealed.
    ///
    /// Returns `true` if the key was handled (the cursor moved).
    pub fn key(&mut self, key: NavKey, modifiers: Modifiers) -> bool {
        if self.rows.is_empty() || self.cols.is_empty() {
            return false;
        }
        let last_row = self.rows.len() - 1;
        let last_col = self.cols.len() - 1;
        let (row, col) = self.cursor.extension().unwrap_or((0, 0));
        let (row, col) = (row.min(last_row), col.min(last_col));
        let target = match key {
            NavKey::Up => (row.saturating_sub(1), col),
            NavKey::Down => (row.saturating_add(1).min(last_row), col),
            NavKey::Left => (row, col.saturating_sub(1)),
            NavKey::Right => (row, col.saturating_add(1).min(last_col)),
            NavKey::PageUp => (row.saturating_sub(self.page_rows()), col),
            NavKey::PageDown => (row.saturating_add(self.page_rows()).min(last_row), col),
            NavKey::Home => (row, 0),
            NavKey::End => (row, last_col),
        };
        if self.cursor.extension() == Some(target) {
            return false;
        }
        let span = if modifiers.contains(Modifiers::SHIFT) {
            self.cursor.extend_to(target.0, target.1)
        } else {
            self.cursor.move_to(target.0, target.1)
        };
        if let Some(span) = span {
            self.damage.mark(span);
        }
        self.reveal_cell(target.0, target.1);
        true
    }

    // --- Pointer input ---

    /// Classifies `pos` against the current layout and content.
    pub fn hit_test(&mut self, pos: Point) -> Hit {
        if !self.outer.contains(pos) {
            return Hit::outside();
        }
        self.ensure_hints();
        if self.layout.v_scrollbar.contains(pos) {
            return Hit {
                zone: HitZone::Scrollbar(Axis::Vertical),
                row: None,
                col: None,
                resize: None,
            };
        }
        if self.layout.h_scrollbar.contains(pos) {
            return Hit {
                zone: HitZone::Scrollbar(Axis::Horizontal),
                row: None,
                col: None,
                resize: None,
            };
        }
        if self.layout.col_header.contains(pos) {
            let Some(col) = self.col_at_x(pos.x) else {
                return Hit::dead_zone();
            };
            let resize = if self.config.col_resize {
                self.col_resize_edge(pos.x, col)
            } else {
                None
            };
            return Hit {
                zone: HitZone::ColHeader,
                row: None,
                col: Some(col),
                resize,
            };
        }
        if self.layout.row_header.contains(pos) {
            let Some(row) = self.row_at_y(pos.y) else {
                return Hit::dead_zone();
            };
            let resize = if self.config.row_resize {
                self.row_resize_edge(pos.y, row)
            } else {
                None
            };
            return Hit {
                zone: HitZone::RowHeader,
                row: Some(row),
                col: None,
                resize,
            };
        }
        if self.layout.body.contains(pos) {
            let row = self.row_at_y(pos.y);
            let col = self.col_at_x(pos.x);
            if let (Some(row), Some(col)) = (row, col) {
                return Hit {
                    zone: HitZone::Cell,
                    row: Some(row),
                    col: Some(col),
                    resize: None,
                };
            }
            // Inside the body but past the content on at least one axis.
            return Hit {
                zone: HitZone::DeadZone,
                row,
                col,
                resize: None,
            };
        }
        Hit::dead_zone()
    }

    /// Feeds a pointer press.
    ///
    /// Primary presses drive the grid: scrollbar presses page or grab the
    /// thumb, header-boundary presses start a resize drag, and cell presses
    /// move the cursor and mutate the selection according to the modifiers
    /// (plain replaces, ctrl toggles, shift ranges from the previous press).
    /// Returns an event when the press landed on content the host may care
    /// about; scrollbar and resize interactions are consumed silently.
    pub fn pointer_down(&mut self, input: PointerInput) -> Option<GridEvent> {
        self.last_pointer = input.pos;
        self.last_modifiers = input.modifiers;
        let hit = self.hit_test(input.pos);
        let primary = input.button == PointerButton::Primary;
        match hit.zone {
            HitZone::Outside => return None,
            HitZone::Scrollbar(axis) => {
                if primary {
                    self.scrollbar_press(axis, input.pos);
                }
                return None;
            }
            _ => {}
        }
        if primary {
            self.last_push = Some(input.pos);
            if let Some(edge) = hit.resize {
                self.begin_boundary_resize(&hit, edge, input.pos);
                return None;
            }
            if hit.zone == HitZone::Cell
                && let (Some(row), Some(col)) = (hit.row, hit.col)
            {
                self.cell_press(row, col, input.modifiers);
            }
        }
        Some(GridEvent {
            zone: hit.zone,
            row: hit.row,
            col: hit.col,
            kind: GridEventKind::Press,
        })
    }

    /// Feeds a pointer move.
    ///
    /// Advances whichever gesture is in flight: thumb drags scroll, boundary
    /// drags resize (reported as [`GridEventKind::Resize`] events), and cell
    /// sweeps extend the selection and cursor. A boundary drag is clamped to
    /// the configured minimum and to the space left before the body's far
    /// edge.
    pub fn pointer_move(&mut self, input: PointerInput) -> Option<GridEvent> {
        self.last_pointer = input.pos;
        self.last_modifiers = input.modifiers;
        let gesture = self.gesture;
        if let Some(drag) = gesture.thumb() {
            let axis = drag.axis();
            let (along, track) = match axis {
                Axis::Vertical => (input.pos.y, self.v_track),
                Axis::Horizontal => (input.pos.x, self.h_track),
            };
            let state = *self.scroll.axis(axis);
            let target = drag.target_offset(layout::pointer_px(along), &state, &track);
            if self.scroll.axis_mut(axis).set_offset(target) {
                self.damage.mark_all();
            }
            return None;
        }
        if let Some(resize) = gesture.resize() {
            let axis = resize.axis();
            let index = resize.index();
            let changed = match axis {
                Axis::Vertical => {
                    let pos = layout::pointer_px(input.pos.y);
                    // The dragged boundary may travel to the body's bottom
                    // edge, no further.
                    let start = self.layout.body.y0 - self.scroll.vertical().offset() as f64
                        + self.rows.offset_of(index) as f64;
                    let max = layout::track_px(self.layout.body.y1 - start);
                    let extent =
                        resize.extent_for(pos, self.config.row_resize_min.max(1), Some(max));
                    if let Some(hinted) = self.row_hinted.get_mut(index) {
                        *hinted = true;
                    }
                    self.apply_row_extent(index, extent)
                }
                Axis::Horizontal => {
                    let pos = layout::pointer_px(input.pos.x);
                    let start = self.layout.body.x0 - self.scroll.horizontal().offset() as f64
                        + self.cols.offset_of(index) as f64;
                    let max = layout::track_px(self.layout.body.x1 - start);
                    let extent =
                        resize.extent_for(pos, self.config.col_resize_min.max(1), Some(max));
                    if let Some(hinted) = self.col_hinted.get_mut(index) {
                        *hinted = true;
                    }
                    self.apply_col_extent(index, extent)
                }
            };
            if !changed {
                return None;
            }
            return Some(GridEvent {
                zone: match axis {
                    Axis::Vertical => HitZone::RowHeader,
                    Axis::Horizontal => HitZone::ColHeader,
                },
                row: (axis == Axis::Vertical).then_some(index),
                col: (axis == Axis::Horizontal).then_some(index),
                kind: GridEventKind::Resize,
            });
        }
        if self.sweeping {
            self.sweep_to(input.pos, input.modifiers);
        }
        None
    }

    /// Feeds a pointer release.
    ///
    /// Ends any in-flight gesture, keeping its last applied state. A primary
    /// press and release that both landed past the content on the same axis
    /// clear the selection. Returns a release event when over content.
    pub fn pointer_up(&mut self, input: PointerInput) -> Option<GridEvent> {
        self.last_pointer = input.pos;
        self.last_modifiers = input.modifiers;
        self.gesture.finish();
        self.sweeping = false;
        let hit = self.hit_test(input.pos);
        if input.button == PointerButton::Primary
            && let Some(push) = self.last_push.take()
        {
            self.release_clear(push, input.pos);
        }
        match hit.zone {
            HitZone::Outside | HitZone::Scrollbar(_) => None,
            _ => Some(GridEvent {
                zone: hit.zone,
                row: hit.row,
                col: hit.col,
                kind: GridEventKind::Release,
            }),
        }
    }

    /// Notifies the grid that pointer capture was lost mid-gesture.
    ///
    /// Gestures commit on cancel: every pointer move already applied a fully
    /// clamped value, so the last applied state stands and only the gesture
    /// bookkeeping is dropped.
    pub fn capture_lost(&mut self) {
        self.gesture.finish();
        self.sweeping = false;
        self.last_push = None;
    }

    /// Scrolls toward a pointer dwelling outside the body during a sweep.
    ///
    /// Call on a timer while a cell sweep is in flight. The scroll step is
    /// the pointer's overshoot past the body edge, and the sweep is then
    /// replayed at the nearest in-body position. Returns `true` if the grid
    /// scrolled (keep the timer running).
    pub fn auto_scroll_tick(&mut self) -> bool {
        if !self.sweeping {
            return false;
        }
        let body = self.layout.body;
        if body.width() < 1.0 || body.height() < 1.0 {
            return false;
        }
        let pos = self.last_pointer;
        let dx = if pos.x < body.x0 {
            pos.x - body.x0
        } else if pos.x > body.x1 {
            pos.x - body.x1
        } else {
            0.0
        };
        let dy = if pos.y < body.y0 {
            pos.y - body.y0
        } else if pos.y > body.y1 {
            pos.y - body.y1
        } else {
            0.0
        };
        let mut moved = false;
        let dy = layout::pointer_px(dy);
        if dy != 0 {
            moved |= self.scroll.axis_mut(Axis::Vertical).scroll_by(dy);
        }
        let dx = layout::pointer_px(dx);
        if dx != 0 {
            moved |= self.scroll.axis_mut(Axis::Horizontal).scroll_by(dx);
        }
        if moved {
            self.damage.mark_all();
            let clamped = Point::new(
                pos.x.clamp(body.x0, body.x1 - 1.0),
                pos.y.clamp(body.y0, body.y1 - 1.0),
            );
            self.sweep_to(clamped, self.last_modifiers);
        }
        moved
    }

    /// Returns `true` while a row or column boundary drag is in flight.
    #[must_use]
    pub const fn is_interactive_resize(&self) -> bool {
        self.gesture.resize().is_some()
    }

    // --- Painting and damage ---

    /// Runs one paint pass over the pending damage.
    ///
    /// With no damage pending this is a no-op returning `None`. Otherwise
    /// the source's [`draw_cell`](CellSource::draw_cell) is driven in order:
    /// `StartPage`, column headers, row headers, the damaged visible cells
    /// row-major, `EndPage`. Cells are reported with their full rects even
    /// when they straddle the body edge; zero-extent rows and columns are
    /// skipped. Returns the span of cells painted, or `None` when no cell
    /// was visible.
    pub fn paint(&mut self) -> Option<CellSpan> {
        let visible_rows = self.visible_rows();
        let visible_cols = self.visible_cols();
        let (rows, cols) = match self.damage.take_and_reset() {
            Damage::Empty => return None,
            Damage::Everything => (visible_rows.clone(), visible_cols.clone()),
            Damage::Cells(span) => (
                span.top.max(visible_rows.start)..(span.bottom + 1).min(visible_rows.end),
                span.left.max(visible_cols.start)..(span.right + 1).min(visible_cols.end),
            ),
        };
        if rows.start >= rows.end || cols.start >= cols.end {
            return None;
        }
        let body = self.layout.body;
        let scroll_x = self.scroll.horizontal().offset() as f64;
        let scroll_y = self.scroll.vertical().offset() as f64;
        self.source
            .draw_cell(PaintContext::StartPage, visible_rows.start, visible_cols.start, body);
        if self.config.col_header {
            let header = self.layout.col_header;
            for col in cols.clone() {
                let extent = self.cols.extent_of(col);
                if extent == 0 {
                    continue;
                }
                let x = body.x0 - scroll_x + self.cols.offset_of(col) as f64;
                let bounds = Rect::new(x, header.y0, x + f64::from(extent), header.y1);
                self.source.draw_cell(PaintContext::ColHeader, 0, col, bounds);
            }
        }
        if self.config.row_header {
            let header = self.layout.row_header;
            for row in rows.clone() {
                let extent = self.rows.extent_of(row);
                if extent == 0 {
                    continue;
                }
                let y = body.y0 - scroll_y + self.rows.offset_of(row) as f64;
                let bounds = Rect::new(header.x0, y, header.x1, y + f64::from(extent));
                self.source.draw_cell(PaintContext::RowHeader, row, 0, bounds);
            }
        }
        for row in rows.clone() {
            let row_extent = self.rows.extent_of(row);
            if row_extent == 0 {
                continue;
            }
            let y = body.y0 - scroll_y + self.rows.offset_of(row) as f64;
            for col in cols.clone() {
                let col_extent = self.cols.extent_of(col);
                if col_extent == 0 {
                    continue;
                }
                let x = body.x0 - scroll_x + self.cols.offset_of(col) as f64;
                let bounds = Rect::new(x, y, x + f64::from(col_extent), y + f64::from(row_extent));
                self.source.draw_cell(PaintContext::Cell, row, col, bounds);
            }
        }
        self.source
            .draw_cell(PaintContext::EndPage, visible_rows.start, visible_cols.start, body);
        Some(CellSpan::new(rows.start, rows.end - 1, cols.start, cols.end - 1))
    }

    /// Returns the pending damage and resets it to empty.
    pub fn take_damage(&mut self) -> Damage {
        self.damage.take_and_reset()
    }

    /// Returns the pending damage without consuming it.
    #[must_use]
    pub const fn pending_damage(&self) -> Damage {
        self.damage.pending()
    }

    /// Marks everything damaged, forcing the next paint to draw it all.
    pub fn invalidate(&mut self) {
        self.damage.mark_all();
    }

    /// Marks a span of cells damaged, e.g. after their content changed in
    /// the source.
    pub fn invalidate_cells(&mut self, span: CellSpan) {
        self.damage.mark(span);
    }

    // --- Geometry and configuration ---

    /// Returns the outer rect the grid occupies.
    #[must_use]
    pub const fn outer_rect(&self) -> Rect {
        self.outer
    }

    /// Moves or resizes the grid's outer rect.
    pub fn set_outer_rect(&mut self, outer: Rect) {
        let outer = outer.abs();
        if self.outer == outer {
            return;
        }
        self.outer = outer;
        self.sync_geometry();
    }

    /// Returns where the body, header bands, and scrollbars currently are.
    #[must_use]
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Returns the current options.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Shows or hides the row header band.
    pub fn set_row_header(&mut self, on: bool) {
        if self.config.row_header != on {
            self.config.row_header = on;
            self.sync_geometry();
        }
    }

    /// Shows or hides the column header band.
    pub fn set_col_header(&mut self, on: bool) {
        if self.config.col_header != on {
            self.config.col_header = on;
            self.sync_geometry();
        }
    }

    /// Sets the row header band width in pixels.
    pub fn set_row_header_width(&mut self, width: f64) {
        self.config.row_header_width = width.max(0.0);
        self.sync_geometry();
    }

    /// Sets the column header band height in pixels.
    pub fn set_col_header_height(&mut self, height: f64) {
        self.config.col_header_height = height.max(0.0);
        self.sync_geometry();
    }

    /// Sets the scrollbar track thickness in pixels.
    pub fn set_scrollbar_size(&mut self, size: f64) {
        self.config.scrollbar_size = size.max(0.0);
        self.sync_geometry();
    }

    /// Enables or disables interactive row resizing.
    pub fn set_row_resize(&mut self, on: bool) {
        self.config.row_resize = on;
    }

    /// Enables or disables interactive column resizing.
    pub fn set_col_resize(&mut self, on: bool) {
        self.config.col_resize = on;
    }

    /// Sets the smallest height an interactive row resize may produce.
    pub fn set_row_resize_min(&mut self, min: u32) {
        self.config.row_resize_min = min.max(1);
    }

    /// Sets the smallest width an interactive column resize may produce.
    pub fn set_col_resize_min(&mut self, min: u32) {
        self.config.col_resize_min = min.max(1);
    }

    /// Sets the grab distance for header boundary resizing, in pixels.
    pub fn set_resize_grab_margin(&mut self, margin: f64) {
        self.config.resize_grab_margin = margin.max(0.0);
    }

    // --- Source access ---

    /// Returns the content source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the content source mutably.
    ///
    /// After changing the source's row or column counts, call
    /// [`reconcile`](Grid::reconcile).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Captures a snapshot of the grid's observable state.
    #[must_use]
    pub fn debug_info(&mut self) -> GridDebugInfo {
        let visible_rows = self.visible_rows();
        let visible_cols = self.visible_cols();
        GridDebugInfo {
            rows: self.rows.len(),
            cols: self.cols.len(),
            content_width: self.cols.total_extent(),
            content_height: self.rows.total_extent(),
            scroll_x: self.scroll.horizontal().offset(),
            scroll_y: self.scroll.vertical().offset(),
            visible_rows,
            visible_cols,
            selected_rows: self.selection.selected_count(),
            cursor: self.cursor.current(),
            damage: self.damage.pending(),
        }
    }

    // --- Internals ---

    /// Recomputes the chrome layout and republishes viewport and content
    /// extents to the scroll axes, marking everything damaged if anything
    /// observable moved.
    fn sync_geometry(&mut self) {
        let content_w = self.cols.total_extent();
        let content_h = self.rows.total_extent();
        let layout = layout::compute(self.outer, &self.config, content_w, content_h);
        if layout != self.layout {
            self.layout = layout;
            self.damage.mark_all();
        }
        let before_x = self.scroll.horizontal().offset();
        let before_y = self.scroll.vertical().offset();
        {
            let vertical = self.scroll.axis_mut(Axis::Vertical);
            vertical.set_viewport(layout::px_extent(layout.body.height()));
            vertical.set_total(content_h);
        }
        {
            let horizontal = self.scroll.axis_mut(Axis::Horizontal);
            horizontal.set_viewport(layout::px_extent(layout.body.width()));
            horizontal.set_total(content_w);
        }
        if self.scroll.horizontal().offset() != before_x
            || self.scroll.vertical().offset() != before_y
        {
            self.damage.mark_all();
        }
        self.v_track
            .set_track_extent(layout::track_px(layout.v_scrollbar.height()));
        self.h_track
            .set_track_extent(layout::track_px(layout.h_scrollbar.width()));
    }

    /// Pulls source extent hints for every index currently visible and not
    /// yet consulted, iterating until the visible ranges stop moving.
    ///
    /// Hints change totals, totals move scrollbars, and scrollbars change
    /// what is visible on the *other* axis, so both axes are swept together
    /// to a fixpoint. Terminates because each iteration consults at least
    /// one new index or stops.
    fn ensure_hints(&mut self) {
        loop {
            let pulled_rows = self.pull_row_hints();
            let pulled_cols = self.pull_col_hints();
            if !pulled_rows && !pulled_cols {
                return;
            }
        }
    }

    fn pull_row_hints(&mut self) -> bool {
        let offset = self.scroll.vertical().offset();
        let viewport = self.scroll.vertical().viewport();
        let range = self.rows.visible_range(offset, viewport);
        let mut pulled = false;
        for row in range {
            if self.row_hinted.get(row).copied().unwrap_or(true) {
                continue;
            }
            self.row_hinted[row] = true;
            pulled = true;
            if let Some(height) = self.source.row_extent_hint(row)
                && self.rows.set_extent(row, height)
            {
                self.damage.mark_all();
            }
        }
        if pulled {
            self.sync_geometry();
        }
        pulled
    }

    fn pull_col_hints(&mut self) -> bool {
        let offset = self.scroll.horizontal().offset();
        let viewport = self.scroll.horizontal().viewport();
        let range = self.cols.visible_range(offset, viewport);
        let mut pulled = false;
        for col in range {
            if self.col_hinted.get(col).copied().unwrap_or(true) {
                continue;
            }
            self.col_hinted[col] = true;
            pulled = true;
            if let Some(width) = self.source.col_extent_hint(col)
                && self.cols.set_extent(col, width)
            {
                self.damage.mark_all();
            }
        }
        if pulled {
            self.sync_geometry();
        }
        pulled
    }

    /// Writes a row extent and marks the damage it causes: the rows from
    /// `row` down when the shift is contained in content, or everything
    /// when the content edge is (or was) inside the viewport.
    fn apply_row_extent(&mut self, row: usize, height: u32) -> bool {
        let viewport_end = self.scroll.vertical().offset() + self.scroll.vertical().viewport();
        let before = self.rows.total_extent();
        if !self.rows.set_extent(row, height) {
            return false;
        }
        let after = self.rows.total_extent();
        if before < viewport_end || after < viewport_end || self.cols.is_empty() {
            self.damage.mark_all();
        } else {
            let last_row = self.rows.len() - 1;
            let last_col = self.cols.len() - 1;
            self.damage.mark(CellSpan::new(row, last_row, 0, last_col));
        }
        self.sync_geometry();
        true
    }

    fn apply_col_extent(&mut self, col: usize, width: u32) -> bool {
        let viewport_end = self.scroll.horizontal().offset() + self.scroll.horizontal().viewport();
        let before = self.cols.total_extent();
        if !self.cols.set_extent(col, width) {
            return false;
        }
        let after = self.cols.total_extent();
        if before < viewport_end || after < viewport_end || self.rows.is_empty() {
            self.damage.mark_all();
        } else {
            let last_row = self.rows.len() - 1;
            let last_col = self.cols.len() - 1;
            self.damage.mark(CellSpan::new(0, last_row, col, last_col));
        }
        self.sync_geometry();
        true
    }

    /// Rows a page jump moves by: the visible count less one overlap row,
    /// never less than 1.
    fn page_rows(&mut self) -> usize {
        self.visible_rows().len().saturating_sub(2).max(1)
    }

    /// Maps a widget-space x to a column, if it lands inside the content.
    fn col_at_x(&mut self, x: f64) -> Option<usize> {
        let content = x - self.layout.body.x0 + self.scroll.horizontal().offset() as f64;
        if content < 0.0 || content >= self.cols.total_extent() as f64 {
            return None;
        }
        Some(self.cols.index_at_offset(layout::px_extent(content)))
    }

    /// Maps a widget-space y to a row, if it lands inside the content.
    fn row_at_y(&mut self, y: f64) -> Option<usize> {
        let content = y - self.layout.body.y0 + self.scroll.vertical().offset() as f64;
        if content < 0.0 || content >= self.rows.total_extent() as f64 {
            return None;
        }
        Some(self.rows.index_at_offset(layout::px_extent(content)))
    }

    /// Checks whether `x` grabs a boundary of `col` in the header band.
    fn col_resize_edge(&mut self, x: f64, col: usize) -> Option<ResizeEdge> {
        let margin = self.config.resize_grab_margin;
        let left =
            self.layout.body.x0 - self.scroll.horizontal().offset() as f64 + self.cols.offset_of(col) as f64;
        let right = left + f64::from(self.cols.extent_of(col));
        if x <= left + margin {
            // The left edge of the first column is the content edge, not a
            // boundary between columns.
            (col > 0).then_some(ResizeEdge::ColLeft)
        } else if x >= right - margin {
            Some(ResizeEdge::ColRight)
        } else {
            None
        }
    }

    /// Checks whether `y` grabs a boundary of `row` in the header band.
    fn row_resize_edge(&mut self, y: f64, row: usize) -> Option<ResizeEdge> {
        let margin = self.config.resize_grab_margin;
        let top =
            self.layout.body.y0 - self.scroll.vertical().offset() as f64 + self.rows.offset_of(row) as f64;
        let bottom = top + f64::from(self.rows.extent_of(row));
        if y <= top + margin {
            (row > 0).then_some(ResizeEdge::RowAbove)
        } else if y >= bottom - margin {
            Some(ResizeEdge::RowBelow)
        } else {
            None
        }
    }

    /// A primary press on a scrollbar track: page on the trough, grab the
    /// thumb under the pointer.
    fn scrollbar_press(&mut self, axis: Axis, pos: Point) {
        let (along, track) = match axis {
            Axis::Vertical => (pos.y - self.layout.v_scrollbar.y0, self.v_track),
            Axis::Horizontal => (pos.x - self.layout.h_scrollbar.x0, self.h_track),
        };
        let state = *self.scroll.axis(axis);
        let thumb_start = f64::from(track.thumb_offset(&state));
        let thumb_end = thumb_start + f64::from(track.thumb_extent(&state));
        if along < thumb_start {
            if self.scroll.axis_mut(axis).page_backward() {
                self.damage.mark_all();
            }
        } else if along >= thumb_end {
            if self.scroll.axis_mut(axis).page_forward() {
                self.damage.mark_all();
            }
        } else {
            let grab_pos = layout::pointer_px(match axis {
                Axis::Vertical => pos.y,
                Axis::Horizontal => pos.x,
            });
            self.gesture.begin_thumb(axis, grab_pos, state.offset());
        }
    }

    fn begin_boundary_resize(&mut self, hit: &Hit, edge: ResizeEdge, pos: Point) -> bool {
        match edge {
            ResizeEdge::ColLeft | ResizeEdge::ColRight => {
                let Some(col) = hit.col else {
                    return false;
                };
                let index = if edge == ResizeEdge::ColLeft { col - 1 } else { col };
                let extent = self.cols.extent(index).unwrap_or(0);
                self.gesture
                    .begin_resize(Axis::Horizontal, index, layout::pointer_px(pos.x), extent)
            }
            ResizeEdge::RowAbove | ResizeEdge::RowBelow => {
                let Some(row) = hit.row else {
                    return false;
                };
                let index = if edge == ResizeEdge::RowAbove { row - 1 } else { row };
                let extent = self.rows.extent(index).unwrap_or(0);
                self.gesture
                    .begin_resize(Axis::Vertical, index, layout::pointer_px(pos.y), extent)
            }
        }
    }

    /// A primary press on a cell: cursor plus selection per the modifiers.
    ///
    /// Ctrl wins over shift. Plain replaces the selection with the row,
    /// ctrl toggles the row, shift ranges additively from the previous
    /// press's row (or just selects when there is none or the mode has no
    /// ranges). The press also arms sweep mode for the following moves.
    fn cell_press(&mut self, row: usize, col: usize, modifiers: Modifiers) {
        let cursor_span = if modifiers.contains(Modifiers::SHIFT)
            && !modifiers.contains(Modifiers::CTRL)
        {
            self.cursor.extend_to(row, col)
        } else {
            self.cursor.move_to(row, col)
        };
        if let Some(span) = cursor_span {
            self.damage.mark(span);
        }
        if modifiers.contains(Modifiers::CTRL) {
            let outcome = self.selection.select(row, SelectAction::Toggle);
            self.mark_rows(outcome.changed_span());
        } else if modifiers.contains(Modifiers::SHIFT) {
            let outcome = match self.last_row {
                Some(anchor) if self.selection.mode() == SelectMode::Multi => {
                    self.selection.select_range(anchor, row, true)
                }
                _ => self.selection.select(row, SelectAction::Select),
            };
            self.mark_rows(outcome.changed_span());
        } else {
            let cleared = self.selection.clear_all();
            self.mark_rows(cleared.changed_span());
            let outcome = self.selection.select(row, SelectAction::Select);
            self.mark_rows(outcome.changed_span());
        }
        self.last_row = Some(row);
        self.sweeping = true;
    }

    /// One step of a sweep: the pointer reached `pos` with the primary
    /// button still down.
    fn sweep_to(&mut self, pos: Point, modifiers: Modifiers) {
        let hit = self.hit_test(pos);
        if hit.zone != HitZone::Cell {
            return;
        }
        let (Some(row), Some(col)) = (hit.row, hit.col) else {
            return;
        };
        if let Some(span) = self.cursor.extend_to(row, col) {
            self.damage.mark(span);
        }
        if modifiers.contains(Modifiers::CTRL) {
            // Toggle once per row entered, not once per pointer event.
            if self.last_row != Some(row) {
                let outcome = self.selection.select(row, SelectAction::Toggle);
                self.mark_rows(outcome.changed_span());
            }
        } else if self.selection.mode() == SelectMode::Multi {
            let anchor = self.last_row.unwrap_or(row);
            let outcome = self.selection.select_range(anchor, row, true);
            self.mark_rows(outcome.changed_span());
        } else {
            let outcome = self.selection.select(row, SelectAction::Select);
            self.mark_rows(outcome.changed_span());
        }
        self.last_row = Some(row);
    }

    /// The release-time dead-zone rule: a press and release both past the
    /// content's edge on the same axis clear the selection.
    fn release_clear(&mut self, push: Point, release: Point) {
        let body = self.layout.body;
        let data_right =
            body.x0 + self.cols.total_extent() as f64 - self.scroll.horizontal().offset() as f64;
        let data_bottom =
            body.y0 + self.rows.total_extent() as f64 - self.scroll.vertical().offset() as f64;
        let beyond_x = push.x > data_right && release.x > data_right;
        let beyond_y = push.y > data_bottom && release.y > data_bottom;
        if beyond_x || beyond_y {
            let outcome = self.selection.clear_all();
            self.mark_rows(outcome.changed_span());
        }
    }

    /// Marks a span of rows damaged across every column.
    fn mark_rows(&mut self, span: Option<IndexSpan>) {
        let Some(span) = span else {
            return;
        };
        if self.cols.is_empty() {
            return;
        }
        let last_col = self.cols.len() - 1;
        self.damage
            .mark(CellSpan::new(span.first, span.last, 0, last_col));
    }
}

/// Scrolls one axis the minimal distance that brings `index` fully into
/// view.
fn reveal_index(extents: &mut ExtentStore, axis: &mut ScrollAxis, index: usize) -> bool {
    if extents.is_empty() {
        return false;
    }
    let index = index.min(extents.len() - 1);
    let start = extents.offset_of(index);
    let extent = u64::from(extents.extent_of(index));
    let offset = axis.offset();
    let viewport = axis.viewport();
    let target = if start < offset {
        start
    } else if start + extent > offset + viewport {
        if extent >= viewport {
            start
        } else {
            start + extent - viewport
        }
    } else {
        return false;
    };
    axis.set_offset(target)
}
