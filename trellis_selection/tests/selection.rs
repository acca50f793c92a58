// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior tests for [`IndexSelection`]: mode gating, minimal damage spans,
//! and axis-length reconciliation.

use trellis_selection::{IndexSelection, IndexSpan, SelectAction, SelectMode, SelectOutcome};

fn selection(len: usize, mode: SelectMode) -> IndexSelection {
    let mut sel = IndexSelection::new();
    sel.set_len(len);
    sel.set_mode(mode);
    sel
}

#[test]
fn single_mode_holds_at_most_one() {
    let mut sel = selection(10, SelectMode::Single);
    assert_eq!(
        sel.select(2, SelectAction::Select),
        SelectOutcome::Changed(IndexSpan::single(2)),
    );
    // Moving the selection reports one span covering both old and new.
    assert_eq!(
        sel.select(7, SelectAction::Select),
        SelectOutcome::Changed(IndexSpan::new(2, 7)),
    );
    assert_eq!(sel.selected_count(), 1);
    assert!(sel.is_selected(7));
    assert!(!sel.is_selected(2));
}

#[test]
fn single_mode_toggle_empties_the_selection() {
    let mut sel = selection(10, SelectMode::Single);
    let first = sel.select(3, SelectAction::Select);
    let second = sel.select(3, SelectAction::Toggle);
    assert_eq!(first, SelectOutcome::Changed(IndexSpan::single(3)));
    assert_eq!(second, SelectOutcome::Changed(IndexSpan::single(3)));
    assert_eq!(sel.selected_count(), 0);
}

#[test]
fn single_mode_prunes_others_even_on_deselect() {
    let mut sel = selection(10, SelectMode::Single);
    sel.select(1, SelectAction::Select);
    // Deselecting an unselected row still enforces the invariant by
    // clearing the stray selection elsewhere.
    assert_eq!(
        sel.select(5, SelectAction::Deselect),
        SelectOutcome::Changed(IndexSpan::single(1)),
    );
    assert_eq!(sel.selected_count(), 0);
}

#[test]
fn range_replace_reports_exactly_the_range() {
    let mut sel = selection(10, SelectMode::Multi);
    assert_eq!(
        sel.select_range(2, 5, false),
        SelectOutcome::Changed(IndexSpan::new(2, 5)),
    );
    assert_eq!(sel.iter_selected().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn range_replace_damage_covers_cleared_outsiders() {
    let mut sel = selection(10, SelectMode::Multi);
    sel.select(0, SelectAction::Select);
    sel.select(8, SelectAction::Select);
    // Rows 0 and 8 are cleared, 2..=5 set: the changed span is [0, 8].
    assert_eq!(
        sel.select_range(2, 5, false),
        SelectOutcome::Changed(IndexSpan::new(0, 8)),
    );
    assert_eq!(sel.selected_count(), 4);
}

#[test]
fn additive_range_keeps_prior_selection() {
    let mut sel = selection(10, SelectMode::Multi);
    sel.select(0, SelectAction::Select);
    assert_eq!(
        sel.select_range(4, 6, true),
        SelectOutcome::Changed(IndexSpan::new(4, 6)),
    );
    assert!(sel.is_selected(0));
    assert_eq!(sel.selected_count(), 4);
}

#[test]
fn range_endpoints_normalize_and_clamp() {
    let mut sel = selection(10, SelectMode::Multi);
    // Reversed order.
    assert_eq!(
        sel.select_range(6, 4, false),
        SelectOutcome::Changed(IndexSpan::new(4, 6)),
    );
    // An endpoint past the axis clamps to the last index.
    assert_eq!(
        sel.select_range(8, 100, true),
        SelectOutcome::Changed(IndexSpan::new(8, 9)),
    );
    assert!(sel.is_selected(9));
}

#[test]
fn range_is_ignored_outside_multi_mode() {
    let mut sel = selection(10, SelectMode::Single);
    assert_eq!(sel.select_range(2, 5, false), SelectOutcome::Ignored);
    let mut sel = selection(10, SelectMode::Disabled);
    assert_eq!(sel.select_range(2, 5, false), SelectOutcome::Ignored);
    let mut sel = selection(0, SelectMode::Multi);
    assert_eq!(sel.select_range(0, 0, false), SelectOutcome::Ignored);
}

#[test]
fn select_all_is_gated_by_mode() {
    let mut sel = selection(5, SelectMode::Single);
    sel.select(2, SelectAction::Select);
    assert_eq!(sel.select_all(SelectAction::Select), SelectOutcome::Ignored);
    assert_eq!(sel.select_all(SelectAction::Toggle), SelectOutcome::Ignored);
    // Deselect-all works in single mode.
    assert_eq!(
        sel.select_all(SelectAction::Deselect),
        SelectOutcome::Changed(IndexSpan::single(2)),
    );

    let mut sel = selection(5, SelectMode::Disabled);
    assert_eq!(sel.select_all(SelectAction::Deselect), SelectOutcome::Ignored);
}

#[test]
fn toggle_all_inverts_every_flag() {
    let mut sel = selection(4, SelectMode::Multi);
    sel.select(1, SelectAction::Select);
    assert_eq!(
        sel.select_all(SelectAction::Toggle),
        SelectOutcome::Changed(IndexSpan::new(0, 3)),
    );
    assert_eq!(sel.iter_selected().collect::<Vec<_>>(), vec![0, 2, 3]);
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut sel = selection(10, SelectMode::Multi);
    let before = sel.revision();
    assert_eq!(sel.select(10, SelectAction::Select), SelectOutcome::Ignored);
    assert_eq!(sel.select(usize::MAX, SelectAction::Toggle), SelectOutcome::Ignored);
    assert_eq!(sel.revision(), before);
    assert!(!sel.is_selected(10));
}

#[test]
fn disabled_mode_ignores_mutations() {
    let mut sel = selection(10, SelectMode::Disabled);
    assert_eq!(sel.select(3, SelectAction::Select), SelectOutcome::Ignored);
    assert_eq!(sel.selected_count(), 0);
    // clear_all is the unconditional escape hatch; with nothing selected it
    // reports Unchanged rather than Ignored.
    assert_eq!(sel.clear_all(), SelectOutcome::Unchanged);
}

#[test]
fn switching_to_single_keeps_the_first_selected() {
    let mut sel = selection(10, SelectMode::Multi);
    sel.select_range(3, 6, false);
    assert_eq!(
        sel.set_mode(SelectMode::Single),
        SelectOutcome::Changed(IndexSpan::new(4, 6)),
    );
    assert_eq!(sel.iter_selected().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn switching_to_disabled_clears_everything() {
    let mut sel = selection(10, SelectMode::Multi);
    sel.select_range(2, 4, false);
    assert_eq!(
        sel.set_mode(SelectMode::Disabled),
        SelectOutcome::Changed(IndexSpan::new(2, 4)),
    );
    assert_eq!(sel.selected_count(), 0);
}

#[test]
fn resizing_preserves_surviving_flags() {
    let mut sel = selection(6, SelectMode::Multi);
    sel.select(1, SelectAction::Select);
    sel.select(5, SelectAction::Select);
    sel.set_len(4);
    assert!(sel.is_selected(1));
    assert!(!sel.is_selected(5));
    sel.set_len(8);
    assert!(sel.is_selected(1));
    assert_eq!(sel.selected_count(), 1);
    // Indices that left and came back do not resurrect their flags.
    assert!(!sel.is_selected(5));
}

#[test]
fn anchor_clamps_to_the_axis() {
    let mut sel = selection(5, SelectMode::Multi);
    sel.set_anchor(Some(3));
    assert_eq!(sel.anchor(), Some(3));
    sel.set_anchor(Some(100));
    assert_eq!(sel.anchor(), Some(4));
    sel.set_len(2);
    assert_eq!(sel.anchor(), None);
    sel.set_anchor(None);
    assert_eq!(sel.anchor(), None);
}

#[test]
fn revision_tracks_observable_changes_only() {
    let mut sel = selection(10, SelectMode::Multi);
    let start = sel.revision();

    sel.select(2, SelectAction::Select);
    let after_select = sel.revision();
    assert_ne!(after_select, start);

    // No-ops leave the revision alone.
    sel.select(2, SelectAction::Select);
    sel.select(20, SelectAction::Select);
    sel.select_all(SelectAction::Deselect);
    assert_ne!(sel.revision(), after_select); // deselect-all cleared row 2
    let settled = sel.revision();
    sel.clear_all();
    sel.set_len(10);
    assert_eq!(sel.revision(), settled);
}
