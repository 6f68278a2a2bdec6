//! Tests for keyboard action handling.

use super::*;
use crate::state::test_support::{id, sample_app, selected};
use crate::state::FocusPane;

const VIEWPORT: Viewport = Viewport {
    height: 10,
    content_lines: 25,
};

fn apply(mut state: AppState, actions: &[KeyAction]) -> AppState {
    for &action in actions {
        handle_action(&mut state, action, VIEWPORT);
    }
    state
}

// ===== Tree navigation =====

#[test]
fn select_next_walks_pre_order() {
    let state = apply(sample_app(), &[KeyAction::SelectNext, KeyAction::SelectNext]);
    assert_eq!(selected(&state), Some("atmos"));
}

#[test]
fn select_prev_at_top_stays() {
    let state = apply(sample_app(), &[KeyAction::SelectPrev]);
    assert_eq!(selected(&state), Some("index"));
}

#[test]
fn collapse_hides_children_from_navigation() {
    let state = apply(
        sample_app(),
        &[KeyAction::SelectNext, KeyAction::SelectNext, KeyAction::Collapse, KeyAction::SelectNext],
    );
    // atmos collapsed, so gases is skipped and selection stays on the last row
    assert_eq!(selected(&state), Some("atmos"));
}

#[test]
fn toggle_expand_twice_restores_rows() {
    let before = sample_app().guidebook().tree().visible_rows().len();
    let state = apply(sample_app(), &[KeyAction::ToggleExpand, KeyAction::ToggleExpand]);
    assert_eq!(state.guidebook().tree().visible_rows().len(), before);
}

#[test]
fn expand_after_collapse_reveals_children() {
    let state = apply(sample_app(), &[KeyAction::Collapse, KeyAction::Expand]);
    assert_eq!(state.guidebook().tree().visible_rows().len(), 4);
}

// ===== Scrolling =====

#[test]
fn page_down_clamps_to_content_end() {
    let state = apply(sample_app(), &[KeyAction::PageDown, KeyAction::PageDown]);
    assert_eq!(state.guidebook().scroll(), 15);
}

#[test]
fn page_up_saturates_at_top() {
    let state = apply(sample_app(), &[KeyAction::PageDown, KeyAction::PageUp, KeyAction::PageUp]);
    assert_eq!(state.guidebook().scroll(), 0);
}

#[test]
fn selection_change_resets_scroll() {
    let state = apply(sample_app(), &[KeyAction::PageDown, KeyAction::SelectNext]);
    assert_eq!(state.guidebook().scroll(), 0);
}

// ===== Links =====

#[test]
fn next_link_then_follow_navigates() {
    let state = apply(sample_app(), &[KeyAction::NextLink, KeyAction::FollowLink]);
    assert_eq!(selected(&state), Some("power"));
}

#[test]
fn prev_link_then_follow_shows_unlisted_entry() {
    let state = apply(sample_app(), &[KeyAction::PrevLink, KeyAction::FollowLink]);

    assert_eq!(selected(&state), Some("index"));
    assert_eq!(state.guidebook().displayed_id(), Some(&id("appendix")));
}

#[test]
fn following_link_into_collapsed_branch_expands_it() {
    let state = apply(
        sample_app(),
        &[KeyAction::SelectNext, KeyAction::SelectNext, KeyAction::Collapse, KeyAction::SelectPrev],
    );
    assert_eq!(selected(&state), Some("power"));

    let state = apply(state, &[KeyAction::NextLink, KeyAction::FollowLink]);

    assert_eq!(selected(&state), Some("gases"));
    let gases = state.guidebook().selected().unwrap();
    assert!(state.guidebook().tree().visible_rows().contains(&gases));
}

// ===== Filter, split, help =====

#[test]
fn start_filter_only_on_filterable_entry() {
    let state = apply(sample_app(), &[KeyAction::StartFilter]);
    assert_eq!(state.focus, FocusPane::Tree);

    let state = apply(
        state,
        &[KeyAction::SelectNext, KeyAction::SelectNext, KeyAction::SelectNext, KeyAction::StartFilter],
    );
    assert_eq!(selected(&state), Some("gases"));
    assert_eq!(state.focus, FocusPane::Filter);
}

#[test]
fn grow_and_shrink_move_split() {
    let start = sample_app().guidebook().split().tree_width_percent();

    let state = apply(sample_app(), &[KeyAction::GrowTree]);
    assert_eq!(
        state.guidebook().split().tree_width_percent(),
        start + TREE_RESIZE_STEP as u16
    );

    let state = apply(state, &[KeyAction::ShrinkTree, KeyAction::ShrinkTree]);
    assert_eq!(
        state.guidebook().split().tree_width_percent(),
        start - TREE_RESIZE_STEP as u16
    );
}

#[test]
fn help_toggles() {
    let state = apply(sample_app(), &[KeyAction::Help]);
    assert!(state.help_visible);
}

#[test]
fn quit_leaves_state_untouched() {
    let state = apply(sample_app(), &[KeyAction::Quit]);
    assert_eq!(selected(&state), Some("index"));
}

#[test]
fn follow_link_without_focused_link_toggles_expansion() {
    let state = apply(sample_app(), &[KeyAction::FollowLink]);

    let root = state.guidebook().selected().unwrap();
    assert!(!state.guidebook().tree().node(root).unwrap().is_expanded());
    assert_eq!(selected(&state), Some("index"));
}
