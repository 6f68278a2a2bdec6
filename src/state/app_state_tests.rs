//! Tests for AppState.
//!
//! These tests verify state transitions without any TUI dependencies.

use super::*;
use crate::state::filter_input::{handle_backspace, handle_char_input};
use crate::state::test_support::{id, sample_app, selected};

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        state.edit_filter(|input| handle_char_input(input, ch));
    }
}

fn open_gases(state: &mut AppState) {
    state.guidebook_mut().handle_link(&id("gases"));
    state.sync();
}

// ===== AppState::new Tests =====

#[test]
fn new_defaults_focus_to_tree() {
    let state = sample_app();

    assert_eq!(state.focus, FocusPane::Tree);
    assert!(!state.help_visible);
    assert_eq!(state.focused_link(), None);
}

#[test]
fn new_shows_first_node() {
    let state = sample_app();
    assert_eq!(selected(&state), Some("index"));
}

// ===== Filter focus =====

#[test]
fn start_filter_requires_visible_filter_bar() {
    let mut state = sample_app();

    state.start_filter();

    assert_eq!(state.focus, FocusPane::Tree);
}

#[test]
fn start_filter_focuses_filter_bar_when_enabled() {
    let mut state = sample_app();
    open_gases(&mut state);

    state.start_filter();

    assert_eq!(state.focus, FocusPane::Filter);
}

#[test]
fn typing_filters_content() {
    let mut state = sample_app();
    open_gases(&mut state);
    state.start_filter();

    type_text(&mut state, "oxy");

    assert_eq!(state.filter_input().text(), "oxy");
    assert_eq!(state.guidebook().filter_text(), "oxy");
    let visible: Vec<&str> = state
        .guidebook()
        .content()
        .elements()
        .iter()
        .filter(|e| e.is_visible())
        .map(|e| e.text())
        .collect();
    assert_eq!(visible, vec!["Gases", "Oxygen, see [index]"]);
}

#[test]
fn backspace_refilters() {
    let mut state = sample_app();
    open_gases(&mut state);
    type_text(&mut state, "oxyz");

    state.edit_filter(handle_backspace);

    assert_eq!(state.guidebook().filter_text(), "oxy");
    assert_eq!(state.guidebook().content().visible_links().len(), 1);
}

#[test]
fn selection_change_resets_filter_input_and_focus() {
    let mut state = sample_app();
    open_gases(&mut state);
    state.start_filter();
    type_text(&mut state, "plasma");

    state.guidebook_mut().handle_link(&id("power"));
    state.sync();

    assert_eq!(state.filter_input().text(), "");
    assert_eq!(state.focus, FocusPane::Tree);
}

// ===== Link cursor =====

#[test]
fn next_link_cycles_and_wraps() {
    let mut state = sample_app();

    state.next_link();
    assert_eq!(state.focused_link_target(), Some(id("power")));
    state.next_link();
    state.next_link();
    assert_eq!(state.focused_link_target(), Some(id("appendix")));
    state.next_link();
    assert_eq!(state.focused_link_target(), Some(id("power")));
}

#[test]
fn prev_link_wraps_to_last() {
    let mut state = sample_app();

    state.prev_link();

    assert_eq!(state.focused_link_target(), Some(id("appendix")));
}

#[test]
fn link_cursor_is_none_without_links() {
    let mut state = sample_app();
    state.guidebook_mut().handle_link(&id("atmos"));
    state.sync();

    state.next_link();

    assert_eq!(state.focused_link(), None);
}

#[test]
fn follow_link_selects_target_and_resets_cursor() {
    let mut state = sample_app();
    state.next_link();
    state.next_link();

    state.follow_link();

    assert_eq!(selected(&state), Some("atmos"));
    assert_eq!(state.focused_link(), None);
}

#[test]
fn follow_link_to_unlisted_entry_keeps_tree_selection() {
    let mut state = sample_app();
    state.prev_link();

    state.follow_link();

    assert_eq!(selected(&state), Some("index"));
    assert_eq!(
        state.guidebook().displayed_id().map(GuideId::as_str),
        Some("appendix")
    );
}

#[test]
fn follow_link_without_focus_is_noop() {
    let mut state = sample_app();
    state.follow_link();
    assert_eq!(selected(&state), Some("index"));
}

#[test]
fn filtering_resets_link_cursor() {
    let mut state = sample_app();
    open_gases(&mut state);
    state.next_link();
    state.next_link();

    type_text(&mut state, "oxy");

    assert_eq!(state.focused_link(), None);
    state.next_link();
    assert_eq!(state.focused_link_target(), Some(id("index")));
}

// ===== Help =====

#[test]
fn toggle_help_flips_visibility() {
    let mut state = sample_app();
    state.toggle_help();
    assert!(state.help_visible);
    state.toggle_help();
    assert!(!state.help_visible);
}
