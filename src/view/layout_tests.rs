//! Tests for pane layout rendering.

use super::*;
use crate::content::{Catalog, ContentServices, InMemoryResources, MarkupRenderer};
use crate::model::{Diagnostics, EntryStore};
use crate::state::test_support::{entry, id, sample_app, sample_resources};
use crate::state::{SplitState, UpdateRequest};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn single_entry_app() -> AppState {
    let services = ContentServices::new(Catalog::new(), sample_resources(), MarkupRenderer::new());
    let mut guidebook = GuidebookState::new(services, SplitState::default(), Diagnostics::default());
    let store: EntryStore = [entry("atmos", &[])].into_iter().collect();
    guidebook.update_guides(UpdateRequest::new(store));
    AppState::new(guidebook)
}

fn render(state: &AppState) -> String {
    let styles = GuideStyles::default();
    let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &styles))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(usize::from(SCREEN.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== Area calculation =====

#[test]
fn tree_takes_split_width() {
    let state = sample_app();
    let areas = calculate_pane_areas(SCREEN, state.guidebook());

    let tree = areas.tree.unwrap();
    assert_eq!(tree.width, 30);
    assert_eq!(areas.content.x, 30);
    assert_eq!(areas.content.width, 70);
    assert_eq!(areas.filter, None);
}

#[test]
fn status_bar_is_last_row() {
    let state = sample_app();
    let areas = calculate_pane_areas(SCREEN, state.guidebook());

    assert_eq!(areas.status.y, SCREEN.height - STATUS_BAR_HEIGHT);
    assert_eq!(areas.status.height, STATUS_BAR_HEIGHT);
    assert_eq!(areas.content.height, SCREEN.height - STATUS_BAR_HEIGHT);
}

#[test]
fn single_entry_hides_tree() {
    let state = single_entry_app();
    let areas = calculate_pane_areas(SCREEN, state.guidebook());

    assert_eq!(areas.tree, None);
    assert_eq!(areas.content.x, 0);
    assert_eq!(areas.content.width, SCREEN.width);
}

#[test]
fn filterable_entry_gets_filter_bar_above_content() {
    let mut state = sample_app();
    state.guidebook_mut().handle_link(&id("gases"));
    state.sync();

    let areas = calculate_pane_areas(SCREEN, state.guidebook());
    let filter = areas.filter.unwrap();
    assert_eq!(filter.height, FILTER_BAR_HEIGHT);
    assert_eq!(areas.content.y, filter.y + FILTER_BAR_HEIGHT);
    assert_eq!(filter.x, areas.content.x);
}

#[test]
fn content_inner_strips_border() {
    let state = sample_app();
    let areas = calculate_pane_areas(SCREEN, state.guidebook());
    let inner = areas.content_inner();

    assert_eq!(inner.width, areas.content.width - 2);
    assert_eq!(inner.height, areas.content.height - 2);
}

// ===== Rendering =====

#[test]
fn render_shows_tree_content_and_status() {
    let screen = render(&sample_app());

    assert!(screen.contains("Guides"), "{screen}");
    assert!(screen.contains("guide-power"), "{screen}");
    assert!(screen.contains("[Atmospherics]"), "{screen}");
    assert!(screen.contains(" index | q: quit"), "{screen}");
}

#[test]
fn render_help_overlay_when_visible() {
    let mut state = sample_app();
    state.toggle_help();

    let screen = render(&state);
    assert!(screen.contains("Keyboard Shortcuts"), "{screen}");
}

#[test]
fn status_counts_visible_issues() {
    let services = ContentServices::new(
        Catalog::new(),
        InMemoryResources::new(),
        MarkupRenderer::new(),
    );
    let mut guidebook = GuidebookState::new(services, SplitState::default(), Diagnostics::default());
    let store: EntryStore = [entry("a", &[]), entry("b", &[])].into_iter().collect();
    // Neither document exists
    guidebook.update_guides(UpdateRequest::new(store));
    let state = AppState::new(guidebook);

    assert_eq!(state.guidebook().diagnostics().visible_count(), 1);
    assert!(status_text(&state).contains("| 1 issue |"));
}

#[test]
fn hints_follow_focus() {
    assert!(build_keyboard_hints(FocusPane::Filter, true).starts_with("Esc/Enter"));
    assert!(build_keyboard_hints(FocusPane::Tree, true).contains("/: filter"));
    assert!(!build_keyboard_hints(FocusPane::Tree, false).contains("/: filter"));
}
