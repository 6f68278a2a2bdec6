//! Pane layout rendering.
//!
//! Pure layout logic - calculates pane areas from the guidebook's pane visibility and
//! split, then renders the tree, filter bar, content and status bar into them.

use super::constants::{FILTER_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::content_pane::ContentPane;
use super::filter_bar::FilterBar;
use super::help::render_help_overlay;
use super::styles::GuideStyles;
use super::tree_pane::TreePane;
use crate::state::{AppState, FocusPane, GuidebookState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen areas of the visible panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    /// Tree pane, absent when hidden.
    pub tree: Option<Rect>,
    /// Filter bar, absent when hidden.
    pub filter: Option<Rect>,
    /// Content pane.
    pub content: Rect,
    /// Status line.
    pub status: Rect,
}

impl PaneAreas {
    /// Content area minus its border.
    pub fn content_inner(&self) -> Rect {
        self.content.inner(ratatui::layout::Margin::new(1, 1))
    }
}

/// Split the frame into panes.
///
/// - Tree on the left at the split width, when the tree box is visible
/// - Filter bar above the content, when the search container is visible
/// - Status bar along the bottom
pub fn calculate_pane_areas(area: Rect, guidebook: &GuidebookState) -> PaneAreas {
    let panes = guidebook.panes();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    let (main_area, status) = (vertical[0], vertical[1]);

    let (tree, right_area) = if panes.tree_box {
        let width = guidebook.split().tree_width_percent();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(width),
                Constraint::Percentage(100 - width),
            ])
            .split(main_area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, main_area)
    };

    let (filter, content) = if panes.search_container {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)])
            .split(right_area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, right_area)
    };

    PaneAreas {
        tree,
        filter,
        content,
        status,
    }
}

/// Render all panes, then the help overlay if visible.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &GuideStyles) {
    let guidebook = state.guidebook();
    let areas = calculate_pane_areas(frame.area(), guidebook);

    if let Some(tree_area) = areas.tree {
        let focused = state.focus == FocusPane::Tree;
        frame.render_widget(
            TreePane::new(guidebook.tree(), guidebook.selected(), styles, focused),
            tree_area,
        );
    }

    if let Some(filter_area) = areas.filter {
        let focused = state.focus == FocusPane::Filter;
        frame.render_widget(
            FilterBar::new(state.filter_input(), styles, focused),
            filter_area,
        );
    }

    frame.render_widget(
        ContentPane::new(guidebook, state.focused_link(), styles),
        areas.content,
    );

    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Keyboard hints for the current focus.
fn build_keyboard_hints(focus: FocusPane, filter_available: bool) -> &'static str {
    match (focus, filter_available) {
        (FocusPane::Filter, _) => "Esc/Enter: done | ←/→: move cursor",
        (FocusPane::Tree, true) => "q: quit | ?: help | Tab: links | /: filter",
        (FocusPane::Tree, false) => "q: quit | ?: help | Tab: links",
    }
}

/// Status line: selected entry, issue count, hints.
fn status_text(state: &AppState) -> String {
    let guidebook = state.guidebook();
    let location = guidebook
        .displayed_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let issues = guidebook.diagnostics().visible_count();
    let issue_text = match issues {
        0 => String::new(),
        1 => " | 1 issue".to_string(),
        n => format!(" | {n} issues"),
    };
    let hints = build_keyboard_hints(state.focus, guidebook.panes().search_container);

    format!(" {location}{issue_text} | {hints}")
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &GuideStyles) {
    let paragraph = Paragraph::new(Line::from(Span::styled(status_text(state), styles.muted)));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
