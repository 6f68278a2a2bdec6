//! Application state and transitions.
//!
//! AppState is the root state type: the guidebook plus the UI-only state around it
//! (focus, help overlay, link cursor, filter bar editing).

use crate::model::GuideId;
use crate::state::filter_input::FilterInput;
use crate::state::GuidebookState;

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// - **Focus**: Tree (navigation keys) or Filter (typing into the filter bar)
/// - **Link cursor**: index into the currently visible links, reset whenever the displayed
///   content changes or the filter hides links
/// - **Help**: overlay shown on top of everything
///
/// After any call into the guidebook, [`AppState::sync`] brings the UI state back in line
/// with it.
#[derive(Debug)]
pub struct AppState {
    guidebook: GuidebookState,

    /// Which pane receives keyboard input.
    pub focus: FocusPane,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Index into `guidebook.content().visible_links()`.
    focused_link: Option<usize>,

    filter_input: FilterInput,

    /// Content generation the link cursor refers to.
    seen_generation: u64,
}

impl AppState {
    /// Wrap a loaded guidebook with the tree pane focused.
    pub fn new(guidebook: GuidebookState) -> Self {
        let seen_generation = guidebook.content_generation();
        let filter_input = FilterInput::with_text(guidebook.filter_text());
        Self {
            guidebook,
            focus: FocusPane::Tree,
            help_visible: false,
            focused_link: None,
            filter_input,
            seen_generation,
        }
    }

    /// The guidebook being shown.
    pub fn guidebook(&self) -> &GuidebookState {
        &self.guidebook
    }

    /// Mutable access to the guidebook. Call [`AppState::sync`] afterwards.
    pub fn guidebook_mut(&mut self) -> &mut GuidebookState {
        &mut self.guidebook
    }

    /// Reconcile UI state with the guidebook.
    pub fn sync(&mut self) {
        let generation = self.guidebook.content_generation();
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.focused_link = None;
        }
        if self.filter_input.text() != self.guidebook.filter_text() {
            self.filter_input = FilterInput::with_text(self.guidebook.filter_text());
        }
        if self.focus == FocusPane::Filter && !self.guidebook.panes().search_container {
            self.focus = FocusPane::Tree;
        }
    }

    /// Filter bar contents.
    pub fn filter_input(&self) -> &FilterInput {
        &self.filter_input
    }

    /// Focus the filter bar. No-op when the bar is hidden.
    pub fn start_filter(&mut self) {
        if self.guidebook.panes().search_container {
            self.focus = FocusPane::Filter;
        }
    }

    /// Return focus to the tree, keeping the filter text.
    pub fn stop_filter(&mut self) {
        self.focus = FocusPane::Tree;
    }

    /// Apply an edit to the filter bar. Re-filters the content when the text changed.
    pub fn edit_filter(&mut self, edit: impl FnOnce(FilterInput) -> FilterInput) {
        let input = std::mem::take(&mut self.filter_input);
        self.filter_input = edit(input);
        if self.filter_input.text() == self.guidebook.filter_text() {
            return;
        }
        self.guidebook
            .on_filter_text_change(self.filter_input.text());
        // Visible links may have changed
        self.focused_link = None;
    }

    /// Index of the focused link among the visible links.
    pub fn focused_link(&self) -> Option<usize> {
        self.focused_link
    }

    /// Target of the focused link, if any.
    pub fn focused_link_target(&self) -> Option<GuideId> {
        let idx = self.focused_link?;
        self.guidebook
            .content()
            .visible_links()
            .get(idx)
            .map(|link| link.target.clone())
    }

    /// Move the link cursor forward, wrapping to the first link.
    pub fn next_link(&mut self) {
        let count = self.guidebook.content().visible_links().len();
        if count == 0 {
            self.focused_link = None;
            return;
        }
        self.focused_link = Some(match self.focused_link {
            Some(current) if current + 1 < count => current + 1,
            _ => 0,
        });
    }

    /// Move the link cursor backward, wrapping to the last link.
    pub fn prev_link(&mut self) {
        let count = self.guidebook.content().visible_links().len();
        if count == 0 {
            self.focused_link = None;
            return;
        }
        self.focused_link = Some(match self.focused_link {
            Some(current) if current > 0 && current <= count => current - 1,
            _ => count - 1,
        });
    }

    /// Navigate to the focused link's target.
    pub fn follow_link(&mut self) {
        if let Some(target) = self.focused_link_target() {
            self.guidebook.handle_link(&target);
            self.sync();
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== FocusPane =====

/// Which pane has focus. Sum type - exactly one.
///
/// - Tree → Filter via `/` when the displayed entry allows filtering
/// - Filter → Tree via Esc/Enter, or automatically when the filter bar is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// Navigation keys drive the tree, scrolling and links.
    Tree,

    /// Keys edit the filter text.
    Filter,
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
