//! Keyboard action handler.
//!
//! Transforms AppState in response to navigation actions.
//! `Quit` is left to the caller.

use crate::model::KeyAction;
use crate::state::AppState;

/// Percent the tree pane grows or shrinks per keypress.
pub const TREE_RESIZE_STEP: i16 = 5;

/// Content area geometry needed for page scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Visible rows of the content pane.
    pub height: u16,
    /// Total rendered rows of the displayed content.
    pub content_lines: u16,
}

impl Viewport {
    fn max_scroll(&self) -> u16 {
        self.content_lines.saturating_sub(self.height)
    }
}

/// Handle a keyboard action.
///
/// # Arguments
/// * `state` - Application state to transform
/// * `action` - The action to handle
/// * `viewport` - Content pane geometry (for page scrolling)
pub fn handle_action(state: &mut AppState, action: KeyAction, viewport: Viewport) {
    match action {
        KeyAction::SelectNext => state.guidebook_mut().select_next(),
        KeyAction::SelectPrev => state.guidebook_mut().select_prev(),
        KeyAction::Collapse => state.guidebook_mut().collapse_selected(),
        KeyAction::Expand => state.guidebook_mut().expand_selected(),
        KeyAction::ToggleExpand => state.guidebook_mut().toggle_selected(),
        KeyAction::PageUp => state.guidebook_mut().scroll_up(viewport.height.max(1)),
        KeyAction::PageDown => state
            .guidebook_mut()
            .scroll_down(viewport.height.max(1), viewport.max_scroll()),
        KeyAction::ShrinkTree => {
            state.guidebook_mut().resize_tree(-TREE_RESIZE_STEP);
        }
        KeyAction::GrowTree => {
            state.guidebook_mut().resize_tree(TREE_RESIZE_STEP);
        }
        KeyAction::NextLink => state.next_link(),
        KeyAction::PrevLink => state.prev_link(),
        KeyAction::FollowLink if state.focused_link().is_none() => {
            state.guidebook_mut().toggle_selected()
        }
        KeyAction::FollowLink => state.follow_link(),
        KeyAction::StartFilter => state.start_filter(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Quit => {}
    }
    state.sync();
}

// ===== Tests =====

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
