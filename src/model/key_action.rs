//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Tree navigation
    /// Select the next visible tree row. Default: j/↓
    SelectNext,
    /// Select the previous visible tree row. Default: k/↑
    SelectPrev,
    /// Collapse the selected node, or move to its parent. Default: h/←
    Collapse,
    /// Expand the selected node. Default: l/→
    Expand,
    /// Toggle expansion of the selected node. Default: Space
    ToggleExpand,

    // Content
    /// Scroll content up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll content down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Focus the next link in the visible content. Default: Tab
    NextLink,
    /// Focus the previous link in the visible content. Default: Shift+Tab
    PrevLink,
    /// Follow the focused link, or toggle expansion when no link is focused. Default: Enter/o
    FollowLink,

    // Filter
    /// Focus the filter bar if the selected entry supports filtering. Default: /
    StartFilter,

    // Split
    /// Shrink the tree pane. Default: <
    ShrinkTree,
    /// Grow the tree pane. Default: >
    GrowTree,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Quit. Default: q
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::SelectNext,
            KeyAction::SelectPrev,
            KeyAction::NextLink,
            KeyAction::PrevLink,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn actions_are_copy() {
        let action = KeyAction::Quit;
        let copied = action;
        assert_eq!(action, copied);
    }
}
