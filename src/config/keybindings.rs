//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only used while the tree has focus; the filter bar
/// handles its own keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and state are ignored. Terminals disagree on whether punctuation such as
    /// `?` or `<` carries SHIFT, so a shifted character falls back to the unshifted binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&normalized).copied().or_else(|| {
            match key.code {
                KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => self
                    .bindings
                    .get(&KeyEvent::new(key.code, KeyModifiers::NONE))
                    .copied(),
                _ => None,
            }
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Tree navigation
        keys.bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, none, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('h'), none, KeyAction::Collapse);
        keys.bind(KeyCode::Left, none, KeyAction::Collapse);
        keys.bind(KeyCode::Char('l'), none, KeyAction::Expand);
        keys.bind(KeyCode::Right, none, KeyAction::Expand);
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleExpand);

        // Content scrolling
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);

        // Links
        keys.bind(KeyCode::Tab, none, KeyAction::NextLink);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevLink);
        keys.bind(KeyCode::BackTab, none, KeyAction::PrevLink);
        keys.bind(KeyCode::Enter, none, KeyAction::FollowLink);
        keys.bind(KeyCode::Char('o'), none, KeyAction::FollowLink);

        // Filter
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartFilter);

        // Split
        keys.bind(KeyCode::Char('<'), none, KeyAction::ShrinkTree);
        keys.bind(KeyCode::Char('>'), none, KeyAction::GrowTree);

        // Application controls
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
