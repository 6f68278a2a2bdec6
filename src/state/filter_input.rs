//! Filter bar text editing (pure state transitions).
//!
//! The cursor is a character index, so editing is safe for multi-byte input.
//! All functions are pure - no side effects, testable without TUI.

/// Text and cursor of the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    text: String,
    cursor: usize,
}

impl FilterInput {
    /// Input holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut input: FilterInput, ch: char) -> FilterInput {
    let at = input.byte_offset(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(mut input: FilterInput) -> FilterInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut input: FilterInput) -> FilterInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut input: FilterInput) -> FilterInput {
    input.cursor = (input.cursor + 1).min(input.text.chars().count());
    input
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_input_tests.rs"]
mod tests;
