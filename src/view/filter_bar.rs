//! Filter bar widget.

use super::styles::GuideStyles;
use crate::state::FilterInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter bar widget.
/// Shows a block cursor while focused; otherwise just the current text.
pub struct FilterBar<'a> {
    input: &'a FilterInput,
    styles: &'a GuideStyles,
    focused: bool,
}

impl<'a> FilterBar<'a> {
    /// Bar showing `input`.
    pub fn new(input: &'a FilterInput, styles: &'a GuideStyles, focused: bool) -> Self {
        Self {
            input,
            styles,
            focused,
        }
    }
}

/// Split `text` at the `cursor` character into (before, under cursor, after).
///
/// The cursor cell is a space when the cursor sits past the end.
fn split_at_cursor(text: &str, cursor: usize) -> (String, String, String) {
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let under = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();
    (before, under, after)
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border_style) = if self.focused {
            (" Filter ", self.styles.focused_border)
        } else {
            (" Filter (/ to edit) ", self.styles.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        let line = if self.focused {
            let (before, under, after) = split_at_cursor(self.input.text(), self.input.cursor());
            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    under,
                    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                ),
                Span::raw(after),
            ])
        } else if self.input.text().is_empty() {
            Line::from(Span::styled("type to hide non-matching items", self.styles.muted))
        } else {
            Line::from(self.input.text().to_string())
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
