//! Content pane: the displayed document, or the placeholder when nothing is selected.
//!
//! Only visible elements are drawn. Plain paragraphs go through `tui_markdown` for inline
//! emphasis; elements carrying links or a filter highlight are segmented by hand so the
//! `[label]` markers and matches can be styled.

use super::constants::LIST_BULLET;
use super::styles::GuideStyles;
use crate::content::{ContentContainer, ContentElement, ElementKind, GuideLink};
use crate::state::GuidebookState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tui_markdown::from_str;
use unicode_width::UnicodeWidthStr;

/// Text shown while no entry is selected.
pub const PLACEHOLDER_TEXT: &str = "Select an entry to read its guide.";

/// Build the lines of all visible elements.
///
/// `focused_link` indexes into [`ContentContainer::visible_links`].
pub fn content_lines(
    content: &ContentContainer,
    focused_link: Option<usize>,
    styles: &GuideStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut link_counter = 0;
    let mut previous: Option<ElementKind> = None;

    for element in content.elements().iter().filter(|e| e.is_visible()) {
        // Consecutive list items form one block
        let same_list =
            previous == Some(ElementKind::ListItem) && element.kind() == ElementKind::ListItem;
        if previous.is_some() && !same_list {
            lines.push(Line::default());
        }

        lines.extend(element_lines(element, link_counter, focused_link, styles));
        link_counter += element.links().len();
        previous = Some(element.kind());
    }

    lines
}

fn element_lines(
    element: &ContentElement,
    first_link: usize,
    focused_link: Option<usize>,
    styles: &GuideStyles,
) -> Vec<Line<'static>> {
    match element.kind() {
        ElementKind::Heading(level) => {
            let style = if level == 1 {
                styles.heading.add_modifier(Modifier::UNDERLINED)
            } else {
                styles.heading
            };
            vec![Line::from(Span::styled(element.text().to_string(), style))]
        }
        ElementKind::Code => element
            .text()
            .lines()
            .map(|line| Line::from(Span::styled(format!("  {line}"), styles.code)))
            .collect(),
        ElementKind::Error => vec![Line::from(Span::styled(
            element.text().to_string(),
            styles.error,
        ))],
        ElementKind::Paragraph | ElementKind::ListItem => {
            let mut lines = if element.links().is_empty() && element.highlight().is_none() {
                render_markdown_with_style(element.text(), Style::default())
            } else {
                vec![Line::from(styled_segments(
                    element,
                    first_link,
                    focused_link,
                    styles,
                ))]
            };

            if element.kind() == ElementKind::ListItem {
                match lines.first_mut() {
                    Some(first) => first.spans.insert(0, Span::raw(LIST_BULLET)),
                    None => lines.push(Line::from(LIST_BULLET)),
                }
            }
            lines
        }
    }
}

/// Render inline markdown, with `base_style` under the markdown styling.
///
/// `tui_markdown` may build on a different ratatui core than this crate, so span styles
/// are carried over through their color names and modifier bits.
fn render_markdown_with_style(markdown_text: &str, base_style: Style) -> Vec<Line<'static>> {
    let text = from_str(markdown_text);

    text.lines
        .into_iter()
        .map(|line| {
            let owned_spans: Vec<_> = line
                .spans
                .into_iter()
                .map(|span| {
                    let style = span.style;
                    let mut patched = base_style
                        .add_modifier(Modifier::from_bits_truncate(style.add_modifier.bits()))
                        .remove_modifier(Modifier::from_bits_truncate(style.sub_modifier.bits()));
                    if let Some(fg) = style.fg.and_then(|c| c.to_string().parse::<Color>().ok()) {
                        patched = patched.fg(fg);
                    }
                    if let Some(bg) = style.bg.and_then(|c| c.to_string().parse::<Color>().ok()) {
                        patched = patched.bg(bg);
                    }
                    Span::styled(span.content.into_owned(), patched)
                })
                .collect();
            Line::from(owned_spans)
        })
        .collect()
}

/// Split an element's text into spans, styling `[label]` link markers and filter matches.
fn styled_segments(
    element: &ContentElement,
    first_link: usize,
    focused_link: Option<usize>,
    styles: &GuideStyles,
) -> Vec<Span<'static>> {
    let chars: Vec<char> = element.text().chars().collect();
    let mut char_styles = vec![Style::default(); chars.len()];

    let mut from = 0;
    for (offset, link) in element.links().iter().enumerate() {
        let marker: Vec<char> = link_marker(link).chars().collect();
        let Some(start) = find_chars(&chars, &marker, from, |a, b| a == b) else {
            continue;
        };
        let style = if focused_link == Some(first_link + offset) {
            styles.focused_link
        } else {
            styles.link
        };
        for slot in &mut char_styles[start..start + marker.len()] {
            *slot = style;
        }
        from = start + marker.len();
    }

    if let Some(term) = element.highlight().filter(|t| !t.is_empty()) {
        let term: Vec<char> = term.chars().collect();
        let mut from = 0;
        while let Some(start) = find_chars(&chars, &term, from, chars_eq_ignore_case) {
            for slot in &mut char_styles[start..start + term.len()] {
                *slot = slot.patch(styles.highlight);
            }
            from = start + term.len();
        }
    }

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = char_styles.first().copied().unwrap_or_default();
    for (ch, style) in chars.into_iter().zip(char_styles) {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}

fn link_marker(link: &GuideLink) -> String {
    format!("[{}]", link.label)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Position of the first occurrence of `needle` in `haystack` at or after `from`.
fn find_chars(
    haystack: &[char],
    needle: &[char],
    from: usize,
    eq: impl Fn(char, char) -> bool,
) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&h, &n)| eq(h, n))
    })
}

/// Rows the lines occupy once wrapped to `width` columns.
pub fn wrapped_line_count(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| {
            let line_width: usize = line
                .spans
                .iter()
                .map(|span| span.content.width())
                .sum();
            line_width.div_ceil(width).max(1)
        })
        .sum()
}

/// Content pane widget.
pub struct ContentPane<'a> {
    guidebook: &'a GuidebookState,
    focused_link: Option<usize>,
    styles: &'a GuideStyles,
}

impl<'a> ContentPane<'a> {
    /// Pane for the guidebook's displayed content.
    pub fn new(
        guidebook: &'a GuidebookState,
        focused_link: Option<usize>,
        styles: &'a GuideStyles,
    ) -> Self {
        Self {
            guidebook,
            focused_link,
            styles,
        }
    }
}

impl Widget for ContentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.border);

        let panes = self.guidebook.panes();
        if panes.placeholder || !panes.entry_container {
            Paragraph::new(Line::from(Span::styled(PLACEHOLDER_TEXT, self.styles.muted)))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let title = self
            .guidebook
            .displayed_title()
            .map(|t| format!(" {t} "))
            .unwrap_or_default();
        let lines = content_lines(self.guidebook.content(), self.focused_link, self.styles);

        Paragraph::new(lines)
            .block(block.title(title))
            .wrap(Wrap { trim: false })
            .scroll((self.guidebook.scroll(), 0))
            .render(area, buf);
    }
}
