//! Block-level markup renderer for guide documents.
//!
//! Splits a markdown-flavoured document into sub-elements:
//! - `#`..`######` headings
//! - `-` / `*` list items
//! - fenced code blocks (```)
//! - paragraphs (consecutive non-blank lines)
//!
//! Inline cross-references use `[label](guide:ID)`. They are collected per element and
//! rewritten to `[label]` in the element text.

use super::container::{ContentContainer, ContentElement, ElementKind, GuideLink};
use super::{ContentError, ContentRenderer};
use crate::model::GuideId;

/// URL scheme marking a link to another guide entry.
pub const GUIDE_LINK_SCHEME: &str = "guide:";

const CODE_FENCE: &str = "```";

/// Default renderer for guide documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupRenderer;

impl MarkupRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Parse a document into elements without touching any container.
    pub fn parse(&self, source: &str) -> Result<Vec<ContentElement>, ContentError> {
        let mut elements = Vec::new();
        let mut paragraph = Paragraph::default();
        let mut code: Option<(usize, Vec<&str>)> = None;

        for (idx, line) in source.lines().enumerate() {
            let line_number = idx + 1;

            if let Some((start, mut body)) = code.take() {
                if line.trim_start().starts_with(CODE_FENCE) {
                    elements.push(ContentElement::new(ElementKind::Code, body.join("\n")));
                } else {
                    body.push(line);
                    code = Some((start, body));
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed.starts_with(CODE_FENCE) {
                paragraph.flush(&mut elements)?;
                code = Some((line_number, Vec::new()));
            } else if trimmed.is_empty() {
                paragraph.flush(&mut elements)?;
            } else if let Some((level, heading)) = parse_heading(trimmed) {
                paragraph.flush(&mut elements)?;
                elements.push(inline_element(ElementKind::Heading(level), heading, line_number)?);
            } else if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                paragraph.flush(&mut elements)?;
                elements.push(inline_element(ElementKind::ListItem, item.trim(), line_number)?);
            } else {
                paragraph.push(trimmed, line_number);
            }
        }

        if let Some((start, _)) = code {
            return Err(ContentError::Render {
                line: start,
                reason: "unterminated code fence".to_string(),
            });
        }
        paragraph.flush(&mut elements)?;

        Ok(elements)
    }
}

impl ContentRenderer for MarkupRenderer {
    fn try_add_markup(
        &self,
        container: &mut ContentContainer,
        source: &str,
    ) -> Result<(), ContentError> {
        for element in self.parse(source)? {
            container.add_child(element);
        }
        Ok(())
    }
}

/// Accumulates paragraph lines until a blank line or block element.
#[derive(Default)]
struct Paragraph<'a> {
    lines: Vec<&'a str>,
    first_line: usize,
}

impl<'a> Paragraph<'a> {
    fn push(&mut self, line: &'a str, line_number: usize) {
        if self.lines.is_empty() {
            self.first_line = line_number;
        }
        self.lines.push(line);
    }

    fn flush(&mut self, elements: &mut Vec<ContentElement>) -> Result<(), ContentError> {
        if self.lines.is_empty() {
            return Ok(());
        }
        let text = self.lines.join(" ");
        self.lines.clear();
        elements.push(inline_element(ElementKind::Paragraph, &text, self.first_line)?);
        Ok(())
    }
}

fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    // level <= 6 fits in u8
    Some((level as u8, rest.trim()))
}

fn inline_element(
    kind: ElementKind,
    text: &str,
    line_number: usize,
) -> Result<ContentElement, ContentError> {
    let (text, links) = extract_links(text).map_err(|reason| ContentError::Render {
        line: line_number,
        reason,
    })?;
    Ok(ContentElement::new(kind, text).with_links(links))
}

/// Rewrite `[label](guide:ID)` to `[label]` and collect the links.
///
/// Links to other schemes are left untouched. An empty guide target is an error.
fn extract_links(text: &str) -> Result<(String, Vec<GuideLink>), String> {
    let mut out = String::with_capacity(text.len());
    let mut links = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find("](") else {
            break;
        };
        let label = &after_open[..close];
        let after_paren = &after_open[close + 2..];
        let Some(end) = after_paren.find(')') else {
            break;
        };
        let href = &after_paren[..end];

        match href.strip_prefix(GUIDE_LINK_SCHEME) {
            Some(target) if !label.contains('[') => {
                let target = GuideId::new(target.trim())
                    .map_err(|_| format!("link '{label}' has an empty guide target"))?;
                out.push_str(&rest[..open]);
                out.push('[');
                out.push_str(label);
                out.push(']');
                links.push(GuideLink {
                    label: label.to_string(),
                    target,
                });
                rest = &after_paren[end + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = after_open;
            }
        }
    }
    out.push_str(rest);

    Ok((out, links))
}
