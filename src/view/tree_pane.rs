//! Navigation tree pane.
//!
//! One row per visible node, indented by depth, with an expansion marker on nodes that
//! have children. The selected row is highlighted and kept within the viewport.

use super::constants::TREE_INDENT_WIDTH;
use super::styles::GuideStyles;
use crate::guide::{GuideTree, NodeIndex};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const EXPANDED_MARKER: &str = "▾ ";
const COLLAPSED_MARKER: &str = "▸ ";
const LEAF_MARKER: &str = "  ";

/// Tree pane widget.
pub struct TreePane<'a> {
    tree: &'a GuideTree,
    selected: Option<NodeIndex>,
    styles: &'a GuideStyles,
    focused: bool,
}

impl<'a> TreePane<'a> {
    /// Pane drawing `tree` with `selected` highlighted.
    pub fn new(
        tree: &'a GuideTree,
        selected: Option<NodeIndex>,
        styles: &'a GuideStyles,
        focused: bool,
    ) -> Self {
        Self {
            tree,
            selected,
            styles,
            focused,
        }
    }

    fn row_line(&self, idx: NodeIndex) -> Option<Line<'a>> {
        let node = self.tree.node(idx)?;
        let marker = match (node.has_children(), node.is_expanded()) {
            (false, _) => LEAF_MARKER,
            (true, true) => EXPANDED_MARKER,
            (true, false) => COLLAPSED_MARKER,
        };
        let indent = " ".repeat(node.depth() * TREE_INDENT_WIDTH);
        let line = Line::from(vec![
            Span::raw(indent),
            Span::raw(marker),
            Span::raw(node.label()),
        ]);

        Some(if Some(idx) == self.selected {
            line.style(self.styles.selected_row)
        } else {
            line
        })
    }
}

/// First row to draw so that `selected_row` is inside a viewport of `height` rows.
pub fn scroll_offset(selected_row: Option<usize>, height: usize) -> usize {
    match selected_row {
        Some(row) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    }
}

impl Widget for TreePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Guides ")
            .border_style(border_style);

        let rows = self.tree.visible_rows();
        let selected_row = self
            .selected
            .and_then(|sel| rows.iter().position(|&row| row == sel));
        let inner_height = usize::from(block.inner(area).height);
        let offset = scroll_offset(selected_row, inner_height);

        let lines: Vec<Line> = rows
            .iter()
            .skip(offset)
            .take(inner_height)
            .filter_map(|&idx| self.row_line(idx))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
