//! Rendered content container and its sub-elements.

use super::Searchable;
use crate::model::GuideId;

/// Kind of a rendered sub-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Heading with level 1..=6.
    Heading(u8),
    /// Plain text block.
    Paragraph,
    /// One `-`/`*` list item.
    ListItem,
    /// Line of a fenced code block.
    Code,
    /// Inline error indicator shown when a document cannot be rendered.
    Error,
}

/// A cross-reference to another guide entry embedded in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideLink {
    /// Text shown for the link.
    pub label: String,
    /// Entry the link navigates to.
    pub target: GuideId,
}

/// One renderable sub-element of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentElement {
    kind: ElementKind,
    text: String,
    links: Vec<GuideLink>,
    visible: bool,
    highlight: Option<String>,
}

impl ContentElement {
    /// Visible element with no links.
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            links: Vec::new(),
            visible: true,
            highlight: None,
        }
    }

    /// Attach the element's links.
    pub fn with_links(mut self, links: Vec<GuideLink>) -> Self {
        self.links = links;
        self
    }

    /// Inline error element.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ElementKind::Error, message)
    }

    /// Block kind of the element.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Element text, with links rewritten to `[label]`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Links in the order they appear in the text.
    pub fn links(&self) -> &[GuideLink] {
        &self.links
    }

    /// Whether the filter left this element visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current filter term, if any.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// Headings and error indicators stay visible regardless of the filter.
    pub fn is_searchable(&self) -> bool {
        !matches!(self.kind, ElementKind::Heading(_) | ElementKind::Error)
    }

    /// Case-insensitive substring match. The empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query_lower = query.to_lowercase();
        self.text.to_lowercase().contains(&query_lower)
    }
}

impl Searchable for ContentElement {
    fn set_hidden_state(&mut self, state: bool, query: &str) {
        self.visible = if self.matches(query) { state } else { !state };
        self.highlight = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
    }
}

/// Holds the rendered sub-elements of the currently displayed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentContainer {
    elements: Vec<ContentElement>,
}

impl ContentContainer {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn add_child(&mut self, element: ContentElement) {
        self.elements.push(element);
    }

    /// Drop every element.
    pub fn remove_all_children(&mut self) {
        self.elements.clear();
    }

    /// Elements in document order.
    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Number of elements, hidden ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All sub-elements that take part in filtering.
    pub fn searchable_controls_mut(&mut self) -> impl Iterator<Item = &mut ContentElement> {
        self.elements.iter_mut().filter(|e| e.is_searchable())
    }

    /// Links in currently visible elements, in document order.
    pub fn visible_links(&self) -> Vec<&GuideLink> {
        self.elements
            .iter()
            .filter(|e| e.is_visible())
            .flat_map(|e| e.links.iter())
            .collect()
    }
}
