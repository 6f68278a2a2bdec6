//! Content filtering by search text.
//!
//! Toggles visibility of already-rendered sub-elements. Never touches the tree or the
//! selection, and every call recomputes from all sub-elements, so repeated calls with the
//! same text are idempotent.

use crate::content::{ContentContainer, Searchable};

/// Outcome of one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    /// Searchable sub-elements considered.
    pub searchable: usize,
    /// Searchable sub-elements left visible.
    pub visible: usize,
}

/// Apply `text` (trimmed) as the filter term to every searchable sub-element.
///
/// An empty term shows everything and clears highlighting.
pub fn apply_filter(container: &mut ContentContainer, text: &str) -> FilterSummary {
    let term = text.trim();
    let mut summary = FilterSummary::default();

    for element in container.searchable_controls_mut() {
        element.set_hidden_state(true, term);
        summary.searchable += 1;
        if element.is_visible() {
            summary.visible += 1;
        }
    }

    summary
}
