//! Guidebook controller.
//!
//! Owns the entry store, the built tree, the current selection and the rendered content,
//! and keeps the pane visibility flags consistent with them:
//!
//! - selection set → placeholder hidden, entry container shown, search bar shown iff the
//!   displayed entry has filtering enabled
//! - selection cleared → placeholder shown, entry container and search bar hidden
//!
//! Every non-fatal problem is routed through [`Diagnostics`].

use crate::content::{read_document, ContentContainer, ContentElement, ContentServices};
use crate::guide::{build_tree, GuideTree, NodeIndex};
use crate::model::{Diagnostics, EntryStore, GuideEntry, GuideId, GuideIssue};
use crate::state::filter::{apply_filter, FilterSummary};
use tracing::{debug, info};

/// Message shown in place of a document that could not be read or rendered.
pub const CONTENT_ERROR_MESSAGE: &str = "ERROR: Failed to parse document.";

/// Bounds for the tree pane width, in percent of the window.
pub const MIN_TREE_WIDTH_PERCENT: u16 = 10;
/// Upper bound, see [`MIN_TREE_WIDTH_PERCENT`].
pub const MAX_TREE_WIDTH_PERCENT: u16 = 90;

// ===== UpdateRequest =====

/// Arguments of [`GuidebookState::update_guides`].
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    /// The new entry set. Replaces the previous one.
    pub entries: EntryStore,
    /// Explicit top-level ids. Inferred from the entries when `None`.
    pub roots: Option<Vec<GuideId>>,
    /// Entry to place as the sole top-level node, with the roots beneath it.
    pub forced_root: Option<GuideId>,
    /// Entry to select after rebuilding. Defaults to the first tree node; an id without a
    /// tree node leaves nothing selected.
    pub selected: Option<GuideId>,
}

impl UpdateRequest {
    /// Load `entries` with inferred roots and the first node selected.
    pub fn new(entries: EntryStore) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Use these top-level ids instead of inferring them.
    pub fn with_roots(mut self, roots: Vec<GuideId>) -> Self {
        self.roots = Some(roots);
        self
    }

    /// Show only this entry at the top level.
    pub fn with_forced_root(mut self, id: GuideId) -> Self {
        self.forced_root = Some(id);
        self
    }

    /// Entry to select after the update.
    pub fn with_selected(mut self, id: GuideId) -> Self {
        self.selected = Some(id);
        self
    }
}

// ===== Panes =====

/// Visibility of the guidebook panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneVisibility {
    /// Navigation tree.
    pub tree_box: bool,
    /// Shown while nothing is selected.
    pub placeholder: bool,
    /// Rendered document.
    pub entry_container: bool,
    /// Filter bar.
    pub search_container: bool,
}

impl Default for PaneVisibility {
    fn default() -> Self {
        Self {
            tree_box: true,
            placeholder: true,
            entry_container: false,
            search_container: false,
        }
    }
}

/// Whether the user may resize the split between tree and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitResizeMode {
    /// The split follows `<` and `>`.
    #[default]
    Resizable,
    /// The split is fixed.
    NotResizable,
}

/// The tree/content split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitState {
    /// Whether resizing is allowed.
    pub resize_mode: SplitResizeMode,
    tree_width_percent: u16,
}

impl SplitState {
    /// Resizable split, width clamped to the allowed range.
    pub fn new(tree_width_percent: u16) -> Self {
        Self {
            resize_mode: SplitResizeMode::Resizable,
            tree_width_percent: tree_width_percent
                .clamp(MIN_TREE_WIDTH_PERCENT, MAX_TREE_WIDTH_PERCENT),
        }
    }

    /// Tree pane width in percent.
    pub fn tree_width_percent(&self) -> u16 {
        self.tree_width_percent
    }

    /// Move the split by `delta` percent. Returns false when the split is locked.
    pub fn resize(&mut self, delta: i16) -> bool {
        if self.resize_mode == SplitResizeMode::NotResizable {
            return false;
        }
        let width = i32::from(self.tree_width_percent) + i32::from(delta);
        let width = width.clamp(
            i32::from(MIN_TREE_WIDTH_PERCENT),
            i32::from(MAX_TREE_WIDTH_PERCENT),
        );
        // Clamped into u16 bounds above
        self.tree_width_percent = width as u16;
        true
    }
}

impl Default for SplitState {
    fn default() -> Self {
        Self::new(30)
    }
}

// ===== GuidebookState =====

/// The guidebook: entry store, tree, selection and displayed content.
#[derive(Debug)]
pub struct GuidebookState {
    services: ContentServices,
    store: EntryStore,
    tree: GuideTree,
    selected: Option<NodeIndex>,
    /// Entry whose document is in `content`. Differs from the selection only after a link
    /// to an entry that is not in the tree.
    displayed: Option<GuideId>,
    content: ContentContainer,
    /// Bumped whenever `content` is replaced.
    content_generation: u64,
    filter_text: String,
    panes: PaneVisibility,
    split: SplitState,
    scroll: u16,
    diagnostics: Diagnostics,
}

impl GuidebookState {
    /// Empty guidebook showing the placeholder.
    pub fn new(services: ContentServices, split: SplitState, diagnostics: Diagnostics) -> Self {
        Self {
            services,
            store: EntryStore::new(),
            tree: GuideTree::new(),
            selected: None,
            displayed: None,
            content: ContentContainer::new(),
            content_generation: 0,
            filter_text: String::new(),
            panes: PaneVisibility::default(),
            split,
            scroll: 0,
            diagnostics,
        }
    }

    /// Replace the entry set, rebuild the tree and select an entry.
    ///
    /// The selection is the node for `request.selected`, or the first node when no id is
    /// requested. A requested id with no tree node clears the selection and shows the
    /// placeholder. With exactly one entry the tree pane is hidden,
    /// the split is locked and that entry is selected regardless of `request.selected`.
    pub fn update_guides(&mut self, request: UpdateRequest) {
        let UpdateRequest {
            entries,
            roots,
            forced_root,
            selected,
        } = request;

        self.store = entries;
        self.selected = None;
        self.clear_selected_guide();

        let outcome = build_tree(
            &self.store,
            roots.as_deref(),
            forced_root.as_ref(),
            self.services.localizer.as_ref(),
        );
        self.tree = outcome.tree;
        self.diagnostics.report_all(outcome.issues);

        let selected = if self.store.len() == 1 {
            self.panes.tree_box = false;
            self.split.resize_mode = SplitResizeMode::NotResizable;
            self.store.first().map(|entry| entry.id.clone())
        } else {
            self.panes.tree_box = true;
            self.split.resize_mode = SplitResizeMode::Resizable;
            selected
        };

        let target = match selected {
            Some(id) => {
                let found = self.tree.find(&id);
                if found.is_none() {
                    debug!(%id, "Requested selection not in tree, showing placeholder");
                }
                found
            }
            None => self.tree.first(),
        };

        info!(
            entries = self.store.len(),
            nodes = self.tree.len(),
            selected = ?target.and_then(|i| self.tree.node(i)).map(|n| n.id().as_str()),
            "Guides updated"
        );
        self.select(target);
    }

    /// Change the tree selection and show (or clear) the content accordingly.
    ///
    /// Indices that do not refer to a node clear the selection.
    pub fn select(&mut self, idx: Option<NodeIndex>) {
        let target = idx.and_then(|i| self.tree.node(i).map(|node| (i, node.id().clone())));

        match target {
            Some((idx, id)) => {
                self.selected = Some(idx);
                self.show_guide(&id);
            }
            None => {
                self.selected = None;
                self.clear_selected_guide();
            }
        }
    }

    /// Return the content area to its placeholder state.
    ///
    /// Does not touch the tree selection.
    pub fn clear_selected_guide(&mut self) {
        self.panes.placeholder = true;
        self.panes.entry_container = false;
        self.panes.search_container = false;
        self.content.remove_all_children();
        self.displayed = None;
        self.content_generation += 1;
    }

    /// Navigate to the entry a content link points at.
    ///
    /// Tree members are revealed (ancestors expanded) and selected. Entries outside the tree
    /// have their content shown directly, leaving the tree selection unchanged. Unknown ids
    /// are ignored.
    pub fn handle_link(&mut self, target: &GuideId) {
        if !self.store.contains(target) {
            self.diagnostics.report(GuideIssue::DanglingReference {
                id: target.clone(),
                context: "link",
            });
            return;
        }

        match self.tree.find(target) {
            Some(idx) => {
                self.tree.expand_parent_entries(idx);
                self.select(Some(idx));
            }
            None => self.show_guide(target),
        }
    }

    /// Record new filter text and re-apply it to the displayed content.
    ///
    /// A no-op unless the selected tree entry has filtering enabled, even when a link has
    /// put another entry's content on screen.
    pub fn on_filter_text_change(&mut self, text: &str) {
        self.filter_text.clear();
        self.filter_text.push_str(text);
        self.handle_filter();
    }

    fn handle_filter(&mut self) -> Option<FilterSummary> {
        let selected = self.selected_id()?;
        if !self.store.get(selected)?.filter_enabled {
            return None;
        }
        let summary = apply_filter(&mut self.content, &self.filter_text);
        debug!(
            term = self.filter_text.trim(),
            visible = summary.visible,
            searchable = summary.searchable,
            "Filter applied"
        );
        Some(summary)
    }

    fn show_guide(&mut self, id: &GuideId) {
        let Some(entry) = self.store.get(id) else {
            self.diagnostics.report(GuideIssue::DanglingReference {
                id: id.clone(),
                context: "selection",
            });
            return;
        };
        let filter_enabled = entry.filter_enabled;
        let document = entry.text.clone();

        self.scroll = 0;
        self.filter_text.clear();
        self.content.remove_all_children();
        self.content_generation += 1;
        self.displayed = Some(id.clone());
        self.panes.placeholder = false;
        self.panes.entry_container = true;
        self.panes.search_container = filter_enabled;

        let rendered = read_document(self.services.resources.as_ref(), &document).and_then(
            |source| {
                self.services
                    .renderer
                    .try_add_markup(&mut self.content, &source)
            },
        );

        if let Err(err) = rendered {
            self.content
                .add_child(ContentElement::error(CONTENT_ERROR_MESSAGE));
            self.diagnostics.report(GuideIssue::ContentRenderFailure {
                id: id.clone(),
                reason: err.to_string(),
            });
        }
    }

    // ===== Tree navigation =====

    /// Select the next visible row. Selects the first row when nothing is selected.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Select the previous visible row. Selects the first row when nothing is selected.
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, step: isize) {
        let rows = self.tree.visible_rows();
        if rows.is_empty() {
            return;
        }
        let next = match self.selected.and_then(|s| rows.iter().position(|&r| r == s)) {
            Some(pos) => pos.saturating_add_signed(step).min(rows.len() - 1),
            None => 0,
        };
        if Some(rows[next]) != self.selected {
            self.select(Some(rows[next]));
        }
    }

    /// Collapse the selected node, or select its parent when it is already collapsed.
    pub fn collapse_selected(&mut self) {
        let Some(idx) = self.selected else { return };
        let Some(node) = self.tree.node(idx) else {
            return;
        };
        if node.has_children() && node.is_expanded() {
            self.tree.set_expanded(idx, false);
        } else if let Some(parent) = node.parent() {
            self.select(Some(parent));
        }
    }

    /// Expand the selected node.
    pub fn expand_selected(&mut self) {
        if let Some(idx) = self.selected {
            self.tree.set_expanded(idx, true);
        }
    }

    /// Flip expansion of the selected node.
    pub fn toggle_selected(&mut self) {
        if let Some(idx) = self.selected {
            self.tree.toggle_expanded(idx);
        }
    }

    // ===== Scroll & split =====

    /// Scroll the content up by `amount` lines.
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scroll the content down, stopping at `max`.
    pub fn scroll_down(&mut self, amount: u16, max: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(max);
    }

    /// See [`SplitState::resize`].
    pub fn resize_tree(&mut self, delta: i16) -> bool {
        self.split.resize(delta)
    }

    // ===== Accessors =====

    /// All loaded entries.
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Current guide tree.
    pub fn tree(&self) -> &GuideTree {
        &self.tree
    }

    /// Selected tree node.
    pub fn selected(&self) -> Option<NodeIndex> {
        self.selected
    }

    /// Id of the selected tree node.
    pub fn selected_id(&self) -> Option<&GuideId> {
        self.selected
            .and_then(|i| self.tree.node(i))
            .map(|node| node.id())
    }

    /// Entry whose content is on screen.
    pub fn displayed_id(&self) -> Option<&GuideId> {
        self.displayed.as_ref()
    }

    /// Entry whose content is on screen.
    pub fn displayed_entry(&self) -> Option<&GuideEntry> {
        self.displayed.as_ref().and_then(|id| self.store.get(id))
    }

    /// Localized name of the displayed entry.
    pub fn displayed_title(&self) -> Option<String> {
        self.displayed_entry()
            .map(|entry| self.services.localizer.localize(&entry.name))
    }

    /// Rendered content of the displayed entry.
    pub fn content(&self) -> &ContentContainer {
        &self.content
    }

    /// Bumped whenever new content is rendered.
    pub fn content_generation(&self) -> u64 {
        self.content_generation
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Which panes are visible.
    pub fn panes(&self) -> PaneVisibility {
        self.panes
    }

    /// Tree/content split.
    pub fn split(&self) -> SplitState {
        self.split
    }

    /// Content scroll offset in lines.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Issues reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "guidebook_tests.rs"]
mod tests;
