//! Tree construction from an entry store.
//!
//! Depth-first pre-order expansion guarded by a single "added" set shared across the whole
//! build. Any id reached a second time, in any branch, is rejected and reported. That same
//! guard is what makes cycles terminate.

use super::roots::sorted_root_entries;
use super::tree::{GuideTree, NodeIndex};
use crate::content::Localizer;
use crate::model::{EntryStore, GuideId, GuideIssue};
use std::collections::HashSet;
use tracing::debug;

/// The built tree and every issue found while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Built tree, fully expanded.
    pub tree: GuideTree,
    /// Duplicate and dangling references in the order they were hit.
    pub issues: Vec<GuideIssue>,
}

/// Build the display tree.
///
/// `roots` is the explicit root list (inferred when `None`). When `forced_root` resolves it
/// becomes the sole top-level node and the root list is attached beneath it. Every node is
/// expanded afterwards.
pub fn build_tree(
    store: &EntryStore,
    roots: Option<&[GuideId]>,
    forced_root: Option<&GuideId>,
    localizer: &dyn Localizer,
) -> BuildOutcome {
    let mut builder = TreeBuilder {
        store,
        localizer,
        added: HashSet::with_capacity(store.len()),
        tree: GuideTree::new(),
        issues: Vec::new(),
    };

    let parent = forced_root.and_then(|id| builder.add_entry(id, None, "forced root"));

    let selection = sorted_root_entries(store, roots, localizer);
    builder
        .issues
        .extend(selection.dangling.into_iter().map(|id| GuideIssue::DanglingReference {
            id,
            context: "root",
        }));
    for entry in selection.entries {
        builder.add_entry(&entry.id, parent, "root");
    }

    let mut tree = builder.tree;
    tree.set_all_expanded(true);

    debug!(
        nodes = tree.len(),
        issues = builder.issues.len(),
        "Built guide tree:\n{}",
        tree.outline()
    );

    BuildOutcome {
        tree,
        issues: builder.issues,
    }
}

struct TreeBuilder<'a> {
    store: &'a EntryStore,
    localizer: &'a dyn Localizer,
    added: HashSet<GuideId>,
    tree: GuideTree,
    issues: Vec<GuideIssue>,
}

impl TreeBuilder<'_> {
    fn add_entry(
        &mut self,
        id: &GuideId,
        parent: Option<NodeIndex>,
        context: &'static str,
    ) -> Option<NodeIndex> {
        let store = self.store;
        let Some(entry) = store.get(id) else {
            self.issues.push(GuideIssue::DanglingReference {
                id: id.clone(),
                context,
            });
            return None;
        };

        if !self.added.insert(id.clone()) {
            self.issues
                .push(GuideIssue::DuplicateEntry { id: id.clone() });
            return None;
        }

        let label = self.localizer.localize(&entry.name);
        let node = self.tree.add_node(entry.id.clone(), label, parent);

        for child in &entry.children {
            self.add_entry(child, Some(node), "child");
        }

        Some(node)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
