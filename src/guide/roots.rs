//! Root inference and root ordering.

use crate::content::Localizer;
use crate::model::{EntryStore, GuideEntry, GuideId};
use std::collections::BTreeSet;

/// Resolved, sorted root entries plus ids that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSelection<'a> {
    /// Resolved roots, sorted.
    pub entries: Vec<&'a GuideEntry>,
    /// Requested root ids missing from the store.
    pub dangling: Vec<GuideId>,
}

/// Ids that never appear in any entry's `children`.
///
/// This is the only path that surfaces orphaned entries when no explicit root list is given.
pub fn infer_root_ids(store: &EntryStore) -> BTreeSet<GuideId> {
    let mut roots: BTreeSet<GuideId> = store.ids().cloned().collect();
    for entry in store.entries() {
        for child in &entry.children {
            roots.remove(child);
        }
    }
    roots
}

/// Produce the ordered root list to insert.
///
/// Uses `explicit` when given, otherwise [`infer_root_ids`]. Entries are sorted by
/// `(priority, resolved name)` ascending, ties broken by id so the order is total.
pub fn sorted_root_entries<'a>(
    store: &'a EntryStore,
    explicit: Option<&[GuideId]>,
    localizer: &dyn Localizer,
) -> RootSelection<'a> {
    let ids: Vec<GuideId> = match explicit {
        Some(ids) => ids.to_vec(),
        None => infer_root_ids(store).into_iter().collect(),
    };

    let mut entries = Vec::with_capacity(ids.len());
    let mut dangling = Vec::new();
    for id in ids {
        match store.get(&id) {
            Some(entry) => entries.push(entry),
            None => dangling.push(id),
        }
    }

    entries.sort_by_cached_key(|e| (e.priority, localizer.localize(&e.name), e.id.clone()));

    RootSelection { entries, dangling }
}
