//! Entry store: the id → entry mapping for one update cycle.

use super::entry::GuideEntry;
use super::identifiers::GuideId;
use std::collections::BTreeMap;

/// Immutable-per-update mapping from entry id to entry record.
///
/// Replaced wholesale on every update; never patched. Backed by a
/// `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: BTreeMap<GuideId, GuideEntry>,
}

impl EntryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &GuideId) -> Option<&GuideEntry> {
        self.entries.get(id)
    }

    /// Whether an entry exists for `id`.
    pub fn contains(&self, id: &GuideId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &GuideId> {
        self.entries.keys()
    }

    /// Entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &GuideEntry> {
        self.entries.values()
    }

    /// The first entry in key order, if any.
    pub fn first(&self) -> Option<&GuideEntry> {
        self.entries.values().next()
    }
}

impl FromIterator<GuideEntry> for EntryStore {
    /// Later entries with the same id replace earlier ones.
    fn from_iter<I: IntoIterator<Item = GuideEntry>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self { entries }
    }
}

impl From<BTreeMap<GuideId, GuideEntry>> for EntryStore {
    fn from(entries: BTreeMap<GuideId, GuideEntry>) -> Self {
        Self { entries }
    }
}
