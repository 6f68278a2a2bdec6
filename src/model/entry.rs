//! Guide entry records.
//!
//! A `GuideEntry` is supplied by the host and never mutated by the core.

use super::identifiers::GuideId;
use serde::Deserialize;

/// A single addressable unit of guide content.
///
/// `name` is a localization key and `text` an opaque document reference;
/// both are resolved by external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideEntry {
    /// Unique key.
    pub id: GuideId,
    /// Localization key of the display name.
    pub name: String,
    /// Document reference.
    pub text: String,

    /// Child entry ids in declared order. May reference unknown entries.
    #[serde(default)]
    pub children: Vec<GuideId>,

    /// Sibling sort key, ascending.
    #[serde(default)]
    pub priority: i32,

    /// Whether the filter bar applies to this entry's content.
    #[serde(default)]
    pub filter_enabled: bool,
}

impl GuideEntry {
    /// Create an entry with no children, priority 0 and filtering disabled.
    pub fn new(id: GuideId, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
            priority: 0,
            filter_enabled: false,
        }
    }

    /// Set the child ids.
    pub fn with_children(mut self, children: Vec<GuideId>) -> Self {
        self.children = children;
        self
    }

    /// Set the sort key.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Enable or disable content filtering.
    pub fn with_filter_enabled(mut self, enabled: bool) -> Self {
        self.filter_enabled = enabled;
        self
    }
}
