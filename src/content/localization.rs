//! String catalog localizer.

use super::Localizer;
use std::collections::HashMap;

/// Resolves name keys from a flat key → string table.
///
/// Unknown keys resolve to the key itself so lookup is total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one string.
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when there are no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl From<HashMap<String, String>> for Catalog {
    fn from(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl Localizer for Catalog {
    fn localize(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
