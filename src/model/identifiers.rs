//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::Deserialize;
use std::fmt;

/// Unique key of a guide entry within one entry store snapshot.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct GuideId(String);

impl GuideId {
    /// Smart constructor: validates a non-empty, non-blank identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidGuideId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidGuideId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GuideId {
    type Error = InvalidGuideId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ===== Error Types =====

/// Why a raw string is not a valid [`GuideId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGuideId {
    /// The string was empty or whitespace only.
    #[error("Guide ID cannot be empty")]
    Empty,
}

// ===== Tests =====
