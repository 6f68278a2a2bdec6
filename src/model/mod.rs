//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod store;

// Re-export for convenience
pub use diagnostics::{Diagnostic, Diagnostics, DEFAULT_DIAGNOSTICS_CAPACITY};
pub use entry::GuideEntry;
pub use error::{AppError, GuideIssue, ManifestError};
pub use identifiers::{GuideId, InvalidGuideId};
pub use key_action::KeyAction;
pub use store::EntryStore;
