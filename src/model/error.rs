//! Error types for the guidebook application.
//!
//! This module defines the error taxonomy using `thiserror` for structured error handling.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error returned to `main`
//!   - [`ManifestError`] - Guide manifest reading/parsing failures (fatal at startup)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`GuideIssue`] - Non-fatal conditions raised while building the tree or showing content
//!
//! # Error Recovery Strategy
//!
//! Nothing that happens after startup is fatal. Tree construction skips bad edges, link
//! navigation ignores unknown targets and content render failures degrade to an inline error
//! element. Each such condition is a [`GuideIssue`], reported through `tracing` and kept in
//! [`crate::model::Diagnostics`] for the status bar.
//!
//! A requested selection that is not in the tree is *not* an issue: it simply falls back to the
//! placeholder state.

use super::identifiers::{GuideId, InvalidGuideId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the guide manifest.
    ///
    /// **Recovery**: Display error to user and exit. Without entries there is nothing to show.
    #[error("Failed to load guide manifest: {0}")]
    Manifest(#[from] ManifestError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading a guide manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use guidebook::model::error::ManifestError;
    ///
    /// let err = ManifestError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.toml")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.toml"));
    /// ```
    #[error("Manifest not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Reading the manifest failed.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        /// The manifest path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or JSON, or does not match the schema.
    #[error("Invalid manifest {path}: {reason}")]
    Parse {
        /// The manifest path.
        path: PathBuf,
        /// Parser error details.
        reason: String,
    },

    /// Two `[[entry]]` blocks share an id.
    ///
    /// Unlike duplicate *tree* insertion this is fatal: the store would silently lose an entry.
    #[error("Duplicate entry id in manifest: {id}")]
    DuplicateId {
        /// The repeated id.
        id: GuideId,
    },

    /// An id given outside the entry list (root, forced root, selection) is invalid.
    #[error("Invalid guide id: {0}")]
    InvalidId(#[from] InvalidGuideId),
}

/// Non-fatal conditions reported during tree construction and content display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideIssue {
    /// An entry id was reached a second time during tree construction.
    ///
    /// The later occurrence is dropped; the first occurrence (depth-first, parent-list order)
    /// keeps its position. This is also what terminates cycles.
    #[error("Adding duplicate guide entry: {id}")]
    DuplicateEntry {
        /// The id that was already in the tree.
        id: GuideId,
    },

    /// A child, forced-root, root or link id is not present in the entry store.
    #[error("Dangling {context} reference: {id}")]
    DanglingReference {
        /// The id that has no entry.
        id: GuideId,
        /// Where the reference came from (e.g. "child", "root", "link").
        context: &'static str,
    },

    /// The content collaborators rejected an entry's document.
    #[error("Failed to parse contents of guide document {id}: {reason}")]
    ContentRenderFailure {
        /// Entry whose document failed.
        id: GuideId,
        /// Reader or renderer error message.
        reason: String,
    },
}

impl GuideIssue {
    /// Dangling references are skipped silently from the user's point of view.
    pub fn is_silent(&self) -> bool {
        matches!(self, GuideIssue::DanglingReference { .. })
    }

    /// The entry id the issue is about.
    pub fn id(&self) -> &GuideId {
        match self {
            GuideIssue::DuplicateEntry { id }
            | GuideIssue::DanglingReference { id, .. }
            | GuideIssue::ContentRenderFailure { id, .. } => id,
        }
    }
}
