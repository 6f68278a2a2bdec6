//! Content collaborators.
//!
//! The guide core never parses documents, reads files or resolves display names
//! itself. It talks to these traits instead:
//! - [`Localizer`]: name key → display string (total)
//! - [`ResourceReader`]: document reference → scoped character stream
//! - [`ContentRenderer`]: document text → sub-elements in a [`ContentContainer`]
//! - [`Searchable`]: per-element hidden state + highlight term
//!
//! Default implementations used by the binary live in the submodules.

use std::io::Read;
use thiserror::Error;

pub mod container;
pub mod localization;
pub mod markup;
pub mod resources;

pub use container::{ContentContainer, ContentElement, ElementKind, GuideLink};
pub use localization::Catalog;
pub use markup::MarkupRenderer;
pub use resources::{ContentRoot, InMemoryResources};

/// Errors raised by the content collaborators.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No document exists for the reference.
    #[error("Document not found: {reference}")]
    NotFound {
        /// The document reference.
        reference: String,
    },

    /// The reference escapes the content root (absolute path or `..`).
    #[error("Document reference outside content root: {reference}")]
    OutsideRoot {
        /// The document reference.
        reference: String,
    },

    /// The document is not valid UTF-8.
    #[error("Document is not valid UTF-8: {reference}")]
    InvalidUtf8 {
        /// The document reference.
        reference: String,
    },

    /// Reading the document failed.
    #[error("Failed to read document {reference}: {source}")]
    Io {
        /// The document reference.
        reference: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The renderer rejected the document.
    #[error("line {line}: {reason}")]
    Render {
        /// 1-based line the renderer stopped at.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Resolves localization keys to display strings. Never fails.
pub trait Localizer {
    /// Display string for `key`.
    fn localize(&self, key: &str) -> String;
}

/// Supplies document text by reference.
pub trait ResourceReader {
    /// Open a readable stream for the document. The stream is dropped after one read.
    fn open_text(&self, reference: &str) -> Result<Box<dyn Read + '_>, ContentError>;
}

/// Turns document text into renderable sub-elements.
pub trait ContentRenderer {
    /// Append the rendered elements of `source` to `container`.
    ///
    /// On error the container is left unchanged.
    fn try_add_markup(&self, container: &mut ContentContainer, source: &str)
        -> Result<(), ContentError>;
}

/// A rendered sub-element that can be shown/hidden by a search term.
pub trait Searchable {
    /// `state` is the visibility applied to matching elements; non-matching elements get
    /// `!state`. The query is also kept as the highlight term (none when empty).
    fn set_hidden_state(&mut self, state: bool, query: &str);
}

/// Read a document fully and release the stream.
pub fn read_document(
    resources: &dyn ResourceReader,
    reference: &str,
) -> Result<String, ContentError> {
    let mut stream = resources.open_text(reference)?;
    let mut text = String::new();
    stream.read_to_string(&mut text).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            ContentError::InvalidUtf8 {
                reference: reference.to_string(),
            }
        } else {
            ContentError::Io {
                reference: reference.to_string(),
                source,
            }
        }
    })?;
    Ok(text)
}

/// The bundle of collaborators the guidebook state talks to.
pub struct ContentServices {
    /// Resolves entry names.
    pub localizer: Box<dyn Localizer>,
    /// Opens entry documents.
    pub resources: Box<dyn ResourceReader>,
    /// Turns document text into content elements.
    pub renderer: Box<dyn ContentRenderer>,
}

impl ContentServices {
    /// Box the three collaborators.
    pub fn new(
        localizer: impl Localizer + 'static,
        resources: impl ResourceReader + 'static,
        renderer: impl ContentRenderer + 'static,
    ) -> Self {
        Self {
            localizer: Box::new(localizer),
            resources: Box::new(resources),
            renderer: Box::new(renderer),
        }
    }
}

impl std::fmt::Debug for ContentServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentServices").finish_non_exhaustive()
    }
}
