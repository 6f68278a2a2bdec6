//! Document resource readers.

use super::{ContentError, ResourceReader};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

/// Reads documents from a directory on disk.
///
/// References are relative paths; absolute paths and `..` components are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    root: PathBuf,
}

impl ContentRoot {
    /// Serve documents from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory references resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a reference to a path under the root.
    pub fn resolve(&self, reference: &str) -> Result<PathBuf, ContentError> {
        let relative = Path::new(reference);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || reference.is_empty() {
            return Err(ContentError::OutsideRoot {
                reference: reference.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceReader for ContentRoot {
    fn open_text(&self, reference: &str) -> Result<Box<dyn Read + '_>, ContentError> {
        let path = self.resolve(reference)?;
        if !path.is_file() {
            return Err(ContentError::NotFound {
                reference: reference.to_string(),
            });
        }
        let file = File::open(&path).map_err(|source| ContentError::Io {
            reference: reference.to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Serves documents from memory. Used for embedded guides and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryResources {
    documents: HashMap<String, String>,
}

impl InMemoryResources {
    /// Empty document set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `reference`.
    pub fn with_document(mut self, reference: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(reference.into(), text.into());
        self
    }
}

impl ResourceReader for InMemoryResources {
    fn open_text(&self, reference: &str) -> Result<Box<dyn Read + '_>, ContentError> {
        self.documents
            .get(reference)
            .map(|text| Box::new(text.as_bytes()) as Box<dyn Read + '_>)
            .ok_or_else(|| ContentError::NotFound {
                reference: reference.to_string(),
            })
    }
}
