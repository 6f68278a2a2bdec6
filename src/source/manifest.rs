//! Guide manifest loading.
//!
//! A manifest is a TOML (or `.json`) document listing the guide entries, the optional
//! root configuration and the localization strings. Loading is read-once: the whole file is
//! parsed and validated before anything reaches the guidebook.

use crate::content::{Catalog, ContentRoot};
use crate::model::error::ManifestError;
use crate::model::{EntryStore, GuideEntry, GuideId};
use crate::state::UpdateRequest;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ManifestFormat {
    /// `.json` files are JSON; everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Manifest document as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    roots: Option<Vec<GuideId>>,
    #[serde(default)]
    force_root: Option<GuideId>,
    #[serde(default)]
    select: Option<GuideId>,
    #[serde(default)]
    content_root: Option<PathBuf>,
    #[serde(default, rename = "entry", alias = "entries")]
    entries: Vec<GuideEntry>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// A loaded, validated manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Entries keyed by id.
    pub entries: EntryStore,
    /// Explicit top-level ids.
    pub roots: Option<Vec<GuideId>>,
    /// Sole top-level entry.
    pub forced_root: Option<GuideId>,
    /// Initial selection.
    pub selected: Option<GuideId>,
    /// Absolute or manifest-relative directory document references resolve against.
    pub content_root: PathBuf,
    /// Strings from `[strings]`.
    pub catalog: Catalog,
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if `path` does not exist
    /// - `Io` if it cannot be read
    /// - `Parse` if it is not a valid manifest
    /// - `DuplicateId` if two entries share an id
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::parse(&text, ManifestFormat::from_path(path), path)?;
        info!(
            path = %path.display(),
            entries = manifest.entries.len(),
            strings = manifest.catalog.len(),
            "Loaded guide manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest text. `path` is used for error messages and as the base for a relative
    /// (or missing) `content_root`.
    pub fn parse(text: &str, format: ManifestFormat, path: &Path) -> Result<Self, ManifestError> {
        let parse_error = |reason: String| ManifestError::Parse {
            path: path.to_path_buf(),
            reason,
        };
        let raw: RawManifest = match format {
            ManifestFormat::Toml => toml::from_str(text).map_err(|e| parse_error(e.to_string()))?,
            ManifestFormat::Json => {
                serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?
            }
        };

        let mut entries = BTreeMap::new();
        for entry in raw.entries {
            if entries.contains_key(&entry.id) {
                return Err(ManifestError::DuplicateId { id: entry.id });
            }
            entries.insert(entry.id.clone(), entry);
        }

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let content_root = match raw.content_root {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => base.join(dir),
            None => base.to_path_buf(),
        };
        debug!(content_root = %content_root.display(), "Resolved content root");

        Ok(Self {
            entries: EntryStore::from(entries),
            roots: raw.roots,
            forced_root: raw.force_root,
            selected: raw.select,
            content_root,
            catalog: Catalog::from(raw.strings),
        })
    }

    /// Apply command-line overrides.
    ///
    /// # Errors
    ///
    /// `InvalidId` if an override id is blank.
    pub fn with_overrides(mut self, overrides: &ManifestOverrides) -> Result<Self, ManifestError> {
        if let Some(roots) = &overrides.roots {
            self.roots = Some(
                roots
                    .iter()
                    .map(|raw| GuideId::new(raw.as_str()))
                    .collect::<Result<_, _>>()?,
            );
        }
        if let Some(root) = &overrides.force_root {
            self.forced_root = Some(GuideId::new(root.as_str())?);
        }
        if let Some(select) = &overrides.select {
            self.selected = Some(GuideId::new(select.as_str())?);
        }
        Ok(self)
    }

    /// Split into the guidebook update and the collaborators it needs.
    pub fn into_parts(self) -> (UpdateRequest, Catalog, ContentRoot) {
        let request = UpdateRequest {
            entries: self.entries,
            roots: self.roots,
            forced_root: self.forced_root,
            selected: self.selected,
        };
        (request, self.catalog, ContentRoot::new(self.content_root))
    }
}

/// Values given on the command line that replace the manifest's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestOverrides {
    /// `--roots`
    pub roots: Option<Vec<String>>,
    /// `--root`
    pub force_root: Option<String>,
    /// `--select`
    pub select: Option<String>,
}

// ===== Tests =====

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
