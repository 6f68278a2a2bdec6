//! Guide input sources.
//!
//! Guides are read once from a manifest file at startup. Parse at the boundary: everything
//! past this module works with validated [`GuideEntry`](crate::model::GuideEntry) values.

pub mod manifest;

pub use manifest::{Manifest, ManifestFormat, ManifestOverrides};
