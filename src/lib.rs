//! Guidebook viewer
//!
//! Builds a navigable tree from a set of guide entries, shows the selected entry's document,
//! follows cross-references between entries and filters document content.
//!
//! Pure core (`model`, `content`, `guide`, `state`) with an impure shell (`source`,
//! `config`, `logging`, `view`).

pub mod config;
pub mod content;
pub mod guide;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
