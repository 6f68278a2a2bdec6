//! Shared fixtures for state tests.

use crate::content::{Catalog, ContentServices, InMemoryResources, MarkupRenderer};
use crate::model::{Diagnostics, EntryStore, GuideEntry, GuideId};
use crate::state::{AppState, GuidebookState, SplitState, UpdateRequest};

pub fn id(raw: &str) -> GuideId {
    GuideId::new(raw).expect("valid guide id")
}

pub fn entry(raw: &str, children: &[&str]) -> GuideEntry {
    GuideEntry::new(id(raw), format!("guide-{raw}"), format!("{raw}.md"))
        .with_children(children.iter().map(|c| id(c)).collect())
}

/// index → (power, atmos), atmos → gases. `appendix` is only reachable by link.
pub fn sample_store() -> EntryStore {
    [
        entry("index", &["power", "atmos"]),
        entry("power", &[]),
        entry("atmos", &["gases"]),
        entry("gases", &[]).with_filter_enabled(true),
        entry("appendix", &[]),
    ]
    .into_iter()
    .collect()
}

pub fn sample_resources() -> InMemoryResources {
    InMemoryResources::new()
        .with_document(
            "index.md",
            "# Index\n\n- [Power](guide:power)\n- [Atmospherics](guide:atmos)\n- [Appendix](guide:appendix)",
        )
        .with_document("power.md", "# Power\n\nSee [gases](guide:gases).")
        .with_document("atmos.md", "# Atmospherics\n\nNo links here.")
        .with_document(
            "gases.md",
            "# Gases\n\n- Oxygen, see [index](guide:index)\n- Nitrogen\n- Plasma, see [power](guide:power)",
        )
        .with_document("appendix.md", "# Appendix")
}

pub fn sample_guidebook() -> GuidebookState {
    let services = ContentServices::new(Catalog::new(), sample_resources(), MarkupRenderer::new());
    let mut guidebook = GuidebookState::new(services, SplitState::default(), Diagnostics::default());
    guidebook.update_guides(UpdateRequest::new(sample_store()).with_roots(vec![id("index")]));
    guidebook
}

pub fn sample_app() -> AppState {
    AppState::new(sample_guidebook())
}

pub fn selected(state: &AppState) -> Option<&str> {
    state.guidebook().selected_id().map(GuideId::as_str)
}
