//! Guidebook and UI state.
//!
//! All state transitions are testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod filter;
pub mod filter_input;
pub mod guidebook;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use action_handler::{handle_action, Viewport};
pub use app_state::{AppState, FocusPane};
pub use filter::{apply_filter, FilterSummary};
pub use filter_input::FilterInput;
pub use guidebook::{
    GuidebookState, PaneVisibility, SplitResizeMode, SplitState, UpdateRequest,
    CONTENT_ERROR_MESSAGE,
};
