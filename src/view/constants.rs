//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the status bar in lines.
///
/// Single line for the selected entry, diagnostics count and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the filter bar in lines (border + content).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Spaces of indentation per tree depth level.
pub const TREE_INDENT_WIDTH: usize = 2;

/// Prefix for list items in the content pane.
pub const LIST_BULLET: &str = "• ";
