//! Guidebook styling configuration.
//!
//! Provides the colors for tree rows, content elements, links and search highlights.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GuideStyles =====

/// Styles used by the guidebook panes.
///
/// With colors disabled only modifiers (bold, reversed, underline) remain, so selection,
/// links and highlights stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStyles {
    /// Headings.
    pub heading: Style,
    /// Code blocks.
    pub code: Style,
    /// Render failures.
    pub error: Style,
    /// Guide links.
    pub link: Style,
    /// The link `Enter` would follow.
    pub focused_link: Style,
    /// Filter matches.
    pub highlight: Style,
    /// Selected tree row.
    pub selected_row: Style,
    /// Unfocused pane borders.
    pub border: Style,
    /// Focused pane border.
    pub focused_border: Style,
    /// Placeholder and hints.
    pub muted: Style,
}

impl GuideStyles {
    /// Create styles with specified color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        let underlined = Style::default().add_modifier(Modifier::UNDERLINED);

        if config.colors_enabled() {
            Self {
                heading: bold.fg(Color::Cyan),
                code: Style::default().fg(Color::Gray),
                error: bold.fg(Color::Red),
                link: underlined.fg(Color::Blue),
                focused_link: reversed.fg(Color::Blue),
                highlight: Style::default().bg(Color::Yellow).fg(Color::Black),
                selected_row: reversed.fg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Cyan),
                muted: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                heading: bold,
                code: Style::default(),
                error: bold,
                link: underlined,
                focused_link: reversed,
                highlight: bold.add_modifier(Modifier::UNDERLINED),
                selected_row: reversed,
                border: Style::default(),
                focused_border: bold,
                muted: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for GuideStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
