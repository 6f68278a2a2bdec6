//! TUI rendering and event loop (impure shell)

pub mod constants;
mod content_pane;
mod filter_bar;
mod help;
mod layout;
mod styles;
mod tree_pane;

pub use content_pane::{content_lines, wrapped_line_count, ContentPane, PLACEHOLDER_TEXT};
pub use filter_bar::FilterBar;
pub use help::render_help_overlay;
pub use layout::{calculate_pane_areas, render_layout, PaneAreas};
pub use styles::{ColorConfig, GuideStyles};
pub use tree_pane::TreePane;

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::filter_input::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right,
};
use crate::state::{handle_action, AppState, FocusPane, Viewport};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: GuideStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: GuideStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Nothing changes between input events, so the
    /// loop blocks on the next event and redraws after each one.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: GuideStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        }
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while typing into the filter
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay swallows everything except its own dismissal keys
        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.app_state.help_visible = false;
            }
            return false;
        }

        if self.app_state.focus == FocusPane::Filter {
            self.handle_filter_key(key);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(action) => {
                let viewport = self.viewport();
                handle_action(&mut self.app_state, action, viewport);
                false
            }
            None => false,
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.app_state.stop_filter(),
            KeyCode::Backspace => self.app_state.edit_filter(handle_backspace),
            KeyCode::Left => self.app_state.edit_filter(handle_cursor_left),
            KeyCode::Right => self.app_state.edit_filter(handle_cursor_right),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.app_state
                    .edit_filter(|input| handle_char_input(input, ch));
            }
            _ => {}
        }
    }

    /// Content pane geometry for the current terminal size.
    fn viewport(&self) -> Viewport {
        let size = self.terminal.size().unwrap_or_default();
        let area = Rect::new(0, 0, size.width, size.height);
        let inner = calculate_pane_areas(area, self.app_state.guidebook()).content_inner();

        let lines = content_lines(
            self.app_state.guidebook().content(),
            self.app_state.focused_link(),
            &self.styles,
        );
        let content_lines = wrapped_line_count(&lines, inner.width);

        Viewport {
            height: inner.height,
            content_lines: u16::try_from(content_lines).unwrap_or(u16::MAX),
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, app_state, styles);
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(app_state: AppState, styles: GuideStyles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
