use tracing::debug;

use crate::modules::theme::application::domain::theme_mode::ThemeMode;

/// Session-scoped theme flag. Starts light, changes only through
/// [`ThemeState::toggle_theme`], and is dropped with the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips light/dark and returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        debug!(theme = %self.mode, "Theme toggled");
        self.mode
    }
}
