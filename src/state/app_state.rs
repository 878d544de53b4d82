//! Application-level state.

use chrono::{DateTime, Utc};

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Animation frame for loading indicators.
    pub frame: usize,
    /// Last successful narrative load.
    pub last_narrative_update: Option<DateTime<Utc>>,
    /// Last successful alerts load.
    pub last_alerts_update: Option<DateTime<Utc>>,
}

impl AppState {
    /// Spinner glyphs for loading panels.
    pub const SPINNER: [&'static str; 4] = ["◐", "◓", "◑", "◒"];

    /// Create a new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the loading animation.
    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Current spinner glyph.
    pub fn spinner(&self) -> &'static str {
        Self::SPINNER[self.frame % Self::SPINNER.len()]
    }
}
