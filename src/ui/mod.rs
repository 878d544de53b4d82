//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{AlertsGrid, HelpPanel, NarrativePanel, StatusBar, conviction_style};

use crate::config::Config;
use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config) {
        let layout = Layout::new(frame.area(), config.ui.show_status_bar);

        if config.ui.show_status_bar {
            StatusBar::render(frame, layout.status_area, store, &config.keybindings);
        }

        NarrativePanel::render(frame, layout.narrative_area, store);
        AlertsGrid::render(frame, layout.alerts_area, store);

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &config.keybindings);
        }
    }
}
