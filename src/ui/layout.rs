//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Height of the narrative panel, borders included.
const NARRATIVE_HEIGHT: u16 = 9;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top). Zero-height when hidden.
    pub status_area: Rect,
    /// Narrative panel area.
    pub narrative_area: Rect,
    /// Alerts grid area.
    pub alerts_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_status_bar: bool) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(show_status_bar)),
                Constraint::Length(NARRATIVE_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            status_area: chunks[0],
            narrative_area: chunks[1],
            alerts_area: chunks[2],
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
