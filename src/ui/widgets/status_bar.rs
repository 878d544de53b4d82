//! Status bar widget.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::Store;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let narrative = feed_dot(
            store.narrative.is_loading(),
            matches!(store.narrative, crate::state::NarrativePanel::Failed(_)),
        );
        let alerts = feed_dot(
            store.alerts.is_loading(),
            matches!(store.alerts, crate::state::AlertsGrid::Failed(_)),
        );

        let help_hint = Span::styled(
            format!(" Press {} for help ", keys.help),
            Style::default().fg(Color::DarkGray),
        );

        // Create the status line
        let left_content = vec![
            Span::styled(
                " 📡 Alpha Radar ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            narrative,
            Span::raw(format!(" Narrative {} ", updated(store.app.last_narrative_update))),
            Span::raw(" | "),
            alerts,
            Span::raw(format!(" Alerts {} ", updated(store.app.last_alerts_update))),
        ];

        let status_line = Line::from(left_content);

        // Pad in display columns so the hint sits flush right
        let used = status_line.width() + help_hint.width();
        let padding = usize::from(area.width).saturating_sub(used);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}

fn feed_dot(loading: bool, failed: bool) -> Span<'static> {
    if failed {
        Span::styled("●", Style::default().fg(Color::Red))
    } else if loading {
        Span::styled("○", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("●", Style::default().fg(Color::Green))
    }
}

fn updated(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
