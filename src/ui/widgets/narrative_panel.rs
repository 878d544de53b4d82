//! Narrative panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{AlignmentBadge, NarrativePanel as PanelState, NarrativeView, Store};

/// Narrative panel widget.
pub struct NarrativePanel;

impl NarrativePanel {
    /// Render the narrative panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let (lines, border_color) = match &store.narrative {
            PanelState::Loading => (
                vec![Line::from(Span::styled(
                    format!("{} Scanning narratives...", store.app.spinner()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ))],
                Color::Cyan,
            ),
            PanelState::Failed(message) => (
                vec![Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                ))],
                Color::Red,
            ),
            PanelState::Ready(view) => (Self::content(view), Color::Cyan),
        };

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" 📡 Trending Narrative ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(paragraph, area);
    }

    fn content(view: &NarrativeView) -> Vec<Line<'_>> {
        let mut title = vec![Span::styled(
            view.name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(badge) = view.badge {
            title.push(Span::raw("  "));
            title.push(Span::styled(badge.label(), badge_style(badge)));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::styled(
                    view.growth.as_str(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(view.stage_label.as_str(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::styled("Mentions: ", Style::default().fg(Color::DarkGray)),
                Span::raw(view.mentions.as_str()),
            ]),
            Line::from(view.summary.as_str()),
        ];

        if let Some(detected) = &view.detected {
            lines.push(Line::from(Span::styled(
                format!("Detected {detected}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}

fn badge_style(badge: AlignmentBadge) -> Style {
    match badge {
        AlignmentBadge::Aligned => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        AlignmentBadge::PartialMatch => Style::default().fg(Color::Gray),
    }
}
