//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keybindings: &KeyBindings) {
        let popup_area = centered_rect(50, 50, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let key = |k: &str| Span::styled(format!("  {:<7}", k), Style::default().fg(Color::Cyan));

        let help_text = vec![
            Line::from(vec![Span::styled(
                "Keys",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![key(&keybindings.refresh), Span::raw("Refresh both feeds now")]),
            Line::from(vec![key(&keybindings.help), Span::raw("Toggle this help")]),
            Line::from(vec![key(&keybindings.quit), Span::raw("Quit")]),
            Line::from(vec![key("Esc"), Span::raw("Quit")]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Badges",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  🎯 Capx Aligned  ", Style::default().fg(Color::Magenta)),
                Span::raw("alignment 80+"),
            ]),
            Line::from(vec![
                Span::styled("  ⚡ Partial Match ", Style::default().fg(Color::Gray)),
                Span::raw("alignment 50-79"),
            ]),
            Line::from(vec![
                Span::styled(
                    "  🔴 LIVE         ",
                    Style::default().fg(Color::White).bg(Color::Red),
                ),
                Span::raw(" on-chain trade"),
            ]),
        ];

        let paragraph = Paragraph::new(help_text).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, popup_area);
    }
}
