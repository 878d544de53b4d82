//! Trade alerts grid widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::state::{AlertCard, AlertsGrid as GridState, Conviction, Store};

/// Trade alerts grid widget.
pub struct AlertsGrid;

impl AlertsGrid {
    /// Render the alerts grid.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        match &store.alerts {
            GridState::Loading => {
                let text = Line::from(Span::styled(
                    format!("{} Loading live trades...", store.app.spinner()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ));
                frame.render_widget(
                    Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .block(Self::block(" 🐋 Smart Money Alerts ", Color::Cyan)),
                    area,
                );
            }
            GridState::Failed(message) => {
                let text = Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                ));
                frame.render_widget(
                    Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .block(Self::block(" 🐋 Smart Money Alerts ", Color::Red)),
                    area,
                );
            }
            GridState::Ready(cards) => Self::render_table(frame, area, cards),
        }
    }

    fn render_table(frame: &mut Frame, area: Rect, cards: &[AlertCard]) {
        let header_cells = [
            "Time",
            "Source",
            "Wallet",
            "Token",
            "Narrative",
            "Value",
            "Conviction",
        ]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = cards.iter().map(|card| {
            let source = match card.source_marker() {
                Some(marker) => Cell::from(marker).style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Cell::from(""),
            };

            Row::new(vec![
                Cell::from(card.time_ago.as_str()).style(Style::default().fg(Color::DarkGray)),
                source,
                Cell::from(card.wallet.as_str()),
                Cell::from(card.token.as_str()).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(card.narrative.as_str()),
                Cell::from(card.value.as_str()).style(Style::default().fg(Color::Green)),
                Cell::from(format!(" {} ", card.conviction))
                    .style(conviction_style(card.conviction_tier())),
            ])
            .height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Percentage(22),
                Constraint::Length(8),
                Constraint::Percentage(20),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(Self::block(
            &format!(" 🐋 Smart Money Alerts ({}) ", cards.len()),
            Color::Cyan,
        ));

        frame.render_widget(table, area);
    }

    fn block(title: &str, border: Color) -> Block<'static> {
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
    }
}

/// Badge colour per conviction tier. Low and unrecognised text stay unstyled.
pub fn conviction_style(tier: Option<Conviction>) -> Style {
    let base = Style::default().fg(Color::White);
    match tier {
        Some(Conviction::High) => base.bg(Color::Magenta),
        Some(Conviction::Medium) => base.bg(Color::Blue),
        Some(Conviction::Low) | None => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conviction_style_per_tier() {
        assert_eq!(conviction_style(Some(Conviction::High)).bg, Some(Color::Magenta));
        assert_eq!(conviction_style(Some(Conviction::Medium)).bg, Some(Color::Blue));
        assert_eq!(conviction_style(Some(Conviction::Low)), Style::default());
        assert_eq!(conviction_style(None), Style::default());
    }
}
