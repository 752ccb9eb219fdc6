//! Dashboard widget: property details on the left, estimate on the right

use super::state::{DashboardState, Estimate, Field};
use crate::output::money::{format_lakhs, format_rupees};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const ACCENT: Color = Color::Rgb(255, 75, 75);

pub struct DashboardWidget<'a> {
    state: &'a DashboardState,
}

impl<'a> DashboardWidget<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }

    fn field_value(&self, field: Field) -> String {
        match field {
            Field::TotalSqft => self.state.sqft.to_string(),
            Field::Bhk => self.state.bhk.to_string(),
            Field::Bath => self.state.bath.to_string(),
            Field::Location => {
                let (position, total) = self.state.location_position();
                format!("{}  ({}/{})", self.state.location(), position, total)
            }
        }
    }

    fn details(&self) -> Paragraph<'a> {
        let mut lines = Vec::new();
        for field in Field::ALL {
            let focused = self.state.focus == field;
            let label_style = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let value = if focused {
                format!("◀ {} ▶", self.field_value(field))
            } else {
                format!("  {}  ", self.field_value(field))
            };
            lines.push(Line::from(Span::styled(field.label(), label_style)));
            lines.push(Line::from(value));
            lines.push(Line::default());
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Property Details "),
        )
    }

    fn estimate(&self) -> Paragraph<'a> {
        let lines = match &self.state.estimate {
            None => vec![
                Line::default(),
                Line::from("Press Enter to predict the price").alignment(Alignment::Center),
            ],
            Some(Estimate::Price { price, source }) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Prediction Complete!",
                        Style::default().fg(Color::Green),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        format_lakhs(*price),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("≈ {}", format_rupees(*price)),
                        Style::default().fg(Color::Gray),
                    )),
                ];
                if source.is_fallback() {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        "Model unavailable: heuristic estimate",
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines
                    .into_iter()
                    .map(|line| line.alignment(Alignment::Center))
                    .collect()
            }
            Some(Estimate::Unusual { price }) => vec![
                Line::from(Span::styled(
                    "The prediction seems unusual. Please verify your inputs.",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(format!("Raw estimate: {}", format_lakhs(*price))),
            ],
            Some(Estimate::Error(message)) => vec![
                Line::from(Span::styled(
                    format!("Error making prediction: {}", message),
                    Style::default().fg(Color::Red),
                )),
                Line::from("Tip: make sure you selected a valid location."),
            ],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Predicted Price "),
            )
    }
}

impl<'a> Widget for DashboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Paragraph::new(Line::from(Span::styled(
            "Bangalore House Price Predictor",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
        .render(rows[0], buf);

        self.details().render(columns[0], buf);
        self.estimate().render(columns[1], buf);

        Paragraph::new("↑/↓ field  ←/→ adjust  PgUp/PgDn jump  Enter predict  q quit")
            .style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .render(rows[2], buf);
    }
}
