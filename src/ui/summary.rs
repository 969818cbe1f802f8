//! Read-only view of the last accepted submission

use crate::app::App;
use crate::record::FormRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Summary lines for an accepted record. The password is never shown.
pub fn summary_lines(record: &FormRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Username", record.username.clone()),
        ("Email", record.email.clone()),
        ("Role", record.role.label().to_string()),
        (
            "Agreed to Terms",
            if record.agree_to_terms { "Yes" } else { "No" }.to_string(),
        ),
    ]
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.controller.accepted() {
        Some(record) => summary_lines(record)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("• {label}: "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Nothing submitted yet.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
