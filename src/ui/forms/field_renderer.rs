//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use crate::validation::FieldError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a boxed field plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Rows taken by the checkbox plus its error line
pub const CHECKBOX_HEIGHT: u16 = 2;

fn accent(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a boxed text or select field with its inline error below
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let display_value = field.display_value();
    let mut spans = Vec::new();

    if display_value.is_empty() && !is_active {
        spans.push(Span::styled(
            field.name.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else if matches!(field.value, FieldValue::Select(_)) {
        let value = if display_value.is_empty() {
            field.name.placeholder().to_string()
        } else {
            display_value
        };
        if is_active {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(value));
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::raw(value));
        }
    } else {
        spans.push(Span::raw(display_value));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(accent(is_active, error.is_some()));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);
    draw_error(frame, chunks[1], error);
}

/// Draw a single-line checkbox with its inline error below
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let marker = if is_active { "› " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(field.display_value(), accent(is_active, error.is_some())),
        Span::raw(" "),
        Span::raw(field.label()),
    ]);

    frame.render_widget(Paragraph::new(line), chunks[0]);
    draw_error(frame, chunks[1], error);
}

fn draw_error(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, area);
    }
}
