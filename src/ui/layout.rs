//! Layout components (form/summary split, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, RELOAD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::record::FieldName;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form (left) and summary (right), reserving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(36), // Summary panel
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Persistence mode
    let storage = if app.persist {
        Span::styled(" ● saved ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ local ", Style::default().fg(Color::Yellow))
    };
    spans.push(storage);

    if app.controller.phase() == FormPhase::Accepted {
        spans.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }

    let hints = get_field_hints(app.controller.form().active_field_name());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        let color = if app.controller.errors().is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the focused field
fn get_field_hints(active: Option<FieldName>) -> String {
    let common = format!(
        "{SUBMIT_SHORTCUT}:submit  {RELOAD_SHORTCUT}:revert  {CLEAR_SHORTCUT}:forget  Esc:quit"
    );
    match active {
        Some(FieldName::Role) => format!("Tab:next  ←/→:choose  {common}"),
        Some(FieldName::AgreeToTerms) => format!("Tab:next  Space:toggle  {common}"),
        Some(_) => format!("Tab:next  {common}"),
        None => format!("Tab:next  Enter:submit  {common}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_depend_on_focus() {
        assert!(get_field_hints(Some(FieldName::Role)).contains("choose"));
        assert!(get_field_hints(Some(FieldName::AgreeToTerms)).contains("toggle"));
        assert!(get_field_hints(None).contains("Enter:submit"));
        assert!(get_field_hints(Some(FieldName::Email)).contains(SUBMIT_SHORTCUT));
    }

    #[test]
    fn test_layout_reserves_status_line() {
        let (form, summary) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(form.height, 29);
        assert!(form.width >= 40);
        assert_eq!(form.width + summary.width, 100);
    }
}
