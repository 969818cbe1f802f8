//! Sign-up form rendering

use super::field_renderer::{draw_checkbox, draw_field, CHECKBOX_HEIGHT, FIELD_HEIGHT};
use crate::app::App;
use crate::record::FieldName;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form fields and submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.controller.form();
    let errors = app.controller.errors();

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),    // Username
            Constraint::Length(FIELD_HEIGHT),    // Email
            Constraint::Length(FIELD_HEIGHT),    // Password
            Constraint::Length(FIELD_HEIGHT),    // Role
            Constraint::Length(CHECKBOX_HEIGHT), // Terms
            Constraint::Length(BUTTON_HEIGHT),   // Submit
            Constraint::Min(0),                  // Remaining space
        ])
        .margin(1)
        .split(area);

    for idx in 0..form.field_count() {
        // The submit row has no field
        let Some(field) = form.get_field(idx) else {
            continue;
        };
        let is_active = form.active_field_index == idx;
        let error = errors.get(field.name);
        if field.name == FieldName::AgreeToTerms {
            draw_checkbox(frame, chunks[idx], field, is_active, error);
        } else {
            draw_field(frame, chunks[idx], field, is_active, error);
        }
    }

    render_button(
        frame,
        chunks[5],
        "Submit",
        form.is_submit_row_active(),
        Color::Blue,
    );
}
