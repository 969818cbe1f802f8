//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, summary_area) = layout::create_layout(frame.area());

    forms::draw_signup(frame, form_area, app);
    summary::draw(frame, summary_area, app);

    layout::draw_status_bar(frame, app);
}
