//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    forms::draw_contact_form(frame, areas.form, app);
    submitted::draw(frame, areas.submitted, app.form.submitted());
    layout::draw_status_bar(frame, areas.status, app);
}
