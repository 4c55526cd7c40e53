//! Contact form rendering

use super::field_renderer::{draw_error_indicator, draw_field};
use crate::app::App;
use crate::state::{ContactForm, FieldName};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single-line input (borders + one text row)
const INPUT_HEIGHT: u16 = 3;

/// Row heights for the form body: input and indicator row per field, then
/// the submit button and the help line.
///
/// Space is handed out in priority order so that error indicators are the
/// last thing to disappear on a short terminal: indicators, single-line
/// inputs, button, help, and finally the message input takes the rest.
fn row_heights(form: &ContactForm, available: u16) -> Vec<u16> {
    let field_count = FieldName::ALL.len();
    let button_row = field_count * 2;
    let help_row = button_row + 1;
    let mut heights = vec![0u16; help_row + 1];
    let mut remaining = available;
    let mut take = |wanted: u16| {
        let granted = wanted.min(remaining);
        remaining -= granted;
        granted
    };

    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        heights[index * 2 + 1] = take(u16::from(form.errors().get(name).is_some()));
    }
    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        if !form.field(name).is_multiline {
            heights[index * 2] = take(INPUT_HEIGHT);
        }
    }
    heights[button_row] = take(BUTTON_HEIGHT);
    heights[help_row] = take(1);
    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        if form.field(name).is_multiline {
            heights[index * 2] = take(u16::MAX);
        }
    }
    heights
}

/// Draw the four inputs, their error indicators and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    // Each field gets an input row and an indicator row that collapses to
    // zero height while the field is valid
    let inner_height = area.height.saturating_sub(2);
    let constraints: Vec<Constraint> = row_heights(form, inner_height)
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Your Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[index * 2],
            form.field(name),
            form.active_field_index == index,
        );
        if let Some(error) = form.errors().get(name) {
            draw_error_indicator(frame, chunks[index * 2 + 1], error);
        }
    }

    let button_row = FieldName::ALL.len() * 2;
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(chunks[button_row])[0];
    render_button(frame, button_area, "Submit", form.is_submit_active());

    draw_help_text(frame, chunks[button_row + 1], app);
}

fn draw_help_text(frame: &mut Frame, area: Rect, app: &App) {
    let enter_hint = if app.form.is_submit_active() {
        ": submit  "
    } else if app.form.is_active_field_multiline() {
        ": new line  "
    } else {
        ": next field  "
    };

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(enter_hint),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
