//! Submitted data panel

use crate::state::{FieldName, SubmittedData};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows shown for a submission, in display order.
///
/// The message row is only present when a non-empty message was submitted.
pub fn submitted_rows(data: &SubmittedData) -> Vec<(FieldName, &str)> {
    let mut rows = vec![
        (FieldName::FirstName, data.first_name.as_str()),
        (FieldName::LastName, data.last_name.as_str()),
        (FieldName::Email, data.email.as_str()),
    ];
    if let Some(message) = data.message_display() {
        rows.push((FieldName::Message, message));
    }
    rows
}

/// Draw the last successful submission, or a placeholder
pub fn draw(frame: &mut Frame, area: Rect, data: Option<&SubmittedData>) {
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(data) = data else {
        let placeholder = Paragraph::new("(nothing submitted yet)")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (name, value) in submitted_rows(data) {
        let label = format!("{}: ", name.label());
        let indent = " ".repeat(label.len());
        let mut value_lines = value.split('\n');
        let first = value_lines.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(first),
        ]));
        for rest in value_lines {
            lines.push(Line::from(vec![Span::raw(indent.clone()), Span::raw(rest)]));
        }
    }

    let submitted_at = data.submitted_at.with_timezone(&Local).format("%H:%M:%S");
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("at {submitted_at}"),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
