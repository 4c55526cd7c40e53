//! Screen layout, header and status bar

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the submitted data panel
const SUBMITTED_PANEL_WIDTH: u16 = 36;

/// Areas of the screen
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub submitted: Rect,
    pub status: Rect,
}

/// Split the frame into header, form, submitted panel and status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                       // Form
            Constraint::Length(SUBMITTED_PANEL_WIDTH), // Submitted panel
        ])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        form: body[0],
        submitted: body[1],
        status: rows[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Contact Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, area);
}

/// Draw the status bar with key hints and the latest status
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Tab", key_style),
        Span::raw(" move  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(" submit  "),
        Span::styled(crate::platform::COPY_SHORTCUT, key_style),
        Span::raw(" copy  "),
        Span::styled("Esc", key_style),
        Span::raw(" quit"),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.error_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
