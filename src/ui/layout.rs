//! Layout components (header tabs, status bar)

use crate::app::App;
use crate::platform::QUIT_SHORTCUT;
use crate::state::{FormKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TABS: [FormKind; 2] = [FormKind::Search, FormKind::AddBook];

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw one tab per form, highlighting the current one
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_view.form_kind();
    let mut spans = vec![Span::styled(
        " Fulkoping Library ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    for kind in TABS {
        let style = if kind == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.state.pending_navigation.is_some() {
        spans.push(Span::styled(
            format!(" {} submitting ", app.state.spinner_glyph()),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let quit_area = Rect {
            x: area.x + area.width - hint_width,
            width: hint_width,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Form(kind) => format!("{}  F2:{}", kind.label(), kind.toggle().label()),
        View::Submitted(_) => "Esc:back  n:new  q:quit".to_string(),
    }
}
