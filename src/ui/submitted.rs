//! Result page shown once a form has been submitted

use crate::app::App;
use crate::platform;
use crate::submit::Navigation;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the request the submitted form resulted in
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = match &app.state.last_navigation {
        Some(navigation) => navigation_lines(navigation),
        None => vec![Line::from("Nothing submitted yet")],
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        platform::submitted_help(),
        Style::default().fg(Color::DarkGray),
    )));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(content, area);
}

fn navigation_lines(navigation: &Navigation) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                navigation.method.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(navigation.url.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    if let Some(body) = &navigation.body {
        lines.push(Line::from(vec![
            Span::styled("Body: ", label),
            Span::raw(body.as_str()),
        ]));
        lines.push(Line::from(""));
    }

    for (name, value) in &navigation.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{name:>12}: "), label),
            Span::raw(value.as_str()),
        ]));
    }
    lines
}
