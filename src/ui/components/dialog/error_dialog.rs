//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front of the error queue as a modal overlay
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, pending: usize) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ];
    if pending > 1 {
        hint.push(Span::styled(
            format!(" ({} more)", pending - 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Submission failed",
            color: Color::Red,
            message: error_message,
            hint,
            max_width: 60,
        },
    );
}
