//! Form rendering module
//!
//! Forms are drawn from their runtime state, so both the search form and the
//! add-book form go through `draw_form`.

mod field_renderer;

use crate::app::App;
use crate::platform;
use crate::state::Form;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw a form with its fields, submit control and key help
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App, form: &Form) {
    let border_color = if form.is_submitting() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    if form.submit.is_some() {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, form.active_field_index == idx);
    }

    if let Some(button) = &form.submit {
        let button_area = Rect {
            width: chunks[form.fields.len()].width.min(24),
            ..chunks[form.fields.len()]
        };
        render_submit_button(
            frame,
            button_area,
            button,
            form.is_submit_focused(),
            app.state.spinner_glyph(),
        );
    }

    if let Some(help_area) = chunks.last() {
        draw_help_text(frame, *help_area, &platform::form_help());
    }
}
