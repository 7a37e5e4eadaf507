//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Form(kind) => forms::draw_form(frame, main_area, app, app.state.form(kind)),
        View::Submitted(_) => submitted::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Draw error dialog overlay if there's an error
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.error_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;
    use crate::state::FormKind;
    use crate::submit::{MockSubmitter, Navigation};
    use crate::validation::FormValidator;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(FormsConfig::default(), Box::new(MockSubmitter::new())).unwrap()
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_search_form_renders_fields() {
        let screen = render(&app());
        assert!(screen.contains("Search Books"));
        assert!(screen.contains("Search by"));
        assert!(screen.contains("< Select... >"));
        assert!(screen.contains("Search"));
    }

    #[test]
    fn test_invalid_field_shows_error_text() {
        let mut app = app();
        FormValidator::validate_search_form(&mut app.state.search_form);
        let screen = render(&app);
        assert!(screen.contains("Please select a search type"));
        assert!(screen.contains("Search query must be at least 2 characters"));
    }

    #[test]
    fn test_loading_button_shows_processing() {
        let mut app = app();
        app.state.current_view = View::Form(FormKind::AddBook);
        FormValidator::show_loading(&mut app.state.add_book_form);
        let screen = render(&app);
        assert!(screen.contains("Processing..."));
    }

    #[test]
    fn test_result_page_shows_request() {
        let mut app = app();
        app.state.last_navigation = Some(Navigation {
            form_id: "searchForm".to_string(),
            method: crate::state::FormMethod::Get,
            url: "http://localhost:8080/books?searchType=title&searchQuery=Dune".to_string(),
            body: None,
            fields: vec![("searchQuery".to_string(), "Dune".to_string())],
        });
        app.state.current_view = View::Submitted(FormKind::Search);
        let screen = render(&app);
        assert!(screen.contains("GET http://localhost:8080/books?searchType=title"));
        assert!(screen.contains("Esc: back"));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = app();
        app.push_error("connection refused");
        let screen = render(&app);
        assert!(screen.contains("Submission failed"));
        assert!(screen.contains("connection refused"));
    }
}
