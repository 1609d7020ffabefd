use crate::ui::app::App;
use crate::ui::footer::footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer_area) = layout_regions(area);

    let busy = app.form().state().is_loading();
    frame.render_widget(Header::new(app.endpoint(), busy).widget(), header);

    frame.render_widget(Clear, body);
    render_form(frame, body, app.form(), app.focus(), app.animation_tick());

    frame.render_widget(footer(app.focus()), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExchangeOutcome, Mode};
    use crate::config::FormDefaults;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn abstractive_form_hides_length_field() {
        let app = App::new(
            &FormDefaults {
                mode: Mode::Abstractive,
                length: 3,
            },
            "http://127.0.0.1:5000/summarize",
        );
        let screen = render(&app);
        assert!(screen.contains("0 / 2000 characters"));
        assert!(screen.contains("[ Summarize ]"));
        assert!(!screen.contains("Sentences"));
    }

    #[test]
    fn extractive_form_shows_length_field() {
        let app = App::new(
            &FormDefaults {
                mode: Mode::Extractive,
                length: 3,
            },
            "http://127.0.0.1:5000/summarize",
        );
        assert!(render(&app).contains("Sentences"));
    }

    #[test]
    fn summary_is_drawn_in_output_panel() {
        let mut app = App::new(
            &FormDefaults {
                mode: Mode::Extractive,
                length: 2,
            },
            "http://127.0.0.1:5000/summarize",
        );
        app.on_paste("Hello world");
        app.submit().expect("request issued");
        assert!(render(&app).contains("[ Summarizing... ]"));

        app.on_exchange_complete(ExchangeOutcome::Summary("Hello.".into()));
        let screen = render(&app);
        assert!(screen.contains("Summary (Extractive Mode):"));
        assert!(screen.contains("Hello."));
        assert!(screen.contains("[ Summarize ]"));
    }

    #[test]
    fn footer_follows_focus() {
        let mut app = App::new(&FormDefaults::default(), "http://127.0.0.1:5000/summarize");
        assert!(render(&app).contains("Enter: New line"));

        app.focus_prev();
        let screen = render(&app);
        assert!(screen.contains("Enter/Space: Summarize"));
        assert!(!screen.contains("Enter: New line"));
    }
}
