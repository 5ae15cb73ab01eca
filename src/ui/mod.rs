mod browse;
mod cards;
mod components;
mod details;
mod help;
pub mod layout;
mod lightbox;
mod utils;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Browse => browse::render_browse_view(f, app),
        AppMode::Details => {
            // Carousel stays visible behind the details popup
            browse::render_browse_view(f, app);
            details::render_details_view(f, app);
        }
        AppMode::Lightbox => lightbox::render_lightbox(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_browse_shows_active_card_and_indicator() {
        let app = sample_app();
        let text = draw(&app);
        assert!(text.contains("Dr. Krishna Vedula"));
        assert!(text.contains("1 / 4"));
    }

    #[test]
    fn test_empty_past_events_message() {
        let mut app = App::new(
            crate::content::SiteContent::default(),
            &crate::config::NavigatorConfig::default(),
            crate::app::tests::sample_now(),
        );
        app.select_section(2);
        let text = draw(&app);
        assert!(text.contains("No upcoming events scheduled."));
    }

    #[test]
    fn test_details_popup_renders_over_browse() {
        let mut app = sample_app();
        app.select_section(1);
        app.activate_current();
        let text = draw(&app);
        assert!(text.contains("Ceramic Water Filtration"));
        assert!(text.contains("DETAILS"));
    }
}
