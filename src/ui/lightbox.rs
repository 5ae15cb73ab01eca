use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components;

/// Fullscreen image viewer
pub fn render_lightbox(frame: &mut Frame, app: &App) {
    let Some(viewer) = &app.lightbox else {
        return;
    };
    let Some(image) = viewer.current() else {
        return;
    };

    let area = frame.area();
    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " × Esc ",
            Style::default().fg(Color::DarkGray),
        ))
        .title_alignment(Alignment::Right)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    if let Some(indicator) = viewer.indicator() {
        block = block.title_bottom(components::indicator_line(&indicator));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, body, drag] = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled("‹   ", Style::default().fg(Color::Yellow)),
            Span::styled(
                image.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ›", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "drag sideways or use ←→",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    let offset = viewer.gesture_offset();
    if offset != 0 {
        frame.render_widget(
            Paragraph::new(format!("{:+} px", offset))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            drag,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_lightbox_shows_position() {
        let mut app = sample_app();
        app.open_lightbox(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()], 1);
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render_lightbox(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("2 / 3"));
        assert!(text.contains("b.jpg"));
    }

    #[test]
    fn test_closed_lightbox_draws_nothing() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| render_lightbox(frame, &app)).unwrap();
        assert!(screen_text(&terminal).trim().is_empty());
    }
}
