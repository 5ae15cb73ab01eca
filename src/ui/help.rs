use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{components, layout};

pub fn render_help_view(f: &mut Frame) {
    let [header, body, footer] = layout::framed_areas(f.area());

    components::render_view_header(f, header, "Help", Vec::new());
    render_help_body(f, body);
    components::render_navigation_footer(f, footer, "HELP", &[("Esc", "close")], &[]);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("  {}", title),
        Style::default().fg(Color::Cyan),
    )])
}

fn binding(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Yellow)),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        section("Browse"),
        Line::from(""),
        binding("Tab", "Next section (Shift+Tab: previous)"),
        binding("1-6", "Jump to section"),
        binding("← →", "Previous / next card, stops auto-advance"),
        binding("a", "Toggle auto-advance"),
        binding("t", "Switch upcoming / past events"),
        binding("Enter", "Open card, gallery or partner link"),
        binding("Mouse", "Hovering a carousel pauses it"),
        Line::from(""),
        section("Details and fullscreen"),
        Line::from(""),
        binding("← →", "Previous / next image"),
        binding("Enter", "Open image fullscreen"),
        binding("Drag", "Swipe images in fullscreen"),
        binding("Esc", "Back"),
        Line::from(""),
        section("Global"),
        Line::from(""),
        binding("?", "This help"),
        binding("q", "Quit (Ctrl+C anywhere)"),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
