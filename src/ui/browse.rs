use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::app::{App, Section};
use crate::navigator::Navigator;
use crate::ui::{cards, components, layout};

const CARD_WIDTH: u16 = 34;
const RIBBON_GAP: &str = "   ◆   ";

pub fn render_browse_view(frame: &mut Frame, app: &App) {
    let areas = layout::browse_areas(frame.area());

    render_header(frame, app, areas.header);
    render_tabs(frame, app, areas.tabs);
    render_carousel(frame, app, areas.carousel);
    render_footer(frame, app, areas.footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let section = app.active_section();
    let extra = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("{} · {}", section.title(), section_count(app, section)),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    components::render_view_header(frame, area, "Chapter", extra);

    if let Some(message) = app.status_toast_message() {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        components::render_status_toast(frame, inner, message);
    }
}

fn section_count(app: &App, section: Section) -> usize {
    match section {
        Section::Team => app.team.len(),
        Section::Projects => app.projects.len(),
        Section::Events => app.upcoming_events.len() + app.past_events.len(),
        Section::Alumni => app.alumni.len(),
        Section::Gallery => app.gallery.len(),
        Section::Partners => app.partners.len(),
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .sections
        .items()
        .iter()
        .enumerate()
        .map(|(index, section)| Line::from(format!("{} {}", index + 1, section.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.sections.current_index().unwrap_or(0))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tabs, area);
}

fn render_carousel(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_section() {
        Section::Team => render_card_strip(
            frame,
            area,
            "Team",
            &app.team,
            "No team members listed.",
            cards::member_lines,
        ),
        Section::Projects => render_card_strip(
            frame,
            area,
            "Projects",
            &app.projects,
            "No projects yet.",
            cards::project_lines,
        ),
        Section::Events => {
            let title = format!("Events: {} (t to switch)", app.events_tab.title());
            render_card_strip(
                frame,
                area,
                &title,
                app.events(),
                app.events_tab.empty_message(),
                cards::event_lines,
            );
        }
        Section::Alumni => render_card_strip(
            frame,
            area,
            "Alumni",
            &app.alumni,
            "No alumni listed.",
            cards::alumnus_lines,
        ),
        Section::Gallery => render_card_strip(
            frame,
            area,
            "Gallery",
            &app.gallery,
            "The gallery is empty.",
            cards::gallery_lines,
        ),
        Section::Partners => render_ribbon(frame, app, area),
    }
}

fn timer_label<T>(navigator: &Navigator<T>) -> &'static str {
    if navigator.is_suspended() {
        " paused"
    } else if navigator.is_auto_advancing() {
        " auto"
    } else {
        ""
    }
}

/// Lays cards out left to right starting at the current item, wrapping around
fn render_card_strip<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    navigator: &Navigator<T>,
    empty_message: &str,
    lines_for: fn(&T, usize, bool) -> Vec<Line<'static>>,
) {
    let Some(current) = navigator.current_index() else {
        components::render_empty(frame, area, title, empty_message);
        return;
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}{}", title, timer_label(navigator)))
        .border_style(Style::default().fg(Color::Cyan));
    if let Some(indicator) = navigator.indicator() {
        block = block.title_bottom(components::indicator_line(&indicator));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = usize::from((inner.width / CARD_WIDTH).max(1));
    let shown = slots.min(navigator.len());
    let columns = Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); shown]).split(inner);
    let items = navigator.items();

    for (offset, column) in columns.iter().enumerate() {
        let index = (current + offset) % items.len();
        let Some(item) = items.get(index) else {
            continue;
        };
        let active = offset == 0;
        let border_color = if active { Color::Magenta } else { Color::DarkGray };
        let text_width = usize::from(column.width.saturating_sub(2));
        let card = Paragraph::new(lines_for(item, text_width, active))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(card, *column);
    }
}

/// Scrolling strip of partner names with the current partner's link below
fn render_ribbon(frame: &mut Frame, app: &App, area: Rect) {
    let ribbon = &app.partners;
    if ribbon.is_empty() {
        components::render_empty(frame, area, "Partners", "No partners listed.");
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Partners & Collaborators{}", timer_label(ribbon)))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One slide per partner, so the filmstrip offset selects the lead partner
    let lead = ribbon.offset_percent().unwrap_or(0) / 100;
    let partners = ribbon.items();
    let mut spans = Vec::new();
    let mut used = 0usize;
    let width = usize::from(inner.width);
    let mut step = 0usize;
    while used < width && step < partners.len() * 2 {
        let index = (lead + step) % partners.len();
        if let Some(partner) = partners.get(index) {
            let style = if step == 0 {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            used += partner.name.chars().count() + RIBBON_GAP.chars().count();
            spans.push(Span::styled(partner.name.clone(), style));
            spans.push(Span::styled(RIBBON_GAP, Style::default().fg(Color::DarkGray)));
        }
        step += 1;
    }

    let link = ribbon
        .current()
        .map(|partner| partner.website_url.clone())
        .unwrap_or_default();
    let lines = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(link, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let section = app.active_section();
    let mut keybindings = vec![("Tab", "section"), ("←→", "move"), ("Enter", "open")];
    if section == Section::Events {
        keybindings.push(("t", "upcoming/past"));
    }
    if section.is_scroller() {
        keybindings.push(("a", "auto"));
    }
    keybindings.push(("?", "help"));
    keybindings.push(("q", "quit"));

    let auto = match section {
        Section::Team => app.team.is_auto_advancing(),
        Section::Projects => app.projects.is_auto_advancing(),
        Section::Events => app.events().is_auto_advancing(),
        Section::Alumni => app.alumni.is_auto_advancing(),
        Section::Gallery => app.gallery.is_auto_advancing(),
        Section::Partners => app.partners.is_auto_advancing(),
    };

    components::render_navigation_footer(frame, area, "BROWSE", &keybindings, &[("AUTO", auto)]);
}
