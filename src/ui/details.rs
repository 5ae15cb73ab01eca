use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, DetailView};
use crate::content::Card;
use crate::ui::{components, utils};

pub fn render_details_view(frame: &mut Frame, app: &App) {
    let Some(view) = &app.details else {
        return;
    };

    let popup = utils::centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", view.card.title()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [gallery, text, footer] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(inner);

    render_gallery(frame, view, gallery);
    frame.render_widget(
        Paragraph::new(card_text(&view.card)).wrap(Wrap { trim: true }),
        text,
    );
    components::render_navigation_footer(
        frame,
        footer,
        "DETAILS",
        &[("←→", "image"), ("Enter", "fullscreen"), ("Esc", "back")],
        &[],
    );
}

/// Inline image strip; arrows and counter only appear with more than one image
fn render_gallery(frame: &mut Frame, view: &DetailView, area: Rect) {
    let gallery = &view.gallery;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    if gallery.len() > 1
        && let Some(indicator) = gallery.indicator()
    {
        block = block.title_bottom(components::indicator_line(&indicator));
    }

    let image = gallery.current().cloned().unwrap_or_default();
    let line = if gallery.len() > 1 {
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Yellow)),
            Span::styled(image, Style::default().fg(Color::White)),
            Span::styled(" ›", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled(image, Style::default().fg(Color::White)))
    };

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), line])
            .alignment(ratatui::layout::Alignment::Center)
            .block(block),
        area,
    );
}

fn label(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn paragraph(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    ))
}

fn card_text(card: &Card) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match card {
        Card::Member(member) => {
            lines.push(label("Role", member.role.clone()));
            lines.push(label("Department", member.department.clone()));
            if !member.expertise.is_empty() {
                lines.push(label("Expertise", member.expertise.join(", ")));
            }
            if let Some(link) = &member.link {
                lines.push(label("Profile", link.clone()));
            }
            lines.push(Line::from(""));
            lines.push(paragraph(&member.bio));
        }
        Card::Project(project) => {
            lines.push(label("Category", project.category.clone()));
            lines.push(label("Year", project.year.clone()));
            lines.push(label("Status", project.status.clone()));
            if !project.technologies.is_empty() {
                lines.push(label("Technologies", project.technologies.join(", ")));
            }
            if !project.team_members.is_empty() {
                lines.push(label("Team", project.team_members.join(", ")));
            }
            lines.push(Line::from(""));
            lines.push(paragraph(&project.description));
        }
        Card::Event(event) => {
            lines.push(label(
                "When",
                format!("{} {}", event.date.format("%A, %d %B %Y"), event.time),
            ));
            lines.push(label("Where", event.location.clone()));
            if !event.category.is_empty() {
                lines.push(label("Category", event.category.clone()));
            }
            if event.capacity > 0 {
                lines.push(label(
                    "Seats",
                    format!("{} / {} registered", event.registered, event.capacity),
                ));
            }
            lines.push(Line::from(""));
            lines.push(paragraph(&event.description));
        }
        Card::Alumnus(alumnus) => {
            lines.push(label("Class of", alumnus.year.to_string()));
            lines.push(label("Now", alumnus.current_role.clone()));
            if let Some(link) = &alumnus.link {
                lines.push(label("Profile", link.clone()));
            }
            lines.push(Line::from(""));
            lines.push(paragraph(&format!("\u{201c}{}\u{201d}", alumnus.quote)));
        }
    }
    lines
}
