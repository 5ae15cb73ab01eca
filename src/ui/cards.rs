use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Alumnus, Event, GalleryItem, Project, TeamMember, first_image};
use crate::ui::utils::truncate_to_width;

fn heading(text: &str, width: usize, active: bool) -> Line<'static> {
    let color = if active { Color::Magenta } else { Color::White };
    Line::from(Span::styled(
        truncate_to_width(text, width),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn detail(text: &str, width: usize, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        truncate_to_width(text, width),
        Style::default().fg(color),
    ))
}

fn body(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    ))
}

pub fn member_lines(member: &TeamMember, width: usize, active: bool) -> Vec<Line<'static>> {
    vec![
        heading(&member.name, width, active),
        detail(&member.role, width, Color::Cyan),
        detail(&member.department, width, Color::DarkGray),
        Line::from(""),
        body(&member.bio),
    ]
}

pub fn project_lines(project: &Project, width: usize, active: bool) -> Vec<Line<'static>> {
    let meta = [project.category.as_str(), project.year.as_str(), project.status.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    vec![
        heading(&project.title, width, active),
        detail(&meta, width, Color::Cyan),
        Line::from(""),
        body(&project.description),
    ]
}

pub fn event_lines(event: &Event, width: usize, active: bool) -> Vec<Line<'static>> {
    let when = format!("{} {}", event.date.format("%d %b %Y"), event.time);
    let mut lines = vec![
        heading(&event.title, width, active),
        detail(when.trim(), width, Color::Cyan),
    ];
    if !event.location.is_empty() {
        lines.push(detail(&event.location, width, Color::DarkGray));
    }
    if event.capacity > 0 {
        let seats = format!("{} / {} registered", event.registered, event.capacity);
        lines.push(detail(&seats, width, Color::Yellow));
    }
    lines.push(Line::from(""));
    lines.push(body(&event.description));
    lines
}

pub fn alumnus_lines(alumnus: &Alumnus, width: usize, active: bool) -> Vec<Line<'static>> {
    let class = format!("Class of {}", alumnus.year);
    vec![
        heading(&alumnus.name, width, active),
        detail(&alumnus.current_role, width, Color::Cyan),
        detail(&class, width, Color::DarkGray),
        Line::from(""),
        body(&format!("\u{201c}{}\u{201d}", alumnus.quote)),
    ]
}

pub fn gallery_lines(item: &GalleryItem, width: usize, active: bool) -> Vec<Line<'static>> {
    let count = match item.images.len() {
        1 => "1 image".to_string(),
        count => format!("{} images", count),
    };
    vec![
        heading(&item.title, width, active),
        detail(&item.description, width, Color::Cyan),
        detail(&count, width, Color::Yellow),
        Line::from(""),
        detail(first_image(&item.images), width, Color::DarkGray),
    ]
}
