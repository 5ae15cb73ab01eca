use chrono::NaiveDateTime;
use color_eyre::{Result, eyre::WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shown wherever a record has no images
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300/1f2937/FFFFFF?text=No+Image";

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

// ── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub department: String,
    pub bio: String,
    pub image: Option<String>,
    pub expertise: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
    pub year: String,
    pub technologies: Vec<String>,
    pub status: String,
    pub team_members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub registered: u32,
    #[serde(default)]
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Alumnus {
    pub name: String,
    pub year: u16,
    pub current_role: String,
    pub quote: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    pub website_url: String,
}

/// A record that can be opened in the details view
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    Member(TeamMember),
    Project(Project),
    Event(Event),
    Alumnus(Alumnus),
}

impl Card {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Card::Member(member) => &member.name,
            Card::Project(project) => &project.title,
            Card::Event(event) => &event.title,
            Card::Alumnus(alumnus) => &alumnus.name,
        }
    }

    /// Images to page through in the details view, never empty
    #[must_use]
    pub fn gallery(&self) -> Vec<String> {
        match self {
            Card::Member(member) => gallery_or_placeholder(member.image.as_slice()),
            Card::Project(project) => gallery_or_placeholder(&project.images),
            Card::Event(event) => gallery_or_placeholder(&event.images),
            Card::Alumnus(alumnus) => gallery_or_placeholder(alumnus.image.as_slice()),
        }
    }
}

// ── Site content ────────────────────────────────────────────────────────────

/// Everything the showcase renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteContent {
    pub team: Vec<TeamMember>,
    pub projects: Vec<Project>,
    pub events: Vec<Event>,
    pub alumni: Vec<Alumnus>,
    pub gallery: Vec<GalleryItem>,
    pub partners: Vec<Partner>,
}

/// Events partitioned around a point in time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventSplit {
    /// Soonest first
    pub upcoming: Vec<Event>,
    /// Most recent first
    pub past: Vec<Event>,
}

impl SiteContent {
    /// Reads content from `path`, or the bundled sample when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read content file {}", path.display()))?;
                Self::from_json(&contents)
                    .wrap_err_with(|| format!("Invalid content file {}", path.display()))
            }
            None => Self::from_json(BUNDLED_CONTENT).wrap_err("Bundled content is invalid"),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(contents)?;
        Ok(content)
    }

    /// Splits events into upcoming (`date >= now`) and past (`date < now`)
    #[must_use]
    pub fn split_events(&self, now: NaiveDateTime) -> EventSplit {
        let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) = self
            .events
            .iter()
            .cloned()
            .partition(|event| event.date >= now);
        upcoming.sort_by(|left, right| left.date.cmp(&right.date));
        past.sort_by(|left, right| right.date.cmp(&left.date));
        EventSplit { upcoming, past }
    }

    /// One-line summary of section sizes
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "team: {}, projects: {}, events: {}, alumni: {}, gallery: {}, partners: {}",
            self.team.len(),
            self.projects.len(),
            self.events.len(),
            self.alumni.len(),
            self.gallery.len(),
            self.partners.len()
        )
    }
}

/// First image of a list, or the placeholder
#[must_use]
pub fn first_image(images: &[String]) -> &str {
    images
        .iter()
        .map(String::as_str)
        .find(|image| !image.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Non-blank images of a list, or just the placeholder
#[must_use]
pub fn gallery_or_placeholder(images: &[String]) -> Vec<String> {
    let gallery: Vec<String> = images
        .iter()
        .filter(|image| !image.trim().is_empty())
        .cloned()
        .collect();
    if gallery.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn event(title: &str, date: NaiveDateTime) -> Event {
        Event {
            title: title.to_string(),
            description: String::new(),
            images: Vec::new(),
            category: String::new(),
            date,
            time: String::new(),
            location: String::new(),
            registered: 0,
            capacity: 0,
        }
    }

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::load(None).unwrap();
        assert!(!content.team.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.partners.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let content = SiteContent::from_json(r#"{ "team": [{ "name": "Priya Patel" }] }"#).unwrap();
        assert_eq!(content.team.len(), 1);
        assert!(content.team.first().is_some_and(|member| member.image.is_none()));
        assert!(content.events.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let content = SiteContent::from_json(
            r#"{
                "alumni": [{ "name": "Pawan", "year": 2022, "currentRole": "Student" }],
                "partners": [{ "name": "VNR VJIET", "websiteUrl": "https://www.vnrvjiet.ac.in/" }],
                "events": [{ "title": "Solstice", "date": "2025-10-15T19:00:00" }]
            }"#,
        )
        .unwrap();
        let alumnus = content.alumni.first().unwrap();
        assert_eq!(alumnus.current_role, "Student");
        let partner = content.partners.first().unwrap();
        assert_eq!(partner.website_url, "https://www.vnrvjiet.ac.in/");
        let event = content.events.first().unwrap();
        assert_eq!(event.date, at(2025, 10, 15) + chrono::Duration::hours(7));
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(SiteContent::from_json("{ \"team\": 3 }").is_err());
        assert!(SiteContent::load(Some(Path::new("/nonexistent/showcase.json"))).is_err());
    }

    #[test]
    fn test_split_events_orders_both_halves() {
        let content = SiteContent {
            events: vec![
                event("old", at(2023, 1, 1)),
                event("later", at(2027, 6, 1)),
                event("recent", at(2025, 5, 1)),
                event("soon", at(2026, 11, 1)),
            ],
            ..SiteContent::default()
        };
        let split = content.split_events(at(2026, 10, 16));
        let upcoming: Vec<&str> = split.upcoming.iter().map(|e| e.title.as_str()).collect();
        let past: Vec<&str> = split.past.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(upcoming, vec!["soon", "later"]);
        assert_eq!(past, vec!["recent", "old"]);
    }

    #[test]
    fn test_event_at_now_is_upcoming() {
        let now = at(2026, 10, 16);
        let content = SiteContent {
            events: vec![event("today", now)],
            ..SiteContent::default()
        };
        assert_eq!(content.split_events(now).upcoming.len(), 1);
    }

    #[test]
    fn test_image_fallbacks() {
        assert_eq!(first_image(&[]), PLACEHOLDER_IMAGE);
        assert_eq!(first_image(&[" ".to_string(), "b.png".to_string()]), "b.png");
        assert_eq!(gallery_or_placeholder(&[]), vec![PLACEHOLDER_IMAGE.to_string()]);

        let card = Card::Member(TeamMember::default());
        assert_eq!(card.gallery(), vec![PLACEHOLDER_IMAGE.to_string()]);
    }
}
