mod browse;
mod details;
mod help;
mod lightbox;
mod navigation;
mod types;

pub use navigation::Carousel;
pub use types::*;

use crate::config::NavigatorConfig;
use crate::content::{Alumnus, Event, GalleryItem, Partner, Project, SiteContent, TeamMember};
use crate::navigator::{Navigator, NavigatorOptions};
use chrono::NaiveDateTime;
use std::time::{Duration, Instant};

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Details,
    Lightbox,
    Help,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub previous_mode: Option<AppMode>,
    pub should_quit: bool,

    // Section carousels
    pub sections: Navigator<Section>,
    pub team: Navigator<TeamMember>,
    pub projects: Navigator<Project>,
    pub upcoming_events: Navigator<Event>,
    pub past_events: Navigator<Event>,
    pub events_tab: EventsTab,
    pub alumni: Navigator<Alumnus>,
    pub gallery: Navigator<GalleryItem>,
    pub partners: Navigator<Partner>,

    // Overlays
    pub details: Option<DetailView>,
    pub lightbox: Option<Navigator<String>>,

    pub pointer_over_carousel: bool,
    pub cell_width_px: i32,
    pub status_toast: Option<StatusToast>,
}

impl App {
    /// Builds every carousel from loaded content and starts their timers
    pub fn new(content: SiteContent, navigator: &NavigatorConfig, now: NaiveDateTime) -> Self {
        let scroller = NavigatorOptions::scroller(navigator.scroller_interval());
        let events = content.split_events(now);
        tracing::info!(
            upcoming = events.upcoming.len(),
            past = events.past.len(),
            "split events"
        );

        let mut app = Self {
            mode: AppMode::Browse,
            previous_mode: None,
            should_quit: false,
            sections: Navigator::with_items(Section::ALL.to_vec(), 0, NavigatorOptions::menu()),
            team: Navigator::with_items(content.team, 0, scroller),
            projects: Navigator::with_items(content.projects, 0, scroller),
            upcoming_events: Navigator::with_items(events.upcoming, 0, scroller),
            past_events: Navigator::with_items(events.past, 0, scroller),
            events_tab: EventsTab::default(),
            alumni: Navigator::with_items(content.alumni, 0, scroller),
            gallery: Navigator::with_items(content.gallery, 0, NavigatorOptions::gallery()),
            partners: Navigator::with_items(
                content.partners,
                0,
                NavigatorOptions::ribbon(navigator.ribbon_interval()),
            ),
            details: None,
            lightbox: None,
            pointer_over_carousel: false,
            cell_width_px: navigator.cell_width(),
            status_toast: None,
        };
        app.mount_carousels();
        app
    }

    fn mount_carousels(&mut self) {
        self.team.mount();
        self.projects.mount();
        self.upcoming_events.mount();
        self.past_events.mount();
        self.alumni.mount();
        self.gallery.mount();
        self.partners.mount();
    }

    /// Advances every timer-driven carousel that fell due
    pub fn tick(&mut self, now: Instant) {
        self.team.tick(now);
        self.projects.tick(now);
        self.upcoming_events.tick(now);
        self.past_events.tick(now);
        self.alumni.tick(now);
        self.partners.tick(now);
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.sections.current().copied().unwrap_or(Section::Team)
    }

    /// Controls for the carousel currently on screen in browse mode
    pub fn active_carousel(&mut self) -> &mut dyn Carousel {
        match self.active_section() {
            Section::Team => &mut self.team,
            Section::Projects => &mut self.projects,
            Section::Events => match self.events_tab {
                EventsTab::Upcoming => &mut self.upcoming_events,
                EventsTab::Past => &mut self.past_events,
            },
            Section::Alumni => &mut self.alumni,
            Section::Gallery => &mut self.gallery,
            Section::Partners => &mut self.partners,
        }
    }

    #[must_use]
    pub fn events(&self) -> &Navigator<Event> {
        match self.events_tab {
            EventsTab::Upcoming => &self.upcoming_events,
            EventsTab::Past => &self.past_events,
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }

    pub(crate) fn enter_mode(&mut self, mode: AppMode) {
        if self.mode != mode {
            self.previous_mode = Some(self.mode);
            self.mode = mode;
        }
    }
}
