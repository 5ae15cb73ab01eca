use crate::content::Card;
use crate::navigator::Navigator;

/// Content sections, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Team,
    Projects,
    Events,
    Alumni,
    Gallery,
    Partners,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Team,
        Section::Projects,
        Section::Events,
        Section::Alumni,
        Section::Gallery,
        Section::Partners,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Team => "Team",
            Section::Projects => "Projects",
            Section::Events => "Events",
            Section::Alumni => "Alumni",
            Section::Gallery => "Gallery",
            Section::Partners => "Partners",
        }
    }

    /// Card carousels pause while hovered and hand over to the user on input
    #[must_use]
    pub fn is_scroller(self) -> bool {
        matches!(
            self,
            Section::Team | Section::Projects | Section::Events | Section::Alumni
        )
    }
}

/// Which half of the events list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsTab {
    #[default]
    Upcoming,
    Past,
}

impl EventsTab {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            EventsTab::Upcoming => EventsTab::Past,
            EventsTab::Past => EventsTab::Upcoming,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            EventsTab::Upcoming => "Upcoming",
            EventsTab::Past => "Past",
        }
    }

    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            EventsTab::Upcoming => "No upcoming events scheduled.",
            EventsTab::Past => "No past events to show.",
        }
    }
}

/// An opened card with its image gallery
#[derive(Debug, Clone)]
pub struct DetailView {
    pub card: Card,
    pub gallery: Navigator<String>,
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}
