use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions of the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub carousel: Rect,
    pub footer: Rect,
}

/// Splits the terminal for the browse view.
///
/// Shared with the mouse handler so hover hit-testing matches what is drawn.
#[must_use]
pub fn browse_areas(area: Rect) -> BrowseAreas {
    let [header, tabs, carousel, footer] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Section tabs
        Constraint::Min(0),    // Carousel
        Constraint::Length(3), // Footer
    ])
    .areas(area);

    BrowseAreas {
        header,
        tabs,
        carousel,
        footer,
    }
}

/// Regions of a view with only a header, body and footer
#[must_use]
pub fn framed_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area)
}

#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
