use crate::app::{App, Section};
use crate::content::{Card, gallery_or_placeholder};

impl App {
    pub fn next_section(&mut self) {
        self.leave_active_carousel();
        self.sections.step_forward();
        self.enter_active_carousel();
        tracing::debug!(section = self.active_section().title(), "section changed");
    }

    pub fn previous_section(&mut self) {
        self.leave_active_carousel();
        self.sections.step_backward();
        self.enter_active_carousel();
        tracing::debug!(section = self.active_section().title(), "section changed");
    }

    /// Jumps to a section by its position in the tab bar
    pub fn select_section(&mut self, index: usize) {
        if index >= self.sections.len() {
            return;
        }
        self.leave_active_carousel();
        self.sections.select(index);
        self.enter_active_carousel();
    }

    pub fn toggle_events_tab(&mut self) {
        if self.active_section() != Section::Events {
            return;
        }
        self.leave_active_carousel();
        self.events_tab = self.events_tab.toggled();
        self.enter_active_carousel();
        self.show_status_toast(self.events_tab.title().to_uppercase());
    }

    pub fn carousel_next(&mut self) {
        self.active_carousel().step_forward();
    }

    pub fn carousel_previous(&mut self) {
        self.active_carousel().step_backward();
    }

    /// Hands the active carousel back to its timer after manual stepping.
    ///
    /// Carousels without a timer ignore the toggle. A hovered scroller stays
    /// paused until the pointer leaves.
    pub fn toggle_auto_advance(&mut self) {
        let hovered = self.pointer_over_carousel && self.active_section().is_scroller();
        let carousel = self.active_carousel();
        if !carousel.can_auto_advance() {
            return;
        }
        let enabled = !carousel.is_auto_advancing();
        carousel.set_auto_advance(enabled);
        if enabled && hovered {
            carousel.pointer_enter();
        }
        let enabled = carousel.is_auto_advancing();
        self.show_status_toast(if enabled { "AUTO ON" } else { "AUTO OFF" });
    }

    /// Tracks whether the pointer rests on the carousel area
    pub fn set_pointer_over_carousel(&mut self, inside: bool) {
        if inside == self.pointer_over_carousel {
            return;
        }
        if inside {
            self.enter_active_carousel_pointer();
        } else {
            self.leave_active_carousel_pointer();
        }
        self.pointer_over_carousel = inside;
    }

    fn enter_active_carousel(&mut self) {
        if self.pointer_over_carousel {
            self.enter_active_carousel_pointer();
        }
    }

    fn leave_active_carousel(&mut self) {
        if self.pointer_over_carousel {
            self.leave_active_carousel_pointer();
        }
    }

    fn enter_active_carousel_pointer(&mut self) {
        if self.active_section().is_scroller() {
            self.active_carousel().pointer_enter();
        }
    }

    fn leave_active_carousel_pointer(&mut self) {
        if self.active_section().is_scroller() {
            self.active_carousel().pointer_leave();
        }
    }

    /// Opens whatever the active carousel is showing
    pub fn activate_current(&mut self) {
        match self.active_section() {
            Section::Team => {
                if let Some(hit) = self.team.activate() {
                    let card = Card::Member(hit.item.clone());
                    self.open_details(card);
                }
            }
            Section::Projects => {
                if let Some(hit) = self.projects.activate() {
                    let card = Card::Project(hit.item.clone());
                    self.open_details(card);
                }
            }
            Section::Events => {
                if let Some(hit) = self.events().activate() {
                    let card = Card::Event(hit.item.clone());
                    self.open_details(card);
                }
            }
            Section::Alumni => {
                if let Some(hit) = self.alumni.activate() {
                    let card = Card::Alumnus(hit.item.clone());
                    self.open_details(card);
                }
            }
            Section::Gallery => {
                if let Some(hit) = self.gallery.activate() {
                    let images = gallery_or_placeholder(&hit.item.images);
                    tracing::debug!(index = hit.index, title = %hit.item.title, "gallery item activated");
                    self.open_lightbox(images, 0);
                }
            }
            Section::Partners => {
                if let Some(hit) = self.partners.activate() {
                    let message = format!("{}  {}", hit.item.name, hit.item.website_url);
                    self.show_status_toast(message);
                }
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
