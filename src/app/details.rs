use crate::app::{App, AppMode, DetailView};
use crate::content::Card;
use crate::navigator::{Navigator, NavigatorOptions};

impl App {
    pub fn open_details(&mut self, card: Card) {
        tracing::debug!(title = card.title(), "opening details");
        let gallery = Navigator::with_items(card.gallery(), 0, NavigatorOptions::gallery());
        self.details = Some(DetailView { card, gallery });
        self.enter_mode(AppMode::Details);
    }

    pub fn close_details(&mut self) {
        self.details = None;
        self.previous_mode = None;
        self.mode = AppMode::Browse;
    }

    pub fn next_detail_image(&mut self) {
        if let Some(view) = &mut self.details {
            view.gallery.step_forward();
        }
    }

    pub fn previous_detail_image(&mut self) {
        if let Some(view) = &mut self.details {
            view.gallery.step_backward();
        }
    }

    /// Opens the lightbox on the gallery image currently shown
    pub fn expand_detail_image(&mut self) {
        let Some(view) = &self.details else {
            return;
        };
        let Some(hit) = view.gallery.activate() else {
            return;
        };
        let start = hit.index;
        let images = view.gallery.items().to_vec();
        self.open_lightbox(images, start);
    }
}
