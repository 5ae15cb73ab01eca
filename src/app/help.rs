use crate::app::{App, AppMode};

impl App {
    pub fn open_help(&mut self) {
        self.enter_mode(AppMode::Help);
    }

    pub fn close_help(&mut self) {
        self.mode = match self.previous_mode.take() {
            Some(AppMode::Details) if self.details.is_some() => AppMode::Details,
            Some(AppMode::Lightbox) if self.lightbox.is_some() => AppMode::Lightbox,
            _ => AppMode::Browse,
        };
    }
}
