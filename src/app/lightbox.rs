use crate::app::{App, AppMode};
use crate::navigator::{Navigator, NavigatorOptions, Step};

impl App {
    pub fn open_lightbox(&mut self, images: Vec<String>, start: usize) {
        if images.is_empty() {
            return;
        }
        tracing::debug!(count = images.len(), start, "opening lightbox");
        self.lightbox = Some(Navigator::with_items(images, start, NavigatorOptions::lightbox()));
        self.enter_mode(AppMode::Lightbox);
    }

    /// Returns to whichever view opened the lightbox
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
        self.previous_mode = None;
        self.mode = if self.details.is_some() {
            AppMode::Details
        } else {
            AppMode::Browse
        };
    }

    pub fn next_lightbox_image(&mut self) {
        if let Some(viewer) = &mut self.lightbox {
            viewer.step_forward();
        }
    }

    pub fn previous_lightbox_image(&mut self) {
        if let Some(viewer) = &mut self.lightbox {
            viewer.step_backward();
        }
    }

    /// Pointer pressed at terminal column `column`
    pub fn lightbox_drag_start(&mut self, column: u16) {
        let position = self.column_to_px(column);
        if let Some(viewer) = &mut self.lightbox {
            viewer.gesture_start(position);
        }
    }

    pub fn lightbox_drag_move(&mut self, column: u16) {
        let position = self.column_to_px(column);
        if let Some(viewer) = &mut self.lightbox {
            viewer.gesture_move(position);
        }
    }

    pub fn lightbox_drag_end(&mut self) -> Option<Step> {
        let step = self.lightbox.as_mut().and_then(Navigator::gesture_end);
        if let Some(step) = step {
            tracing::debug!(?step, "swipe committed");
        }
        step
    }

    /// Drops an unfinished drag without moving
    pub fn lightbox_drag_cancel(&mut self) {
        if let Some(viewer) = &mut self.lightbox {
            viewer.gesture_cancel();
        }
    }

    fn column_to_px(&self, column: u16) -> i32 {
        i32::from(column).saturating_mul(self.cell_width_px)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppMode;
    use crate::app::tests::sample_app;
    use crate::navigator::Step;

    fn images(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("{}.jpg", index)).collect()
    }

    #[test]
    fn test_empty_lightbox_is_not_opened() {
        let mut app = sample_app();
        app.open_lightbox(Vec::new(), 0);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.lightbox.is_none());
    }

    #[test]
    fn test_drag_right_shows_previous_image() {
        let mut app = sample_app();
        app.open_lightbox(images(5), 2);
        // 8px cells: 8 columns is 64px, past the 50px threshold
        app.lightbox_drag_start(10);
        app.lightbox_drag_move(18);
        assert_eq!(app.lightbox_drag_end(), Some(Step::Backward));
        let index = app.lightbox.as_ref().and_then(|viewer| viewer.current_index());
        assert_eq!(index, Some(1));
    }

    #[test]
    fn test_short_drag_keeps_image() {
        let mut app = sample_app();
        app.open_lightbox(images(5), 2);
        app.lightbox_drag_start(10);
        app.lightbox_drag_move(6);
        assert_eq!(app.lightbox_drag_end(), None);
        let index = app.lightbox.as_ref().and_then(|viewer| viewer.current_index());
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_cancelled_drag_is_forgotten() {
        let mut app = sample_app();
        app.open_lightbox(images(3), 1);
        app.lightbox_drag_start(2);
        app.lightbox_drag_move(30);
        app.lightbox_drag_cancel();
        assert_eq!(app.lightbox_drag_end(), None);
        let offset = app.lightbox.as_ref().map(|viewer| viewer.gesture_offset());
        assert_eq!(offset, Some(0));
    }

    #[test]
    fn test_closing_mid_drag_drops_the_gesture() {
        let mut app = sample_app();
        app.open_lightbox(images(3), 0);
        app.lightbox_drag_start(10);
        app.lightbox_drag_move(30);
        app.close_lightbox();
        assert_eq!(app.lightbox_drag_end(), None);
        assert!(app.lightbox.is_none());
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_keys_wrap_and_close_returns_to_browse() {
        let mut app = sample_app();
        app.open_lightbox(images(3), 0);
        app.previous_lightbox_image();
        let indicator = app.lightbox.as_ref().and_then(|viewer| viewer.indicator());
        assert_eq!(indicator.as_deref(), Some("3 / 3"));
        app.next_lightbox_image();
        app.close_lightbox();
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.lightbox.is_none());
    }
}
