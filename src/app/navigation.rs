use crate::navigator::Navigator;

/// Item-agnostic controls for a section carousel.
///
/// Lets key and pointer handlers drive whichever carousel is on screen
/// without knowing what it holds.
pub trait Carousel {
    fn step_forward(&mut self);

    fn step_backward(&mut self);

    fn set_auto_advance(&mut self, enabled: bool);

    fn is_auto_advancing(&self) -> bool;

    /// Whether this carousel is driven by a timer at all
    fn can_auto_advance(&self) -> bool;

    /// Pointer entered the carousel: hold the timer where it is
    fn pointer_enter(&mut self);

    /// Pointer left the carousel: restart the timer if this carousel auto-advances
    fn pointer_leave(&mut self);
}

impl<T> Carousel for Navigator<T> {
    fn step_forward(&mut self) {
        Navigator::step_forward(self);
    }

    fn step_backward(&mut self) {
        Navigator::step_backward(self);
    }

    fn set_auto_advance(&mut self, enabled: bool) {
        Navigator::set_auto_advance(self, enabled);
    }

    fn is_auto_advancing(&self) -> bool {
        Navigator::is_auto_advancing(self)
    }

    fn can_auto_advance(&self) -> bool {
        self.options().auto_advance
    }

    fn pointer_enter(&mut self) {
        self.suspend();
    }

    fn pointer_leave(&mut self) {
        self.resume();
        if self.options().auto_advance {
            Navigator::set_auto_advance(self, true);
        }
    }
}
