/// Minimum horizontal drag, in logical pixels, that commits a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 50;

/// Direction a committed swipe moves the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Tracks an in-progress horizontal drag
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    baseline: Option<i32>,
    delta: i32,
}

impl SwipeTracker {
    pub fn start(&mut self, position_x: i32) {
        self.baseline = Some(position_x);
        self.delta = 0;
    }

    /// Updates the live displacement. Moves without a start are ignored.
    pub fn update(&mut self, position_x: i32) {
        if let Some(baseline) = self.baseline {
            self.delta = position_x.saturating_sub(baseline);
        }
    }

    /// Finishes the drag and reports the step it commits to, if any
    pub fn finish(&mut self) -> Option<Step> {
        let delta = self.delta;
        let was_active = self.baseline.is_some();
        self.reset();

        if !was_active || delta.unsigned_abs() <= SWIPE_THRESHOLD_PX.unsigned_abs() {
            return None;
        }
        // Dragging right reveals the previous item
        if delta > 0 {
            Some(Step::Backward)
        } else {
            Some(Step::Forward)
        }
    }

    pub fn reset(&mut self) {
        self.baseline = None;
        self.delta = 0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    #[must_use]
    pub fn delta(&self) -> i32 {
        self.delta
    }
}
