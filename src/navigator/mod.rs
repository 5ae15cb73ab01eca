//! Cyclic index navigation shared by every carousel-like view.
//!
//! A [`Navigator`] owns an ordered sequence and a position inside it. Position
//! changes come from manual steps, swipe gestures and the auto-advance timer.

mod gesture;
mod timer;

pub use gesture::Step;

use gesture::SwipeTracker;
use timer::AutoAdvance;

use std::time::{Duration, Instant};

/// Default auto-advance period for scrolling carousels
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Behaviour switches for one navigator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub auto_advance: bool,
    pub gesture_enabled: bool,
    pub interval: Duration,
}

impl NavigatorOptions {
    /// Fullscreen image viewer: swipe to move, no timer
    #[must_use]
    pub fn lightbox() -> Self {
        Self {
            auto_advance: false,
            gesture_enabled: true,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Inline image gallery inside a details view
    #[must_use]
    pub fn gallery() -> Self {
        Self {
            auto_advance: false,
            gesture_enabled: false,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Card carousel that advances on its own until the user takes over
    #[must_use]
    pub fn scroller(interval: Duration) -> Self {
        Self {
            auto_advance: true,
            gesture_enabled: false,
            interval,
        }
    }

    /// Continuously cycling logo strip
    #[must_use]
    pub fn ribbon(interval: Duration) -> Self {
        Self {
            auto_advance: true,
            gesture_enabled: false,
            interval,
        }
    }

    /// Plain wraparound list, e.g. section tabs
    #[must_use]
    pub fn menu() -> Self {
        Self::gallery()
    }
}

/// Payload raised when the user commits to viewing an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation<'a, T> {
    pub index: usize,
    pub item: &'a T,
}

/// Position pointer over a fixed ordered sequence
#[derive(Debug, Clone)]
pub struct Navigator<T> {
    items: Vec<T>,
    current: usize,
    options: NavigatorOptions,
    timer: AutoAdvance,
    swipe: SwipeTracker,
}

impl<T> Navigator<T> {
    /// Creates an empty navigator
    pub fn new(options: NavigatorOptions) -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            options,
            timer: AutoAdvance::new(options.interval),
            swipe: SwipeTracker::default(),
        }
    }

    /// Creates a navigator over `items`, positioned at `start`
    pub fn with_items(items: Vec<T>, start: usize, options: NavigatorOptions) -> Self {
        let mut navigator = Self::new(options);
        navigator.initialize(items, start);
        navigator
    }

    /// Replaces the sequence and moves to `start`.
    ///
    /// A start past the end lands on the last item. An empty sequence leaves
    /// nothing to render and stops auto-advance.
    pub fn initialize(&mut self, items: Vec<T>, start: usize) {
        self.items = items;
        self.current = start.min(self.items.len().saturating_sub(1));
        self.swipe.reset();
        if self.items.is_empty() {
            self.timer.stop();
        }
    }

    /// Starts auto-advance when the options ask for it and there is something to show
    pub fn mount(&mut self) {
        if self.options.auto_advance && !self.items.is_empty() {
            self.timer.start();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// "X / N" position label
    #[must_use]
    pub fn indicator(&self) -> Option<String> {
        self.current_index()
            .map(|index| format!("{} / {}", index + 1, self.items.len()))
    }

    /// Filmstrip translation for the current item, in percent of one slide
    #[must_use]
    pub fn offset_percent(&self) -> Option<usize> {
        self.current_index().map(|index| index.saturating_mul(100))
    }

    /// Item the user is committing to, together with its position
    #[must_use]
    pub fn activate(&self) -> Option<Activation<'_, T>> {
        self.items
            .get(self.current)
            .map(|item| Activation {
                index: self.current,
                item,
            })
    }

    /// Moves to the next item. User input takes over from auto-advance.
    pub fn step_forward(&mut self) {
        self.timer.stop();
        self.advance(Step::Forward, 1);
    }

    /// Moves to the previous item. User input takes over from auto-advance.
    pub fn step_backward(&mut self) {
        self.timer.stop();
        self.advance(Step::Backward, 1);
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    ///
    /// Counts as a manual step, so auto-advance stops.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.timer.stop();
        self.current = index;
        true
    }

    fn advance(&mut self, step: Step, count: usize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let count = count % len;
        self.current = match step {
            Step::Forward => (self.current + count) % len,
            Step::Backward => (self.current + len - count) % len,
        };
    }

    pub fn gesture_start(&mut self, position_x: i32) {
        if !self.options.gesture_enabled || self.items.is_empty() {
            return;
        }
        self.swipe.start(position_x);
        self.timer.suspend();
    }

    /// Updates the live drag offset without moving the index
    pub fn gesture_move(&mut self, position_x: i32) {
        if self.options.gesture_enabled {
            self.swipe.update(position_x);
        }
    }

    /// Commits the drag if it travelled past the 50 px swipe threshold
    pub fn gesture_end(&mut self) -> Option<Step> {
        if !self.swipe.is_active() {
            return None;
        }
        let committed = self.swipe.finish();
        match committed {
            Some(Step::Forward) => self.step_forward(),
            Some(Step::Backward) => self.step_backward(),
            None => self.timer.resume(),
        }
        committed
    }

    pub fn gesture_cancel(&mut self) {
        if self.swipe.is_active() {
            self.swipe.reset();
            self.timer.resume();
        }
    }

    /// Live drag displacement, for previewing the swipe
    #[must_use]
    pub fn gesture_offset(&self) -> i32 {
        self.swipe.delta()
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        if enabled && !self.items.is_empty() {
            self.timer.start();
        } else {
            self.timer.stop();
        }
    }

    /// Pauses auto-advance while the pointer rests on the navigator
    pub fn suspend(&mut self) {
        self.timer.suspend();
    }

    pub fn resume(&mut self) {
        self.timer.resume();
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.timer.is_running() && !self.timer.is_active()
    }

    /// Applies any auto-advance steps that fell due. Returns the number taken.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timer.poll(now);
        if fired > 0 {
            self.advance(Step::Forward, fired);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut navigator =
                    Navigator::with_items(numbers(len), start, NavigatorOptions::gallery());
                for _ in 0..len {
                    navigator.step_forward();
                }
                assert_eq!(navigator.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_forward_then_backward_is_identity() {
        for len in 1..8 {
            for start in 0..len {
                let mut navigator =
                    Navigator::with_items(numbers(len), start, NavigatorOptions::gallery());
                navigator.step_forward();
                navigator.step_backward();
                assert_eq!(navigator.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_wraparound_at_both_ends() {
        let mut navigator = Navigator::with_items(numbers(4), 3, NavigatorOptions::gallery());
        navigator.step_forward();
        assert_eq!(navigator.current_index(), Some(0));
        navigator.step_backward();
        assert_eq!(navigator.current_index(), Some(3));
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut navigator = Navigator::with_items(vec!["only"], 0, NavigatorOptions::gallery());
        navigator.step_forward();
        navigator.step_backward();
        assert_eq!(navigator.current(), Some(&"only"));
        assert_eq!(navigator.indicator().as_deref(), Some("1 / 1"));
    }

    #[test]
    fn test_empty_navigator_renders_nothing() {
        let mut navigator: Navigator<String> =
            Navigator::with_items(Vec::new(), 0, NavigatorOptions::lightbox());
        navigator.step_forward();
        navigator.step_backward();
        navigator.gesture_start(10);
        navigator.gesture_move(200);
        assert_eq!(navigator.gesture_end(), None);
        assert_eq!(navigator.tick(Instant::now()), 0);
        assert!(navigator.is_empty());
        assert_eq!(navigator.current_index(), None);
        assert_eq!(navigator.current(), None);
        assert_eq!(navigator.indicator(), None);
        assert_eq!(navigator.offset_percent(), None);
        assert!(navigator.activate().is_none());
    }

    #[test]
    fn test_initialize_resets_position() {
        let mut navigator = Navigator::with_items(numbers(5), 0, NavigatorOptions::gallery());
        navigator.step_forward();
        navigator.step_forward();
        navigator.initialize(numbers(3), 0);
        assert_eq!(navigator.current_index(), Some(0));
        assert_eq!(navigator.len(), 3);

        navigator.step_forward();
        navigator.initialize(numbers(6), 4);
        assert_eq!(navigator.current_index(), Some(4));
    }

    #[test]
    fn test_initialize_clamps_start_past_end() {
        let navigator = Navigator::with_items(numbers(3), 10, NavigatorOptions::gallery());
        assert_eq!(navigator.current_index(), Some(2));
    }

    #[test]
    fn test_swipe_right_steps_backward_once() {
        let mut navigator = Navigator::with_items(numbers(5), 2, NavigatorOptions::lightbox());
        navigator.gesture_start(100);
        navigator.gesture_move(160);
        assert_eq!(navigator.current_index(), Some(2));
        assert_eq!(navigator.gesture_offset(), 60);
        assert_eq!(navigator.gesture_end(), Some(Step::Backward));
        assert_eq!(navigator.current_index(), Some(1));
        assert_eq!(navigator.gesture_offset(), 0);
    }

    #[test]
    fn test_short_swipe_changes_nothing() {
        let mut navigator = Navigator::with_items(numbers(5), 2, NavigatorOptions::lightbox());
        navigator.gesture_start(100);
        navigator.gesture_move(70);
        assert_eq!(navigator.gesture_end(), None);
        assert_eq!(navigator.current_index(), Some(2));
        assert_eq!(navigator.gesture_offset(), 0);
    }

    #[test]
    fn test_gestures_ignored_when_disabled() {
        let mut navigator = Navigator::with_items(numbers(5), 0, NavigatorOptions::gallery());
        navigator.gesture_start(0);
        navigator.gesture_move(-200);
        assert_eq!(navigator.gesture_end(), None);
        assert_eq!(navigator.current_index(), Some(0));
    }

    #[test]
    fn test_auto_advance_three_ticks() {
        let start = Instant::now();
        let mut navigator = Navigator::with_items(
            numbers(5),
            0,
            NavigatorOptions::scroller(Duration::from_millis(1000)),
        );
        navigator.mount();
        navigator.tick(start);
        for second in 1..=3 {
            navigator.tick(start + Duration::from_millis(1000 * second));
        }
        assert_eq!(navigator.current_index(), Some(3));
    }

    #[test]
    fn test_manual_step_stops_auto_advance() {
        let start = Instant::now();
        let mut navigator =
            Navigator::with_items(numbers(5), 0, NavigatorOptions::scroller(DEFAULT_INTERVAL));
        navigator.mount();
        navigator.tick(start);
        navigator.step_backward();
        assert!(!navigator.is_auto_advancing());
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 4), 0);
        assert_eq!(navigator.current_index(), Some(4));

        navigator.set_auto_advance(true);
        assert!(navigator.is_auto_advancing());
    }

    #[test]
    fn test_gesture_suspends_then_resumes_auto_advance() {
        let start = Instant::now();
        let options = NavigatorOptions {
            auto_advance: true,
            gesture_enabled: true,
            interval: DEFAULT_INTERVAL,
        };
        let mut navigator = Navigator::with_items(numbers(4), 0, options);
        navigator.mount();
        navigator.tick(start);

        navigator.gesture_start(0);
        assert!(navigator.is_suspended());
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 3), 0);

        navigator.gesture_move(10);
        assert_eq!(navigator.gesture_end(), None);
        assert!(navigator.is_auto_advancing());
        assert!(!navigator.is_suspended());
    }

    #[test]
    fn test_gesture_cancel_resumes_suspended_timer() {
        let start = Instant::now();
        let options = NavigatorOptions {
            auto_advance: true,
            gesture_enabled: true,
            interval: DEFAULT_INTERVAL,
        };
        let mut navigator = Navigator::with_items(numbers(4), 0, options);
        navigator.mount();
        navigator.tick(start);

        navigator.gesture_start(100);
        navigator.gesture_move(300);
        assert!(navigator.is_suspended());

        navigator.gesture_cancel();
        assert!(!navigator.is_suspended());
        assert!(navigator.is_auto_advancing());
        assert_eq!(navigator.gesture_offset(), 0);
        assert_eq!(navigator.gesture_end(), None);
        assert_eq!(navigator.current_index(), Some(0));

        // Re-armed on the first poll after resuming
        navigator.tick(start + DEFAULT_INTERVAL);
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 2), 1);
    }

    #[test]
    fn test_stopped_timer_stays_stopped_until_reenabled() {
        let start = Instant::now();
        let mut navigator =
            Navigator::with_items(numbers(5), 0, NavigatorOptions::scroller(DEFAULT_INTERVAL));
        navigator.mount();
        navigator.tick(start);
        navigator.step_forward();

        navigator.suspend();
        navigator.resume();
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 5), 0);
        assert_eq!(navigator.current_index(), Some(1));
    }

    #[test]
    fn test_select_jumps_within_bounds() {
        let mut navigator =
            Navigator::with_items(numbers(4), 0, NavigatorOptions::scroller(DEFAULT_INTERVAL));
        navigator.mount();
        assert!(navigator.select(3));
        assert_eq!(navigator.current_index(), Some(3));
        assert!(!navigator.is_auto_advancing());

        assert!(!navigator.select(4));
        assert_eq!(navigator.current_index(), Some(3));

        let mut empty: Navigator<u8> = Navigator::new(NavigatorOptions::menu());
        assert!(!empty.select(0));
        assert_eq!(empty.current_index(), None);
    }

    #[test]
    fn test_hover_suspend_keeps_position() {
        let start = Instant::now();
        let mut navigator =
            Navigator::with_items(numbers(3), 0, NavigatorOptions::scroller(DEFAULT_INTERVAL));
        navigator.mount();
        navigator.tick(start);
        navigator.suspend();
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 2), 0);
        navigator.resume();
        navigator.tick(start + DEFAULT_INTERVAL * 2);
        assert_eq!(navigator.tick(start + DEFAULT_INTERVAL * 3), 1);
        assert_eq!(navigator.current_index(), Some(1));
    }

    #[test]
    fn test_mount_without_items_does_not_arm() {
        let mut navigator: Navigator<u8> = Navigator::new(NavigatorOptions::ribbon(DEFAULT_INTERVAL));
        navigator.mount();
        assert!(!navigator.is_auto_advancing());
    }

    #[test]
    fn test_activation_carries_item_and_index() {
        let mut navigator =
            Navigator::with_items(vec!["a", "b", "c"], 0, NavigatorOptions::gallery());
        navigator.step_backward();
        let activation = navigator.activate();
        assert_eq!(activation.map(|hit| hit.index), Some(2));
        assert_eq!(activation.map(|hit| *hit.item), Some("c"));
        assert_eq!(navigator.offset_percent(), Some(200));
    }
}
