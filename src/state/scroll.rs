//! Viewport scroll tracking
//!
//! Turns raw vertical scroll offsets into the two signals the page chrome
//! cares about: whether the reader is past the reveal threshold, and which
//! way they are heading.

/// Offset (px) past which the scroll-to-top button shows
pub const REVEAL_PX: u32 = 100;

/// Direction of the latest scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    /// First observation, or moving down while still above the threshold
    #[default]
    None,
}

/// Derived state for one scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSignal {
    pub offset_y: u32,
    pub past_threshold: bool,
    pub direction: ScrollDirection,
}

impl ScrollSignal {
    /// Navbar stays on screen unless the reader is heading down the page
    pub fn navbar_visible(&self) -> bool {
        self.direction != ScrollDirection::Down
    }
}

/// Tracks the previous offset so each event can be classified
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    reveal_px: u32,
    previous_offset: Option<u32>,
    past_threshold: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(REVEAL_PX)
    }
}

impl ScrollTracker {
    pub fn new(reveal_px: u32) -> Self {
        Self {
            reveal_px,
            previous_offset: None,
            past_threshold: false,
        }
    }

    /// Classify a scroll offset and remember it as the new baseline
    ///
    /// The first observation has no baseline and always reports
    /// `ScrollDirection::None`.
    pub fn on_scroll(&mut self, offset_y: u32) -> ScrollSignal {
        let past_threshold = offset_y > self.reveal_px;

        let direction = match self.previous_offset {
            None => ScrollDirection::None,
            Some(prev) if offset_y > prev && past_threshold => ScrollDirection::Down,
            Some(prev) if offset_y <= prev => ScrollDirection::Up,
            Some(_) => ScrollDirection::None,
        };

        self.previous_offset = Some(offset_y);
        self.past_threshold = past_threshold;

        ScrollSignal {
            offset_y,
            past_threshold,
            direction,
        }
    }

    /// Like `on_scroll`, also reporting whether this event crossed the
    /// threshold going from above to below it (false -> true)
    pub fn on_scroll_with_reveal(&mut self, offset_y: u32) -> (ScrollSignal, bool) {
        let was_past = self.past_threshold;
        let signal = self.on_scroll(offset_y);
        (signal, signal.past_threshold && !was_past)
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn previous_offset(&self) -> Option<u32> {
        self.previous_offset
    }

    pub fn reveal_px(&self) -> u32 {
        self.reveal_px
    }

    /// Forget history (e.g. after a route change resets the page)
    pub fn reset(&mut self) {
        self.previous_offset = None;
        self.past_threshold = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sequence() {
        let mut tracker = ScrollTracker::default();

        let directions: Vec<_> = [0, 50, 150, 120]
            .into_iter()
            .map(|y| tracker.on_scroll(y).direction)
            .collect();

        assert_eq!(
            directions,
            vec![
                ScrollDirection::None,
                ScrollDirection::None,
                ScrollDirection::Down,
                ScrollDirection::Up,
            ]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.on_scroll(100).past_threshold);
        assert!(tracker.on_scroll(101).past_threshold);
    }

    #[test]
    fn test_unchanged_offset_counts_as_up() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(300);
        let signal = tracker.on_scroll(300);
        assert_eq!(signal.direction, ScrollDirection::Up);
        assert!(signal.navbar_visible());
    }

    #[test]
    fn test_navbar_hides_only_when_heading_down() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(0);
        assert!(tracker.on_scroll(80).navbar_visible());
        assert!(!tracker.on_scroll(400).navbar_visible());
        assert!(tracker.on_scroll(390).navbar_visible());
    }

    #[test]
    fn test_reveal_edge() {
        let mut tracker = ScrollTracker::default();

        let (_, revealed) = tracker.on_scroll_with_reveal(40);
        assert!(!revealed);
        let (_, revealed) = tracker.on_scroll_with_reveal(140);
        assert!(revealed);
        let (_, revealed) = tracker.on_scroll_with_reveal(500);
        assert!(!revealed);
        tracker.on_scroll(0);
        let (_, revealed) = tracker.on_scroll_with_reveal(200);
        assert!(revealed);
    }

    #[test]
    fn test_custom_threshold_and_reset() {
        let mut tracker = ScrollTracker::new(10);
        assert!(tracker.on_scroll(11).past_threshold);
        assert_eq!(tracker.previous_offset(), Some(11));

        tracker.reset();
        assert!(tracker.previous_offset().is_none());
        assert!(!tracker.is_past_threshold());
        assert_eq!(tracker.on_scroll(50).direction, ScrollDirection::None);
    }
}
