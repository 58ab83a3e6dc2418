//! Floating scroll-to-top button
//!
//! Appears once the reader is past the reveal threshold. It can be dragged
//! around the viewport; the release click must not scroll the page. The
//! first time it appears it shows a "don't drag me" bubble.

use std::time::Duration;

use wony_config::InteractionConfig;

use super::disclosure::Disclosure;
use super::drag::{Bounds, ClickOutcome, DragCoordinator};
use super::scroll::ScrollTracker;
use crate::commands::UiCommand;

/// Gap kept between the dragged button and the viewport edge
pub const VIEWPORT_MARGIN: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct ScrollToTopButton {
    tracker: ScrollTracker,
    drag: DragCoordinator,
    bubble: Disclosure,
    visible: bool,
}

impl ScrollToTopButton {
    pub fn new(interaction: &InteractionConfig) -> Self {
        Self {
            tracker: ScrollTracker::new(interaction.reveal_px),
            drag: DragCoordinator::new(interaction.click_guard()),
            bubble: Disclosure::new(interaction.disclosure_duration()),
            visible: false,
        }
    }

    /// Initial check on mount: the page may already be scrolled
    pub fn mount(&mut self, offset_y: u32) {
        self.on_scroll(offset_y);
    }

    pub fn on_scroll(&mut self, offset_y: u32) {
        let (signal, revealed) = self.tracker.on_scroll_with_reveal(offset_y);
        self.visible = signal.past_threshold;
        if revealed && self.bubble.on_trigger() {
            log::debug!("scroll button revealed at {}px", offset_y);
        }
    }

    /// Confine drags to the viewport minus a margin
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.drag
            .set_constraints(Some(Bounds::inset(width, height, VIEWPORT_MARGIN)));
    }

    pub fn drag_bounds(&self) -> Option<Bounds> {
        self.drag.constraints()
    }

    /// Ignored while hidden: the button is not on the page
    pub fn on_drag_start(&mut self) {
        if !self.visible {
            return;
        }
        self.drag.on_drag_start();
        self.bubble.on_interaction();
    }

    pub fn on_drag_end(&mut self) {
        self.drag.on_drag_end();
    }

    /// The button was clicked
    ///
    /// Any click dismisses the bubble; only a genuine click scrolls. A
    /// hidden button cannot be clicked.
    pub fn on_click(&mut self) -> Option<UiCommand> {
        if !self.visible {
            return None;
        }
        self.bubble.on_interaction();
        match self.drag.on_click() {
            ClickOutcome::Allow => Some(UiCommand::ScrollToTop),
            ClickOutcome::Suppress => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// The bubble is drawn on the button, so it needs both
    pub fn is_bubble_visible(&self) -> bool {
        self.visible && self.bubble.is_visible()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.drag.advance(dt);
        self.bubble.advance(dt);
    }

    /// Remount after a route change: history and timers reset, the
    /// bubble's once-per-session latch does not
    pub fn remount(&mut self, offset_y: u32) {
        self.teardown();
        self.tracker.reset();
        self.visible = false;
        self.mount(offset_y);
    }

    pub fn teardown(&mut self) {
        self.drag.teardown();
        self.bubble.teardown();
    }
}
