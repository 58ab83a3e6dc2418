//! Drag/click disambiguation
//!
//! Releasing a drag makes the platform fire a click on the element that was
//! dragged. The coordinator swallows that click: clicks are suppressed while
//! a drag is active and for a short guard window after it ends.

use std::time::Duration;

use crate::timer::Countdown;

/// Default guard window after a drag ends
pub const CLICK_GUARD: Duration = Duration::from_millis(100);

/// What the caller should do with a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Run the element's primary action
    Allow,
    /// Prevent the default action and stop propagation
    Suppress,
}

/// Rectangle a dragged element must stay inside, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Negative sizes collapse to an empty extent
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Viewport inset by `margin` on every side
    pub fn inset(viewport_width: f32, viewport_height: f32, margin: f32) -> Self {
        Self::new(
            margin,
            margin,
            (viewport_width - 2.0 * margin).max(0.0),
            (viewport_height - 2.0 * margin).max(0.0),
        )
    }

    /// Clamp a point into the rectangle
    ///
    /// Never panics, even for fields set directly to a negative size.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        let right = self.x + self.width.max(0.0);
        let bottom = self.y + self.height.max(0.0);
        (x.max(self.x).min(right), y.max(self.y).min(bottom))
    }
}

/// Drag and click-suppression state for one draggable element
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    active: bool,
    suppress_next_click: bool,
    guard: Countdown,
    guard_delay: Duration,
    constraints: Option<Bounds>,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(CLICK_GUARD)
    }
}

impl DragCoordinator {
    pub fn new(guard_delay: Duration) -> Self {
        Self {
            active: false,
            suppress_next_click: false,
            guard: Countdown::new(),
            guard_delay,
            constraints: None,
        }
    }

    /// Attach a region the render layer should clamp drag motion to
    pub fn with_constraints(mut self, bounds: Bounds) -> Self {
        self.constraints = Some(bounds);
        self
    }

    pub fn constraints(&self) -> Option<Bounds> {
        self.constraints
    }

    pub fn set_constraints(&mut self, bounds: Option<Bounds>) {
        self.constraints = bounds;
    }

    /// A drag gesture began
    ///
    /// Cancels a pending guard from an earlier drag so it cannot clear
    /// suppression in the middle of this one.
    pub fn on_drag_start(&mut self) {
        if self.guard.cancel() {
            log::debug!("drag restarted inside click guard");
        }
        self.active = true;
        self.suppress_next_click = false;
    }

    /// A drag gesture was released; open the guard window
    pub fn on_drag_end(&mut self) {
        self.active = false;
        self.suppress_next_click = true;
        self.guard.schedule(self.guard_delay);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_suppressing_click(&self) -> bool {
        self.active || self.suppress_next_click
    }

    /// Decide a click; does not change state
    pub fn on_click(&self) -> ClickOutcome {
        if self.is_suppressing_click() {
            log::debug!("click suppressed after drag");
            ClickOutcome::Suppress
        } else {
            ClickOutcome::Allow
        }
    }

    /// Step timers; closes the guard window when it elapses
    pub fn advance(&mut self, dt: Duration) {
        if self.guard.advance(dt) {
            self.suppress_next_click = false;
        }
    }

    /// Component unmounted: drop timers and any in-flight drag
    pub fn teardown(&mut self) {
        self.guard.cancel();
        self.active = false;
        self.suppress_next_click = false;
    }

    pub fn has_pending_guard(&self) -> bool {
        self.guard.is_pending()
    }
}
