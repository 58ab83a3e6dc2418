//! One-shot onboarding bubble
//!
//! Shown at most once per session: the first trigger opens it, a timeout or
//! any interaction with the host element closes it, and nothing reopens it.

use std::time::Duration;

use crate::timer::Countdown;

/// Default time the bubble stays up on its own
pub const AUTO_HIDE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosurePhase {
    #[default]
    Unshown,
    Shown,
    /// Closed by timeout or interaction; terminal for the session
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct Disclosure {
    phase: DisclosurePhase,
    auto_hide: Countdown,
    duration: Duration,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new(AUTO_HIDE)
    }
}

impl Disclosure {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: DisclosurePhase::Unshown,
            auto_hide: Countdown::new(),
            duration,
        }
    }

    /// Open the bubble if it has never been shown this session
    ///
    /// Returns true if this call opened it.
    pub fn on_trigger(&mut self) -> bool {
        if self.phase != DisclosurePhase::Unshown {
            return false;
        }
        self.phase = DisclosurePhase::Shown;
        self.auto_hide.schedule(self.duration);
        log::debug!("disclosure shown for {:?}", self.duration);
        true
    }

    /// The user touched the host element
    pub fn on_interaction(&mut self) {
        self.auto_hide.cancel();
        if self.phase == DisclosurePhase::Shown {
            self.phase = DisclosurePhase::Dismissed;
            log::debug!("disclosure dismissed by interaction");
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.auto_hide.advance(dt) && self.phase == DisclosurePhase::Shown {
            self.phase = DisclosurePhase::Dismissed;
            log::debug!("disclosure auto-hidden");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == DisclosurePhase::Shown
    }

    pub fn has_ever_shown(&self) -> bool {
        self.phase != DisclosurePhase::Unshown
    }

    pub fn phase(&self) -> DisclosurePhase {
        self.phase
    }

    /// Component unmounted; the latch survives, the timer does not
    pub fn teardown(&mut self) {
        self.auto_hide.cancel();
        if self.phase == DisclosurePhase::Shown {
            self.phase = DisclosurePhase::Dismissed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_hidden() {
        let disclosure = Disclosure::default();
        assert!(!disclosure.is_visible());
        assert!(!disclosure.has_ever_shown());
        assert_eq!(disclosure.phase(), DisclosurePhase::Unshown);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut disclosure = Disclosure::default();
        let opened: Vec<bool> = (0..2).map(|_| disclosure.on_trigger()).collect();
        assert_eq!(opened, vec![true, false]);
        assert!(disclosure.is_visible());
    }

    #[test]
    fn test_auto_hide_after_duration() {
        let mut disclosure = Disclosure::default();
        disclosure.on_trigger();

        disclosure.advance(Duration::from_secs(9));
        assert!(disclosure.is_visible());
        disclosure.advance(Duration::from_secs(1));
        assert!(!disclosure.is_visible());
        assert_eq!(disclosure.phase(), DisclosurePhase::Dismissed);

        assert!(!disclosure.on_trigger());
        assert!(!disclosure.is_visible());
    }

    #[test]
    fn test_interaction_dismisses() {
        let mut disclosure = Disclosure::default();
        disclosure.on_trigger();
        disclosure.on_interaction();

        assert!(!disclosure.is_visible());
        assert!(disclosure.has_ever_shown());

        // The cancelled timer never fires into a later state
        disclosure.advance(Duration::from_secs(20));
        assert!(!disclosure.on_trigger());
        assert!(!disclosure.is_visible());
    }

    #[test]
    fn test_interaction_before_trigger_does_not_latch() {
        let mut disclosure = Disclosure::default();
        disclosure.on_interaction();
        assert!(!disclosure.has_ever_shown());
        assert!(disclosure.on_trigger());
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let mut disclosure = Disclosure::new(Duration::from_secs(3));
        disclosure.on_trigger();
        disclosure.teardown();

        assert!(!disclosure.is_visible());
        assert!(disclosure.has_ever_shown());
    }
}
