//! Interaction state modules
//!
//! This module contains pure state management types that are independent of
//! any rendering layer or browser API. Time only moves when the host calls
//! `advance(dt)`, which keeps every controller unit-testable.

mod disclosure;
mod drag;
mod navbar;
mod order;
mod scroll;
mod scroll_button;
mod theme_switch;

pub use disclosure::{AUTO_HIDE, Disclosure, DisclosurePhase};
pub use drag::{Bounds, CLICK_GUARD, ClickOutcome, DragCoordinator};
pub use navbar::NavBar;
pub use order::{Keyed, OrderError, OrderSource, OrderedList, same_keys};
pub use scroll::{REVEAL_PX, ScrollDirection, ScrollSignal, ScrollTracker};
pub use scroll_button::{ScrollToTopButton, VIEWPORT_MARGIN};
pub use theme_switch::{THEME_KEY, ThemeSwitch, mode_from_config};
