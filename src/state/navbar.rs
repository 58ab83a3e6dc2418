//! Navigation bar state
//!
//! Hides while the reader scrolls down the page, highlights the current
//! route, and lets the desktop links be dragged into a custom order that
//! survives page loads within the session.

use std::time::Duration;

use wony_config::{Config, NavItem};

use super::drag::{ClickOutcome, DragCoordinator};
use super::order::{OrderError, OrderSource, OrderedList, same_keys};
use super::scroll::{ScrollSignal, ScrollTracker};
use crate::commands::UiCommand;
use crate::storage::SharedStore;

#[derive(Debug)]
pub struct NavBar {
    tracker: ScrollTracker,
    /// One coordinator for the whole link group; any link drag guards
    /// clicks on every link
    drag: DragCoordinator,
    order: OrderedList<NavItem>,
    menu_items: Vec<NavItem>,
    current_path: String,
    visible: bool,
    menu_open: bool,
}

impl NavBar {
    /// Mount the navbar on `current_path`, restoring the session's order
    pub fn new(config: &Config, store: SharedStore, current_path: impl Into<String>) -> Self {
        let order = OrderedList::initialize(
            config.site.nav_items.clone(),
            store,
            config.interaction.nav_order_key.clone(),
        );

        Self {
            tracker: ScrollTracker::new(config.interaction.reveal_px),
            drag: DragCoordinator::new(config.interaction.click_guard()),
            order,
            menu_items: config.site.nav_menu_items.clone(),
            current_path: current_path.into(),
            visible: true,
            menu_open: false,
        }
    }

    // === Scroll ===

    pub fn on_scroll(&mut self, offset_y: u32) -> ScrollSignal {
        let signal = self.tracker.on_scroll(offset_y);
        self.visible = signal.navbar_visible();
        signal
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // === Ordering ===

    /// Desktop links in their current order
    pub fn items(&self) -> &[NavItem] {
        self.order.items()
    }

    pub fn order_source(&self) -> OrderSource {
        self.order.source()
    }

    /// Apply a full ordering reported by the drag layer
    ///
    /// The drag layer only ever permutes the links it was given, so a
    /// non-permutation is a bug there: it asserts in debug builds and is
    /// ignored in release builds. Returns true if the order was applied.
    pub fn reorder(&mut self, new_order: Vec<NavItem>) -> bool {
        match self.order.reorder(new_order) {
            Ok(_) => true,
            Err(OrderError::InvalidPermutation) => {
                debug_assert!(false, "navbar reorder must permute the current links");
                log::error!("ignoring navbar reorder that is not a permutation");
                false
            }
            Err(e) => {
                log::warn!("navbar reorder failed: {}", e);
                false
            }
        }
    }

    /// Reorder by hrefs; false if they do not name exactly the current links
    pub fn reorder_by_href<S: AsRef<str>>(&mut self, hrefs: &[S]) -> bool {
        let new_order: Vec<NavItem> = hrefs
            .iter()
            .filter_map(|href| {
                self.items()
                    .iter()
                    .find(|item| item.href == href.as_ref())
                    .cloned()
            })
            .collect();

        if new_order.len() != hrefs.len() || !same_keys(&new_order, self.items()) {
            return false;
        }
        self.reorder(new_order)
    }

    /// Move the link at `from` so it ends up at index `to`
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items().len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }

        let mut new_order = self.items().to_vec();
        let item = new_order.remove(from);
        new_order.insert(to, item);
        self.reorder(new_order)
    }

    // === Drag / click ===

    pub fn on_drag_start(&mut self) {
        self.drag.on_drag_start();
    }

    pub fn on_drag_end(&mut self) {
        self.drag.on_drag_end();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// A desktop link was clicked
    ///
    /// Returns `None` when the click is the tail of a drag and must be
    /// swallowed.
    pub fn on_item_click(&self, href: &str) -> Option<UiCommand> {
        match self.drag.on_click() {
            ClickOutcome::Suppress => None,
            ClickOutcome::Allow => Some(UiCommand::Navigate(href.to_string())),
        }
    }

    // === Routing ===

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }

    /// The active desktop link, if the current path is one of them
    pub fn active_item(&self) -> Option<&NavItem> {
        self.items().iter().find(|item| self.is_active(&item.href))
    }

    // === Mobile menu ===

    pub fn menu_items(&self) -> &[NavItem] {
        &self.menu_items
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A mobile menu entry was pressed: close the menu and route
    pub fn on_menu_item_press(&mut self, href: &str) -> UiCommand {
        self.menu_open = false;
        UiCommand::Navigate(href.to_string())
    }

    // === Lifecycle ===

    pub fn advance(&mut self, dt: Duration) {
        self.drag.advance(dt);
    }

    pub fn teardown(&mut self) {
        self.drag.teardown();
        self.menu_open = false;
    }
}
