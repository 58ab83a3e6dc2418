//! Page-level composition
//!
//! `Site` wires the controllers together the way the shared page layout
//! does: one navbar, one scroll-to-top button and one theme switch sharing
//! a session store. Route changes remount the page chrome, so the navbar
//! re-reads its order from the store exactly as a fresh page load would.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use wony_config::{Config, ConfigError};
use wony_theme::{Color, Theme, ThemeMode, ThemeParseError, parse_theme};

use crate::commands::UiCommand;
use crate::state::{NavBar, ScrollToTopButton, ThemeSwitch, mode_from_config};
use crate::storage::SharedStore;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("theme: {0}")]
    Theme(#[from] ThemeParseError),
}

/// Point-in-time view of everything a renderer would need
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSnapshot {
    pub path: String,
    pub scroll_offset: u32,
    pub navbar_visible: bool,
    pub nav_labels: Vec<String>,
    pub menu_open: bool,
    pub button_visible: bool,
    pub bubble_visible: bool,
    pub theme: ThemeMode,
    pub primary: Option<Color>,
}

impl fmt::Display for SiteSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path={} y={} nav={} [{}] menu={} button={} bubble={} theme={} primary={}",
            self.path,
            self.scroll_offset,
            if self.navbar_visible { "shown" } else { "hidden" },
            self.nav_labels.join(", "),
            if self.menu_open { "open" } else { "closed" },
            if self.button_visible { "shown" } else { "hidden" },
            if self.bubble_visible { "shown" } else { "hidden" },
            self.theme,
            self.primary.map(|c| c.to_hex()).unwrap_or_else(|| "-".to_string()),
        )
    }
}

#[derive(Debug)]
pub struct Site {
    config: Config,
    theme: Theme,
    store: SharedStore,
    navbar: NavBar,
    scroll_button: ScrollToTopButton,
    theme_switch: ThemeSwitch,
    scroll_offset: u32,
}

impl Site {
    /// Open the site on its home page
    pub fn new(config: Config, store: SharedStore) -> Result<Self, SiteError> {
        Self::open(config, store, "/")
    }

    /// Open the site on `path`, scrolled to the top
    pub fn open(config: Config, store: SharedStore, path: &str) -> Result<Self, SiteError> {
        config.validate()?;
        let theme = parse_theme(&config.resolve_theme_css()?)?;

        let mut navbar = NavBar::new(&config, store.clone(), path);
        navbar.on_scroll(0);
        let mut scroll_button = ScrollToTopButton::new(&config.interaction);
        scroll_button.mount(0);
        let theme_switch =
            ThemeSwitch::new(mode_from_config(config.theme.default_mode), store.clone());

        log::info!(
            "{} opened at {} ({} nav items, {} theme)",
            config.site.name,
            path,
            navbar.items().len(),
            theme_switch.mode()
        );

        Ok(Self {
            config,
            theme,
            store,
            navbar,
            scroll_button,
            theme_switch,
            scroll_offset: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn navbar(&self) -> &NavBar {
        &self.navbar
    }

    pub fn navbar_mut(&mut self) -> &mut NavBar {
        &mut self.navbar
    }

    pub fn scroll_button(&self) -> &ScrollToTopButton {
        &self.scroll_button
    }

    pub fn scroll_button_mut(&mut self) -> &mut ScrollToTopButton {
        &mut self.scroll_button
    }

    pub fn theme_switch(&self) -> &ThemeSwitch {
        &self.theme_switch
    }

    /// Social profile links shown in the navbar and footer
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        self.config.links.entries().to_vec()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Resolve a palette color for the active mode
    pub fn color(&self, name: &str) -> Option<Color> {
        self.theme.color(self.theme_switch.mode(), name)
    }

    /// Window scrolled to `offset_y`
    pub fn on_scroll(&mut self, offset_y: u32) {
        self.scroll_offset = offset_y;
        self.navbar.on_scroll(offset_y);
        self.scroll_button.on_scroll(offset_y);
    }

    /// Step every timer on the page
    pub fn advance(&mut self, dt: Duration) {
        self.navbar.advance(dt);
        self.scroll_button.advance(dt);
    }

    pub fn toggle_theme(&mut self) -> UiCommand {
        self.theme_switch.toggle()
    }

    /// Execute a command returned by one of the components
    pub fn apply(&mut self, command: &UiCommand) {
        match command {
            UiCommand::ScrollToTop => self.on_scroll(0),
            UiCommand::Navigate(href) => self.navigate(href),
            UiCommand::ApplyTheme(mode) => {
                log::debug!("theme applied: {}", mode);
            }
        }
    }

    /// Route change: the layout remounts at the top of the new page
    pub fn navigate(&mut self, href: &str) {
        log::debug!("navigating {} -> {}", self.navbar.current_path(), href);

        self.navbar.teardown();
        self.navbar = NavBar::new(&self.config, self.store.clone(), href);
        self.navbar.on_scroll(0);
        self.scroll_button.remount(0);
        self.scroll_offset = 0;
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            path: self.navbar.current_path().to_string(),
            scroll_offset: self.scroll_offset,
            navbar_visible: self.navbar.is_visible(),
            nav_labels: self.navbar.items().iter().map(|i| i.label.clone()).collect(),
            menu_open: self.navbar.is_menu_open(),
            button_visible: self.scroll_button.is_visible(),
            bubble_visible: self.scroll_button.is_bubble_visible(),
            theme: self.theme_switch.mode(),
            primary: self.color("primary"),
        }
    }

    /// Leaving the site: cancel every pending timer
    pub fn teardown(&mut self) {
        self.navbar.teardown();
        self.scroll_button.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::rc::Rc;

    fn site() -> Site {
        Site::new(Config::default(), Rc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let site = site();
        let snap = site.snapshot();
        assert_eq!(snap.path, "/");
        assert!(snap.navbar_visible);
        assert!(!snap.button_visible);
        assert_eq!(snap.nav_labels[0], "Home");
        assert_eq!(snap.theme, ThemeMode::Light);
        assert_eq!(snap.primary.map(|c| c.to_hex()).as_deref(), Some("#f58240"));
    }

    #[test]
    fn test_scroll_to_top_round_trip() {
        let mut site = site();
        site.on_scroll(50);
        site.on_scroll(800);
        let snap = site.snapshot();
        assert!(!snap.navbar_visible);
        assert!(snap.button_visible);
        assert!(snap.bubble_visible);

        let cmd = site.scroll_button_mut().on_click().unwrap();
        site.apply(&cmd);
        let snap = site.snapshot();
        assert_eq!(snap.scroll_offset, 0);
        assert!(snap.navbar_visible);
        assert!(!snap.button_visible);
    }

    #[test]
    fn test_navigation_restores_order() {
        let mut site = site();
        site.navbar_mut().move_item(0, 4);

        let cmd = site.navbar().on_item_click("/blog").unwrap();
        site.apply(&cmd);

        assert_eq!(site.navbar().current_path(), "/blog");
        assert_eq!(site.navbar().items()[4].href, "/");
        assert_eq!(site.navbar().active_item().unwrap().label, "Blog");
    }

    #[test]
    fn test_navigation_during_drag_tears_down() {
        let mut site = site();
        site.on_scroll(600);
        site.navbar_mut().on_drag_start();
        site.scroll_button_mut().on_drag_start();
        assert!(site.navbar().is_dragging());
        assert!(site.scroll_button().is_dragging());

        // No drag end: the route changes mid-gesture
        site.navigate("/blog");
        assert!(!site.navbar().is_dragging());
        assert!(!site.scroll_button().is_dragging());
        assert_eq!(
            site.navbar().on_item_click("/"),
            Some(UiCommand::Navigate("/".into()))
        );

        site.on_scroll(600);
        assert_eq!(site.scroll_button_mut().on_click(), Some(UiCommand::ScrollToTop));
    }

    #[test]
    fn test_teardown_during_drag() {
        let mut site = site();
        site.navbar_mut().on_drag_start();
        site.teardown();
        assert!(!site.navbar().is_dragging());
        assert_eq!(
            site.navbar().on_item_click("/journey"),
            Some(UiCommand::Navigate("/journey".into()))
        );
    }

    #[test]
    fn test_social_links() {
        let site = site();
        let links = site.social_links();
        assert_eq!(links.len(), 5);
        assert_eq!(links[1], ("github", "https://github.com/wonically"));
    }

    #[test]
    fn test_theme_toggle_changes_palette() {
        let mut site = site();
        let light = site.color("content1").unwrap();
        let cmd = site.toggle_theme();
        site.apply(&cmd);
        let dark = site.color("content1").unwrap();
        assert_ne!(light, dark);
        assert_eq!(site.snapshot().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.site.nav_items.clear();
        let err = Site::new(config, Rc::new(MemoryStore::new())).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_snapshot_display() {
        let site = site();
        let line = site.snapshot().to_string();
        assert!(line.starts_with("path=/ y=0 nav=shown [Home, About Me"));
        assert!(line.contains("theme=light"));
    }
}
