//! Light/dark theme toggle
//!
//! The chosen mode is kept in the session store so it carries across page
//! loads; anything missing or unrecognized there falls back to the
//! configured default.

use wony_config::DefaultMode;
use wony_theme::ThemeMode;

use crate::commands::UiCommand;
use crate::storage::{SessionStore, SharedStore};

/// Session storage key holding the selected mode
pub const THEME_KEY: &str = "theme";

pub fn mode_from_config(mode: DefaultMode) -> ThemeMode {
    match mode {
        DefaultMode::Light => ThemeMode::Light,
        DefaultMode::Dark => ThemeMode::Dark,
    }
}

#[derive(Debug)]
pub struct ThemeSwitch {
    mode: ThemeMode,
    store: SharedStore,
}

impl ThemeSwitch {
    pub fn new(default_mode: ThemeMode, store: SharedStore) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|_| {
                log::debug!("unknown stored theme {:?}, using {}", stored, default_mode);
                default_mode
            }),
            Ok(None) => default_mode,
            Err(e) => {
                log::warn!("session storage read failed: {}", e);
                default_mode
            }
        };

        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and remember it for the session
    pub fn toggle(&mut self) -> UiCommand {
        self.mode = self.mode.toggle();
        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            log::warn!("theme kept for this page only: {}", e);
        }
        UiCommand::ApplyTheme(self.mode)
    }

    /// Accessible label for the switch in its current state
    pub fn aria_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }
}
