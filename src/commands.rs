//! Command enum for testable input handling
//!
//! Components return commands describing what the page should do; the
//! host (or `Site`) executes them. Nothing here has side effects.

use wony_theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Smooth-scroll the window back to offset 0
    ScrollToTop,
    /// Route to an internal page
    Navigate(String),
    /// Re-skin the page for the given mode
    ApplyTheme(ThemeMode),
}
