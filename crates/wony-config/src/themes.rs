//! Bundled palettes
//!
//! These palettes are embedded in the binary and can be used without
//! any external files.

/// Bundled palette data
pub struct BundledTheme {
    pub name: &'static str,
    pub css: &'static str,
}

/// Wonythings palette - warm orange primary over blush content surfaces
pub const WONYTHINGS: BundledTheme = BundledTheme {
    name: "wonythings",
    css: include_str!("../../../themes/wonythings.css"),
};

/// Monochrome palette - neutral greys, same orange accent
pub const MONOCHROME: BundledTheme = BundledTheme {
    name: "monochrome",
    css: include_str!("../../../themes/monochrome.css"),
};

/// All bundled palettes
pub const ALL_THEMES: &[&BundledTheme] = &[&WONYTHINGS, &MONOCHROME];

/// Get a bundled palette by name
pub fn get_bundled_theme(name: &str) -> Option<&'static BundledTheme> {
    ALL_THEMES.iter().find(|t| t.name == name).copied()
}

/// List all available bundled palette names
pub fn bundled_theme_names() -> Vec<&'static str> {
    ALL_THEMES.iter().map(|t| t.name).collect()
}
