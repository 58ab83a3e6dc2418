//! Wonythings site configuration
//!
//! Handles loading the site configuration (navigation items, social links,
//! interaction tunables, theme selection) from a TOML file. Every section
//! falls back to the built-in defaults, so partial files are valid.

pub mod themes;

pub use themes::{BundledTheme, get_bundled_theme};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory (next to the config file) searched for user palettes
const THEMES_DIR_NAME: &str = "themes";

/// A single navigation entry
///
/// The `href` is the identity of the entry: two entries with the same href
/// are the same item regardless of label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Light or dark appearance selected when nothing is stored for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultMode {
    #[default]
    Light,
    Dark,
}

/// Site identity and navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the brand slot
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Reorderable desktop navigation, in default order
    #[serde(default = "default_nav_items")]
    pub nav_items: Vec<NavItem>,

    /// Mobile menu entries (fixed order)
    #[serde(default = "default_nav_items")]
    pub nav_menu_items: Vec<NavItem>,
}

fn default_name() -> String {
    "Wonythings".to_string()
}

fn default_description() -> String {
    "A colorful collection of the very wonical things.".to_string()
}

fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About Me", "/about-me"),
        NavItem::new("Projects", "/projects"),
        NavItem::new("Blog", "/blog"),
        NavItem::new("Journey", "/journey"),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            nav_items: default_nav_items(),
            nav_menu_items: default_nav_items(),
        }
    }
}

/// External profile links rendered in the navbar and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_gmail")]
    pub gmail: String,
    #[serde(default = "default_facebook")]
    pub facebook: String,
    #[serde(default = "default_instagram")]
    pub instagram: String,
}

fn default_linkedin() -> String {
    "https://www.linkedin.com/in/wonically/".to_string()
}

fn default_github() -> String {
    "https://github.com/wonically".to_string()
}

fn default_gmail() -> String {
    "mailto:wony.corres@gmail.com".to_string()
}

fn default_facebook() -> String {
    "https://www.facebook.com/wonicality/".to_string()
}

fn default_instagram() -> String {
    "https://www.instagram.com/vv0n_y/".to_string()
}

impl LinksConfig {
    /// Links in display order, keyed by network name
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
            ("gmail", self.gmail.as_str()),
            ("facebook", self.facebook.as_str()),
            ("instagram", self.instagram.as_str()),
        ]
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            linkedin: default_linkedin(),
            github: default_github(),
            gmail: default_gmail(),
            facebook: default_facebook(),
            instagram: default_instagram(),
        }
    }
}

/// Thresholds and durations used by the interaction controllers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Scroll offset (px) past which the scroll-to-top button appears
    /// and downward scrolling hides the navbar
    #[serde(default = "default_reveal_px")]
    pub reveal_px: u32,

    /// Window after a drag ends during which clicks are swallowed
    #[serde(default = "default_click_guard_ms")]
    pub click_guard_ms: u64,

    /// How long the onboarding bubble stays up before hiding itself
    #[serde(default = "default_disclosure_secs")]
    pub disclosure_secs: u64,

    /// Session storage key holding the navbar order
    #[serde(default = "default_nav_order_key")]
    pub nav_order_key: String,
}

fn default_reveal_px() -> u32 {
    100
}

fn default_click_guard_ms() -> u64 {
    100
}

fn default_disclosure_secs() -> u64 {
    10
}

fn default_nav_order_key() -> String {
    "navItemsOrder".to_string()
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            reveal_px: default_reveal_px(),
            click_guard_ms: default_click_guard_ms(),
            disclosure_secs: default_disclosure_secs(),
            nav_order_key: default_nav_order_key(),
        }
    }
}

impl InteractionConfig {
    pub fn click_guard(&self) -> Duration {
        Duration::from_millis(self.click_guard_ms)
    }

    pub fn disclosure_duration(&self) -> Duration {
        Duration::from_secs(self.disclosure_secs)
    }
}

/// Theme selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Palette name (bundled, or a `.css` file in the themes directory)
    #[serde(default = "default_theme")]
    pub name: String,

    #[serde(default)]
    pub default_mode: DefaultMode,
}

fn default_theme() -> String {
    "wonythings".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
            default_mode: DefaultMode::default(),
        }
    }
}

/// Session storage backing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory for the session store file. In-memory when unset.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub interaction: InteractionConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub session: SessionConfig,

    /// Directory the config was loaded from, used to find user palettes
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(None, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(Some(path.to_path_buf()), e))?;
        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check invariants the interaction controllers rely on
    ///
    /// The navbar order is keyed by href, so hrefs must be unique and the
    /// list must not be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.nav_items.is_empty() {
            return Err(ConfigError::Invalid("site.nav_items is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for item in &self.site.nav_items {
            if !seen.insert(item.href.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate nav href {:?}",
                    item.href
                )));
            }
        }

        if self.interaction.nav_order_key.is_empty() {
            return Err(ConfigError::Invalid(
                "interaction.nav_order_key is empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to a user palette file if it exists
    pub fn user_theme_path(&self) -> Option<PathBuf> {
        let base = self.base_dir.as_ref()?;
        let theme_file = base
            .join(THEMES_DIR_NAME)
            .join(format!("{}.css", self.theme.name));

        theme_file.exists().then_some(theme_file)
    }

    /// Session storage directory, relative paths taken from the config's directory
    pub fn session_dir(&self) -> Option<PathBuf> {
        let dir = self.session.storage_dir.as_ref()?;
        match &self.base_dir {
            Some(base) if dir.is_relative() => Some(base.join(dir)),
            _ => Some(dir.clone()),
        }
    }

    /// Resolve and load the palette CSS
    ///
    /// Priority: user palette (`themes/` next to the config) > bundled palette
    pub fn resolve_theme_css(&self) -> Result<String, ConfigError> {
        if let Some(theme_path) = self.user_theme_path() {
            let css = fs::read_to_string(&theme_path)
                .map_err(|e| ConfigError::ReadError(theme_path.clone(), e))?;
            log::info!("Loaded user theme from {:?}", theme_path);
            return Ok(css);
        }

        if let Some(bundled) = themes::get_bundled_theme(&self.theme.name) {
            log::info!("Using bundled theme: {}", bundled.name);
            return Ok(bundled.css.to_string());
        }

        log::warn!(
            "Theme '{}' not found (bundled: {}), falling back to wonythings",
            self.theme.name,
            themes::bundled_theme_names().join(", ")
        );
        Ok(themes::WONYTHINGS.css.to_string())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read a config or theme file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config TOML (path is absent for in-memory sources)
    ParseError(Option<PathBuf>, toml::de::Error),
    /// Parsed but violates an invariant
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(Some(path), e) => {
                write!(f, "Failed to parse {:?}: {}", path, e)
            }
            ConfigError::ParseError(None, e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
