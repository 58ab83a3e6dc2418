//! Scripted event replay
//!
//! A replay script is a TOML file of `[[event]]` tables fed through a
//! `Site` one at a time. Each event produces a frame: what happened, the
//! command it yielded (if any) and a snapshot of the page afterwards.
//!
//! ```toml
//! [[event]]
//! kind = "scroll"
//! offset = 640
//!
//! [[event]]
//! kind = "drag_start"
//! target = "nav"
//!
//! [[event]]
//! kind = "wait"
//! ms = 150
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use wony_config::NavItem;

use crate::commands::UiCommand;
use crate::site::{Site, SiteSnapshot};
use crate::state::same_keys;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read script {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("event {index}: reorder must list every nav link exactly once, got {order:?}")]
    InvalidReorder { index: usize, order: Vec<String> },

    #[error("event {index}: click on the nav needs an href")]
    MissingHref { index: usize },
}

/// Which draggable element an event is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Nav,
    Button,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Nav => write!(f, "nav"),
            Target::Button => write!(f, "button"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayEvent {
    Scroll {
        offset: u32,
    },
    Wait {
        ms: u64,
    },
    Resize {
        width: f32,
        height: f32,
    },
    DragStart {
        target: Target,
    },
    DragEnd {
        target: Target,
    },
    Click {
        target: Target,
        #[serde(default)]
        href: Option<String>,
    },
    /// Full nav order by href, as the drag layer reports it on drop
    Reorder {
        order: Vec<String>,
    },
    ToggleMenu,
    MenuSelect {
        href: String,
    },
    ToggleTheme,
    Navigate {
        href: String,
    },
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayEvent::Scroll { offset } => write!(f, "scroll {}", offset),
            ReplayEvent::Wait { ms } => write!(f, "wait {}ms", ms),
            ReplayEvent::Resize { width, height } => write!(f, "resize {}x{}", width, height),
            ReplayEvent::DragStart { target } => write!(f, "drag_start {}", target),
            ReplayEvent::DragEnd { target } => write!(f, "drag_end {}", target),
            ReplayEvent::Click { target, href } => match href {
                Some(href) => write!(f, "click {} {}", target, href),
                None => write!(f, "click {}", target),
            },
            ReplayEvent::Reorder { order } => write!(f, "reorder [{}]", order.join(", ")),
            ReplayEvent::ToggleMenu => write!(f, "toggle_menu"),
            ReplayEvent::MenuSelect { href } => write!(f, "menu_select {}", href),
            ReplayEvent::ToggleTheme => write!(f, "toggle_theme"),
            ReplayEvent::Navigate { href } => write!(f, "navigate {}", href),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    #[serde(default, rename = "event")]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_toml_str(content: &str) -> Result<Self, ReplayError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ReplayError> {
        let content = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// What came out of one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or not) without producing a command
    Done,
    /// The component produced a command, which was applied
    Command(UiCommand),
    /// A click arrived while the drag guard was up
    Suppressed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Suppressed => write!(f, "suppressed"),
            Outcome::Command(UiCommand::ScrollToTop) => write!(f, "scroll to top"),
            Outcome::Command(UiCommand::Navigate(href)) => write!(f, "navigate {}", href),
            Outcome::Command(UiCommand::ApplyTheme(mode)) => write!(f, "theme {}", mode),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub event: ReplayEvent,
    pub outcome: Outcome,
    pub snapshot: SiteSnapshot,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<3} {:<28} -> {:<16} | {}",
            self.index, self.event.to_string(), self.outcome.to_string(), self.snapshot
        )
    }
}

/// Drive every event of `script` through `site`, collecting one frame each
pub fn run(site: &mut Site, script: &ReplayScript) -> Result<Vec<Frame>, ReplayError> {
    let mut frames = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        let outcome = step(site, index, event)?;
        if let Outcome::Command(command) = &outcome {
            site.apply(command);
        }
        log::debug!("event {}: {} -> {}", index, event, outcome);

        frames.push(Frame {
            index,
            event: event.clone(),
            outcome,
            snapshot: site.snapshot(),
        });
    }

    Ok(frames)
}

fn step(site: &mut Site, index: usize, event: &ReplayEvent) -> Result<Outcome, ReplayError> {
    let outcome = match event {
        ReplayEvent::Scroll { offset } => {
            site.on_scroll(*offset);
            Outcome::Done
        }
        ReplayEvent::Wait { ms } => {
            site.advance(Duration::from_millis(*ms));
            Outcome::Done
        }
        ReplayEvent::Resize { width, height } => {
            site.scroll_button_mut().on_viewport_resize(*width, *height);
            Outcome::Done
        }
        ReplayEvent::DragStart { target: Target::Nav } => {
            site.navbar_mut().on_drag_start();
            Outcome::Done
        }
        ReplayEvent::DragStart { target: Target::Button } => {
            site.scroll_button_mut().on_drag_start();
            Outcome::Done
        }
        ReplayEvent::DragEnd { target: Target::Nav } => {
            site.navbar_mut().on_drag_end();
            Outcome::Done
        }
        ReplayEvent::DragEnd { target: Target::Button } => {
            site.scroll_button_mut().on_drag_end();
            Outcome::Done
        }
        ReplayEvent::Click { target: Target::Nav, href } => {
            let href = href.as_deref().ok_or(ReplayError::MissingHref { index })?;
            command_or_suppressed(site.navbar().on_item_click(href))
        }
        ReplayEvent::Click { target: Target::Button, .. } if !site.scroll_button().is_visible() => {
            Outcome::Done
        }
        ReplayEvent::Click { target: Target::Button, .. } => {
            command_or_suppressed(site.scroll_button_mut().on_click())
        }
        ReplayEvent::Reorder { order } => {
            let new_order = resolve_order(site.navbar().items(), order)
                .ok_or_else(|| ReplayError::InvalidReorder {
                    index,
                    order: order.clone(),
                })?;
            site.navbar_mut().reorder(new_order);
            Outcome::Done
        }
        ReplayEvent::ToggleMenu => {
            site.navbar_mut().toggle_menu();
            Outcome::Done
        }
        ReplayEvent::MenuSelect { href } => {
            Outcome::Command(site.navbar_mut().on_menu_item_press(href))
        }
        ReplayEvent::ToggleTheme => Outcome::Command(site.toggle_theme()),
        ReplayEvent::Navigate { href } => Outcome::Command(UiCommand::Navigate(href.clone())),
    };

    Ok(outcome)
}

fn command_or_suppressed(command: Option<UiCommand>) -> Outcome {
    match command {
        Some(command) => Outcome::Command(command),
        None => Outcome::Suppressed,
    }
}

/// Map hrefs onto the current links, only if they form a permutation
fn resolve_order(current: &[NavItem], hrefs: &[String]) -> Option<Vec<NavItem>> {
    let new_order: Vec<NavItem> = hrefs
        .iter()
        .map(|href| current.iter().find(|item| &item.href == href).cloned())
        .collect::<Option<_>>()?;

    same_keys(&new_order, current).then_some(new_order)
}
