//! Wonythings - interaction state for a personal portfolio site
//!
//! The page chrome (navbar, scroll-to-top button, theme switch) is modelled
//! as plain state machines driven by the host:
//! - `state` - scroll tracking, drag/click disambiguation, reorderable
//!   lists, one-shot disclosures and the components built from them
//! - `storage` - the session store capability they persist through
//! - `site` - one page composing all of the above
//! - `replay` - scripted event playback over a `Site`
//!
//! Configuration lives in `wony-config`, palette parsing in `wony-theme`.

pub mod commands;
pub mod replay;
pub mod site;
pub mod state;
pub mod storage;
pub mod timer;

pub use commands::UiCommand;
pub use replay::{Frame, Outcome, ReplayError, ReplayEvent, ReplayScript, Target};
pub use site::{Site, SiteError, SiteSnapshot};
pub use storage::{FileStore, MemoryStore, SessionStore, SharedStore, StoreError};
pub use timer::Countdown;
