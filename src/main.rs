//! Wonythings replay runner
//!
//! Plays a scripted session against the site's interaction state and
//! prints one line per event:
//!
//! ```sh
//! RUST_LOG=debug wonythings session.toml [config.toml]
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use wony_config::Config;
use wonythings::{FileStore, MemoryStore, ReplayScript, SharedStore, Site, replay};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(script_path) = args.next() else {
        bail!("usage: wonythings <script.toml> [config.toml]");
    };

    let config = match args.next() {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let store: SharedStore = match config.session_dir() {
        Some(dir) => {
            let store = FileStore::open(&dir)
                .with_context(|| format!("opening session store in {}", dir.display()))?;
            log::info!("Session persisted to {:?}", store.path());
            Rc::new(store)
        }
        None => Rc::new(MemoryStore::new()),
    };

    let script = ReplayScript::load_from(&script_path)?;
    log::info!("Replaying {} events from {:?}", script.events.len(), script_path);

    let mut site = Site::new(config, store).context("opening site")?;
    let frames = replay::run(&mut site, &script)?;
    site.teardown();

    for frame in &frames {
        println!("{}", frame);
    }

    Ok(())
}
