//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Test environment setup (temp directories, configs, scripts)
//! - Site construction over a file-backed session
//! - Assertion helpers on nav order

#![allow(dead_code)]

use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;
use wony_config::Config;
use wonythings::{FileStore, Site};

/// Test environment with an isolated config and session directory
pub struct TestEnvironment {
    /// Temporary directory owning everything below
    pub temp_dir: TempDir,
    /// Directory holding config.toml and themes/
    pub config_dir: PathBuf,
    /// Session store directory
    pub session_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();
        let session_dir = config_dir.join("session");

        std::fs::create_dir_all(config_dir.join("themes"))
            .expect("Failed to create themes directory");

        Self {
            temp_dir,
            config_dir,
            session_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Write a test config file
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write test config");
    }

    /// Write a palette next to the config
    pub fn write_theme(&self, name: &str, content: &str) {
        let theme_path = self.config_dir.join("themes").join(format!("{}.css", name));
        std::fs::write(&theme_path, content).expect("Failed to write test theme");
    }

    /// Write a replay script, returning its path
    pub fn write_script(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write test script");
        path
    }

    /// Load config.toml if written, else defaults
    pub fn config(&self) -> Config {
        if self.config_path().exists() {
            Config::load_from(&self.config_path()).expect("Failed to load test config")
        } else {
            Config::default()
        }
    }

    /// A fresh handle on the session store
    pub fn store(&self) -> Rc<FileStore> {
        Rc::new(FileStore::open(&self.session_dir).expect("Failed to open session store"))
    }

    /// Open the site on `path`, as a new page load in the same session
    pub fn open_site(&self, path: &str) -> Site {
        Site::open(self.config(), self.store(), path).expect("Failed to open site")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Hrefs of the navbar links in display order
pub fn nav_hrefs(site: &Site) -> Vec<String> {
    site.navbar().items().iter().map(|i| i.href.clone()).collect()
}

/// Assert the navbar shows exactly `expected` hrefs in order
pub fn assert_nav_order(site: &Site, expected: &[&str]) {
    let actual = nav_hrefs(site);
    assert_eq!(
        actual, expected,
        "Nav order mismatch. Expected: {:?}, Actual: {:?}",
        expected, actual
    );
}
