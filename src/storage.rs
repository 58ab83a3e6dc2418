//! Session-scoped key/value storage
//!
//! Components never touch a global store directly; they are handed a
//! `SessionStore` capability. Access is synchronous and local but may fail
//! (storage disabled, quota exceeded, unreadable backing file).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// File name used by `FileStore` inside its session directory
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("session storage is unavailable")]
    Unavailable,

    #[error("session storage quota exceeded ({used} of {limit} bytes)")]
    QuotaExceeded { used: usize, limit: usize },

    #[error("session file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("session file is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Fallible string key/value storage scoped to one browsing session
///
/// Methods take `&self`: a store is a handle shared by every component on
/// the page, like the browser's session storage object.
pub trait SessionStore: std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Shared handle to the page's session store
pub type SharedStore = Rc<dyn SessionStore>;

/// In-memory store, optionally with a byte quota or disabled outright
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
    disabled: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once keys plus values exceed `limit` bytes
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// A store whose every operation fails with `Unavailable`
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.disabled.set(true);
        store
    }

    /// Enable or disable the store at runtime
    pub fn set_available(&self, available: bool) {
        self.disabled.set(!available);
    }

    /// Drop all entries (session end)
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.disabled.get() {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut entries = self.entries.borrow_mut();

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let used = others + key.len() + value.len();
            if used > limit {
                return Err(StoreError::QuotaExceeded { used, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file in a session directory
///
/// The file lives only as long as the session: `clear()` deletes it.
/// Reads go to disk every time so two handles on the same directory
/// observe each other's writes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (creating the directory if needed) the store in `dir`
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SESSION_FILE_NAME);
        log::debug!("Session store at {:?}", path);
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End the session: remove the backing file
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Entries for a read-modify-write; an unreadable file is replaced
    fn entries_for_update(&self) -> Result<HashMap<String, String>, StoreError> {
        match self.read_entries() {
            Err(StoreError::Serialize(e)) => {
                log::warn!("Discarding unreadable session file {:?}: {}", self.path, e);
                Ok(HashMap::new())
            }
            other => other,
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
