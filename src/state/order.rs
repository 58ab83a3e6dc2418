//! User-reorderable list persisted for the session
//!
//! The list is seeded from a default configuration and only ever permuted:
//! the set of item keys never changes. Each reorder is written to the
//! session store; a missing, unreadable or stale stored order falls back to
//! the defaults without surfacing an error.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wony_config::NavItem;

use crate::storage::{SessionStore, SharedStore, StoreError};

/// Items with a stable identity used for permutation checks
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for NavItem {
    fn key(&self) -> &str {
        &self.href
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("no stored order under {0:?}")]
    NotFound(String),

    #[error("stored order is corrupt: {0}")]
    Corrupt(String),

    #[error("new order is not a permutation of the current items")]
    InvalidPermutation,

    #[error("failed to persist order: {0}")]
    PersistFailure(#[from] StoreError),
}

/// Where the current order came from at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSource {
    Default,
    Restored,
}

/// True if both slices hold the same multiset of keys
pub fn same_keys<T: Keyed>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&str> = a.iter().map(|item| item.key()).collect();
    let mut right: Vec<&str> = b.iter().map(|item| item.key()).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

#[derive(Debug)]
pub struct OrderedList<T> {
    items: Vec<T>,
    defaults: Vec<T>,
    source: OrderSource,
    store: SharedStore,
    storage_key: String,
}

impl<T> OrderedList<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Build the list, preferring a valid stored order over `defaults`
    pub fn initialize(defaults: Vec<T>, store: SharedStore, storage_key: impl Into<String>) -> Self {
        let mut list = Self {
            items: defaults.clone(),
            defaults,
            source: OrderSource::Default,
            store,
            storage_key: storage_key.into(),
        };

        match list.restore() {
            Ok(stored) if same_keys(&stored, &list.defaults) => {
                // Take items from the defaults so label edits in the
                // configuration win over labels frozen in storage
                list.items = stored
                    .iter()
                    .filter_map(|s| list.defaults.iter().find(|d| d.key() == s.key()))
                    .cloned()
                    .collect();
                list.source = OrderSource::Restored;
                log::debug!("restored order from {:?}", list.storage_key);
            }
            Ok(_) => {
                log::debug!(
                    "stored order under {:?} does not match current items, using defaults",
                    list.storage_key
                );
            }
            Err(OrderError::NotFound(_)) => {}
            Err(e) => {
                log::debug!("ignoring stored order: {}", e);
            }
        }

        list
    }

    /// Read and decode the stored order without validating its keys
    pub fn restore(&self) -> Result<Vec<T>, OrderError> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(OrderError::NotFound(self.storage_key.clone())),
            Err(e) => {
                log::warn!("session storage read failed: {}", e);
                return Err(OrderError::NotFound(self.storage_key.clone()));
            }
        };

        serde_json::from_str(&raw).map_err(|e| OrderError::Corrupt(e.to_string()))
    }

    /// Write the current order to the session store
    pub fn persist(&self) -> Result<(), OrderError> {
        let encoded =
            serde_json::to_string(&self.items).map_err(|e| OrderError::Corrupt(e.to_string()))?;
        self.store.set(&self.storage_key, &encoded)?;
        Ok(())
    }

    /// Replace the order with a permutation of the current items
    ///
    /// Persistence is best effort: a failed write is logged and the
    /// in-memory order stays authoritative.
    pub fn reorder(&mut self, new_order: Vec<T>) -> Result<&[T], OrderError> {
        if !same_keys(&new_order, &self.items) {
            return Err(OrderError::InvalidPermutation);
        }

        self.items = new_order;

        if let Err(e) = self.persist() {
            log::warn!("order kept for this page only: {}", e);
        }

        Ok(&self.items)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn defaults(&self) -> &[T] {
        &self.defaults
    }

    pub fn source(&self) -> OrderSource {
        self.source
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }
}
