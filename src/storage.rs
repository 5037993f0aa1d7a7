#[cfg(test)]
use std::collections::HashMap;

use log::warn;
use thiserror::Error;
use web_sys::window;

use crate::config::{DEFAULT_DOWNLOADS, DOWNLOADS_KEY};

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not write {0}")]
    Write(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(test)]
#[derive(Default, Debug)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn read_downloads(store: &impl KeyValueStore) -> u64 {
    store
        .get(DOWNLOADS_KEY)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_DOWNLOADS)
}

pub fn write_downloads(store: &mut impl KeyValueStore, count: u64) {
    if let Err(e) = store.set(DOWNLOADS_KEY, &count.to_string()) {
        warn!("Download counter not saved: {}", e);
    }
}
