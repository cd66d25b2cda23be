//! Key-Value Storage
//!
//! Synchronous string storage behind a trait, so the task list runs against
//! `localStorage` in the browser and an in-memory map elsewhere.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{DashboardError, DashboardResult};

/// Minimal synchronous key-value store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` if the key has never been written
    fn get(&self, key: &str) -> DashboardResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> DashboardResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DashboardResult<()> {
        (**self).set(key, value)
    }
}

/// Browser `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> DashboardResult<Self> {
        let window = web_sys::window().ok_or(DashboardError::StorageUnavailable)?;
        let storage = window
            .local_storage()?
            .ok_or(DashboardError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> DashboardResult<()> {
        Ok(self.storage.set_item(key, value)?)
    }
}

/// In-memory store; lost on reload
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DashboardResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open `localStorage`, or fall back to memory when the page cannot use it
pub fn open_or_memory() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("{}; tasks will not survive a reload", e);
            Rc::new(MemoryStore::default())
        }
    }
}
