//! Key-value storage for the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` wraps `window.localStorage` (hydrate only; SSR paths
//! no-op). `MemoryStorage` backs the server path and tests.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort: quota or privacy-mode failures are logged and
//! dropped rather than surfaced, since a session that cannot be persisted
//! still works until the next reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;

pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    /// Remove every item in this storage area.
    fn clear(&self);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; nothing cleared");
                return;
            };
            if storage.clear().is_err() {
                log::warn!("localStorage rejected clear");
            }
        }
    }
}

/// In-memory storage area. Clones share the same items.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

/// Load a JSON value stored under `key`.
///
/// Missing keys yield `None`; unparseable records are logged and also yield
/// `None` so a corrupt entry never blocks startup.
pub fn load_json<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable {key} record: {e}");
            None
        }
    }
}

/// Load the persisted session user stored under `key`.
pub fn load_user(storage: &dyn SessionStorage, key: &str) -> Option<User> {
    load_json(storage, key)
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(storage: &dyn SessionStorage, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        log::warn!("could not serialize {key} record");
        return;
    };
    storage.set_item(key, &raw);
}
