//! Durable key-value storage behind the token store.
//!
//! Client-side (hydrate): browser `localStorage`, re-acquired from the
//! window on every operation. Server-side (SSR): inert stubs, since there
//! is no session to persist during server rendering.
//!
//! `MemoryStorage` backs the native unit tests with the same interface.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Minimal key-value surface the session layer needs.
///
/// All operations are infallible from the caller's point of view: a
/// storage failure reads as an absent value, the same way an incognito
/// window with storage disabled behaves.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Every key currently present, for the force-clear sweep.
    fn keys(&self) -> Vec<String>;
}

/// `localStorage`-backed storage. Requires a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn keys(&self) -> Vec<String> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Vec::new();
            };
            let len = storage.length().unwrap_or(0);
            (0..len)
                .filter_map(|i| storage.key(i).ok().flatten())
                .collect()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }
}

/// In-memory storage with the same semantics, shared across clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }
}
