//! Key-value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser `localStorage` is the only durable store the client has. Pages and
//! the preference store talk to it through [`KeyValueStore`] so the same code
//! runs against an in-memory map in tests and a no-op during SSR.
//!
//! TRADE-OFFS
//! ==========
//! Reads and writes are best-effort. A missing `window`, a disabled storage
//! area or a quota error all look like "nothing stored" / "write skipped".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key` in a single write.
    fn set(&self, key: &str, value: &str);

    /// Load and decode a JSON value; malformed data reads as `None`.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Encode and store a JSON value.
    fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        self.set(key, &raw);
    }
}

/// `window.localStorage`; hydrate builds only, no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
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
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Process-local map, used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single raw entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }
}
