//! Key-value persistence for player preferences
//!
//! Values are stored as plain strings under stable key names:
//! - `LocalStore`: browser LocalStorage (WASM only)
//! - `MemoryStore`: in-process map for native runs and tests
//!
//! Reads never fail: an unavailable backend behaves like an empty one.

use std::collections::HashMap;

/// String key-value storage backend
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are logged and swallowed.
    fn set(&mut self, key: &str, value: &str);

    /// Read a numeric value, falling back when absent or not a finite number
    fn load_number(&self, key: &str, fallback: f64) -> f64 {
        self.get(key)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(fallback)
    }

    /// Write a numeric value in its decimal string form
    fn save_number(&mut self, key: &str, value: f64) {
        self.set(key, &value.to_string());
    }
}

/// In-memory store (native builds, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    /// Open the window's LocalStorage. Private browsing or disabled storage
    /// yields a store that reads nothing and drops writes.
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, preferences will not persist");
        }

        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to persist {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_number_missing_key_uses_fallback() {
        let store = MemoryStore::new();
        assert_eq!(store.load_number("ballSpeed", 5.0), 5.0);
    }

    #[test]
    fn test_load_number_parses_stored_string() {
        let mut store = MemoryStore::new();
        store.set("ballSpeed", "7");
        assert_eq!(store.load_number("ballSpeed", 5.0), 7.0);

        store.set("ballSpeed", " 3.5 ");
        assert_eq!(store.load_number("ballSpeed", 5.0), 3.5);
    }

    #[test]
    fn test_load_number_rejects_garbage() {
        let mut store = MemoryStore::new();
        for raw in ["", "fast", "NaN", "inf", "7px"] {
            store.set("botDifficulty", raw);
            assert_eq!(store.load_number("botDifficulty", 4.0), 4.0, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_save_number_writes_decimal_string() {
        let mut store = MemoryStore::new();
        store.save_number("botDifficulty", 9.0);
        assert_eq!(store.get("botDifficulty").as_deref(), Some("9"));
        assert_eq!(store.len(), 1);
    }
}
